//! The per-transaction statistic consumed by the L1 cost functions.

use crate::constants::{NON_ZERO_BYTE_COST, ZERO_BYTE_COST};
use alloy_primitives::U256;

/// Zero and non-zero byte counts of a transaction's canonical encoding.
///
/// The default value carries no rollup cost: deposit transactions and calls made outside of a
/// transaction use it, and every cost function returns no fee for it.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct RollupCostData {
    /// Number of zero bytes.
    pub zeroes: u64,
    /// Number of non-zero bytes.
    pub ones: u64,
}

impl RollupCostData {
    /// Create cost data from byte counts.
    pub const fn new(zeroes: u64, ones: u64) -> Self {
        Self { zeroes, ones }
    }

    /// Count the zero and non-zero bytes of an encoded transaction.
    pub fn from_encoded(encoded: &[u8]) -> Self {
        encoded.iter().fold(Self::default(), |mut acc, byte| {
            if *byte == 0 {
                acc.zeroes += 1;
            } else {
                acc.ones += 1;
            }
            acc
        })
    }

    /// Returns true if no rollup cost applies.
    pub const fn is_empty(&self) -> bool {
        self.zeroes == 0 && self.ones == 0
    }

    /// Calldata gas of the data: 4 per zero byte and 16 per non-zero byte.
    ///
    /// Computed in 256 bits, so it never overflows for any byte counts.
    pub fn calldata_gas(&self) -> U256 {
        U256::from(self.zeroes)
            .wrapping_mul(U256::from(ZERO_BYTE_COST))
            .wrapping_add(U256::from(self.ones).wrapping_mul(U256::from(NON_ZERO_BYTE_COST)))
    }
}
