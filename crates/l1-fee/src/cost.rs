//! L1 cost functions of the Bedrock, Regolith and Ecotone upgrades.
//!
//! All arithmetic is 256-bit with wrapping multiplication and truncating division, in the same
//! operation order nodes have always used. Any change here forks the chain.

use crate::{
    RollupCostData,
    constants::{FEE_SCALAR_DECIMALS, NON_ZERO_BYTE_COST, PRE_REGOLITH_SIGNATURE_BYTES},
};
use alloy_primitives::U256;

/// Divisor of the Ecotone cost function: `16 * 1e6`.
const ECOTONE_DIVISOR: u64 = NON_ZERO_BYTE_COST * FEE_SCALAR_DECIMALS;

/// An L1 cost function bound to the fee parameters of one block.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum L1CostFn {
    /// The Bedrock cost function, or its Regolith parameterization.
    Bedrock {
        /// The L1 basefee.
        l1_base_fee: U256,
        /// The fixed gas overhead added to every transaction.
        overhead: U256,
        /// The fee scalar, with 6 decimals.
        scalar: U256,
        /// Whether Regolith is active, which drops the signature padding.
        is_regolith: bool,
    },
    /// The Ecotone cost function.
    Ecotone {
        /// The L1 basefee.
        l1_base_fee: U256,
        /// The L1 blob basefee.
        l1_blob_base_fee: U256,
        /// The calldata fee scalar, with 6 decimals.
        base_fee_scalar: U256,
        /// The blobspace fee scalar, with 6 decimals.
        blob_base_fee_scalar: U256,
    },
}

impl L1CostFn {
    /// The L1 fee of the transaction, or `None` if no rollup cost applies to it.
    pub fn compute(&self, cost_data: RollupCostData) -> Option<U256> {
        (!cost_data.is_empty()).then(|| self.l1_cost(cost_data).0)
    }

    /// Returns the L1 fee and the L1 gas used of the transaction.
    ///
    /// Unlike [`L1CostFn::compute`], empty cost data is not special-cased.
    pub fn l1_cost(&self, cost_data: RollupCostData) -> (U256, U256) {
        match *self {
            Self::Bedrock { l1_base_fee, overhead, scalar, is_regolith } => {
                l1_cost_bedrock(cost_data, l1_base_fee, overhead, scalar, is_regolith)
            }
            Self::Ecotone {
                l1_base_fee,
                l1_blob_base_fee,
                base_fee_scalar,
                blob_base_fee_scalar,
            } => l1_cost_ecotone(
                cost_data,
                l1_base_fee,
                l1_blob_base_fee,
                base_fee_scalar,
                blob_base_fee_scalar,
            ),
        }
    }

    /// Returns true if this is the Ecotone cost function.
    pub const fn is_ecotone(&self) -> bool {
        matches!(self, Self::Ecotone { .. })
    }
}

/// Bedrock L1 cost function:
/// `(zeroes*4 + (ones + 68)*16 + overhead) * l1BaseFee * scalar / 1e6`
///
/// The 68 padding bytes stand in for the signature, which pre-Regolith cost data did not
/// include. With Regolith active the padding is dropped.
///
/// Returns `(fee, l1_gas_used)`.
pub fn l1_cost_bedrock(
    cost_data: RollupCostData,
    l1_base_fee: U256,
    overhead: U256,
    scalar: U256,
    is_regolith: bool,
) -> (U256, U256) {
    let mut gas = cost_data.calldata_gas();
    if !is_regolith {
        gas = gas.wrapping_add(U256::from(PRE_REGOLITH_SIGNATURE_BYTES * NON_ZERO_BYTE_COST));
    }
    let gas_with_overhead = gas.wrapping_add(overhead);

    let fee = gas_with_overhead
        .wrapping_mul(l1_base_fee)
        .wrapping_mul(scalar)
        .wrapping_div(U256::from(FEE_SCALAR_DECIMALS));

    (fee, gas_with_overhead)
}

/// Ecotone L1 cost function:
/// `(calldataGas/16)*(l1BaseFee*16*l1BaseFeeScalar + l1BlobBaseFee*l1BlobBaseFeeScalar)/1e6`
///
/// We divide "calldataGas" by 16 to change from units of calldata gas to "estimated # of bytes
/// when compressed". The function is computed as follows for better precision under integer
/// arithmetic:
/// `calldataGas*(l1BaseFee*16*l1BaseFeeScalar + l1BlobBaseFee*l1BlobBaseFeeScalar)/16e6`
///
/// Returns `(fee, l1_gas_used)`.
pub fn l1_cost_ecotone(
    cost_data: RollupCostData,
    l1_base_fee: U256,
    l1_blob_base_fee: U256,
    base_fee_scalar: U256,
    blob_base_fee_scalar: U256,
) -> (U256, U256) {
    let calldata_gas = cost_data.calldata_gas();

    let calldata_cost_per_byte = l1_base_fee
        .wrapping_mul(U256::from(NON_ZERO_BYTE_COST))
        .wrapping_mul(base_fee_scalar);
    let blob_cost_per_byte = l1_blob_base_fee.wrapping_mul(blob_base_fee_scalar);

    let fee = calldata_cost_per_byte
        .wrapping_add(blob_cost_per_byte)
        .wrapping_mul(calldata_gas)
        .wrapping_div(U256::from(ECOTONE_DIVISOR));

    (fee, calldata_gas)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloy_primitives::hex;

    pub(crate) const BASE_FEE: U256 = U256::from_limbs([1_000_000_000, 0, 0, 0]);
    pub(crate) const OVERHEAD: U256 = U256::from_limbs([50, 0, 0, 0]);
    pub(crate) const SCALAR: U256 = U256::from_limbs([7_000_000, 0, 0, 0]);
    pub(crate) const BLOB_BASE_FEE: U256 = U256::from_limbs([10_000_000, 0, 0, 0]);
    pub(crate) const BASE_FEE_SCALAR: u32 = 2;
    pub(crate) const BLOB_BASE_FEE_SCALAR: u32 = 3;

    // expected cost function outcomes for the above parameters on an empty transaction
    pub(crate) const BEDROCK_FEE: U256 = U256::from_limbs([11_326_000_000_000, 0, 0, 0]);
    pub(crate) const REGOLITH_FEE: U256 = U256::from_limbs([3_710_000_000_000, 0, 0, 0]);
    // (480/16)*(2*16*1000 + 3*10) == 960900
    pub(crate) const ECOTONE_FEE: U256 = U256::from_limbs([960_900, 0, 0, 0]);

    pub(crate) const BEDROCK_GAS: U256 = U256::from_limbs([1618, 0, 0, 0]);
    // 530 = 1618 - (16*68)
    pub(crate) const REGOLITH_GAS: U256 = U256::from_limbs([530, 0, 0, 0]);
    pub(crate) const ECOTONE_GAS: U256 = U256::from_limbs([480, 0, 0, 0]);

    /// Cost data of an unsigned empty transaction.
    pub(crate) const EMPTY_TX_COST_DATA: RollupCostData = RollupCostData::new(0, 30);

    #[test]
    fn test_bedrock_l1_cost_fn() {
        let (fee, gas) = l1_cost_bedrock(EMPTY_TX_COST_DATA, BASE_FEE, OVERHEAD, SCALAR, false);
        assert_eq!(fee, BEDROCK_FEE);
        assert_eq!(gas, BEDROCK_GAS);

        let (fee, gas) = l1_cost_bedrock(EMPTY_TX_COST_DATA, BASE_FEE, OVERHEAD, SCALAR, true);
        assert_eq!(fee, REGOLITH_FEE);
        assert_eq!(gas, REGOLITH_GAS);
    }

    #[test]
    fn test_ecotone_l1_cost_fn() {
        let (fee, gas) = l1_cost_ecotone(
            EMPTY_TX_COST_DATA,
            BASE_FEE,
            BLOB_BASE_FEE,
            U256::from(BASE_FEE_SCALAR),
            U256::from(BLOB_BASE_FEE_SCALAR),
        );
        assert_eq!(fee, ECOTONE_FEE);
        assert_eq!(gas, ECOTONE_GAS);
    }

    #[test]
    fn test_bedrock_zero_bytes() {
        // 0xFA00CA00DE: 3 non-zero bytes, 2 zero bytes
        // gas = 2*4 + (3+68)*16 + 1000 = 2144
        let cost_data = RollupCostData::new(2, 3);
        let thousand = U256::from(1_000);
        let (fee, gas) = l1_cost_bedrock(cost_data, thousand, thousand, thousand, false);
        assert_eq!(gas, U256::from(2144));
        // 2144 * 1000 * 1000 / 1e6
        assert_eq!(fee, U256::from(2144));
    }

    #[test]
    fn test_gas_used_matches_calldata_gas() {
        let cost_data = RollupCostData::new(u64::MAX / 2, 0);
        let calldata_gas = cost_data.calldata_gas();
        assert!(calldata_gas > U256::from(u64::MAX));

        let one = U256::from(1);
        let (_, gas) = l1_cost_ecotone(cost_data, BASE_FEE, BLOB_BASE_FEE, one, one);
        assert_eq!(gas, calldata_gas);

        let (_, gas) = l1_cost_bedrock(cost_data, BASE_FEE, OVERHEAD, SCALAR, true);
        assert_eq!(gas, calldata_gas + OVERHEAD);

        let (_, gas) = l1_cost_bedrock(cost_data, BASE_FEE, OVERHEAD, SCALAR, false);
        assert_eq!(gas, calldata_gas + U256::from(68 * 16) + OVERHEAD);
    }

    #[test]
    fn test_l1_cost_fn_compute() {
        let bedrock = L1CostFn::Bedrock {
            l1_base_fee: BASE_FEE,
            overhead: OVERHEAD,
            scalar: SCALAR,
            is_regolith: false,
        };
        assert_eq!(bedrock.compute(EMPTY_TX_COST_DATA), Some(BEDROCK_FEE));
        assert_eq!(bedrock.l1_cost(EMPTY_TX_COST_DATA), (BEDROCK_FEE, BEDROCK_GAS));
        assert!(!bedrock.is_ecotone());

        let ecotone = L1CostFn::Ecotone {
            l1_base_fee: BASE_FEE,
            l1_blob_base_fee: BLOB_BASE_FEE,
            base_fee_scalar: U256::from(BASE_FEE_SCALAR),
            blob_base_fee_scalar: U256::from(BLOB_BASE_FEE_SCALAR),
        };
        assert_eq!(ecotone.compute(EMPTY_TX_COST_DATA), Some(ECOTONE_FEE));
        assert!(ecotone.is_ecotone());
    }

    #[test]
    fn test_l1_cost_fn_empty_cost_data() {
        let regolith = L1CostFn::Bedrock {
            l1_base_fee: BASE_FEE,
            overhead: OVERHEAD,
            scalar: SCALAR,
            is_regolith: true,
        };
        assert_eq!(regolith.compute(RollupCostData::default()), None);
        // the overhead is still charged by the raw cost function
        assert_eq!(regolith.l1_cost(RollupCostData::default()).1, OVERHEAD);
    }

    #[test]
    fn calculate_tx_l1_cost_ecotone() {
        // l1 block info for OP mainnet ecotone block 118024092
        // <https://optimistic.etherscan.io/block/118024092>
        let cost_fn = L1CostFn::Ecotone {
            l1_base_fee: U256::from_be_bytes(hex!(
                "0000000000000000000000000000000000000000000000000000000af39ac327"
            )), // 47036678951
            l1_blob_base_fee: U256::from_be_bytes(hex!(
                "0000000000000000000000000000000000000000000000000000000d5ea528d2"
            )), // 57422457042
            base_fee_scalar: U256::from(1368),
            blob_base_fee_scalar: U256::from(810949),
        };

        // second tx in OP mainnet ecotone block 118024092
        // <https://optimistic.etherscan.io/tx/0xa75ef696bf67439b4d5b61da85de9f3ceaa2e145abe982212101b244b63749c2>
        const TX: &[u8] = &hex!("02f8b30a832253fc8402d11f39842c8a46398301388094dc6ff44d5d932cbd77b52e5612ba0529dc6226f180b844a9059cbb000000000000000000000000d43e02db81f4d46cdf8521f623d21ea0ec7562a50000000000000000000000000000000000000000000000008ac7230489e80000c001a02947e24750723b48f886931562c55d9e07f856d8e06468e719755e18bbc3a570a0784da9ce59fd7754ea5be6e17a86b348e441348cd48ace59d174772465eadbd1");

        let (fee, gas_used) = cost_fn.l1_cost(RollupCostData::from_encoded(TX));

        // l1 gas used for tx and l1 fee for tx, from OP mainnet block scanner
        assert_eq!(gas_used, U256::from(2456));
        assert_eq!(
            fee,
            U256::from_be_bytes(hex!(
                "000000000000000000000000000000000000000000000000000006a510bd7431"
            )) // 7306020222001 wei
        );
    }
}
