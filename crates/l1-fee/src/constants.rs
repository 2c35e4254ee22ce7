//! Protocol constants of the L1 fee oracle.

use alloy_primitives::{Address, U256, address};
use alloy_sol_types::{SolCall, sol};

sol! {
    /// The Bedrock L1 attributes deposit call.
    function setL1BlockValues(
        uint64 _number,
        uint64 _timestamp,
        uint256 _basefee,
        bytes32 _hash,
        uint64 _sequenceNumber,
        bytes32 _batcherHash,
        uint256 _l1FeeOverhead,
        uint256 _l1FeeScalar
    );

    /// The Ecotone L1 attributes deposit call. Arguments are tightly packed after the selector.
    function setL1BlockValuesEcotone();
}

/// Selector of `setL1BlockValues(uint64,uint64,uint256,bytes32,uint64,bytes32,uint256,uint256)`.
pub const BEDROCK_L1_ATTRIBUTES_SELECTOR: [u8; 4] = setL1BlockValuesCall::SELECTOR;

/// Selector of `setL1BlockValuesEcotone()`.
pub const ECOTONE_L1_ATTRIBUTES_SELECTOR: [u8; 4] = setL1BlockValuesEcotoneCall::SELECTOR;

/// The length of the function selector prefixing the L1 attributes calldata.
pub const SELECTOR_LEN: usize = 4;

/// Minimum length of Bedrock L1 attributes calldata: the selector and eight 32-byte arguments.
pub const BEDROCK_L1_ATTRIBUTES_LEN: usize = SELECTOR_LEN + 8 * 32;

/// Exact length of Ecotone L1 attributes calldata.
pub const ECOTONE_L1_ATTRIBUTES_LEN: usize = SELECTOR_LEN + 4 + 4 + 8 + 8 + 8 + 32 + 32 + 32 + 32;

/// Gas charged per zero byte of L1 data.
pub const ZERO_BYTE_COST: u64 = 4;
/// Gas charged per non-zero byte of L1 data.
pub const NON_ZERO_BYTE_COST: u64 = 16;

/// Prior to Regolith, the signature of a transaction was not part of the cost data, and 68
/// non-zero bytes were charged in its place.
pub const PRE_REGOLITH_SIGNATURE_BYTES: u64 = 68;

/// Fixed point decimals of the fee scalars.
pub const FEE_SCALAR_DECIMALS: u64 = 1_000_000;

/// The two 4-byte Ecotone fee scalar values are packed into the same storage slot as the 8-byte
/// sequence number. Byte offset within the storage slot of the 4-byte baseFeeScalar attribute.
pub const BASE_FEE_SCALAR_OFFSET: usize = 16;
/// Byte offset within the storage slot of the 4-byte blobBaseFeeScalar attribute.
pub const BLOB_BASE_FEE_SCALAR_OFFSET: usize = 20;

/// Storage slot of the L1 basefee.
pub const L1_BASE_FEE_SLOT: U256 = U256::from_limbs([1u64, 0, 0, 0]);
/// Storage slot of the legacy fee overhead.
pub const L1_OVERHEAD_SLOT: U256 = U256::from_limbs([5u64, 0, 0, 0]);
/// Storage slot of the legacy fee scalar.
pub const L1_SCALAR_SLOT: U256 = U256::from_limbs([6u64, 0, 0, 0]);

/// [L1_BLOB_BASE_FEE_SLOT] was added in the Ecotone upgrade and stores the L1 blobBaseFee
/// attribute.
pub const L1_BLOB_BASE_FEE_SLOT: U256 = U256::from_limbs([7u64, 0, 0, 0]);

/// As of the Ecotone upgrade, this storage slot stores the 32-bit basefeeScalar and
/// blobBaseFeeScalar attributes at offsets [BASE_FEE_SCALAR_OFFSET] and
/// [BLOB_BASE_FEE_SCALAR_OFFSET] respectively.
pub const L1_FEE_SCALARS_SLOT: U256 = U256::from_limbs([3u64, 0, 0, 0]);

/// The address of the L1Block predeploy.
pub const L1_BLOCK_CONTRACT: Address = address!("0x4200000000000000000000000000000000000015");

/// The address of the wrapped native token predeploy.
pub const WBNB_CONTRACT: Address = address!("0x4200000000000000000000000000000000000006");

/// The address of the governance token predeploy.
pub const GOVERNANCE_TOKEN: Address = address!("0x4200000000000000000000000000000000000042");
