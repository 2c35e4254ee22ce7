//! Fixed-layout codecs of the L1 attributes deposit calldata and of the packed fee scalars slot.

use crate::{
    constants::{
        BASE_FEE_SCALAR_OFFSET, BEDROCK_L1_ATTRIBUTES_LEN, BEDROCK_L1_ATTRIBUTES_SELECTOR,
        BLOB_BASE_FEE_SCALAR_OFFSET, ECOTONE_L1_ATTRIBUTES_LEN, ECOTONE_L1_ATTRIBUTES_SELECTOR,
        SELECTOR_LEN,
    },
    error::L1FeeError,
};
use alloc::vec::Vec;
use alloy_primitives::{B256, U256};

/// The layout of a piece of L1 attributes calldata, determined by its selector.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum L1AttributesKind {
    /// `setL1BlockValues`, ABI encoded.
    Bedrock,
    /// `setL1BlockValuesEcotone`, tightly packed.
    Ecotone,
}

impl L1AttributesKind {
    /// Classify calldata by its leading selector.
    pub fn classify(calldata: &[u8]) -> Result<Self, L1FeeError> {
        let Some(selector) = calldata.first_chunk::<SELECTOR_LEN>() else {
            return Err(L1FeeError::MissingSelector(calldata.len()));
        };
        match *selector {
            BEDROCK_L1_ATTRIBUTES_SELECTOR => Ok(Self::Bedrock),
            ECOTONE_L1_ATTRIBUTES_SELECTOR => Ok(Self::Ecotone),
            other => Err(L1FeeError::UnknownSelector(other)),
        }
    }
}

/// L1 fee parameters carried by Bedrock L1 attributes calldata.
///
/// Bedrock Binary Format
/// +---------+--------------------------+
/// | Bytes   | Field                    |
/// +---------+--------------------------+
/// | 4       | Function signature       |
/// | 32      | Number                   |
/// | 32      | Time                     |
/// | 32      | BaseFee                  |
/// | 32      | BlockHash                |
/// | 32      | SequenceNumber           |
/// | 32      | BatcherHash              |
/// | 32      | L1FeeOverhead            |
/// | 32      | L1FeeScalar              |
/// +---------+--------------------------+
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct L1AttributesBedrock {
    /// The L1 origin block's basefee.
    pub l1_base_fee: U256,
    /// The fee overhead for L1 data.
    pub l1_fee_overhead: U256,
    /// The fee scalar for L1 data.
    pub l1_fee_scalar: U256,
}

impl L1AttributesBedrock {
    /// Decode Bedrock L1 attributes calldata, selector included.
    ///
    /// Only a lower bound is enforced on the length and trailing bytes are ignored. Nodes have
    /// always accepted such calldata, so this must not become an exact check.
    pub fn decode(calldata: &[u8]) -> Result<Self, L1FeeError> {
        if calldata.len() < BEDROCK_L1_ATTRIBUTES_LEN {
            return Err(L1FeeError::InvalidLength {
                kind: "bedrock",
                expected: BEDROCK_L1_ATTRIBUTES_LEN,
                actual: calldata.len(),
            });
        }

        Ok(Self {
            l1_base_fee: bedrock_arg(calldata, 2),
            l1_fee_overhead: bedrock_arg(calldata, 6),
            l1_fee_scalar: bedrock_arg(calldata, 7),
        })
    }
}

/// Reads the `index`-th 32-byte argument following the selector.
fn bedrock_arg(calldata: &[u8], index: usize) -> U256 {
    let start = SELECTOR_LEN + index * 32;
    U256::from_be_slice(&calldata[start..start + 32])
}

/// L1 fee parameters carried by Ecotone L1 attributes calldata.
///
/// Ecotone Binary Format
/// +---------+--------------------------+
/// | Bytes   | Field                    |
/// +---------+--------------------------+
/// | 4       | Function signature       |
/// | 4       | BaseFeeScalar            |
/// | 4       | BlobBaseFeeScalar        |
/// | 8       | SequenceNumber           |
/// | 8       | Timestamp                |
/// | 8       | L1BlockNumber            |
/// | 32      | BaseFee                  |
/// | 32      | BlobBaseFee              |
/// | 32      | BlockHash                |
/// | 32      | BatcherHash              |
/// +---------+--------------------------+
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct L1AttributesEcotone {
    /// The fee scalar for L1 calldata.
    pub base_fee_scalar: u32,
    /// The fee scalar for L1 blobspace.
    pub blob_base_fee_scalar: u32,
    /// The L1 origin block's basefee.
    pub l1_base_fee: U256,
    /// The L1 origin block's blob basefee.
    pub l1_blob_base_fee: U256,
}

impl L1AttributesEcotone {
    /// Decode Ecotone L1 attributes calldata, selector included. The length must be exact.
    pub fn decode(calldata: &[u8]) -> Result<Self, L1FeeError> {
        if calldata.len() != ECOTONE_L1_ATTRIBUTES_LEN {
            return Err(L1FeeError::InvalidLength {
                kind: "ecotone",
                expected: ECOTONE_L1_ATTRIBUTES_LEN,
                actual: calldata.len(),
            });
        }

        Ok(Self {
            base_fee_scalar: be_u32(&calldata[4..8]),
            blob_base_fee_scalar: be_u32(&calldata[8..12]),
            l1_base_fee: U256::from_be_slice(&calldata[36..68]),
            l1_blob_base_fee: U256::from_be_slice(&calldata[68..100]),
        })
    }
}

/// Every field of the Ecotone L1 attributes deposit, used to build its calldata.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct L1BlockValuesEcotone {
    /// The fee scalar for L1 calldata.
    pub base_fee_scalar: u32,
    /// The fee scalar for L1 blobspace.
    pub blob_base_fee_scalar: u32,
    /// The L2 sequence number within the epoch.
    pub sequence_number: u64,
    /// The L1 origin block's timestamp.
    pub timestamp: u64,
    /// The L1 origin block's number.
    pub number: u64,
    /// The L1 origin block's basefee.
    pub base_fee: U256,
    /// The L1 origin block's blob basefee.
    pub blob_base_fee: U256,
    /// The L1 origin block's hash.
    pub hash: B256,
    /// The versioned hash of the batch submitter.
    pub batcher_hash: B256,
}

impl L1BlockValuesEcotone {
    /// Encode the packed calldata, selector included.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(ECOTONE_L1_ATTRIBUTES_LEN);
        out.extend_from_slice(&ECOTONE_L1_ATTRIBUTES_SELECTOR);
        out.extend_from_slice(&self.base_fee_scalar.to_be_bytes());
        out.extend_from_slice(&self.blob_base_fee_scalar.to_be_bytes());
        out.extend_from_slice(&self.sequence_number.to_be_bytes());
        out.extend_from_slice(&self.timestamp.to_be_bytes());
        out.extend_from_slice(&self.number.to_be_bytes());
        out.extend_from_slice(&self.base_fee.to_be_bytes::<32>());
        out.extend_from_slice(&self.blob_base_fee.to_be_bytes::<32>());
        out.extend_from_slice(self.hash.as_slice());
        out.extend_from_slice(self.batcher_hash.as_slice());
        out
    }
}

/// The decoded L1 attributes of either layout.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum L1Attributes {
    /// Bedrock layout.
    Bedrock(L1AttributesBedrock),
    /// Ecotone layout.
    Ecotone(L1AttributesEcotone),
}

impl L1Attributes {
    /// Classify and decode L1 attributes calldata.
    pub fn decode(calldata: &[u8]) -> Result<Self, L1FeeError> {
        match L1AttributesKind::classify(calldata)? {
            L1AttributesKind::Bedrock => L1AttributesBedrock::decode(calldata).map(Self::Bedrock),
            L1AttributesKind::Ecotone => L1AttributesEcotone::decode(calldata).map(Self::Ecotone),
        }
    }

    /// The L1 origin block's basefee.
    pub const fn l1_base_fee(&self) -> U256 {
        match self {
            Self::Bedrock(attrs) => attrs.l1_base_fee,
            Self::Ecotone(attrs) => attrs.l1_base_fee,
        }
    }
}

/// The Ecotone fee scalars, packed into the `L1Block` fee scalars storage slot.
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct L1FeeScalars {
    /// The fee scalar for L1 calldata.
    pub base_fee_scalar: u32,
    /// The fee scalar for L1 blobspace.
    pub blob_base_fee_scalar: u32,
}

impl L1FeeScalars {
    /// Unpack the scalars from the storage slot value.
    pub fn from_slot(value: U256) -> Self {
        let word = value.to_be_bytes::<32>();
        Self {
            base_fee_scalar: be_u32(&word[BASE_FEE_SCALAR_OFFSET..]),
            blob_base_fee_scalar: be_u32(&word[BLOB_BASE_FEE_SCALAR_OFFSET..]),
        }
    }

    /// Pack the scalars into a storage slot value. Reserved bytes are left zero.
    pub fn to_slot(self) -> U256 {
        let mut word = [0u8; 32];
        word[BASE_FEE_SCALAR_OFFSET..BASE_FEE_SCALAR_OFFSET + 4]
            .copy_from_slice(&self.base_fee_scalar.to_be_bytes());
        word[BLOB_BASE_FEE_SCALAR_OFFSET..BLOB_BASE_FEE_SCALAR_OFFSET + 4]
            .copy_from_slice(&self.blob_base_fee_scalar.to_be_bytes());
        U256::from_be_bytes(word)
    }

    /// Returns true if both scalars are zero, i.e. the slot has not been set since Ecotone.
    pub const fn is_empty(&self) -> bool {
        self.base_fee_scalar == 0 && self.blob_base_fee_scalar == 0
    }
}

/// Reads a big-endian `u32` from the first four bytes of `bytes`.
fn be_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[..4]);
    u32::from_be_bytes(buf)
}
