//! Resolution of L1 fee parameters from L1 attributes calldata and from `L1Block` storage.

use crate::{
    L1CostFn,
    attributes::{L1Attributes, L1FeeScalars},
    constants::{
        L1_BASE_FEE_SLOT, L1_BLOB_BASE_FEE_SLOT, L1_BLOCK_CONTRACT, L1_FEE_SCALARS_SLOT,
        L1_OVERHEAD_SLOT, L1_SCALAR_SLOT,
    },
    error::L1FeeError,
    storage::L1BlockStorage,
};
use alloy_primitives::U256;
use opbnb_genesis::RollupConfig;

/// L1 fee parameters of a block, extracted from its L1 attributes deposit.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct L1GasParams {
    /// The decoded L1 attributes.
    pub attributes: L1Attributes,
    /// The cost function bound to the decoded parameters.
    pub cost_fn: L1CostFn,
    /// Whether Regolith is active. Always true for Ecotone attributes.
    pub is_regolith: bool,
}

impl L1GasParams {
    /// The L1 origin block's basefee.
    pub const fn l1_base_fee(&self) -> U256 {
        self.attributes.l1_base_fee()
    }

    /// The legacy fee scalar. Ecotone attributes carry none.
    pub const fn fee_scalar(&self) -> Option<U256> {
        match self.attributes {
            L1Attributes::Bedrock(attrs) => Some(attrs.l1_fee_scalar),
            L1Attributes::Ecotone(_) => None,
        }
    }
}

/// Extracts the L1 fee parameters of a block from the calldata of its L1 attributes deposit.
///
/// The layout is picked by the calldata's selector, not by the active hardfork: the first block
/// of Ecotone still carries Bedrock attributes.
pub fn extract_l1_gas_params(
    config: &RollupConfig,
    block_time: u64,
    calldata: &[u8],
) -> Result<L1GasParams, L1FeeError> {
    let attributes = L1Attributes::decode(calldata).inspect_err(|err| {
        warn!(target: "l1_fee", %err, block_time, "Rejected L1 attributes calldata");
    })?;

    let params = match attributes {
        L1Attributes::Bedrock(attrs) => {
            let is_regolith = config.is_regolith_active(block_time);
            L1GasParams {
                attributes,
                cost_fn: L1CostFn::Bedrock {
                    l1_base_fee: attrs.l1_base_fee,
                    overhead: attrs.l1_fee_overhead,
                    scalar: attrs.l1_fee_scalar,
                    is_regolith,
                },
                is_regolith,
            }
        }
        L1Attributes::Ecotone(attrs) => L1GasParams {
            attributes,
            cost_fn: L1CostFn::Ecotone {
                l1_base_fee: attrs.l1_base_fee,
                l1_blob_base_fee: attrs.l1_blob_base_fee,
                base_fee_scalar: U256::from(attrs.base_fee_scalar),
                blob_base_fee_scalar: U256::from(attrs.blob_base_fee_scalar),
            },
            is_regolith: true,
        },
    };

    trace!(
        target: "l1_fee",
        cost_fn = ?params.cost_fn,
        block_time,
        "Extracted L1 gas params from calldata"
    );
    Ok(params)
}

impl L1CostFn {
    /// Binds the cost function active at `block_time` to the fee parameters held in the storage
    /// of the `L1Block` predeploy.
    ///
    /// Until the first Ecotone L1 attributes deposit has run, the Ecotone slots are unset and the
    /// Regolith cost function applies over the legacy slots.
    pub fn from_storage<S: L1BlockStorage>(
        config: &RollupConfig,
        block_time: u64,
        storage: &S,
    ) -> Result<Self, S::Error> {
        let read = |slot| storage.storage(L1_BLOCK_CONTRACT, slot);

        if config.is_ecotone_active(block_time) {
            let scalars = L1FeeScalars::from_slot(read(L1_FEE_SCALARS_SLOT)?);
            let l1_blob_base_fee = read(L1_BLOB_BASE_FEE_SLOT)?;

            if !scalars.is_empty() || !l1_blob_base_fee.is_zero() {
                return Ok(Self::Ecotone {
                    l1_base_fee: read(L1_BASE_FEE_SLOT)?,
                    l1_blob_base_fee,
                    base_fee_scalar: U256::from(scalars.base_fee_scalar),
                    blob_base_fee_scalar: U256::from(scalars.blob_base_fee_scalar),
                });
            }

            debug!(
                target: "l1_fee",
                block_time,
                "Ecotone fee parameters unset, using the Regolith cost function"
            );
            return Ok(Self::Bedrock {
                l1_base_fee: read(L1_BASE_FEE_SLOT)?,
                overhead: read(L1_OVERHEAD_SLOT)?,
                scalar: read(L1_SCALAR_SLOT)?,
                is_regolith: true,
            });
        }

        Ok(Self::Bedrock {
            l1_base_fee: read(L1_BASE_FEE_SLOT)?,
            overhead: read(L1_OVERHEAD_SLOT)?,
            scalar: read(L1_SCALAR_SLOT)?,
            is_regolith: config.is_regolith_active(block_time),
        })
    }
}
