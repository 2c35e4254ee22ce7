//! The L1 cost function of a chain, evaluated against `L1Block` storage.

use crate::{L1CostFn, RollupCostData, storage::L1BlockStorage};
use alloy_primitives::U256;
use opbnb_genesis::RollupConfig;

/// Returns the L1 cost function of the chain, reading fee parameters from `storage`.
///
/// Returns `None` if the chain is not an OP Stack chain.
pub fn new_l1_cost_fn<'a, S: L1BlockStorage>(
    config: &'a RollupConfig,
    storage: &'a S,
) -> Option<L1CostFunc<'a, S>> {
    config.is_optimism().then_some(L1CostFunc { config, storage })
}

/// The L1 cost function of an OP Stack chain.
///
/// Nothing is cached: every call reads the fee parameters from storage. Callers that price many
/// transactions of one block should [`resolve`](Self::resolve) once and reuse the result.
#[derive(Debug)]
pub struct L1CostFunc<'a, S> {
    config: &'a RollupConfig,
    storage: &'a S,
}

impl<S> Clone for L1CostFunc<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for L1CostFunc<'_, S> {}

impl<'a, S: L1BlockStorage> L1CostFunc<'a, S> {
    /// Returns the L1 fee of a transaction included in a block at `block_time`.
    ///
    /// Returns `Ok(None)` without reading storage if no rollup cost applies to the transaction.
    pub fn cost(
        &self,
        cost_data: RollupCostData,
        block_time: u64,
    ) -> Result<Option<U256>, S::Error> {
        if cost_data.is_empty() {
            return Ok(None);
        }
        Ok(self.resolve(block_time)?.compute(cost_data))
    }

    /// Binds the cost function active at `block_time` to the current fee parameters.
    pub fn resolve(&self, block_time: u64) -> Result<L1CostFn, S::Error> {
        let cost_fn = L1CostFn::from_storage(self.config, block_time, self.storage)?;
        trace!(target: "l1_fee", ?cost_fn, block_time, "Resolved L1 cost function");
        Ok(cost_fn)
    }

    /// The chain configuration.
    pub const fn config(&self) -> &'a RollupConfig {
        self.config
    }
}
