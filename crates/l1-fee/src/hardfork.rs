//! The pre-contract hard fork state transition.

use crate::{
    constants::{GOVERNANCE_TOKEN, WBNB_CONTRACT},
    storage::StateMutator,
};
use alloy_primitives::{U256, uint};

/// Storage slot of the wrapped native token's `name`.
pub const WBNB_NAME_SLOT: U256 = U256::ZERO;
/// Storage slot of the wrapped native token's `symbol`.
pub const WBNB_SYMBOL_SLOT: U256 = uint!(1_U256);

/// "Wrapped BNB", as a short Solidity string: the characters left-aligned, twice the length in the
/// last byte.
pub const WBNB_NAME: U256 =
    uint!(0x5772617070656420424e42000000000000000000000000000000000000000016_U256);
/// "WBNB", as a short Solidity string.
pub const WBNB_SYMBOL: U256 =
    uint!(0x57424e4200000000000000000000000000000000000000000000000000000008_U256);

/// Applies the pre-contract hard fork to the state: renames the wrapped native token predeploy and
/// destroys the governance token predeploy.
///
/// No activation check is done here. The caller must apply it exactly once, at the first block of
/// the fork (see `RollupConfig::is_on_pre_contract_fork`).
pub fn apply_pre_contract_hard_fork<S: StateMutator>(state: &mut S) -> Result<(), S::Error> {
    state.set_storage(WBNB_CONTRACT, WBNB_NAME_SLOT, WBNB_NAME)?;
    state.set_storage(WBNB_CONTRACT, WBNB_SYMBOL_SLOT, WBNB_SYMBOL)?;
    state.self_destruct(GOVERNANCE_TOKEN)?;

    info!(target: "l1_fee", "Applied pre-contract hard fork");
    Ok(())
}
