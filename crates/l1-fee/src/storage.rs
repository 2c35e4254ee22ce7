//! State access used by the fee oracle and the hard fork patch.

use alloy_primitives::{Address, U256};
use revm::{
    DatabaseRef,
    database::{CacheDB, DbAccount},
};

/// Read access to contract storage of the state the cost function is evaluated against.
pub trait L1BlockStorage {
    /// Error returned by a failed storage read.
    type Error;

    /// Returns the value at `slot` in the storage of `address`. Unset slots read as zero.
    fn storage(&self, address: Address, slot: U256) -> Result<U256, Self::Error>;
}

impl<T: L1BlockStorage + ?Sized> L1BlockStorage for &T {
    type Error = T::Error;

    fn storage(&self, address: Address, slot: U256) -> Result<U256, Self::Error> {
        (**self).storage(address, slot)
    }
}

/// [`L1BlockStorage`] over any revm [`DatabaseRef`].
#[derive(Debug, Clone, Default)]
pub struct DatabaseStorage<DB>(pub DB);

impl<DB: DatabaseRef> L1BlockStorage for DatabaseStorage<DB> {
    type Error = DB::Error;

    fn storage(&self, address: Address, slot: U256) -> Result<U256, Self::Error> {
        self.0.storage_ref(address, slot)
    }
}

/// Write access to the state, as needed by irregular state transitions.
pub trait StateMutator {
    /// Error returned by a failed state access.
    type Error;

    /// Sets `slot` in the storage of `address` to `value`.
    fn set_storage(&mut self, address: Address, slot: U256, value: U256) -> Result<(), Self::Error>;

    /// Destroys the account at `address`, clearing its balance, code and storage.
    fn self_destruct(&mut self, address: Address) -> Result<(), Self::Error>;
}

impl<ExtDB: DatabaseRef> StateMutator for CacheDB<ExtDB> {
    type Error = ExtDB::Error;

    fn set_storage(
        &mut self,
        address: Address,
        slot: U256,
        value: U256,
    ) -> Result<(), Self::Error> {
        self.insert_account_storage(address, slot, value)
    }

    fn self_destruct(&mut self, address: Address) -> Result<(), Self::Error> {
        self.cache.accounts.insert(address, DbAccount::new_not_existing());
        Ok(())
    }
}
