//! Persistence seams for the tracker
//!
//! The tracker owns one store and treats it as the canonical transaction
//! list. Two implementations ship with the crate:
//! - [`MemoryStore`] - a plain `Vec` for tests and throwaway sessions
//! - [`Database`](crate::db::Database) - SQLite behind an r2d2 pool
//!
//! Every write validates the amount/kind sign invariant before it lands.

mod memory;

pub use memory::MemoryStore;

use crate::error::{Error, Result};
use crate::models::{Budgets, NewTransaction, Transaction, TransactionId, TransactionUpdate};

/// Ordered, id-addressable transaction storage
pub trait TransactionStore {
    /// All transactions, oldest first
    fn load(&self) -> Result<Vec<Transaction>>;

    fn get(&self, id: TransactionId) -> Result<Option<Transaction>>;

    /// Store a new transaction and return it with its assigned id
    fn append(&mut self, tx: NewTransaction) -> Result<Transaction>;

    /// Overwrite the record with the same id, or insert it if none exists
    fn replace(&mut self, tx: Transaction) -> Result<()>;

    /// Remove a transaction; unknown ids are an error
    fn delete(&mut self, id: TransactionId) -> Result<()>;

    /// Apply a user edit and persist the result
    fn update(&mut self, id: TransactionId, update: &TransactionUpdate) -> Result<Transaction> {
        let current = self.get(id)?.ok_or(Error::TransactionNotFound(id))?;
        let updated = current.apply_update(update)?;
        self.replace(updated.clone())?;
        Ok(updated)
    }
}

/// Monthly category limits
pub trait BudgetStore {
    fn budgets(&self) -> Result<Budgets>;

    /// Create or overwrite a category limit; non-positive limits are rejected
    fn set_budget(&mut self, category: &str, limit: f64) -> Result<()>;
}
