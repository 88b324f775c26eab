//! In-memory store

use tracing::info;

use crate::error::{Error, Result};
use crate::models::{Budgets, NewTransaction, Transaction, TransactionId};

use super::{BudgetStore, TransactionStore};

/// Transactions and budgets held in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    transactions: Vec<Transaction>,
    budgets: Budgets,
    next_id: TransactionId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Seed a store with existing records, keeping their ids
    pub fn with_transactions(transactions: Vec<Transaction>) -> Result<Self> {
        let mut store = Self::new();
        for tx in transactions {
            store.replace(tx)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }
}

impl TransactionStore for MemoryStore {
    fn load(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn get(&self, id: TransactionId) -> Result<Option<Transaction>> {
        Ok(self.position(id).map(|i| self.transactions[i].clone()))
    }

    fn append(&mut self, tx: NewTransaction) -> Result<Transaction> {
        tx.validate()?;
        let id = self.next_id.max(1);
        self.next_id = id + 1;

        let tx = tx.into_transaction(id);
        info!(id, category = %tx.category, amount = tx.amount, "Stored transaction");
        self.transactions.push(tx.clone());
        Ok(tx)
    }

    fn replace(&mut self, tx: Transaction) -> Result<()> {
        tx.validate()?;
        self.next_id = self.next_id.max(tx.id + 1);
        match self.position(tx.id) {
            Some(i) => self.transactions[i] = tx,
            None => self.transactions.push(tx),
        }
        Ok(())
    }

    fn delete(&mut self, id: TransactionId) -> Result<()> {
        let index = self.position(id).ok_or(Error::TransactionNotFound(id))?;
        self.transactions.remove(index);
        info!(id, "Deleted transaction");
        Ok(())
    }
}

impl BudgetStore for MemoryStore {
    fn budgets(&self) -> Result<Budgets> {
        Ok(self.budgets.clone())
    }

    fn set_budget(&mut self, category: &str, limit: f64) -> Result<()> {
        self.budgets.set(category, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransactionKind, TransactionUpdate};
    use crate::test_utils::{at, expense, income};

    fn new_expense(category: &str, amount: f64) -> NewTransaction {
        NewTransaction {
            timestamp: at(2025, 6, 1),
            raw_text: format!("{} {}", category, amount),
            category: category.to_string(),
            amount: -amount,
            kind: TransactionKind::Expense,
            recurring: false,
        }
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let mut store = MemoryStore::new();
        let a = store.append(new_expense("Taxi", 200.0)).unwrap();
        let b = store.append(new_expense("Food", 90.0)).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_append_rejects_sign_mismatch() {
        let mut store = MemoryStore::new();
        let mut tx = new_expense("Taxi", 200.0);
        tx.amount = 200.0;
        assert!(matches!(store.append(tx), Err(Error::InvalidData(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_default_store_starts_ids_at_one() {
        let mut store = MemoryStore::default();
        assert_eq!(store.append(new_expense("Taxi", 1.0)).unwrap().id, 1);
    }

    #[test]
    fn test_seeded_store_continues_after_highest_id() {
        let mut store = MemoryStore::with_transactions(vec![
            expense(7, at(2025, 6, 1), "Food", 10.0),
            income(3, at(2025, 6, 1), "Salary", 10.0),
        ])
        .unwrap();
        assert_eq!(store.append(new_expense("Taxi", 5.0)).unwrap().id, 8);
    }

    #[test]
    fn test_replace_overwrites_in_place() {
        let mut store =
            MemoryStore::with_transactions(vec![expense(1, at(2025, 6, 1), "Food", 10.0)])
                .unwrap();
        let mut tx = store.get(1).unwrap().unwrap();
        tx.category = "Groceries".to_string();
        store.replace(tx).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().unwrap().category, "Groceries");
    }

    #[test]
    fn test_update_flips_sign_with_kind() {
        let mut store =
            MemoryStore::with_transactions(vec![expense(1, at(2025, 6, 1), "Refund", 300.0)])
                .unwrap();
        let updated = store
            .update(
                1,
                &TransactionUpdate {
                    kind: Some(TransactionKind::Income),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.amount, 300.0);
        assert_eq!(store.get(1).unwrap().unwrap().kind, TransactionKind::Income);
    }

    #[test]
    fn test_unknown_ids() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.delete(42),
            Err(Error::TransactionNotFound(42))
        ));
        assert!(matches!(
            store.update(42, &TransactionUpdate::default()),
            Err(Error::TransactionNotFound(42))
        ));
    }

    #[test]
    fn test_budgets() {
        let mut store = MemoryStore::new();
        store.set_budget("Food", 5000.0).unwrap();
        store.set_budget("Food", 6000.0).unwrap();
        assert!(matches!(
            store.set_budget("Taxi", 0.0),
            Err(Error::InvalidBudgetLimit(_))
        ));

        let budgets = store.budgets().unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets.get("Food"), Some(6000.0));
    }
}
