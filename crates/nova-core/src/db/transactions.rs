//! Transaction operations

use rusqlite::{params, OptionalExtension};
use tracing::info;

use super::{format_datetime, parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction, TransactionId, TransactionKind, YearMonth};
use crate::store::TransactionStore;

const SELECT_COLUMNS: &str = "SELECT id, timestamp, raw_text, category, amount, kind, recurring, last_generated_month FROM transactions";

impl Database {
    /// Insert a validated transaction, returning it with its new id
    pub fn insert_transaction(&self, tx: NewTransaction) -> Result<Transaction> {
        tx.validate()?;
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO transactions (timestamp, raw_text, category, amount, kind, recurring)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            params![
                format_datetime(&tx.timestamp),
                tx.raw_text,
                tx.category,
                tx.amount,
                tx.kind.as_str(),
                tx.recurring,
            ],
        )?;

        let tx = tx.into_transaction(conn.last_insert_rowid());
        info!(id = tx.id, category = %tx.category, amount = tx.amount, "Stored transaction");
        Ok(tx)
    }

    /// Insert or overwrite a transaction by id
    pub fn upsert_transaction(&self, tx: &Transaction) -> Result<()> {
        tx.validate()?;
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO transactions (id, timestamp, raw_text, category, amount, kind, recurring, last_generated_month)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                timestamp = excluded.timestamp,
                raw_text = excluded.raw_text,
                category = excluded.category,
                amount = excluded.amount,
                kind = excluded.kind,
                recurring = excluded.recurring,
                last_generated_month = excluded.last_generated_month
            "#,
            params![
                tx.id,
                format_datetime(&tx.timestamp),
                tx.raw_text,
                tx.category,
                tx.amount,
                tx.kind.as_str(),
                tx.recurring,
                tx.last_generated_month.map(|m| m.to_string()),
            ],
        )?;

        Ok(())
    }

    /// Get a single transaction by id
    pub fn get_transaction(&self, id: TransactionId) -> Result<Option<Transaction>> {
        let conn = self.conn()?;
        let tx = conn
            .query_row(
                &format!("{} WHERE id = ?", SELECT_COLUMNS),
                params![id],
                Self::row_to_transaction,
            )
            .optional()?;
        Ok(tx)
    }

    /// All transactions in chronological order
    pub fn list_transactions(&self) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{} ORDER BY timestamp, id", SELECT_COLUMNS))?;
        let rows = stmt.query_map([], Self::row_to_transaction)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Delete a transaction by id
    pub fn delete_transaction(&self, id: TransactionId) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM transactions WHERE id = ?", params![id])?;
        if deleted == 0 {
            return Err(Error::TransactionNotFound(id));
        }
        info!(id, "Deleted transaction");
        Ok(())
    }

    /// Count transactions
    pub fn count_transactions(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count)
    }

    pub(crate) fn row_to_transaction(row: &rusqlite::Row) -> rusqlite::Result<Transaction> {
        let timestamp_str: String = row.get(1)?;
        let kind_str: String = row.get(5)?;
        let month_str: Option<String> = row.get(7)?;

        let kind: TransactionKind = kind_str.parse().map_err(|e: String| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, e.into())
        })?;
        let last_generated_month = month_str
            .map(|s| s.parse::<YearMonth>())
            .transpose()
            .map_err(|e: String| {
                rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, e.into())
            })?;

        Ok(Transaction {
            id: row.get(0)?,
            timestamp: parse_datetime(&timestamp_str, 1)?,
            raw_text: row.get(2)?,
            category: row.get(3)?,
            amount: row.get(4)?,
            kind,
            recurring: row.get(6)?,
            last_generated_month,
        })
    }
}

impl TransactionStore for Database {
    fn load(&self) -> Result<Vec<Transaction>> {
        self.list_transactions()
    }

    fn get(&self, id: TransactionId) -> Result<Option<Transaction>> {
        self.get_transaction(id)
    }

    fn append(&mut self, tx: NewTransaction) -> Result<Transaction> {
        self.insert_transaction(tx)
    }

    fn replace(&mut self, tx: Transaction) -> Result<()> {
        self.upsert_transaction(&tx)
    }

    fn delete(&mut self, id: TransactionId) -> Result<()> {
        self.delete_transaction(id)
    }
}
