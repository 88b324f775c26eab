//! Budget operations

use rusqlite::params;
use tracing::info;

use super::Database;
use crate::error::{Error, Result};
use crate::models::Budgets;
use crate::store::BudgetStore;

impl Database {
    /// Create or overwrite the monthly limit for a category
    pub fn upsert_budget(&self, category: &str, limit: f64) -> Result<()> {
        Budgets::validate_limit(limit)?;
        let category = category.trim();
        if category.is_empty() {
            return Err(Error::InvalidData(
                "Budget category cannot be empty".to_string(),
            ));
        }

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO budgets (category, monthly_limit, updated_at)
            VALUES (?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(category) DO UPDATE SET
                monthly_limit = excluded.monthly_limit,
                updated_at = CURRENT_TIMESTAMP
            "#,
            params![category, limit],
        )?;

        info!(category, limit, "Budget set");
        Ok(())
    }

    /// All budgets keyed by category
    pub fn list_budgets(&self) -> Result<Budgets> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT category, monthly_limit FROM budgets")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })?;

        let mut budgets = Budgets::new();
        for row in rows {
            let (category, limit) = row?;
            budgets.set(&category, limit)?;
        }
        Ok(budgets)
    }
}

impl BudgetStore for Database {
    fn budgets(&self) -> Result<Budgets> {
        self.list_budgets()
    }

    fn set_budget(&mut self, category: &str, limit: f64) -> Result<()> {
        self.upsert_budget(category, limit)
    }
}
