//! Tracker - the single owner of the transaction list
//!
//! Wires the command parser, a store and the insight engine together:
//! commands become stored transactions, edits and deletes go straight to the
//! store, and every view is recomputed from a fresh load.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::{Config, CurrencyConfig};
use crate::error::Result;
use crate::export::{export, ExportFormat};
use crate::insights::{ChartData, ChartPeriod, Dashboard, InsightEngine};
use crate::models::{
    Budgets, Transaction, TransactionId, TransactionKind, TransactionUpdate, YearMonth,
};
use crate::money::format_money;
use crate::parser::CommandParser;
use crate::recurring::RecurrenceSweep;
use crate::store::{BudgetStore, TransactionStore};

pub struct Tracker<S> {
    store: S,
    parser: CommandParser,
    engine: InsightEngine,
    sweep: RecurrenceSweep,
}

impl<S: TransactionStore + BudgetStore> Tracker<S> {
    /// Tracker with built-in defaults
    pub fn new(store: S) -> Self {
        Self {
            store,
            parser: CommandParser::new(),
            engine: InsightEngine::new(),
            sweep: RecurrenceSweep::new(),
        }
    }

    pub fn from_config(store: S, config: &Config) -> Result<Self> {
        Ok(Self {
            store,
            parser: CommandParser::from_config(&config.parser)?,
            engine: InsightEngine::from_config(config),
            sweep: RecurrenceSweep::from_config(&config.recurring),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn currency(&self) -> &CurrencyConfig {
        self.engine.currency()
    }

    /// Parse a command and store the result, dated now
    pub fn submit(&mut self, text: &str) -> Result<Transaction> {
        self.submit_at(text, Utc::now())
    }

    /// Parse a command and store the result, dated at `now`.
    ///
    /// Nothing is stored when parsing fails.
    pub fn submit_at(&mut self, text: &str, now: DateTime<Utc>) -> Result<Transaction> {
        let parsed = self.parser.parse_at(text, now)?;
        self.store.append(parsed)
    }

    /// User-facing confirmation for a stored transaction
    pub fn confirmation(&self, tx: &Transaction) -> String {
        let amount = format_money(tx.amount.abs(), self.engine.currency());
        match tx.kind {
            TransactionKind::Income => format!("Got it! Added +{} as {}.", amount, tx.category),
            TransactionKind::Expense => format!("Noted. {} for {}.", amount, tx.category),
        }
    }

    pub fn transactions(&self) -> Result<Vec<Transaction>> {
        self.store.load()
    }

    /// All transactions, newest first
    pub fn history(&self) -> Result<Vec<Transaction>> {
        let transactions = self.store.load()?;
        Ok(crate::insights::history(&transactions)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn update(&mut self, id: TransactionId, update: &TransactionUpdate) -> Result<Transaction> {
        let updated = self.store.update(id, update)?;
        info!(id, category = %updated.category, amount = updated.amount, "Updated transaction");
        Ok(updated)
    }

    pub fn delete(&mut self, id: TransactionId) -> Result<()> {
        self.store.delete(id)
    }

    pub fn set_budget(&mut self, category: &str, limit: f64) -> Result<()> {
        self.store.set_budget(category, limit)
    }

    pub fn budgets(&self) -> Result<Budgets> {
        self.store.budgets()
    }

    /// Summary, insight and budget status for the month of `now`
    pub fn dashboard(&self, now: DateTime<Utc>) -> Result<Dashboard> {
        let transactions = self.store.load()?;
        let budgets = self.store.budgets()?;
        Ok(self.engine.dashboard(&transactions, &budgets, now))
    }

    pub fn charts(&self, period: ChartPeriod, now: DateTime<Utc>) -> Result<ChartData> {
        let transactions = self.store.load()?;
        Ok(self.engine.charts(&transactions, period, now))
    }

    /// Clone due recurring templates into the month of `now`.
    ///
    /// Returns the stored clones. Running it again in the same month stores
    /// nothing.
    pub fn run_recurring(&mut self, now: DateTime<Utc>) -> Result<Vec<Transaction>> {
        let transactions = self.store.load()?;
        let result = self.sweep.sweep(&transactions, now);
        if result.is_empty() {
            return Ok(Vec::new());
        }

        let month = YearMonth::of(&now);
        let mut stored = Vec::with_capacity(result.clones.len());
        for clone in result.clones {
            stored.push(self.store.append(clone)?);
        }
        for id in &result.handled {
            if let Some(mut template) = transactions.iter().find(|t| t.id == *id).cloned() {
                template.last_generated_month = Some(month);
                self.store.replace(template)?;
            }
        }

        info!(
            month = %month,
            created = stored.len(),
            templates = result.handled.len(),
            "Recurring sweep complete"
        );
        Ok(stored)
    }

    /// Export the full list in the requested format
    pub fn export(&self, format: ExportFormat) -> Result<String> {
        let transactions = self.store.load()?;
        export(&transactions, format)
    }
}
