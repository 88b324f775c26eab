//! Nova Core Library
//!
//! Shared functionality for the Nova finance tracker:
//! - Free-text command parser ("Taxi 200", "Salary 50000 income")
//! - Insight engine: summary, budget status, monthly trend, chart series
//! - Monthly recurrence sweep for recurring transactions
//! - Stores: in-memory and SQLite with connection pooling
//! - CSV and JSON export
//! - TOML configuration with an embedded default

pub mod config;
pub mod db;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod money;
pub mod parser;
pub mod recurring;
pub mod store;
pub mod tracker;

/// Shared fixtures for unit tests
#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use export::{export_csv, export_json, ExportFormat};
pub use insights::{
    BudgetStatus, BudgetTier, ChartData, ChartPeriod, Dashboard, Insight, InsightEngine,
    InsightKind, Summary,
};
pub use models::{
    Budgets, NewTransaction, Transaction, TransactionId, TransactionKind, TransactionUpdate,
    YearMonth,
};
pub use money::format_money;
pub use parser::CommandParser;
pub use recurring::{recurrence_sweep, RecurrenceSweep, SweepResult};
pub use store::{BudgetStore, MemoryStore, TransactionStore};
pub use tracker::Tracker;
