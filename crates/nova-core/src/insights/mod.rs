//! Aggregation & Insight Engine
//!
//! Pure, re-derivable views over the current transaction set. Nothing here
//! performs I/O; stores load the list and callers pass it in.
//!
//! ## Views
//!
//! - **Summary** - income, expense and balance
//! - **Budget status** - per-category consumption for a month, with ok/warn/over tiers
//! - **Monthly insight** - month-over-month spending trend text
//! - **Charts** - category breakdown and income/expense series
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nova_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let dashboard = engine.dashboard(&transactions, &budgets, Utc::now());
//! println!("{}", dashboard.insight.message);
//! ```

pub mod budget;
pub mod charts;
pub mod engine;
pub mod summary;
pub mod trend;
pub mod types;

pub use budget::{budget_status, budget_status_with_threshold};
pub use charts::{category_breakdown, time_series};
pub use engine::InsightEngine;
pub use summary::{history, month_expense, summarize};
pub use trend::{monthly_insight, monthly_insight_with};
pub use types::{
    BudgetStatus, BudgetTier, CategoryTotal, ChartData, ChartPeriod, Dashboard, Insight,
    InsightKind, SeriesPoint, Severity, Summary,
};
