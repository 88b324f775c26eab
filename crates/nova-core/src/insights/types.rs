//! Core types for the aggregation and insight engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity level of a derived view, used by presenters for emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// Worth attention but not urgent
    Attention,
    /// Should be addressed soon
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Attention => "attention",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Income, expense and balance over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub income: f64,
    /// Absolute value of all expenses
    pub expense: f64,
    pub balance: f64,
}

impl Summary {
    /// Income covers expenses
    pub fn is_net_positive(&self) -> bool {
        self.income >= self.expense
    }
}

/// Spend-to-limit band of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Ok,
    Warn,
    Over,
}

impl BudgetTier {
    /// `percent` is spend as a percentage of the limit (uncapped)
    pub fn classify(percent: f64, warn_percent: f64) -> Self {
        if percent >= 100.0 {
            BudgetTier::Over
        } else if percent >= warn_percent {
            BudgetTier::Warn
        } else {
            BudgetTier::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Ok => "ok",
            BudgetTier::Warn => "warn",
            BudgetTier::Over => "over",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            BudgetTier::Ok => Severity::Info,
            BudgetTier::Warn => Severity::Attention,
            BudgetTier::Over => Severity::Warning,
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Consumption of one category budget in a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub category: String,
    pub spent: f64,
    pub limit: f64,
    /// Capped at 100
    pub percent: f64,
    pub tier: BudgetTier,
}

/// Month-over-month spending classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Nothing spent this month or last
    NoData,
    /// Spending this month, none last month
    FirstMonth,
    SpendingUp,
    SpendingDown,
    Stable,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::NoData => "no_data",
            InsightKind::FirstMonth => "first_month",
            InsightKind::SpendingUp => "spending_up",
            InsightKind::SpendingDown => "spending_down",
            InsightKind::Stable => "stable",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            InsightKind::SpendingUp => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived spending-trend insight, regenerated on every read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub this_month: f64,
    pub last_month: f64,
    /// Only present when last month had spending
    pub percent_change: Option<f64>,
    pub message: String,
}

/// Window used by the chart views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    /// Calendar month of the reference time, bucketed by day
    #[default]
    Month,
    /// Calendar year of the reference time, bucketed by month
    Year,
}

impl ChartPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartPeriod::Month => "month",
            ChartPeriod::Year => "year",
        }
    }
}

impl fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChartPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "month" => Ok(ChartPeriod::Month),
            "year" => Ok(ChartPeriod::Year),
            _ => Err(format!("Unknown chart period: {} (use month or year)", s)),
        }
    }
}

/// Total expense for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// One bucket of the income/expense line series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Day of month ("1".."31") or month name ("Jan".."Dec")
    pub label: String,
    pub income: f64,
    pub expense: f64,
}

/// Both chart series for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub period: ChartPeriod,
    pub categories: Vec<CategoryTotal>,
    pub series: Vec<SeriesPoint>,
}

/// Everything the dashboard shows, recomputed from the source of truth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub summary: Summary,
    pub insight: Insight,
    pub budgets: Vec<BudgetStatus>,
}
