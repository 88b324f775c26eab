//! Insight Engine - configured entry point for all derived views
//!
//! Every view is a pure function of the transaction list, the budget mapping
//! and the reference time. Nothing is cached, so callers recompute whenever
//! any of the three changes.

use chrono::{DateTime, Utc};

use crate::config::{Config, CurrencyConfig};
use crate::models::{Budgets, Transaction, YearMonth};

use super::budget::{budget_status_with_threshold, DEFAULT_WARN_PERCENT};
use super::charts::{category_breakdown, time_series};
use super::summary::summarize;
use super::trend::{monthly_insight_with, DEFAULT_CHANGE_THRESHOLD};
use super::types::{
    BudgetStatus, CategoryTotal, ChartData, ChartPeriod, Dashboard, Insight, SeriesPoint,
    Summary,
};

/// Derives summaries, budget status, insights and chart data
#[derive(Debug, Clone)]
pub struct InsightEngine {
    /// Budget warn threshold in percent (default 80)
    warn_percent: f64,
    /// Month-over-month change that counts as up/down (default 10)
    change_threshold: f64,
    currency: CurrencyConfig,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    pub fn new() -> Self {
        Self {
            warn_percent: DEFAULT_WARN_PERCENT,
            change_threshold: DEFAULT_CHANGE_THRESHOLD,
            currency: CurrencyConfig::default(),
        }
    }

    pub fn with_thresholds(warn_percent: f64, change_threshold: f64) -> Self {
        Self {
            warn_percent,
            change_threshold,
            currency: CurrencyConfig::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            warn_percent: config.budgets.warn_percent,
            change_threshold: config.insights.change_threshold_percent,
            currency: config.currency.clone(),
        }
    }

    pub fn currency(&self) -> &CurrencyConfig {
        &self.currency
    }

    pub fn summarize(&self, transactions: &[Transaction]) -> Summary {
        summarize(transactions)
    }

    pub fn budget_status(
        &self,
        transactions: &[Transaction],
        budgets: &Budgets,
        month: YearMonth,
    ) -> Vec<BudgetStatus> {
        budget_status_with_threshold(transactions, budgets, month, self.warn_percent)
    }

    pub fn monthly_insight(&self, transactions: &[Transaction], now: DateTime<Utc>) -> Insight {
        monthly_insight_with(transactions, now, self.change_threshold, &self.currency)
    }

    pub fn category_breakdown(
        &self,
        transactions: &[Transaction],
        period: ChartPeriod,
        now: DateTime<Utc>,
    ) -> Vec<CategoryTotal> {
        category_breakdown(transactions, period, now)
    }

    pub fn time_series(
        &self,
        transactions: &[Transaction],
        period: ChartPeriod,
        now: DateTime<Utc>,
    ) -> Vec<SeriesPoint> {
        time_series(transactions, period, now)
    }

    /// Category breakdown and time series together
    pub fn charts(
        &self,
        transactions: &[Transaction],
        period: ChartPeriod,
        now: DateTime<Utc>,
    ) -> ChartData {
        ChartData {
            period,
            categories: self.category_breakdown(transactions, period, now),
            series: self.time_series(transactions, period, now),
        }
    }

    /// Summary, insight and budget status for the month of `now`
    pub fn dashboard(
        &self,
        transactions: &[Transaction],
        budgets: &Budgets,
        now: DateTime<Utc>,
    ) -> Dashboard {
        let dashboard = Dashboard {
            summary: self.summarize(transactions),
            insight: self.monthly_insight(transactions, now),
            budgets: self.budget_status(transactions, budgets, YearMonth::of(&now)),
        };

        tracing::debug!(
            transactions = transactions.len(),
            budgets = dashboard.budgets.len(),
            insight = dashboard.insight.kind.as_str(),
            "Dashboard computed"
        );

        dashboard
    }
}
