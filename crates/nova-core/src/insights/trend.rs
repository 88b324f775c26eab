//! Month-over-month spending insight
//!
//! Compares expense totals for the calendar month of `now` against the month
//! before it:
//!
//! | condition                     | kind           |
//! |-------------------------------|----------------|
//! | both months zero              | `NoData`       |
//! | last month zero               | `FirstMonth`   |
//! | change > threshold            | `SpendingUp`   |
//! | change < -threshold           | `SpendingDown` |
//! | otherwise (bounds inclusive)  | `Stable`       |

use chrono::{DateTime, Utc};

use crate::config::CurrencyConfig;
use crate::models::{Transaction, YearMonth};
use crate::money::format_money;

use super::summary::month_expense;
use super::types::{Insight, InsightKind};

/// Default month-over-month change (percent) that counts as up or down
pub const DEFAULT_CHANGE_THRESHOLD: f64 = 10.0;

/// Monthly insight with the default threshold and currency
pub fn monthly_insight(transactions: &[Transaction], now: DateTime<Utc>) -> Insight {
    monthly_insight_with(
        transactions,
        now,
        DEFAULT_CHANGE_THRESHOLD,
        &CurrencyConfig::default(),
    )
}

pub fn monthly_insight_with(
    transactions: &[Transaction],
    now: DateTime<Utc>,
    threshold: f64,
    currency: &CurrencyConfig,
) -> Insight {
    let current = YearMonth::of(&now);
    let this_month = month_expense(transactions, current);
    let last_month = month_expense(transactions, current.previous());

    let (kind, percent_change, message) = if this_month == 0.0 && last_month == 0.0 {
        (
            InsightKind::NoData,
            None,
            "Start adding transactions to get insights.".to_string(),
        )
    } else if last_month == 0.0 {
        (
            InsightKind::FirstMonth,
            None,
            format!(
                "You've spent {} this month. Keep tracking!",
                format_money(this_month, currency)
            ),
        )
    } else {
        let change = (this_month - last_month) / last_month * 100.0;
        if change > threshold {
            (
                InsightKind::SpendingUp,
                Some(change),
                format!(
                    "Warning: spending is up {}% vs last month. Watch your budget!",
                    round_half_up(change)
                ),
            )
        } else if change < -threshold {
            (
                InsightKind::SpendingDown,
                Some(change),
                format!(
                    "Great job! Spending is down {}% vs last month.",
                    round_half_up(change).abs()
                ),
            )
        } else {
            (
                InsightKind::Stable,
                Some(change),
                format!(
                    "Spending is stable. You're within {}% of last month.",
                    round_half_up(change)
                ),
            )
        }
    };

    Insight {
        kind,
        this_month,
        last_month,
        percent_change,
        message,
    }
}

/// Nearest whole percent, with halves going toward positive infinity
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}
