//! Chart data series for the dashboard
//!
//! Only the data is produced here; colors, gradients and chart types belong
//! to the presenter.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Datelike, Utc};

use crate::models::Transaction;

use super::types::{CategoryTotal, ChartPeriod, SeriesPoint};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn in_period(tx: &Transaction, period: ChartPeriod, now: &DateTime<Utc>) -> bool {
    match period {
        ChartPeriod::Month => {
            tx.timestamp.year() == now.year() && tx.timestamp.month() == now.month()
        }
        ChartPeriod::Year => tx.timestamp.year() == now.year(),
    }
}

/// Expense totals per category within the period, largest first
pub fn category_breakdown(
    transactions: &[Transaction],
    period: ChartPeriod,
    now: DateTime<Utc>,
) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for tx in transactions
        .iter()
        .filter(|t| t.is_expense() && in_period(t, period, &now))
    {
        *totals.entry(tx.category.as_str()).or_insert(0.0) += tx.amount.abs();
    }

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            amount,
        })
        .collect();
    breakdown.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    breakdown
}

/// Income and expense per day (month view) or per month (year view).
///
/// Only buckets that have at least one transaction are returned, in
/// ascending order.
pub fn time_series(
    transactions: &[Transaction],
    period: ChartPeriod,
    now: DateTime<Utc>,
) -> Vec<SeriesPoint> {
    // Key is day of month (1..=31) or month index (0..=11)
    let mut buckets: BTreeMap<u32, (f64, f64)> = BTreeMap::new();
    for tx in transactions.iter().filter(|t| in_period(t, period, &now)) {
        let key = match period {
            ChartPeriod::Month => tx.timestamp.day(),
            ChartPeriod::Year => tx.timestamp.month0(),
        };
        let bucket = buckets.entry(key).or_insert((0.0, 0.0));
        if tx.is_income() {
            bucket.0 += tx.amount;
        } else {
            bucket.1 += tx.amount.abs();
        }
    }

    buckets
        .into_iter()
        .map(|(key, (income, expense))| SeriesPoint {
            label: match period {
                ChartPeriod::Month => key.to_string(),
                ChartPeriod::Year => MONTH_NAMES[key as usize].to_string(),
            },
            income,
            expense,
        })
        .collect()
}
