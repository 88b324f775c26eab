//! Shared fixtures for unit tests

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Transaction, TransactionId, TransactionKind};

/// Noon UTC on the given day
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// A transaction with the sign of `amount` deciding its kind
pub fn tx(
    id: TransactionId,
    when: DateTime<Utc>,
    text: &str,
    category: &str,
    amount: f64,
) -> Transaction {
    Transaction {
        id,
        timestamp: when,
        raw_text: text.to_string(),
        category: category.to_string(),
        amount,
        kind: if amount >= 0.0 {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        },
        recurring: false,
        last_generated_month: None,
    }
}

pub fn expense(id: TransactionId, when: DateTime<Utc>, category: &str, amount: f64) -> Transaction {
    tx(
        id,
        when,
        &format!("{} {}", category, amount),
        category,
        -amount.abs(),
    )
}

pub fn income(id: TransactionId, when: DateTime<Utc>, category: &str, amount: f64) -> Transaction {
    tx(
        id,
        when,
        &format!("{} {} income", category, amount),
        category,
        amount.abs(),
    )
}

pub fn recurring(mut tx: Transaction) -> Transaction {
    tx.recurring = true;
    tx
}
