//! Domain models for Nova

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Store-assigned transaction identifier
pub type TransactionId = i64;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Apply the canonical sign for this kind to a magnitude
    pub fn signed(&self, amount: f64) -> f64 {
        match self {
            Self::Income => amount.abs(),
            Self::Expense => -amount.abs(),
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidData(format!("Invalid month: {}", month)));
        }
        Ok(Self { year, month })
    }

    pub fn of(ts: &DateTime<Utc>) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
        }
    }

    /// The month immediately before this one (January rolls back a year)
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn contains(&self, ts: &DateTime<Utc>) -> bool {
        ts.year() == self.year && ts.month() == self.month
    }
}

impl std::str::FromStr for YearMonth {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month (use YYYY-MM): {}", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid year in month: {}", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month number: {}", s))?;
        Self::new(year, month).map_err(|e| e.to_string())
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Checks the amount/kind sign invariant shared by stored and new records
fn check_sign(amount: f64, kind: TransactionKind) -> Result<()> {
    if !amount.is_finite() {
        return Err(Error::InvalidData(format!(
            "Amount must be finite, got {}",
            amount
        )));
    }
    let consistent = match kind {
        TransactionKind::Income => amount >= 0.0,
        TransactionKind::Expense => amount <= 0.0,
    };
    if !consistent {
        return Err(Error::InvalidData(format!(
            "Amount {} does not match transaction type {}",
            amount, kind
        )));
    }
    Ok(())
}

/// A stored transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub timestamp: DateTime<Utc>,
    /// The text the user entered
    pub raw_text: String,
    pub category: String,
    /// Negative = expense, positive = income
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Template for monthly clones
    pub recurring: bool,
    /// Month the recurrence sweep last cloned this template for
    pub last_generated_month: Option<YearMonth>,
}

impl Transaction {
    /// Check the sign invariant and that the category is usable
    pub fn validate(&self) -> Result<()> {
        check_sign(self.amount, self.kind)?;
        if self.category.trim().is_empty() {
            return Err(Error::InvalidData(format!(
                "Transaction {} has an empty category",
                self.id
            )));
        }
        Ok(())
    }

    pub fn month(&self) -> YearMonth {
        YearMonth::of(&self.timestamp)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Produce the edited record, re-deriving the sign from the resulting kind
    pub fn apply_update(&self, update: &TransactionUpdate) -> Result<Transaction> {
        let kind = update.kind.unwrap_or(self.kind);
        let magnitude = update.amount.unwrap_or(self.amount);
        if !magnitude.is_finite() {
            return Err(Error::InvalidData(format!(
                "Amount must be finite, got {}",
                magnitude
            )));
        }

        let category = match &update.category {
            Some(c) if c.trim().is_empty() => {
                return Err(Error::InvalidData("Category cannot be empty".to_string()))
            }
            Some(c) => c.trim().to_string(),
            None => self.category.clone(),
        };

        let updated = Transaction {
            category,
            amount: kind.signed(magnitude),
            kind,
            recurring: update.recurring.unwrap_or(self.recurring),
            ..self.clone()
        };
        updated.validate()?;
        Ok(updated)
    }
}

/// A transaction before the store assigns it an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub timestamp: DateTime<Utc>,
    pub raw_text: String,
    pub category: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub recurring: bool,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<()> {
        check_sign(self.amount, self.kind)?;
        if self.category.trim().is_empty() {
            return Err(Error::InvalidData("Category cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            timestamp: self.timestamp,
            raw_text: self.raw_text,
            category: self.category,
            amount: self.amount,
            kind: self.kind,
            recurring: self.recurring,
            last_generated_month: None,
        }
    }
}

/// Fields a user may edit on an existing transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    pub category: Option<String>,
    /// Magnitude; the sign follows the resulting kind
    pub amount: Option<f64>,
    pub kind: Option<TransactionKind>,
    pub recurring: Option<bool>,
}

/// Monthly spending limits by category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budgets {
    limits: BTreeMap<String, f64>,
}

impl Budgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a user-entered limit
    pub fn parse_limit(input: &str) -> Result<f64> {
        let limit: f64 = input
            .trim()
            .parse()
            .map_err(|_| Error::InvalidBudgetLimit(format!("'{}' is not a number", input)))?;
        Self::validate_limit(limit)?;
        Ok(limit)
    }

    pub fn validate_limit(limit: f64) -> Result<()> {
        if !limit.is_finite() || limit <= 0.0 {
            return Err(Error::InvalidBudgetLimit(format!(
                "limit must be a positive amount, got {}",
                limit
            )));
        }
        Ok(())
    }

    /// Create or overwrite the limit for a category
    pub fn set(&mut self, category: &str, limit: f64) -> Result<()> {
        Self::validate_limit(limit)?;
        let category = category.trim();
        if category.is_empty() {
            return Err(Error::InvalidData(
                "Budget category cannot be empty".to_string(),
            ));
        }
        self.limits.insert(category.to_string(), limit);
        Ok(())
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.limits.get(category).copied()
    }

    /// Categories in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.limits.iter().map(|(c, l)| (c.as_str(), *l))
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            id: 1,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
            raw_text: "Taxi 200".to_string(),
            category: "Taxi".to_string(),
            amount,
            kind,
            recurring: false,
            last_generated_month: None,
        }
    }

    #[test]
    fn test_kind_roundtrip_str() {
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            assert_eq!(kind.as_str().parse::<TransactionKind>().unwrap(), kind);
        }
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_validate_sign_mismatch() {
        assert!(sample(TransactionKind::Expense, -200.0).validate().is_ok());
        assert!(sample(TransactionKind::Expense, 200.0).validate().is_err());
        assert!(sample(TransactionKind::Income, -5.0).validate().is_err());
        assert!(sample(TransactionKind::Income, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_year_month_previous_rolls_over_year() {
        let jan = YearMonth::new(2025, 1).unwrap();
        assert_eq!(jan.previous(), YearMonth::new(2024, 12).unwrap());
        let jul = YearMonth::new(2025, 7).unwrap();
        assert_eq!(jul.previous(), YearMonth::new(2025, 6).unwrap());
    }

    #[test]
    fn test_year_month_parse_and_display() {
        let ym: YearMonth = "2024-02".parse().unwrap();
        assert_eq!(ym, YearMonth::new(2024, 2).unwrap());
        assert_eq!(ym.to_string(), "2024-02");
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("February".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_apply_update_switches_sign_with_kind() {
        let tx = sample(TransactionKind::Expense, -200.0);
        let update = TransactionUpdate {
            kind: Some(TransactionKind::Income),
            ..Default::default()
        };
        let updated = tx.apply_update(&update).unwrap();
        assert_eq!(updated.amount, 200.0);
        assert_eq!(updated.kind, TransactionKind::Income);

        let update = TransactionUpdate {
            amount: Some(350.0),
            category: Some("  Cab ".to_string()),
            recurring: Some(true),
            ..Default::default()
        };
        let updated = tx.apply_update(&update).unwrap();
        assert_eq!(updated.amount, -350.0);
        assert_eq!(updated.category, "Cab");
        assert!(updated.recurring);
        assert_eq!(updated.id, tx.id);
        assert_eq!(updated.raw_text, tx.raw_text);
    }

    #[test]
    fn test_apply_update_rejects_bad_input() {
        let tx = sample(TransactionKind::Expense, -200.0);
        let empty = TransactionUpdate {
            category: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            tx.apply_update(&empty),
            Err(Error::InvalidData(_))
        ));
        let nan = TransactionUpdate {
            amount: Some(f64::NAN),
            ..Default::default()
        };
        assert!(tx.apply_update(&nan).is_err());
    }

    #[test]
    fn test_budget_limits_must_be_positive() {
        let mut budgets = Budgets::new();
        assert!(budgets.set("Food", 5000.0).is_ok());
        assert!(matches!(
            budgets.set("Food", 0.0),
            Err(Error::InvalidBudgetLimit(_))
        ));
        assert!(matches!(
            budgets.set("Food", -10.0),
            Err(Error::InvalidBudgetLimit(_))
        ));
        assert!(budgets.set("Food", f64::INFINITY).is_err());
        assert_eq!(budgets.get("Food"), Some(5000.0));
    }

    #[test]
    fn test_budget_parse_limit() {
        assert_eq!(Budgets::parse_limit(" 1500 ").unwrap(), 1500.0);
        assert!(matches!(
            Budgets::parse_limit("lots"),
            Err(Error::InvalidBudgetLimit(_))
        ));
        assert!(Budgets::parse_limit("0").is_err());
    }
}
