//! Monthly recurrence sweep
//!
//! A transaction flagged `recurring` is a template. Once per calendar month
//! the sweep clones each template into the current month, unless a record
//! with the same base text and amount is already dated there. Templates
//! record the month they were last handled in `last_generated_month`, so a
//! second sweep in the same month skips them without scanning.
//!
//! There is no "next due" schedule: a template that missed several months
//! only produces one clone per sweep.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::config::RecurringConfig;
use crate::models::{NewTransaction, Transaction, TransactionId, YearMonth};

/// Outcome of a sweep: clones to insert and templates handled this month
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepResult {
    pub clones: Vec<NewTransaction>,
    /// Templates whose `last_generated_month` should become the swept month
    pub handled: Vec<TransactionId>,
}

impl SweepResult {
    pub fn is_empty(&self) -> bool {
        self.clones.is_empty() && self.handled.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RecurrenceSweep {
    /// Suffix appended to clone text
    marker: String,
}

impl Default for RecurrenceSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl RecurrenceSweep {
    pub fn new() -> Self {
        Self::from_config(&RecurringConfig::default())
    }

    pub fn from_config(config: &RecurringConfig) -> Self {
        Self {
            marker: config.marker.clone(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Text with any trailing recurrence markers removed
    pub fn base_text<'a>(&self, raw_text: &'a str) -> &'a str {
        if self.marker.is_empty() {
            return raw_text;
        }
        let mut text = raw_text;
        while let Some(stripped) = text.strip_suffix(self.marker.as_str()) {
            text = stripped;
        }
        text
    }

    fn dedup_key(&self, tx: &Transaction) -> (String, u64) {
        // + 0.0 folds -0.0 into 0.0
        (
            self.base_text(&tx.raw_text).to_string(),
            (tx.amount + 0.0).to_bits(),
        )
    }

    /// Work out which templates need a clone in the month of `now`
    pub fn sweep(&self, transactions: &[Transaction], now: DateTime<Utc>) -> SweepResult {
        let month = YearMonth::of(&now);
        let mut present: HashSet<(String, u64)> = transactions
            .iter()
            .filter(|t| month.contains(&t.timestamp))
            .map(|t| self.dedup_key(t))
            .collect();

        let mut result = SweepResult::default();

        for template in transactions.iter().filter(|t| t.recurring) {
            if month.contains(&template.timestamp)
                || template.last_generated_month == Some(month)
            {
                continue;
            }

            if let Err(e) = template.validate() {
                warn!(
                    id = template.id,
                    error = %e,
                    "Skipping malformed recurring template"
                );
                continue;
            }

            result.handled.push(template.id);

            if !present.insert(self.dedup_key(template)) {
                debug!(
                    id = template.id,
                    month = %month,
                    "Recurring transaction already present this month"
                );
                continue;
            }

            result.clones.push(NewTransaction {
                timestamp: now,
                raw_text: format!("{}{}", self.base_text(&template.raw_text), self.marker),
                category: template.category.clone(),
                amount: template.amount,
                kind: template.kind,
                recurring: true,
            });
        }

        result
    }
}

/// Sweep with the default marker
pub fn recurrence_sweep(transactions: &[Transaction], now: DateTime<Utc>) -> SweepResult {
    RecurrenceSweep::new().sweep(transactions, now)
}
