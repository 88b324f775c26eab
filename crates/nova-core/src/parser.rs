//! Free-text command parser
//!
//! Turns statements like "Taxi 200" or "Salary 50000 income" into a
//! [`NewTransaction`]. This is a keyword/regex heuristic, not NLP:
//!
//! - A command is income when it contains an income keyword anywhere,
//!   including inside longer words ("deposited").
//! - When several numbers appear ("Taxi 200 km to airport 5") the largest is
//!   taken as the amount. This is a known limitation.
//! - The category is whatever text is left once the first amount and the
//!   first income keyword are removed, with a default when too little
//!   remains.
//! - The raw text is stored exactly as typed; only parsing sees it trimmed.
//!
//! The only failure is [`Error::NoAmountFound`].

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use tracing::debug;

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::models::{NewTransaction, TransactionKind};

/// Digits optionally grouped by commas or a decimal point, e.g. "1,200.50"
fn amount_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:[0-9]+[,.]?)+").expect("valid regex"))
}

fn keyword_regex(keywords: &[String]) -> std::result::Result<Regex, regex::Error> {
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k.trim()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){}", alternation))
}

/// Parses commands with a configurable keyword set and default categories
#[derive(Debug, Clone)]
pub struct CommandParser {
    income_re: Regex,
    income_category: String,
    expense_category: String,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandParser {
    /// Parser with the built-in keywords ("income", "salary", "deposit", "saved")
    pub fn new() -> Self {
        let defaults = ParserConfig::default();
        Self {
            income_re: keyword_regex(&defaults.income_keywords).expect("valid regex"),
            income_category: defaults.income_category,
            expense_category: defaults.expense_category,
        }
    }

    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        if config.income_keywords.is_empty() {
            return Err(Error::Config(
                "parser.income_keywords must not be empty".to_string(),
            ));
        }
        let income_re = keyword_regex(&config.income_keywords)
            .map_err(|e| Error::Config(format!("Invalid income keywords: {}", e)))?;
        Ok(Self {
            income_re,
            income_category: config.income_category.clone(),
            expense_category: config.expense_category.clone(),
        })
    }

    /// Parse a command dated now
    pub fn parse(&self, text: &str) -> Result<NewTransaction> {
        self.parse_at(text, Utc::now())
    }

    /// Parse a command dated at `now`
    pub fn parse_at(&self, text: &str, now: DateTime<Utc>) -> Result<NewTransaction> {
        let trimmed = text.trim();
        let kind = self.classify(trimmed);

        let tokens: Vec<&str> = amount_regex()
            .find_iter(trimmed)
            .map(|m| m.as_str())
            .collect();
        let first_token = *tokens.first().ok_or(Error::NoAmountFound)?;

        let value = tokens
            .iter()
            .filter_map(|t| parse_amount_token(t))
            .fold(None, |best: Option<f64>, v| {
                Some(best.map_or(v, |b| b.max(v)))
            })
            .ok_or(Error::NoAmountFound)?;

        let category = self.derive_category(trimmed, first_token, kind);
        let amount = kind.signed(value);

        debug!(
            kind = kind.as_str(),
            amount,
            category = category.as_str(),
            candidates = tokens.len(),
            "Parsed command"
        );

        Ok(NewTransaction {
            timestamp: now,
            raw_text: text.to_string(),
            category,
            amount,
            kind,
            recurring: false,
        })
    }

    /// Income if any keyword appears, expense otherwise
    pub fn classify(&self, text: &str) -> TransactionKind {
        if self.income_re.is_match(text) {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }

    fn derive_category(&self, text: &str, first_token: &str, kind: TransactionKind) -> String {
        let without_amount = text.replacen(first_token, "", 1);
        let without_keywords = self.income_re.replace(&without_amount, "");
        let remaining = without_keywords.split_whitespace().collect::<Vec<_>>().join(" ");

        if remaining.chars().count() < 2 {
            match kind {
                TransactionKind::Income => self.income_category.clone(),
                TransactionKind::Expense => self.expense_category.clone(),
            }
        } else {
            capitalize_first(&remaining)
        }
    }
}

/// Parse a command with the default parser, dated now
pub fn parse(text: &str) -> Result<NewTransaction> {
    CommandParser::new().parse(text)
}

/// Parse a command with the default parser, dated at `now`
pub fn parse_at(text: &str, now: DateTime<Utc>) -> Result<NewTransaction> {
    CommandParser::new().parse_at(text, now)
}

/// Strip thousands separators and parse the longest prefix with one decimal point.
/// Digit runs too long for an `f64` yield `None`.
fn parse_amount_token(token: &str) -> Option<f64> {
    let cleaned: String = token.chars().filter(|c| *c != ',').collect();
    let prefix = match cleaned.match_indices('.').nth(1) {
        Some((second_dot, _)) => &cleaned[..second_dot],
        None => cleaned.as_str(),
    };
    prefix
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_simple_expense() {
        let tx = parse_at("Taxi 200", now()).unwrap();
        assert_eq!(tx.category, "Taxi");
        assert_eq!(tx.amount, -200.0);
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.raw_text, "Taxi 200");
        assert_eq!(tx.timestamp, now());
        assert!(!tx.recurring);
        tx.validate().unwrap();
    }

    #[test]
    fn test_salary_income_defaults_category() {
        let tx = parse_at("Salary 50000 income", now()).unwrap();
        assert_eq!(tx.amount, 50000.0);
        assert_eq!(tx.kind, TransactionKind::Income);
        assert_eq!(tx.category, "Income");
    }

    #[test]
    fn test_no_numbers_fails() {
        assert!(matches!(
            parse_at("no numbers here", now()),
            Err(Error::NoAmountFound)
        ));
        assert!(matches!(parse_at("   ", now()), Err(Error::NoAmountFound)));
    }

    #[test]
    fn test_largest_number_wins() {
        let tx = parse_at("Taxi 200 km to airport 5", now()).unwrap();
        assert_eq!(tx.amount, -200.0);
        // Only the first number is removed from the category
        assert_eq!(tx.category, "Taxi km to airport 5");

        let tx = parse_at("2 coffees 450", now()).unwrap();
        assert_eq!(tx.amount, -450.0);
        assert_eq!(tx.category, "Coffees 450");
    }

    #[test]
    fn test_thousands_separators_and_decimals() {
        let tx = parse_at("Rent 1,200.50", now()).unwrap();
        assert_eq!(tx.amount, -1200.5);
        assert_eq!(tx.category, "Rent");

        let tx = parse_at("Laptop 1,25,000", now()).unwrap();
        assert_eq!(tx.amount, -125000.0);
    }

    #[test]
    fn test_malformed_token_uses_valid_prefix() {
        assert_eq!(parse_amount_token("1.2.3"), Some(1.2));
        assert_eq!(parse_amount_token("200."), Some(200.0));
        assert_eq!(parse_amount_token("200,"), Some(200.0));
        assert_eq!(parse_amount_token("1,000"), Some(1000.0));
    }

    #[test]
    fn test_keyword_inside_word_counts_as_income() {
        let tx = parse_at("Bonus deposited 3000", now()).unwrap();
        assert_eq!(tx.kind, TransactionKind::Income);
        assert_eq!(tx.amount, 3000.0);
        assert_eq!(tx.category, "Bonus ed");
    }

    #[test]
    fn test_only_first_keyword_is_stripped() {
        let tx = parse_at("saved salary 1000", now()).unwrap();
        assert_eq!(tx.kind, TransactionKind::Income);
        assert_eq!(tx.category, "Salary");

        let tx = parse_at("deposit deposit 20", now()).unwrap();
        assert_eq!(tx.category, "Deposit");
    }

    #[test]
    fn test_raw_text_keeps_surrounding_whitespace() {
        let tx = parse_at("  Taxi 200  ", now()).unwrap();
        assert_eq!(tx.raw_text, "  Taxi 200  ");
        assert_eq!(tx.category, "Taxi");
        assert_eq!(tx.amount, -200.0);
    }

    #[test]
    fn test_oversized_number_is_not_an_amount() {
        let huge = "9".repeat(400);
        assert_eq!(parse_amount_token(&huge), None);
        assert!(matches!(
            parse_at(&format!("Taxi {}", huge), now()),
            Err(Error::NoAmountFound)
        ));

        let tx = parse_at(&format!("Taxi {} 200", huge), now()).unwrap();
        assert_eq!(tx.amount, -200.0);
        tx.validate().unwrap();
    }

    #[test]
    fn test_keywords_are_case_insensitive_and_stripped() {
        let tx = parse_at("freelance DEPOSIT 7000", now()).unwrap();
        assert_eq!(tx.kind, TransactionKind::Income);
        assert_eq!(tx.category, "Freelance");

        let tx = parse_at("saved 500", now()).unwrap();
        assert_eq!(tx.category, "Income");
    }

    #[test]
    fn test_expense_default_category() {
        let tx = parse_at("500", now()).unwrap();
        assert_eq!(tx.category, "General");
        let tx = parse_at("x 500", now()).unwrap();
        assert_eq!(tx.category, "General");
    }

    #[test]
    fn test_capitalizes_only_first_letter() {
        let tx = parse_at("spent 500 on food at ABC", now()).unwrap();
        assert_eq!(tx.category, "Spent on food at ABC");
        let tx = parse_at("éclair 80", now()).unwrap();
        assert_eq!(tx.category, "Éclair");
    }

    #[test]
    fn test_zero_amount_is_valid() {
        let tx = parse_at("Taxi 0", now()).unwrap();
        assert_eq!(tx.amount, 0.0);
        tx.validate().unwrap();
    }

    #[test]
    fn test_custom_keywords() {
        let config = ParserConfig {
            income_keywords: vec!["refund".to_string(), "got".to_string()],
            income_category: "Money In".to_string(),
            expense_category: "Misc".to_string(),
        };
        let parser = CommandParser::from_config(&config).unwrap();

        let tx = parser.parse_at("refund 300", now()).unwrap();
        assert_eq!(tx.kind, TransactionKind::Income);
        assert_eq!(tx.category, "Money In");

        let tx = parser.parse_at("Salary 100", now()).unwrap();
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.category, "Salary");

        let tx = parser.parse_at("99", now()).unwrap();
        assert_eq!(tx.category, "Misc");
    }

    #[test]
    fn test_keywords_with_regex_metacharacters_are_literal() {
        let config = ParserConfig {
            income_keywords: vec!["+cash".to_string()],
            ..ParserConfig::default()
        };
        let parser = CommandParser::from_config(&config).unwrap();
        assert_eq!(parser.classify("+cash 10"), TransactionKind::Income);
        assert_eq!(parser.classify("cash 10"), TransactionKind::Expense);
    }

    #[test]
    fn test_empty_keyword_list_rejected() {
        let config = ParserConfig {
            income_keywords: vec![],
            ..ParserConfig::default()
        };
        assert!(CommandParser::from_config(&config).is_err());
    }
}
