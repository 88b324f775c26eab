//! Display formatting for amounts

use crate::config::{CurrencyConfig, Grouping};

/// Format an amount as whole currency units, e.g. `₹1,20,000` or `-₹450`
pub fn format_money(amount: f64, currency: &CurrencyConfig) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!(
        "{}{}{}",
        sign,
        currency.symbol,
        group_digits(&digits, currency.grouping)
    )
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let group = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };

    // Walk the head from the right in fixed-size groups
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inr() -> CurrencyConfig {
        CurrencyConfig::default()
    }

    fn usd() -> CurrencyConfig {
        CurrencyConfig {
            symbol: "$".to_string(),
            grouping: Grouping::Western,
        }
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_money(0.0, &inr()), "₹0");
        assert_eq!(format_money(200.0, &inr()), "₹200");
        assert_eq!(format_money(1200.0, &inr()), "₹1,200");
        assert_eq!(format_money(50000.0, &inr()), "₹50,000");
        assert_eq!(format_money(120000.0, &inr()), "₹1,20,000");
        assert_eq!(format_money(12345678.0, &inr()), "₹1,23,45,678");
    }

    #[test]
    fn test_western_grouping() {
        assert_eq!(format_money(1234567.0, &usd()), "$1,234,567");
        assert_eq!(format_money(999.0, &usd()), "$999");
    }

    #[test]
    fn test_rounding_and_negatives() {
        assert_eq!(format_money(1200.5, &inr()), "₹1,201");
        assert_eq!(format_money(-450.2, &inr()), "-₹450");
        assert_eq!(format_money(-0.4, &inr()), "₹0");
    }
}
