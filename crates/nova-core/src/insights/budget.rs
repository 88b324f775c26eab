//! Per-category budget consumption

use crate::models::{Budgets, Transaction, YearMonth};

use super::summary::expense_total;
use super::types::{BudgetStatus, BudgetTier};

/// Default spend percentage at which a budget turns to `Warn`
pub const DEFAULT_WARN_PERCENT: f64 = 80.0;

/// Budget consumption for `month` with the default warn threshold
pub fn budget_status(
    transactions: &[Transaction],
    budgets: &Budgets,
    month: YearMonth,
) -> Vec<BudgetStatus> {
    budget_status_with_threshold(transactions, budgets, month, DEFAULT_WARN_PERCENT)
}

/// Budget consumption for `month`, one entry per budgeted category in name order.
///
/// Limits are validated when budgets are set, so every limit here is positive.
pub fn budget_status_with_threshold(
    transactions: &[Transaction],
    budgets: &Budgets,
    month: YearMonth,
    warn_percent: f64,
) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .map(|(category, limit)| {
            let spent = expense_total(
                transactions
                    .iter()
                    .filter(|t| t.category == category && month.contains(&t.timestamp)),
            );
            let raw_percent = spent * 100.0 / limit;

            BudgetStatus {
                category: category.to_string(),
                spent,
                limit,
                percent: raw_percent.min(100.0),
                tier: BudgetTier::classify(raw_percent, warn_percent),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, expense, income};

    fn may() -> YearMonth {
        YearMonth::new(2025, 5).unwrap()
    }

    fn food_budget(limit: f64) -> Budgets {
        let mut budgets = Budgets::new();
        budgets.set("Food", limit).unwrap();
        budgets
    }

    #[test]
    fn test_warn_at_eighty_percent() {
        let txs = vec![expense(1, at(2025, 5, 4), "Food", 80.0)];
        let status = budget_status(&txs, &food_budget(100.0), may());
        assert_eq!(status.len(), 1);
        assert_eq!(status[0].spent, 80.0);
        assert_eq!(status[0].percent, 80.0);
        assert_eq!(status[0].tier, BudgetTier::Warn);
    }

    #[test]
    fn test_tier_boundaries() {
        let txs = vec![expense(1, at(2025, 5, 4), "Food", 79.999)];
        let status = budget_status(&txs, &food_budget(100.0), may());
        assert_eq!(status[0].tier, BudgetTier::Ok);

        let txs = vec![expense(1, at(2025, 5, 4), "Food", 100.0)];
        let status = budget_status(&txs, &food_budget(100.0), may());
        assert_eq!(status[0].tier, BudgetTier::Over);
        assert_eq!(status[0].percent, 100.0);
    }

    #[test]
    fn test_percent_capped_but_spent_kept() {
        let txs = vec![
            expense(1, at(2025, 5, 4), "Food", 300.0),
            expense(2, at(2025, 5, 9), "Food", 200.0),
        ];
        let status = budget_status(&txs, &food_budget(250.0), may());
        assert_eq!(status[0].spent, 500.0);
        assert_eq!(status[0].percent, 100.0);
        assert_eq!(status[0].tier, BudgetTier::Over);
    }

    #[test]
    fn test_only_reference_month_matching_category_expenses() {
        let txs = vec![
            expense(1, at(2025, 5, 4), "Food", 30.0),
            expense(2, at(2025, 4, 28), "Food", 500.0),
            expense(3, at(2024, 5, 4), "Food", 500.0),
            expense(4, at(2025, 5, 5), "Taxi", 500.0),
            expense(5, at(2025, 5, 6), "food", 500.0),
            income(6, at(2025, 5, 7), "Food", 500.0),
        ];
        let status = budget_status(&txs, &food_budget(100.0), may());
        assert_eq!(status[0].spent, 30.0);
        assert_eq!(status[0].tier, BudgetTier::Ok);
    }

    #[test]
    fn test_unspent_budgets_listed_in_name_order() {
        let mut budgets = Budgets::new();
        budgets.set("Travel", 1000.0).unwrap();
        budgets.set("Food", 500.0).unwrap();

        let status = budget_status(&[], &budgets, may());
        let names: Vec<&str> = status.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Food", "Travel"]);
        assert!(status.iter().all(|s| s.spent == 0.0 && s.tier == BudgetTier::Ok));
    }

    #[test]
    fn test_custom_warn_threshold() {
        let txs = vec![expense(1, at(2025, 5, 4), "Food", 60.0)];
        let status = budget_status_with_threshold(&txs, &food_budget(100.0), may(), 50.0);
        assert_eq!(status[0].tier, BudgetTier::Warn);
    }
}
