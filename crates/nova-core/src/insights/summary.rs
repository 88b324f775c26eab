//! Period totals and history ordering

use crate::models::{Transaction, YearMonth};

use super::types::Summary;

/// Total income, total expense (absolute) and their difference
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let income: f64 = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let expense = expense_total(transactions.iter());

    Summary {
        income,
        expense,
        balance: income - expense,
    }
}

/// Sum of absolute expense amounts
pub(crate) fn expense_total<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> f64 {
    transactions
        .filter(|t| t.is_expense())
        .map(|t| t.amount.abs())
        .sum()
}

/// Sum of absolute expense amounts dated in `month`
pub fn month_expense(transactions: &[Transaction], month: YearMonth) -> f64 {
    expense_total(transactions.iter().filter(|t| month.contains(&t.timestamp)))
}

/// Transactions newest first
pub fn history(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| b.id.cmp(&a.id)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, expense, income};

    #[test]
    fn test_summarize_income_and_expense() {
        let txs = vec![
            income(1, at(2025, 5, 1), "Salary", 100.0),
            expense(2, at(2025, 5, 2), "Taxi", 40.0),
        ];
        let summary = summarize(&txs);
        assert_eq!(summary.income, 100.0);
        assert_eq!(summary.expense, 40.0);
        assert_eq!(summary.balance, 60.0);
        assert!(summary.is_net_positive());
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary, Summary::default());
        assert!(summary.is_net_positive());
    }

    #[test]
    fn test_summarize_overspent() {
        let txs = vec![
            income(1, at(2025, 5, 1), "Salary", 1000.0),
            expense(2, at(2025, 5, 2), "Rent", 800.0),
            expense(3, at(2025, 5, 3), "Food", 450.0),
        ];
        let summary = summarize(&txs);
        assert_eq!(summary.expense, 1250.0);
        assert_eq!(summary.balance, -250.0);
        assert!(!summary.is_net_positive());
    }

    #[test]
    fn test_month_expense_ignores_other_months_and_income() {
        let txs = vec![
            expense(1, at(2025, 5, 1), "Taxi", 40.0),
            expense(2, at(2025, 4, 30), "Taxi", 60.0),
            expense(3, at(2024, 5, 10), "Taxi", 70.0),
            income(4, at(2025, 5, 3), "Salary", 500.0),
        ];
        let may = YearMonth::new(2025, 5).unwrap();
        assert_eq!(month_expense(&txs, may), 40.0);
    }

    #[test]
    fn test_history_newest_first() {
        let txs = vec![
            expense(1, at(2025, 5, 1), "A", 1.0),
            expense(2, at(2025, 5, 3), "B", 1.0),
            expense(3, at(2025, 5, 2), "C", 1.0),
        ];
        let ids: Vec<i64> = history(&txs).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
