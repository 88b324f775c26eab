//! Export of the transaction list
//!
//! Supports:
//! - CSV for spreadsheets (`Date,Type,Category,Amount,Description`)
//! - JSON snapshot of the full records, ids and recurrence state included

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::Transaction;

/// Export format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {} (use csv or json)", s)),
        }
    }
}

/// Render transactions in the requested format
pub fn export(transactions: &[Transaction], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => export_csv(transactions),
        ExportFormat::Json => export_json(transactions),
    }
}

/// CSV with one row per transaction; amounts are magnitudes, the type column
/// carries the direction
pub fn export_csv(transactions: &[Transaction]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Date", "Type", "Category", "Amount", "Description"])?;

    for tx in transactions {
        writer.write_record([
            tx.timestamp.format("%Y-%m-%d").to_string(),
            tx.kind.as_str().to_string(),
            tx.category.clone(),
            tx.amount.abs().to_string(),
            tx.raw_text.clone(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidData(format!("CSV is not UTF-8: {}", e)))
}

/// Pretty-printed JSON array of the full records
pub fn export_json(transactions: &[Transaction]) -> Result<String> {
    Ok(serde_json::to_string_pretty(transactions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, expense, income, tx};

    #[test]
    fn test_csv_header_and_rows() {
        let txs = vec![
            tx(1, at(2025, 6, 3), "Taxi 200", "Taxi", -200.0),
            income(2, at(2025, 6, 1), "Salary", 50000.0),
        ];
        let csv = export_csv(&txs).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Date,Type,Category,Amount,Description");
        assert_eq!(lines[1], "2025-06-03,expense,Taxi,200,Taxi 200");
        assert_eq!(lines[2], "2025-06-01,income,Salary,50000,Salary 50000 income");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_quotes_commas_in_text() {
        let txs = vec![tx(1, at(2025, 6, 3), "Dinner, drinks 1,200", "Dinner", -1200.0)];
        let csv = export_csv(&txs).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[4], "Dinner, drinks 1,200");
        assert!(csv.contains("\"Dinner, drinks 1,200\""));
    }

    #[test]
    fn test_csv_keeps_fractional_amounts() {
        let txs = vec![expense(1, at(2025, 6, 3), "Coffee", 4.5)];
        let csv = export_csv(&txs).unwrap();
        assert!(csv.lines().nth(1).unwrap().contains(",4.5,"));
    }

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(
            export_csv(&[]).unwrap(),
            "Date,Type,Category,Amount,Description\n"
        );
        assert_eq!(export_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_json_uses_type_field() {
        let txs = vec![expense(1, at(2025, 6, 3), "Food", 90.0)];
        let json = export(&txs, ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["type"], "expense");
        assert_eq!(value[0]["amount"], -90.0);

        let back: Vec<Transaction> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, txs);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
