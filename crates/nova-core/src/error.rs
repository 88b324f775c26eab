//! Error types for Nova

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No amount found in command")]
    NoAmountFound,

    #[error("Invalid budget limit: {0}")]
    InvalidBudgetLimit(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(i64),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
