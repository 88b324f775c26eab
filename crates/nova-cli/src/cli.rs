//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nova - Track money by typing what happened
#[derive(Parser)]
#[command(name = "nova")]
#[command(about = "Natural-language personal finance tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path (defaults to the platform data dir, e.g. ~/.local/share/nova/nova.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file (defaults to <data dir>/config.toml, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Record a transaction from free text, e.g. `nova add Taxi 200`
    Add {
        /// The statement, e.g. "Salary 50000 income"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Edit a transaction's category, amount, type or recurring flag
    Edit {
        /// Transaction ID
        id: i64,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New amount (magnitude; the sign follows the type)
        #[arg(long)]
        amount: Option<f64>,

        /// New type: income or expense
        #[arg(long = "type")]
        kind: Option<String>,

        /// Mark or unmark as a monthly recurring template
        #[arg(long)]
        recurring: Option<bool>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: i64,
    },

    /// Manage monthly category budgets
    Budget {
        #[command(subcommand)]
        action: Option<BudgetAction>,
    },

    /// Show totals, the monthly insight and budget status
    Dashboard {
        /// Skip the monthly recurring sweep
        #[arg(long)]
        no_recur: bool,
    },

    /// Show spending breakdown and income/expense series
    Chart {
        /// Period: month or year
        #[arg(short, long, default_value = "month")]
        period: String,
    },

    /// Clone recurring transactions into the current month
    Recur,

    /// Export all transactions
    Export {
        /// Format: csv or json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum BudgetAction {
    /// List budgets
    List,

    /// Set the monthly limit for a category
    Set {
        /// Category name (exact match, e.g. "Food")
        category: String,

        /// Monthly limit
        limit: String,
    },
}
