//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (resolve_db_path, open_tracker) and init
//! - `transactions` - Add, list, edit, delete, recurring sweep
//! - `budgets` - Budget list and set
//! - `reports` - Dashboard and charts
//! - `export` - CSV/JSON export

pub mod budgets;
pub mod core;
pub mod export;
pub mod reports;
pub mod transactions;

// Re-export command functions for main.rs
pub use budgets::*;
pub use core::*;
pub use export::*;
pub use reports::*;
pub use transactions::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
