//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `resolve_db_path` - Where the database lives when `--db` is not given
//! - `open_tracker` - Shared utility to open the database with config applied
//! - `cmd_init` - Initialize the database

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nova_core::config::{data_dir, default_config_path};
use nova_core::{Config, Database, Tracker};

/// Explicit path, else `<data dir>/nova.db`, else `nova.db` in the working directory
pub fn resolve_db_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => data_dir()
            .map(|dir| dir.join("nova.db"))
            .unwrap_or_else(|| PathBuf::from("nova.db")),
    }
}

/// Open the database and build a tracker from the resolved config
pub fn open_tracker(db_path: &Path, config_path: Option<&Path>) -> Result<Tracker<Database>> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    let db = Database::new(path_str).context("Failed to open database")?;
    let config = Config::load(config_path).context("Failed to load config")?;

    Tracker::from_config(db, &config).context("Invalid config")
}

pub fn cmd_init(db_path: &Path, config_path: Option<&Path>) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let tracker = open_tracker(db_path, config_path)?;
    let count = tracker.transactions()?.len();
    println!("   Transactions: {}", count);

    let config_source = match config_path {
        Some(path) => path.display().to_string(),
        None => match default_config_path() {
            Some(path) if path.exists() => path.display().to_string(),
            _ => "built-in defaults".to_string(),
        },
    };
    println!("   Config: {}", config_source);

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record something: nova add Taxi 200");
    println!("  2. Set a budget: nova budget set Food 5000");
    println!("  3. Check in: nova dashboard");

    Ok(())
}
