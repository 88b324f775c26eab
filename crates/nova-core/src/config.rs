//! Tracker configuration
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/nova/config.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Keys missing from an override keep their default value.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/nova.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub income_keywords: Vec<String>,
    pub income_category: String,
    pub expense_category: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            income_keywords: ["income", "salary", "deposit", "saved"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            income_category: "Income".to_string(),
            expense_category: "General".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    pub warn_percent: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self { warn_percent: 80.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub change_threshold_percent: f64,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            change_threshold_percent: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecurringConfig {
    pub marker: String,
}

impl Default for RecurringConfig {
    fn default() -> Self {
        Self {
            marker: " (Recurring)".to_string(),
        }
    }
}

/// Digit grouping for displayed amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// 12,34,567
    #[default]
    Indian,
    /// 1,234,567
    Western,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub symbol: String,
    pub grouping: Grouping,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            grouping: Grouping::Indian,
        }
    }
}

/// Full tracker configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub budgets: BudgetConfig,
    pub insights: InsightConfig,
    pub recurring: RecurringConfig,
    pub currency: CurrencyConfig,
}

impl Config {
    /// Load config (explicit path, then data dir override, then embedded default)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let content = match override_path {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?,
            None => match default_config_path() {
                Some(path) if path.exists() => fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?,
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        Self::parse(&content)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// The compiled-in configuration
    pub fn embedded() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG)
    }

    fn validate(&self) -> Result<()> {
        if self.parser.income_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(Error::Config(
                "parser.income_keywords must not contain empty keywords".to_string(),
            ));
        }
        let warn = self.budgets.warn_percent;
        if !warn.is_finite() || warn <= 0.0 || warn > 100.0 {
            return Err(Error::Config(format!(
                "budgets.warn_percent must be in (0, 100], got {}",
                warn
            )));
        }
        let threshold = self.insights.change_threshold_percent;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(Error::Config(format!(
                "insights.change_threshold_percent must be >= 0, got {}",
                threshold
            )));
        }
        Ok(())
    }
}

/// Data directory for the database and config override
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("nova"))
}

/// Get the default override config path
pub fn default_config_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config.toml"))
}
