//! Export command implementation

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use nova_core::{Database, ExportFormat, Tracker};

pub fn cmd_export(tracker: &Tracker<Database>, format: &str, output: Option<&Path>) -> Result<()> {
    let format: ExportFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let count = tracker.transactions()?.len();
    if count == 0 {
        eprintln!("No data to export.");
        return Ok(());
    }

    let content = tracker.export(format)?;

    match output {
        Some(path) => {
            fs::write(path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "✅ Exported {} transactions to {} ({})",
                count,
                path.display(),
                format
            );
        }
        None => print!("{}", content),
    }

    Ok(())
}
