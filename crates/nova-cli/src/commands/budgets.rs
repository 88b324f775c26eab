//! Budget command implementations

use anyhow::{Context, Result};
use nova_core::{Budgets, Database, Tracker};

pub fn cmd_budget_list(tracker: &Tracker<Database>, json: bool) -> Result<()> {
    let budgets = tracker.budgets()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&budgets)?);
        return Ok(());
    }

    if budgets.is_empty() {
        println!("No budgets set. Add one with:");
        println!("  nova budget set Food 5000");
        return Ok(());
    }

    println!();
    println!("🎯 Monthly Budgets");
    println!("   ─────────────────────────────────────────────");
    for (category, limit) in budgets.iter() {
        println!(
            "   {:25} │ {:>12}",
            category,
            nova_core::format_money(limit, tracker.currency())
        );
    }

    Ok(())
}

pub fn cmd_budget_set(tracker: &mut Tracker<Database>, category: &str, limit: &str) -> Result<()> {
    let limit = Budgets::parse_limit(limit).context("Please enter a valid limit amount")?;
    tracker.set_budget(category, limit)?;

    println!(
        "✅ Budget for {} set to {} per month",
        category.trim(),
        nova_core::format_money(limit, tracker.currency())
    );
    Ok(())
}
