//! Transaction command implementations

use anyhow::{bail, Context, Result};
use nova_core::{Database, Error, Tracker, TransactionKind, TransactionUpdate};

use super::truncate;

pub fn cmd_add(tracker: &mut Tracker<Database>, text: &str, json: bool) -> Result<()> {
    let tx = match tracker.submit(text) {
        Ok(tx) => tx,
        Err(Error::NoAmountFound) => {
            bail!("I couldn't find an amount in \"{}\". Try something like: nova add Taxi 200", text)
        }
        Err(e) => return Err(e).context("Failed to record transaction"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tx)?);
    } else {
        println!("✅ {}", tracker.confirmation(&tx));
    }

    Ok(())
}

pub fn cmd_list(tracker: &Tracker<Database>, limit: usize, json: bool) -> Result<()> {
    let transactions: Vec<_> = tracker.history()?.into_iter().take(limit).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&transactions)?);
        return Ok(());
    }

    if transactions.is_empty() {
        println!("No transactions yet. Add one with:");
        println!("  nova add Taxi 200");
        return Ok(());
    }

    println!();
    println!("📝 Recent Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions {
        let money = nova_core::format_money(tx.amount.abs(), tracker.currency());
        let amount_str = if tx.is_expense() {
            format!("\x1b[31m-{:>10}\x1b[0m", money) // Red for expenses
        } else {
            format!("\x1b[32m+{:>10}\x1b[0m", money) // Green for income
        };
        let recurring = if tx.recurring { " 🔄" } else { "" };

        println!(
            "   [{:>4}] {} │ {} │ {:15} │ {}{}",
            tx.id,
            tx.timestamp.format("%Y-%m-%d"),
            amount_str,
            truncate(&tx.category, 15),
            truncate(&tx.raw_text, 30),
            recurring
        );
    }

    Ok(())
}

/// Build an edit from CLI flags, rejecting an empty edit
pub fn build_update(
    category: Option<String>,
    amount: Option<f64>,
    kind: Option<&str>,
    recurring: Option<bool>,
) -> Result<TransactionUpdate> {
    let kind = kind
        .map(|k| k.parse::<TransactionKind>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;

    let update = TransactionUpdate {
        category,
        amount,
        kind,
        recurring,
    };
    if update == TransactionUpdate::default() {
        bail!("Nothing to change. Use --category, --amount, --type or --recurring.");
    }
    Ok(update)
}

pub fn cmd_edit(
    tracker: &mut Tracker<Database>,
    id: i64,
    update: &TransactionUpdate,
    json: bool,
) -> Result<()> {
    let tx = tracker
        .update(id, update)
        .with_context(|| format!("Failed to update transaction {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tx)?);
    } else {
        println!("✅ Updated transaction {}:", id);
        println!(
            "   {} │ {} │ {} │ {}",
            tx.kind,
            tx.category,
            nova_core::format_money(tx.amount.abs(), tracker.currency()),
            if tx.recurring { "recurring" } else { "one-off" }
        );
    }

    Ok(())
}

pub fn cmd_delete(tracker: &mut Tracker<Database>, id: i64) -> Result<()> {
    tracker
        .delete(id)
        .with_context(|| format!("Failed to delete transaction {}", id))?;
    println!("🗑️  Deleted transaction {}", id);
    Ok(())
}

pub fn cmd_recur(tracker: &mut Tracker<Database>, json: bool) -> Result<()> {
    let created = tracker.run_recurring(chrono::Utc::now())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&created)?);
        return Ok(());
    }

    if created.is_empty() {
        println!("Nothing to add. Recurring transactions are up to date for this month.");
    } else {
        println!("🔄 Recurring transactions added for this month:");
        for tx in &created {
            println!(
                "   [{}] {} │ {}",
                tx.id,
                nova_core::format_money(tx.amount.abs(), tracker.currency()),
                tx.raw_text
            );
        }
    }

    Ok(())
}
