//! Dashboard and chart command implementations

use anyhow::{Context, Result};
use chrono::Utc;
use nova_core::insights::Severity;
use nova_core::{BudgetTier, ChartPeriod, Database, Tracker};

use super::truncate;

/// Width of the budget and chart bars
const BAR_WIDTH: usize = 20;

fn bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn tier_color(tier: BudgetTier) -> &'static str {
    match tier {
        BudgetTier::Ok => "\x1b[32m",   // Green
        BudgetTier::Warn => "\x1b[33m", // Yellow
        BudgetTier::Over => "\x1b[31m", // Red
    }
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "💡",
        Severity::Attention => "📈",
        Severity::Warning => "⚠️ ",
    }
}

/// Show the dashboard, running the monthly recurring sweep first unless disabled
pub fn cmd_dashboard(tracker: &mut Tracker<Database>, sweep: bool, json: bool) -> Result<()> {
    let now = Utc::now();

    if sweep {
        let created = tracker
            .run_recurring(now)
            .context("Failed to apply recurring transactions")?;
        if !created.is_empty() && !json {
            println!("🔄 Added {} recurring transaction(s) for this month", created.len());
        }
    }

    let dashboard = tracker.dashboard(now)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    let currency = tracker.currency();
    let money = |amount: f64| nova_core::format_money(amount, currency);
    let summary = &dashboard.summary;

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│            💰 Nova Dashboard            │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Income:          \x1b[32m{}\x1b[0m", money(summary.income));
    println!("  Expenses:        \x1b[31m{}\x1b[0m", money(summary.expense));
    println!(
        "  Balance:         {} {}",
        money(summary.balance),
        if summary.is_net_positive() { "▲" } else { "▼" }
    );
    println!();
    println!(
        "  {} {}",
        severity_icon(dashboard.insight.kind.severity()),
        dashboard.insight.message
    );

    if !dashboard.budgets.is_empty() {
        println!();
        println!("  🎯 Budgets ({})", now.format("%B %Y"));
        for status in &dashboard.budgets {
            println!(
                "     {:15} {}{}\x1b[0m {:>5.1}%  {} / {}",
                truncate(&status.category, 15),
                tier_color(status.tier),
                bar(status.percent),
                status.percent,
                money(status.spent),
                money(status.limit)
            );
        }
    }

    println!();
    Ok(())
}

pub fn cmd_chart(tracker: &Tracker<Database>, period: &str, json: bool) -> Result<()> {
    let period: ChartPeriod = period.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let charts = tracker.charts(period, Utc::now())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&charts)?);
        return Ok(());
    }

    let currency = tracker.currency();
    let money = |amount: f64| nova_core::format_money(amount, currency);

    println!();
    println!("📊 Spending by Category (this {})", period);
    println!("   ─────────────────────────────────────────────────────────────");

    if charts.categories.is_empty() {
        println!("   No spending found in this period.");
    } else {
        let total: f64 = charts.categories.iter().map(|c| c.amount).sum();
        for cat in &charts.categories {
            let share = if total > 0.0 {
                cat.amount / total * 100.0
            } else {
                0.0
            };
            println!(
                "   {:15} │ {} │ {:>5.1}% │ {:>12}",
                truncate(&cat.category, 15),
                bar(share),
                share,
                money(cat.amount)
            );
        }
    }

    if !charts.series.is_empty() {
        println!();
        println!("📈 Income vs Expense");
        println!("   {:6} │ {:>12} │ {:>12}", "", "Income", "Expense");
        println!("   ───────┼──────────────┼──────────────");
        for point in &charts.series {
            println!(
                "   {:6} │ {:>12} │ {:>12}",
                point.label,
                money(point.income),
                money(point.expense)
            );
        }
    }

    Ok(())
}
