//! Nova CLI - Natural-language finance tracker
//!
//! Usage:
//!   nova add Taxi 200                Record an expense
//!   nova add Salary 50000 income     Record income
//!   nova budget set Food 5000        Set a monthly budget
//!   nova dashboard                   Totals, insight and budgets

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let db_path = commands::resolve_db_path(cli.db.as_deref());
    let config = cli.config.as_deref();
    let open = || commands::open_tracker(&db_path, config);
    let json = cli.json;

    match cli.command {
        Commands::Init => commands::cmd_init(&db_path, config),
        Commands::Add { text } => commands::cmd_add(&mut open()?, &text.join(" "), json),
        Commands::List { limit } => commands::cmd_list(&open()?, limit, json),
        Commands::Edit {
            id,
            category,
            amount,
            kind,
            recurring,
        } => {
            let update = commands::build_update(category, amount, kind.as_deref(), recurring)?;
            commands::cmd_edit(&mut open()?, id, &update, json)
        }
        Commands::Delete { id } => commands::cmd_delete(&mut open()?, id),
        Commands::Budget { action } => {
            let mut tracker = open()?;
            match action {
                None | Some(BudgetAction::List) => commands::cmd_budget_list(&tracker, json),
                Some(BudgetAction::Set { category, limit }) => {
                    commands::cmd_budget_set(&mut tracker, &category, &limit)
                }
            }
        }
        Commands::Dashboard { no_recur } => {
            commands::cmd_dashboard(&mut open()?, !no_recur, json)
        }
        Commands::Chart { period } => commands::cmd_chart(&open()?, &period, json),
        Commands::Recur => commands::cmd_recur(&mut open()?, json),
        Commands::Export { format, output } => {
            commands::cmd_export(&open()?, &format, output.as_deref())
        }
    }
}
