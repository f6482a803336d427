//! `history` and `config`

use clap::Args;

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::storage::{json_file_valid, Storage};

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,
}

/// Handle `history`
pub fn handle_history(storage: &Storage, args: HistoryArgs) -> LedgerResult<()> {
    let entries = storage.audit.read_recent(args.limit)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

/// Handle `config`
pub fn handle_config(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let paths = storage.paths();

    println!("Expense Ledger Configuration");
    println!("============================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Ledger file:    {}", status_line(storage.ledger.path()));
    println!("Config file:    {}", status_line(&paths.settings_file()));
    println!("Audit log:      {}", paths.audit_log().display());
    println!();

    match settings.monthly_budget {
        Some(budget) => println!("Monthly budget: {}", budget),
        None => println!("Monthly budget: (undefined)"),
    }
    println!("Expenses:       {}", storage.ledger.load().len());

    Ok(())
}

fn status_line(path: &std::path::Path) -> String {
    let status = if !path.exists() {
        "missing"
    } else if json_file_valid(path) {
        "ok"
    } else {
        "unreadable"
    };
    format!("{} ({})", path.display(), status)
}
