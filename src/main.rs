use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use expense_ledger::cli::{
    handle_add, handle_config, handle_delete, handle_export, handle_history, handle_import,
    handle_list, handle_set_budget, handle_summary, AddArgs, DeleteArgs, ExportArgs, FilterArgs,
    HistoryArgs, ImportArgs, SetBudgetArgs, SummaryArgs,
};
use expense_ledger::config::{paths::DATA_DIR_ENV, LedgerPaths, Settings};
use expense_ledger::logging::init_tracing;
use expense_ledger::storage::Storage;
use expense_ledger::LedgerResult;

#[derive(Parser)]
#[command(
    name = "expense",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Expense Ledger records personal expenses in a local file, \
                  summarizes spending by month, warns when a month goes over \
                  budget, and exports everything to a flat file."
)]
struct Cli {
    /// Directory holding the ledger and config documents
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List every expense
    #[command(alias = "ls")]
    List,

    /// Total spending for a month, or for everything with month 0
    Summary(SummaryArgs),

    /// Delete an expense by ID
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// List expenses in one category
    Filter(FilterArgs),

    /// Set the monthly budget
    SetBudget(SetBudgetArgs),

    /// Export all expenses to a flat file
    Export(ExportArgs),

    /// Append expenses from a flat file in the export format
    Import(ImportArgs),

    /// Show recent changes from the audit trail
    History(HistoryArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();

    // help, version and usage errors all end here without touching any file
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return Ok(());
        }
    };

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let paths = LedgerPaths::resolve(cli.data_dir)?;

    match run(paths, command) {
        Ok(()) => Ok(()),
        Err(e) if e.is_user_facing() => {
            eprintln!("Error: {}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run(paths: LedgerPaths, command: Commands) -> LedgerResult<()> {
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths)?;

    match command {
        Commands::Add(args) => handle_add(&storage, &settings, args),
        Commands::List => handle_list(&storage, None),
        Commands::Summary(args) => handle_summary(&storage, args),
        Commands::Delete(args) => handle_delete(&storage, args),
        Commands::Filter(args) => handle_list(&storage, Some(args.category.as_str())),
        Commands::SetBudget(args) => handle_set_budget(&storage, &mut settings, args),
        Commands::Export(args) => handle_export(&storage, args),
        Commands::Import(args) => handle_import(&storage, args),
        Commands::History(args) => handle_history(&storage, args),
        Commands::Config => handle_config(&storage, &settings),
    }
}
