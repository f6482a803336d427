//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Each handler
//! loads what it needs, runs one service call, saves once, and prints.

pub mod budget;
pub mod expense;
pub mod export;
pub mod report;
pub mod system;

pub use budget::{handle_set_budget, SetBudgetArgs};
pub use expense::{handle_add, handle_delete, handle_list, AddArgs, DeleteArgs, FilterArgs};
pub use export::{handle_export, handle_import, ExportArgs, ImportArgs};
pub use report::{handle_summary, SummaryArgs};
pub use system::{handle_config, handle_history, HistoryArgs};
