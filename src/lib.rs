//! Expense Ledger - terminal-based personal expense tracker
//!
//! Records spending events, raises a warning when a month goes over the
//! configured budget, and produces summaries and flat-file exports.
//!
//! # Architecture
//!
//! - `models`: money, categories, expense records and the ledger
//! - `config`: data directory resolution and the budget config document
//! - `storage`: JSON document storage and the audit trail
//! - `services`: the ledger engine (add, list, filter, delete, budget)
//! - `reports`: monthly totals and the summary report
//! - `export`: flat delimited-text export
//! - `display`: terminal formatting
//! - `cli`: command definitions and handlers
//!
//! Every command loads the stores, runs one engine operation on the
//! in-memory ledger, and saves at most once.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{LedgerPaths, Settings};
//! use expense_ledger::services::{CreateExpenseInput, ExpenseService};
//! use expense_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::resolve(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//!
//! let mut ledger = storage.ledger.load();
//! let added = ExpenseService::new(&mut ledger).add(input, &settings)?;
//! storage.ledger.save(&ledger)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
