//! Reports module
//!
//! Aggregations over the ledger. Everything here is pure: it takes records
//! and returns numbers.

pub mod monthly;

pub use monthly::{monthly_total, summary, CategorySpending, MonthSelection, SummaryReport};
