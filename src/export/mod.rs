//! Export module
//!
//! Flat delimited-text export of the ledger.

pub mod csv;

pub use csv::{export_expenses_csv, CSV_HEADER};
