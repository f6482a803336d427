//! Configuration module for the expense ledger
//!
//! - Data directory resolution
//! - The config document (monthly budget)

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
