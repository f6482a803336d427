//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Amount was not a positive, well-formed currency value
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Category is not one of the recognized categories
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Month outside the accepted range
    #[error("Invalid month: {0} (expected 1-12, or 0 for all months)")]
    InvalidMonth(i64),

    /// Date could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Nothing to operate on (e.g. exporting an empty ledger)
    #[error("{0}")]
    Empty(String),

    /// A persisted document could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),
}

impl LedgerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InvalidCategory(_)
                | Self::InvalidMonth(_)
                | Self::InvalidDate(_)
        )
    }

    /// Check if this is an "empty" outcome
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Outcomes the CLI reports to the user before exiting cleanly
    pub fn is_user_facing(&self) -> bool {
        self.is_validation()
            || self.is_not_found()
            || self.is_empty()
            || matches!(self, Self::Import(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for expense ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
