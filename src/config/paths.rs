//! Path management for the expense ledger
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag, or the
//!    `EXPENSE_LEDGER_DATA_DIR` environment variable which clap maps onto it)
//! 2. The platform config directory (`~/.config/expense-ledger` on Linux,
//!    `~/Library/Application Support/expense-ledger` on macOS,
//!    `%APPDATA%\expense-ledger` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::LedgerError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_LEDGER_DATA_DIR";

/// Manages all paths used by the expense ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for all documents
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths, preferring an explicit directory when one is given
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit directory is given and the platform
    /// config directory cannot be determined.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, LedgerError> {
        let base_dir = match explicit {
            Some(dir) => dir,
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The ledger document
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("expenses.json")
    }

    /// The config document holding the monthly budget
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default export target, a sibling of the ledger document
    pub fn export_file(&self) -> PathBuf {
        self.ledger_file().with_extension("csv")
    }

    /// Append-only audit trail
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create data directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }
}

fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    ProjectDirs::from("", "", "expense-ledger")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            LedgerError::Config(format!(
                "Could not determine a home directory; set {}",
                DATA_DIR_ENV
            ))
        })
}
