//! Ledger repository for JSON storage
//!
//! Loads and saves the ledger document (expenses.json). The document is a
//! JSON array of expense records in identifier order.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::LedgerError;
use crate::models::Ledger;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Repository for ledger persistence
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the ledger
    ///
    /// A missing or corrupt document yields an empty ledger. Identifiers
    /// that are not dense (a hand-edited file) are renumbered in memory.
    pub fn load(&self) -> Ledger {
        let mut ledger: Ledger = read_json_or_default(&self.path);
        if ledger.renumber() {
            warn!(
                path = %self.path.display(),
                "ledger identifiers were not contiguous; renumbered in stored order"
            );
        }
        ledger
    }

    /// Replace the stored ledger with `ledger` in a single write
    pub fn save(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        write_json_atomic(&self.path, ledger)?;
        info!(path = %self.path.display(), count = ledger.len(), "ledger saved");
        Ok(())
    }
}
