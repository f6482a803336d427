//! Audit logger for the append-only audit log
//!
//! One JSON object per line. History only ever shows the tail, so reads
//! keep a bounded window of raw lines and parse just those.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use tracing::warn;

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

/// Appends audit entries to, and reads the tail of, a line-delimited JSON file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Append entries with a single write
    ///
    /// Every entry is serialized before the file is opened, so a bad entry
    /// leaves the log untouched.
    pub fn log_batch(&self, entries: &[AuditEntry]) -> LedgerResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut lines = String::new();
        for entry in entries {
            lines.push_str(&serde_json::to_string(entry)?);
            lines.push('\n');
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| self.io_error("open", e))?;
        file.write_all(lines.as_bytes())
            .map_err(|e| self.io_error("write", e))
    }

    /// The last `count` entries, oldest first
    ///
    /// A missing log is an empty history. Lines that no longer parse are
    /// skipped with a warning rather than failing the whole read.
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error("open", e)),
        };

        let mut tail: VecDeque<(usize, String)> = VecDeque::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.io_error("read", e))?;
            if line.trim().is_empty() {
                continue;
            }
            if tail.len() == count {
                tail.pop_front();
            }
            tail.push_back((index + 1, line));
        }

        let entries = tail
            .into_iter()
            .filter_map(|(line_num, line)| match serde_json::from_str(&line) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(line = line_num, error = %e, "skipping unreadable audit entry");
                    None
                }
            })
            .collect();

        Ok(entries)
    }

    fn io_error(&self, action: &str, err: io::Error) -> LedgerError {
        LedgerError::Io(format!(
            "Failed to {} audit log {}: {}",
            action,
            self.log_path.display(),
            err
        ))
    }
}
