//! JSON document I/O
//!
//! Strict and recovering readers, plus an atomic writer, for the ledger and
//! config documents.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::error::LedgerError;

/// Read JSON from a file, returning a default value if file doesn't exist
///
/// A file that exists but cannot be opened or parsed is an error.
pub fn read_json<T, P>(path: P) -> Result<T, LedgerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| LedgerError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read JSON from a file, falling back to the default on any failure
///
/// Absent files fall back silently. Unreadable or unparsable files are
/// logged and left untouched on disk.
pub fn read_json_or_default<T, P>(path: P) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    read_json(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "falling back to empty document");
        T::default()
    })
}

/// Replace `path` with the pretty-printed JSON of `data`
///
/// The document is serialized in memory, written to a sibling `.tmp` file,
/// synced, then renamed over the target. Readers see either the old
/// document or the new one.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), LedgerError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let storage_error = |what: &str, e: std::io::Error| {
        LedgerError::Storage(format!("{} {}: {}", what, path.display(), e))
    };

    let mut bytes = serde_json::to_vec_pretty(data).map_err(|e| {
        LedgerError::Storage(format!("Failed to serialize {}: {}", path.display(), e))
    })?;
    bytes.push(b'\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| storage_error("Failed to create directory for", e))?;
    }

    let temp_path = temp_path_for(path);
    let written = File::create(&temp_path).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.sync_all()
    });
    if let Err(e) = written.and_then(|()| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("Failed to write", e));
    }

    Ok(())
}

/// `expenses.json` -> `expenses.json.tmp`, in the same directory
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Whether `path` holds a parseable JSON document
pub fn json_file_valid<P: AsRef<Path>>(path: P) -> bool {
    fs::read(path)
        .map(|bytes| serde_json::from_slice::<serde_json::Value>(&bytes).is_ok())
        .unwrap_or(false)
}
