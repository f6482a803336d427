//! Storage layer for the expense ledger
//!
//! JSON document storage with atomic writes and recover-to-empty loads.
//! The engine never touches this module; the CLI loads, hands the
//! in-memory ledger to a service, then saves once.

pub mod file_io;
pub mod ledger;

pub use file_io::{json_file_valid, read_json, read_json_or_default, write_json_atomic};
pub use ledger::LedgerRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Storage coordinator: the ledger document plus the audit trail
pub struct Storage {
    paths: LedgerPaths,
    pub ledger: LedgerRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating the data directory if needed
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Record a created entity in the audit trail
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), LedgerError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an updated entity in the audit trail
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), LedgerError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ))
    }

    /// Record a deleted entity in the audit trail
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), LedgerError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
