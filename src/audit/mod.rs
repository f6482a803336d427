//! Audit trail for the expense ledger
//!
//! Every mutation (expense created or deleted, budget changed) is appended
//! to `audit.log` as one JSON object per line.
//!
//! ```rust,ignore
//! use expense_ledger::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Expense, "3", None, &expense))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
