//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Settings;
use crate::models::Expense;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Budget,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Budget => write!(f, "Budget"),
        }
    }
}

/// A single audit log entry
///
/// Expense identifiers shift when earlier records are deleted, so the
/// recorded `entity_id` is the identifier at the time of the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    pub entity_id: String,

    /// Human-readable description of the entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// State before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// State after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: None,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Create, entity_type, entity_id, entity_name);
        entry.after = serde_json::to_value(entity).ok();
        entry
    }

    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Update, entity_type, entity_id, entity_name);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        entry
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Delete, entity_type, entity_id, entity_name);
        entry.before = serde_json::to_value(entity).ok();
        entry
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(detail) = self.detail() {
            output.push_str(&format!(": {}", detail));
        }

        output
    }

    /// What the operation touched, read back from the stored snapshots
    ///
    /// Expenses show category, date and amount. Budget changes show the old
    /// and new limit. Snapshots that no longer deserialize show nothing.
    pub fn detail(&self) -> Option<String> {
        match self.entity_type {
            EntityType::Expense => {
                let snapshot = self.after.as_ref().or(self.before.as_ref())?;
                let expense: Expense = serde_json::from_value(snapshot.clone()).ok()?;
                Some(format!(
                    "{} {} {}",
                    expense.category,
                    expense.date.format("%Y-%m-%d"),
                    expense.amount
                ))
            }
            EntityType::Budget => {
                let budget = |snapshot: &Option<Value>| {
                    snapshot
                        .clone()
                        .and_then(|v| serde_json::from_value::<Settings>(v).ok())
                        .map(|s| match s.monthly_budget {
                            Some(amount) => amount.to_string(),
                            None => "(undefined)".to_string(),
                        })
                };
                let after = budget(&self.after)?;
                Some(match budget(&self.before) {
                    Some(before) => format!("{} -> {}", before, after),
                    None => after,
                })
            }
        }
    }
}
