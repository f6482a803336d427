//! Expense record and the ledger that owns identifier assignment
//!
//! The ledger keeps its records in insertion order and maintains the
//! dense-identifier invariant: at rest the identifiers are exactly
//! `1..=len`, in stored order. Appends take the next identifier and
//! removals shift every later identifier down by one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded spending event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Position-derived identifier, unique within the ledger
    pub id: ExpenseId,

    pub category: ExpenseCategory,

    /// Day the money was spent (no time component)
    pub date: NaiveDate,

    /// Always positive
    pub amount: Money,

    #[serde(default)]
    pub description: String,
}

/// An expense that has been validated but not yet given an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub amount: Money,
    pub description: String,
}

impl NewExpense {
    fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            category: self.category,
            date: self.date,
            amount: self.amount,
            description: self.description,
        }
    }
}

/// The ordered collection of all expense records
///
/// Serialized as a plain JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in stored order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Identifier the next appended record will receive
    ///
    /// Derived from the last record, which equals `len + 1` while the
    /// dense invariant holds.
    pub fn next_id(&self) -> ExpenseId {
        self.expenses
            .last()
            .map(|e| e.id.next())
            .unwrap_or(ExpenseId::FIRST)
    }

    /// Append a record, assigning it the next identifier
    pub fn append(&mut self, expense: NewExpense) -> &Expense {
        let id = self.next_id();
        self.expenses.push(expense.into_expense(id));
        &self.expenses[self.expenses.len() - 1]
    }

    /// Remove the record with `id` and renumber every record after it
    ///
    /// Returns `None` and leaves the ledger untouched when no record has
    /// that identifier.
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        let removed = self.expenses.remove(index);
        for later in &mut self.expenses[index..] {
            later.id = later.id.prev();
        }
        Some(removed)
    }

    /// Sum of every amount in the ledger
    pub fn total(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Whether identifiers are exactly `1..=len` in stored order
    pub fn is_dense(&self) -> bool {
        self.expenses
            .iter()
            .enumerate()
            .all(|(i, e)| e.id.get() as usize == i + 1)
    }

    /// Rewrite identifiers to `1..=len` in stored order
    ///
    /// Returns true if any identifier changed. Used to repair documents
    /// that were edited by hand.
    pub fn renumber(&mut self) -> bool {
        let mut changed = false;
        let mut id = ExpenseId::FIRST;
        for expense in &mut self.expenses {
            if expense.id != id {
                expense.id = id;
                changed = true;
            }
            id = id.next();
        }
        changed
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn new_expense(
        category: ExpenseCategory,
        date: (i32, u32, u32),
        cents: i64,
        desc: &str,
    ) -> NewExpense {
        NewExpense {
            category,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            amount: Money::from_cents(cents),
            description: desc.to_string(),
        }
    }

    /// Ledger with `n` food expenses of $1.00 .. $n.00 on 2025-07-01
    pub fn ledger_of(n: u32) -> Ledger {
        let mut ledger = Ledger::new();
        for i in 1..=n {
            ledger.append(new_expense(
                ExpenseCategory::Food,
                (2025, 7, 1),
                i as i64 * 100,
                &format!("item {}", i),
            ));
        }
        ledger
    }
}
