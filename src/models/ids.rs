//! Expense identifiers
//!
//! Identifiers are positions in the ledger: dense, 1-based and contiguous.
//! Only [`Ledger`](super::Ledger) hands them out or rewrites them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an expense record (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// The identifier given to the first record of a ledger
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Wrap a raw value, rejecting zero
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Get the raw value
    pub const fn get(&self) -> u32 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub(crate) const fn prev(self) -> Self {
        Self(self.0 - 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Error returned when an identifier string is not a positive integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseExpenseIdError(String);

impl fmt::Display for ParseExpenseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a positive integer", self.0)
    }
}

impl std::error::Error for ParseExpenseIdError {}

impl FromStr for ExpenseId {
    type Err = ParseExpenseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseExpenseIdError(s.to_string()))
    }
}
