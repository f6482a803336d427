//! Expense categories
//!
//! The set of categories is fixed. Parsing is case-insensitive so that
//! "Food", "FOOD" and "food" all name the same category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category an expense is booked under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Other,
}

impl ExpenseCategory {
    /// All categories, in display order
    pub const ALL: [ExpenseCategory; 5] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Utilities,
        Self::Other,
    ];

    /// The lowercase name used in storage and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Other => "other",
        }
    }

    /// Case-insensitive match against a user-supplied name
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name.trim())
    }

    /// Comma-separated list of valid names, for help and error messages
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned for a name outside the fixed category set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' (expected one of: {})",
            self.0,
            ExpenseCategory::names()
        )
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.matches(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
