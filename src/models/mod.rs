//! Core data models for the expense ledger
//!
//! This module contains the data structures of the expense domain: money
//! amounts, categories, identifiers, expense records and the ledger itself.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{ExpenseCategory, UnknownCategory};
pub use expense::{Expense, Ledger, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
