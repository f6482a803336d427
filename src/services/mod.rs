//! Service layer for the expense ledger
//!
//! Business logic over the in-memory ledger and settings: validation,
//! identifier management, and the budget check.

pub mod budget;
pub mod expense;
pub mod import;

pub use budget::{check_budget, BudgetService, BudgetWarning};
pub use expense::{
    parse_amount, parse_category, parse_date, AddedExpense, CreateExpenseInput, ExpenseService,
};
pub use import::{import_expenses_csv, read_expenses_csv};
