//! Display formatting for terminal output

pub mod expense;

pub use expense::{
    format_budget_warning, format_expense_list, format_expense_row, format_summary,
    selection_label,
};
