//! Expense display formatting
//!
//! Plain-text tables for the terminal: the expense register, the summary
//! report, and the budget warning.

use chrono::Month;

use crate::models::{Expense, Money};
use crate::reports::{MonthSelection, SummaryReport};
use crate::services::BudgetWarning;

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:>4}  {}  {:<13} {:>12}  {}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        expense.category,
        expense.amount,
        truncate(&expense.description, 40)
    )
}

/// Format a list of expenses with a header and a total line
pub fn format_expense_list(expenses: &[&Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:<13} {:>12}  {}\n",
        "ID", "Date", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&"-".repeat(72));
    output.push('\n');
    output.push_str(&format!(
        "{:>31} {:>12}  ({} expense{})\n",
        "Total:",
        total,
        expenses.len(),
        if expenses.len() == 1 { "" } else { "s" }
    ));

    output
}

/// Human name for a month selection ("all months", "July")
pub fn selection_label(selection: MonthSelection) -> String {
    match selection {
        MonthSelection::All => "all months".to_string(),
        MonthSelection::Month(m) => month_name(m),
    }
}

fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| format!("month {}", month))
}

/// Format the summary report
pub fn format_summary(report: &SummaryReport) -> String {
    let mut output = format!(
        "Total expenses for {}: {}\n",
        selection_label(report.selection),
        report.total
    );

    if report.by_category.is_empty() {
        return output;
    }

    output.push('\n');
    output.push_str(&format!("{:<13} {:>5} {:>12}\n", "Category", "Count", "Total"));
    output.push_str(&"-".repeat(32));
    output.push('\n');
    for line in &report.by_category {
        output.push_str(&format!(
            "{:<13} {:>5} {:>12}\n",
            line.category, line.count, line.total
        ));
    }

    output
}

/// Format a budget-exceeded warning
pub fn format_budget_warning(warning: &BudgetWarning) -> String {
    format!(
        "Warning: {} spending of {} exceeds your monthly budget of {} by {}",
        month_name(warning.month),
        warning.month_total,
        warning.budget,
        warning.overage()
    )
}

/// Truncate a string to at most `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
