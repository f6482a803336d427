//! CSV Export functionality
//!
//! Writes the ledger as flat delimited text: a header row followed by one
//! row per expense in stored order.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;

/// Header row of the flat format
pub const CSV_HEADER: &str = "id,category,date,amount,description";

/// Export expenses to CSV, returning the number of rows written
///
/// Amounts carry exactly two decimal places. Descriptions are always
/// quoted, with embedded quotes doubled. An empty slice is
/// [`LedgerError::Empty`] and nothing is written.
pub fn export_expenses_csv<W: Write>(
    expenses: &[Expense],
    writer: &mut W,
) -> LedgerResult<usize> {
    if expenses.is_empty() {
        return Err(LedgerError::Empty("No expenses to export".into()));
    }

    writeln!(writer, "{}", CSV_HEADER).map_err(|e| LedgerError::Export(e.to_string()))?;

    for expense in expenses {
        writeln!(
            writer,
            "{},{},{},{},{}",
            expense.id,
            expense.category,
            expense.date.format("%Y-%m-%d"),
            expense.amount.to_plain_string(),
            quote_csv(&expense.description)
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(expenses.len())
}

/// Quote a field, doubling any embedded quote characters
fn quote_csv(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
