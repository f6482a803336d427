//! Import service
//!
//! Reads the flat format produced by the export back into a ledger. Every
//! row is validated like a manual add. The identifier column is ignored;
//! imported rows get fresh identifiers after the existing records.

use std::io::Read;

use serde::Deserialize;
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Ledger, NewExpense};

use super::expense::{parse_amount, parse_date, CreateExpenseInput, ExpenseService};

/// One row of the flat format, as text
#[derive(Debug, Deserialize)]
struct FlatRow {
    #[serde(rename = "id")]
    _id: String,
    category: String,
    date: String,
    amount: String,
    #[serde(default)]
    description: String,
}

impl FlatRow {
    fn validate(self) -> LedgerResult<NewExpense> {
        let input = CreateExpenseInput {
            amount: parse_amount(&self.amount)?,
            description: self.description,
            category: self.category,
            date: Some(parse_date(&self.date)?),
        };
        ExpenseService::validate(input)
    }
}

/// Parse and validate every row of a flat file
///
/// Fails on the first bad row, naming its line number.
pub fn read_expenses_csv<R: Read>(reader: R) -> LedgerResult<Vec<NewExpense>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut expenses = Vec::new();
    for (index, result) in reader.deserialize::<FlatRow>().enumerate() {
        // header is line 1
        let line = index + 2;
        let row = result.map_err(|e| LedgerError::Import(format!("line {}: {}", line, e)))?;
        let expense = row
            .validate()
            .map_err(|e| LedgerError::Import(format!("line {}: {}", line, e)))?;
        expenses.push(expense);
    }

    Ok(expenses)
}

/// Import a flat file into `ledger`, all or nothing
///
/// Returns the stored records with their new identifiers.
pub fn import_expenses_csv<R: Read>(
    ledger: &mut Ledger,
    reader: R,
) -> LedgerResult<Vec<Expense>> {
    let expenses = read_expenses_csv(reader)?;
    let imported = ExpenseService::new(ledger).add_all(expenses);
    info!(count = imported.len(), "expenses imported");
    Ok(imported)
}
