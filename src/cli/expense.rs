//! Expense CLI commands
//!
//! `add`, `list`, `filter` and `delete`.

use clap::Args;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::display::{format_budget_warning, format_expense_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::ExpenseId;
use crate::services::{parse_amount, parse_date, CreateExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g. "12.50")
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,

    /// What the money was spent on
    #[arg(short, long)]
    pub description: String,

    /// One of: food, transport, entertainment, utilities, other
    #[arg(short, long)]
    pub category: String,

    /// Date of the expense (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `filter`
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Category to show (case-insensitive)
    #[arg(short, long)]
    pub category: String,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// ID of the expense to delete
    #[arg(short, long, allow_negative_numbers = true)]
    pub id: i64,
}

/// Handle `add`
pub fn handle_add(storage: &Storage, settings: &Settings, args: AddArgs) -> LedgerResult<()> {
    let input = CreateExpenseInput {
        amount: parse_amount(&args.amount)?,
        description: args.description,
        category: args.category,
        date: args.date.as_deref().map(parse_date).transpose()?,
    };

    let mut ledger = storage.ledger.load();
    let added = ExpenseService::new(&mut ledger).add(input, settings)?;
    storage.ledger.save(&ledger)?;

    let expense = &added.expense;
    storage.log_create(
        EntityType::Expense,
        expense.id.to_string(),
        Some(expense.description.clone()),
        expense,
    )?;

    if let Some(warning) = &added.budget_warning {
        println!("{}", format_budget_warning(warning));
    }
    println!("Expense added successfully (ID: {})", expense.id);

    Ok(())
}

/// Handle `list` (no filter) and `filter`
pub fn handle_list(storage: &Storage, category: Option<&str>) -> LedgerResult<()> {
    let mut ledger = storage.ledger.load();
    let service = ExpenseService::new(&mut ledger);
    let expenses = service.list_filtered(category);

    print!("{}", format_expense_list(&expenses));
    Ok(())
}

/// Handle `delete`
pub fn handle_delete(storage: &Storage, args: DeleteArgs) -> LedgerResult<()> {
    // ids are always positive, so anything else cannot match a record
    let id = u32::try_from(args.id)
        .ok()
        .and_then(ExpenseId::new)
        .ok_or_else(|| LedgerError::expense_not_found(args.id))?;

    let mut ledger = storage.ledger.load();
    let removed = ExpenseService::new(&mut ledger).delete(id)?;
    storage.ledger.save(&ledger)?;

    storage.log_delete(
        EntityType::Expense,
        id.to_string(),
        Some(removed.description.clone()),
        &removed,
    )?;

    println!("Expense {} deleted successfully", id);
    let shifted = ledger.len().saturating_sub(id.get() as usize - 1);
    if shifted > 0 {
        println!("Renumbered {} later expense(s)", shifted);
    }

    Ok(())
}
