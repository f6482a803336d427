//! Expense service
//!
//! The ledger engine: add, list, filter and delete-with-renumber over an
//! in-memory [`Ledger`]. Nothing here performs I/O; callers load the
//! stores, run one operation, then persist whatever changed.

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Expense, ExpenseCategory, ExpenseId, Ledger, Money, NewExpense, UnknownCategory,
};

use super::budget::{check_budget, BudgetWarning};

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub description: String,
    /// Category name, matched case-insensitively
    pub category: String,
    /// Defaults to today's local date
    pub date: Option<NaiveDate>,
}

/// Result of a successful add
#[derive(Debug, Clone)]
pub struct AddedExpense {
    pub expense: Expense,
    pub budget_warning: Option<BudgetWarning>,
}

/// Reject amounts that are zero or negative
pub(crate) fn require_positive(amount: Money, what: &str) -> LedgerResult<Money> {
    if amount.is_positive() {
        Ok(amount)
    } else {
        Err(LedgerError::InvalidAmount(format!(
            "{} must be greater than zero, got {}",
            what,
            amount.to_plain_string()
        )))
    }
}

/// Parse a user-supplied amount
pub fn parse_amount(input: &str) -> LedgerResult<Money> {
    Money::parse(input).map_err(|e| LedgerError::InvalidAmount(e.to_string()))
}

/// Parse a user-supplied category name
pub fn parse_category(input: &str) -> LedgerResult<ExpenseCategory> {
    input
        .parse()
        .map_err(|e: UnknownCategory| LedgerError::InvalidCategory(e.to_string()))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|e| LedgerError::InvalidDate(format!("'{}': {} (use YYYY-MM-DD)", input, e)))
}

/// Service for expense management
pub struct ExpenseService<'a> {
    ledger: &'a mut Ledger,
}

impl<'a> ExpenseService<'a> {
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self { ledger }
    }

    /// Validate an input without touching the ledger
    pub fn validate(input: CreateExpenseInput) -> LedgerResult<NewExpense> {
        let amount = require_positive(input.amount, "amount")?;
        let category = parse_category(&input.category)?;
        let date = input.date.unwrap_or_else(|| Local::now().date_naive());

        Ok(NewExpense {
            category,
            date,
            amount,
            description: input.description,
        })
    }

    /// Add an expense
    ///
    /// The budget check runs against the records already in the ledger
    /// plus the new amount; a warning never blocks the add.
    pub fn add(
        &mut self,
        input: CreateExpenseInput,
        settings: &Settings,
    ) -> LedgerResult<AddedExpense> {
        let new_expense = Self::validate(input)?;
        let budget_warning = check_budget(
            settings,
            self.ledger.expenses(),
            new_expense.date,
            new_expense.amount,
        );

        let expense = self.ledger.append(new_expense).clone();
        info!(
            id = %expense.id,
            amount = %expense.amount,
            category = %expense.category,
            "expense added"
        );

        Ok(AddedExpense {
            expense,
            budget_warning,
        })
    }

    /// Append already-validated expenses in order
    ///
    /// Returns the records as stored, with their assigned identifiers.
    pub fn add_all(&mut self, expenses: Vec<NewExpense>) -> Vec<Expense> {
        expenses
            .into_iter()
            .map(|e| self.ledger.append(e).clone())
            .collect()
    }

    /// All expenses in stored order
    pub fn list(&self) -> Vec<&Expense> {
        self.ledger.iter().collect()
    }

    /// Expenses whose category matches `category`, ignoring case
    ///
    /// An unrecognized name simply matches nothing.
    pub fn filter(&self, category: &str) -> Vec<&Expense> {
        self.ledger
            .iter()
            .filter(|e| e.category.matches(category))
            .collect()
    }

    /// List with an optional category filter
    pub fn list_filtered(&self, category: Option<&str>) -> Vec<&Expense> {
        match category {
            Some(category) => self.filter(category),
            None => self.list(),
        }
    }

    /// Delete an expense and renumber the records after it
    ///
    /// Returns the removed record. A missing identifier is
    /// [`LedgerError::NotFound`] and the ledger is not modified.
    pub fn delete(&mut self, id: ExpenseId) -> LedgerResult<Expense> {
        let removed = self
            .ledger
            .remove(id)
            .ok_or_else(|| LedgerError::expense_not_found(id))?;
        info!(id = %id, remaining = self.ledger.len(), "expense deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::expense::test_support::{ledger_of, new_expense};

    fn input(
        cents: i64,
        description: &str,
        category: &str,
        date: Option<NaiveDate>,
    ) -> CreateExpenseInput {
        CreateExpenseInput {
            amount: Money::from_cents(cents),
            description: description.to_string(),
            category: category.to_string(),
            date,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn budget_of(cents: i64) -> Settings {
        Settings {
            monthly_budget: Some(Money::from_cents(cents)),
        }
    }

    #[test]
    fn test_add_to_empty_ledger_gets_id_one() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);

        let added = service
            .add(input(1250, "Coffee", "food", None), &budget_of(100_000))
            .unwrap();

        assert_eq!(added.expense.id, ExpenseId::FIRST);
        assert_eq!(added.expense.date, Local::now().date_naive());
        assert!(added.budget_warning.is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_add_scenario_warns_and_assigns_next_id() {
        let mut ledger = Ledger::new();
        ledger.append(new_expense(ExpenseCategory::Food, (2025, 7, 1), 1500, "a"));
        ledger.append(new_expense(ExpenseCategory::Food, (2025, 7, 5), 2500, "b"));
        let mut service = ExpenseService::new(&mut ledger);

        let added = service
            .add(input(1000, "Dinner", "food", date(2025, 7, 20)), &budget_of(4500))
            .unwrap();

        assert_eq!(added.expense.id.get(), 3);
        let warning = added.budget_warning.unwrap();
        assert_eq!(warning.month_total, Money::from_cents(5000));
        assert_eq!(warning.budget, Money::from_cents(4500));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_add_rejects_non_positive_amounts() {
        let mut ledger = ledger_of(2);
        let before = ledger.clone();
        let mut service = ExpenseService::new(&mut ledger);

        for cents in [0, -100] {
            let err = service
                .add(input(cents, "x", "food", None), &budget_of(0))
                .unwrap_err();
            assert!(matches!(err, LedgerError::InvalidAmount(_)));
        }
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_add_rejects_unknown_category() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);

        let err = service
            .add(input(100, "rent", "housing", None), &budget_of(0))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidCategory(_)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_accepts_category_in_any_case() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);

        let added = service
            .add(input(100, "bus", "TRANSPORT", None), &budget_of(100_000))
            .unwrap();
        assert_eq!(added.expense.category, ExpenseCategory::Transport);
    }

    #[test]
    fn test_n_adds_yield_ids_one_to_n() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);
        for i in 1..=10 {
            service
                .add(input(i * 10, "x", "other", None), &Settings::unset())
                .unwrap();
        }

        let ids: Vec<u32> = ledger.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_list_and_filter() {
        let mut ledger = Ledger::new();
        ledger.append(new_expense(ExpenseCategory::Food, (2025, 1, 1), 100, "a"));
        ledger.append(new_expense(ExpenseCategory::Transport, (2025, 1, 2), 200, "b"));
        ledger.append(new_expense(ExpenseCategory::Food, (2025, 1, 3), 300, "c"));
        let service = ExpenseService::new(&mut ledger);

        let all: Vec<u32> = service.list().iter().map(|e| e.id.get()).collect();
        assert_eq!(all, vec![1, 2, 3]);

        let food: Vec<u32> = service.filter("FoOd").iter().map(|e| e.id.get()).collect();
        assert_eq!(food, vec![1, 3]);

        assert!(service.filter("utilities").is_empty());
        assert!(service.filter("no-such-category").is_empty());
        assert_eq!(service.list_filtered(Some("transport")).len(), 1);
        assert_eq!(service.list_filtered(None).len(), 3);
    }

    #[test]
    fn test_delete_scenario_renumbers() {
        let mut ledger = ledger_of(3);
        let mut service = ExpenseService::new(&mut ledger);

        let removed = service.delete(ExpenseId::new(2).unwrap()).unwrap();
        assert_eq!(removed.description, "item 2");

        let remaining: Vec<(u32, String)> = ledger
            .iter()
            .map(|e| (e.id.get(), e.description.clone()))
            .collect();
        assert_eq!(
            remaining,
            vec![(1, "item 1".to_string()), (2, "item 3".to_string())]
        );
    }

    #[test]
    fn test_delete_missing_is_not_found_and_unchanged() {
        let mut ledger = ledger_of(3);
        let before = ledger.clone();
        let mut service = ExpenseService::new(&mut ledger);

        let err = service.delete(ExpenseId::new(9).unwrap()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_add_all_assigns_consecutive_ids() {
        let mut ledger = ledger_of(2);
        let mut service = ExpenseService::new(&mut ledger);

        let stored = service.add_all(vec![
            new_expense(ExpenseCategory::Other, (2025, 2, 1), 100, "x"),
            new_expense(ExpenseCategory::Other, (2025, 2, 2), 200, "y"),
        ]);
        let ids: Vec<u32> = stored.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_amount("12.30").unwrap(), Money::from_cents(1230));
        assert!(matches!(parse_amount("NaN"), Err(LedgerError::InvalidAmount(_))));
        assert_eq!(parse_category("Other").unwrap(), ExpenseCategory::Other);
        assert_eq!(parse_date("2025-07-04").unwrap(), date(2025, 7, 4).unwrap());
        assert!(matches!(parse_date("07/04/2025"), Err(LedgerError::InvalidDate(_))));
    }

    #[test]
    fn test_amounts_above_ceiling_are_rejected() {
        let err = parse_amount("92233720368547758").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
        assert!(parse_amount("1000000000.00").is_err());
    }

    #[test]
    fn test_repeated_maximum_adds_keep_exact_totals() {
        let mut ledger = Ledger::new();
        let mut service = ExpenseService::new(&mut ledger);
        let max_cents = Money::MAX.cents();

        service
            .add(input(max_cents, "yacht", "other", date(2025, 7, 1)), &budget_of(100))
            .unwrap();
        let added = service
            .add(input(max_cents, "yacht", "other", date(2025, 7, 2)), &budget_of(100))
            .unwrap();

        let warning = added.budget_warning.unwrap();
        assert_eq!(warning.month_total.cents(), 2 * max_cents);
        assert_eq!(ledger.total().cents(), 2 * max_cents);
    }
}
