//! Monthly aggregation and summary report
//!
//! [`monthly_total`] is the one definition of "this month's spending": the
//! records whose stored `date` falls in the given calendar month, of any
//! year. Both the budget check and the summary report go through it.

use chrono::Datelike;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseCategory, Money};

/// Which records a summary covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSelection {
    /// Every record regardless of date
    All,
    /// Records dated in this calendar month (1-12)
    Month(u32),
}

impl MonthSelection {
    /// Interpret a `--month` argument: 0 means all months, 1-12 a month
    pub fn from_arg(month: i64) -> LedgerResult<Self> {
        match month {
            0 => Ok(Self::All),
            1..=12 => Ok(Self::Month(month as u32)),
            _ => Err(LedgerError::InvalidMonth(month)),
        }
    }

    pub fn includes(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Month(m) => expense.date.month() == *m,
        }
    }
}

/// Sum of the amounts of records dated in calendar month `month` (1-12)
pub fn monthly_total<'a, I>(month: u32, expenses: I) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|e| e.date.month() == month)
        .map(|e| e.amount)
        .sum()
}

/// Total spending for a `--month` argument
///
/// 0 is the lifetime total; 1-12 delegates to [`monthly_total`]; anything
/// else is [`LedgerError::InvalidMonth`].
pub fn summary<'a, I>(month: i64, expenses: I) -> LedgerResult<Money>
where
    I: IntoIterator<Item = &'a Expense>,
{
    Ok(match MonthSelection::from_arg(month)? {
        MonthSelection::All => expenses.into_iter().map(|e| e.amount).sum(),
        MonthSelection::Month(m) => monthly_total(m, expenses),
    })
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpending {
    pub category: ExpenseCategory,
    pub count: usize,
    pub total: Money,
}

/// Summary report: the total plus a per-category breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    pub selection: MonthSelection,
    pub total: Money,
    pub count: usize,
    /// Only categories with at least one record, in category order
    pub by_category: Vec<CategorySpending>,
}

impl SummaryReport {
    pub fn generate(month: i64, expenses: &[Expense]) -> LedgerResult<Self> {
        let selection = MonthSelection::from_arg(month)?;
        let total = summary(month, expenses)?;

        let selected: Vec<&Expense> = expenses.iter().filter(|e| selection.includes(e)).collect();

        let by_category = ExpenseCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let in_category: Vec<&&Expense> =
                    selected.iter().filter(|e| e.category == category).collect();
                if in_category.is_empty() {
                    return None;
                }
                Some(CategorySpending {
                    category,
                    count: in_category.len(),
                    total: in_category.iter().map(|e| e.amount).sum(),
                })
            })
            .collect();

        Ok(Self {
            selection,
            total,
            count: selected.len(),
            by_category,
        })
    }
}
