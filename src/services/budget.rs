//! Budget service
//!
//! Setting the monthly budget, and the budget-exceeded check run before an
//! expense is appended.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::LedgerResult;
use crate::models::{Expense, Money};
use crate::reports::monthly_total;

use super::expense::require_positive;

/// Non-blocking notice that a month's spending went over the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetWarning {
    /// Calendar month (1-12) of the triggering expense
    pub month: u32,
    /// Month total including the triggering expense
    pub month_total: Money,
    pub budget: Money,
}

impl BudgetWarning {
    /// How far the month total is over the budget
    pub fn overage(&self) -> Money {
        self.month_total - self.budget
    }
}

/// Check whether adding `amount` on `date` pushes that month over budget
///
/// The month total is computed over `existing` records only, then the new
/// amount is added. The comparison is strict: landing exactly on the budget
/// does not warn. An undefined budget never warns; a budget of zero warns on
/// any positive amount.
pub fn check_budget(
    settings: &Settings,
    existing: &[Expense],
    date: NaiveDate,
    amount: Money,
) -> Option<BudgetWarning> {
    let budget = settings.monthly_budget?;
    let month = date.month();
    let month_total = monthly_total(month, existing) + amount;

    debug!(
        month,
        month_total = %month_total,
        budget = %budget,
        "budget check"
    );

    (month_total > budget).then_some(BudgetWarning {
        month,
        month_total,
        budget,
    })
}

/// Service for budget configuration
pub struct BudgetService<'a> {
    settings: &'a mut Settings,
}

impl<'a> BudgetService<'a> {
    pub fn new(settings: &'a mut Settings) -> Self {
        Self { settings }
    }

    /// Replace the monthly budget
    ///
    /// Rejects amounts that are not strictly positive; the settings are left
    /// untouched on error. Returns the settings as they were before.
    pub fn set_monthly_budget(&mut self, amount: Money) -> LedgerResult<Settings> {
        let amount = require_positive(amount, "budget")?;
        let previous = self.settings.clone();
        self.settings.monthly_budget = Some(amount);
        info!(budget = %amount, "monthly budget set");
        Ok(previous)
    }
}
