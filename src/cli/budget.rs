//! Budget CLI commands

use clap::Args;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::LedgerResult;
use crate::services::{parse_amount, BudgetService};
use crate::storage::Storage;

/// Arguments for `set-budget`
#[derive(Args, Debug)]
pub struct SetBudgetArgs {
    /// New monthly budget (must be greater than zero)
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,
}

/// Handle `set-budget`
pub fn handle_set_budget(
    storage: &Storage,
    settings: &mut Settings,
    args: SetBudgetArgs,
) -> LedgerResult<()> {
    let amount = parse_amount(&args.amount)?;
    let previous = BudgetService::new(settings).set_monthly_budget(amount)?;
    settings.save(storage.paths())?;

    storage.log_update(
        EntityType::Budget,
        "monthly",
        None,
        &previous,
        &*settings,
    )?;

    println!("Monthly budget set to {}", amount);
    Ok(())
}
