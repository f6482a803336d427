//! Report CLI commands

use clap::Args;

use crate::display::format_summary;
use crate::error::LedgerResult;
use crate::reports::SummaryReport;
use crate::storage::Storage;

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Month to summarize (1-12); 0 summarizes every expense
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub month: i64,
}

/// Handle `summary`
pub fn handle_summary(storage: &Storage, args: SummaryArgs) -> LedgerResult<()> {
    let ledger = storage.ledger.load();
    let report = SummaryReport::generate(args.month, ledger.expenses())?;

    print!("{}", format_summary(&report));
    Ok(())
}
