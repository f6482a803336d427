//! CLI commands for export and import of the flat format

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Args;

use crate::audit::AuditEntry;
use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::export::export_expenses_csv;
use crate::services::import_expenses_csv;
use crate::storage::Storage;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file (defaults to expenses.csv next to the ledger)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `import`
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Flat file in the export format
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Handle `export`
///
/// The file is only created once there is something to write.
pub fn handle_export(storage: &Storage, args: ExportArgs) -> LedgerResult<()> {
    let ledger = storage.ledger.load();

    let mut buffer = Vec::new();
    let count = export_expenses_csv(ledger.expenses(), &mut buffer)?;

    let output = args
        .output
        .unwrap_or_else(|| storage.paths().export_file());
    std::fs::write(&output, buffer).map_err(|e| {
        LedgerError::Export(format!("Failed to write {}: {}", output.display(), e))
    })?;

    println!("Exported {} expenses to: {}", count, output.display());
    Ok(())
}

/// Handle `import`
pub fn handle_import(storage: &Storage, args: ImportArgs) -> LedgerResult<()> {
    let file = File::open(&args.file).map_err(|e| {
        LedgerError::Import(format!("Failed to open {}: {}", args.file.display(), e))
    })?;

    let mut ledger = storage.ledger.load();
    let imported = import_expenses_csv(&mut ledger, BufReader::new(file))?;
    storage.ledger.save(&ledger)?;

    let entries: Vec<AuditEntry> = imported
        .iter()
        .map(|e| {
            AuditEntry::create(
                EntityType::Expense,
                e.id.to_string(),
                Some(e.description.clone()),
                e,
            )
        })
        .collect();
    storage.audit.log_batch(&entries)?;

    match (imported.first(), imported.last()) {
        (Some(first), Some(last)) => println!(
            "Imported {} expenses (IDs {}-{})",
            imported.len(),
            first.id,
            last.id
        ),
        _ => println!("No expenses found in {}", args.file.display()),
    }
    Ok(())
}
