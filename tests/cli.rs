use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "expense";

fn expense_command(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("EXPENSE_LEDGER_DATA_DIR", data_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn add(data_dir: &Path, amount: &str, description: &str, category: &str, date: &str) {
    expense_command(data_dir)
        .args([
            "add",
            "--amount",
            amount,
            "--description",
            description,
            "--category",
            category,
            "--date",
            date,
        ])
        .assert()
        .success();
}

#[test]
fn first_run_creates_default_config() {
    let dir = TempDir::new().unwrap();

    expense_command(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No expenses found."));

    let config = fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(config.contains("\"monthlyBudget\": 0"));
}

#[test]
fn add_warns_once_the_month_goes_over_budget() {
    let dir = TempDir::new().unwrap();

    expense_command(dir.path())
        .args(["set-budget", "--amount", "45"])
        .assert()
        .success()
        .stdout(contains("Monthly budget set to $45.00"));

    expense_command(dir.path())
        .args([
            "add", "--amount", "20", "--description", "Lunch", "--category", "food", "--date",
            "2025-07-03",
        ])
        .assert()
        .success()
        .stdout(contains("Warning").not())
        .stdout(contains("Expense added successfully (ID: 1)"));

    expense_command(dir.path())
        .args([
            "add", "--amount", "30", "--description", "Concert", "--category", "Entertainment",
            "--date", "2025-07-19",
        ])
        .assert()
        .success()
        .stdout(contains(
            "Warning: July spending of $50.00 exceeds your monthly budget of $45.00 by $5.00",
        ))
        .stdout(contains("Expense added successfully (ID: 2)"));
}

#[test]
fn add_rejects_bad_input_without_saving() {
    let dir = TempDir::new().unwrap();

    expense_command(dir.path())
        .args(["add", "--amount", "0", "--description", "Nothing", "--category", "food"])
        .assert()
        .success()
        .stderr(contains("Error:"));

    expense_command(dir.path())
        .args(["add", "--amount", "5", "--description", "Hat", "--category", "clothes"])
        .assert()
        .success()
        .stderr(contains("clothes"));

    assert!(!dir.path().join("expenses.json").exists());
}

#[test]
fn delete_renumbers_later_expenses() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "1", "first", "food", "2025-07-01");
    add(dir.path(), "2", "second", "food", "2025-07-02");
    add(dir.path(), "3", "third", "food", "2025-07-03");

    expense_command(dir.path())
        .args(["delete", "--id", "2"])
        .assert()
        .success()
        .stdout(contains("Expense 2 deleted successfully"));

    let raw = fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[1]["id"], 2);
    assert_eq!(records[1]["description"], "third");
}

#[test]
fn delete_unknown_id_reports_not_found() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "1", "only", "food", "2025-07-01");

    for id in ["9", "0", "-1"] {
        expense_command(dir.path())
            .args(["delete", "--id", id])
            .assert()
            .success()
            .stderr(contains("not found"));
    }

    let raw = fs::read_to_string(dir.path().join("expenses.json")).unwrap();
    assert!(raw.contains("only"));
}

#[test]
fn set_budget_rejects_non_positive_amounts() {
    let dir = TempDir::new().unwrap();

    for amount in ["-5", "0"] {
        expense_command(dir.path())
            .args(["set-budget", "--amount", amount])
            .assert()
            .success()
            .stderr(contains("Error:"));
    }

    let config = fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(config.contains("\"monthlyBudget\": 0"));
}

#[test]
fn summary_totals_by_month_and_overall() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "10.50", "Dinner", "food", "2025-07-04");
    add(dir.path(), "3", "Bus", "transport", "2025-07-05");
    add(dir.path(), "40", "Power", "utilities", "2025-08-01");

    expense_command(dir.path())
        .args(["summary", "--month", "7"])
        .assert()
        .success()
        .stdout(contains("Total expenses for July: $13.50"));

    expense_command(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Total expenses for all months: $53.50"));

    expense_command(dir.path())
        .args(["summary", "--month", "13"])
        .assert()
        .success()
        .stderr(contains("Error:"));
}

#[test]
fn filter_matches_category_case_insensitively() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "10.50", "Dinner", "food", "2025-07-04");
    add(dir.path(), "3", "Bus", "transport", "2025-07-05");

    expense_command(dir.path())
        .args(["filter", "--category", "FOOD"])
        .assert()
        .success()
        .stdout(contains("Dinner"))
        .stdout(contains("Bus").not())
        .stdout(contains("(1 expense)"));
}

#[test]
fn export_writes_flat_file_next_to_ledger() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "10.5", "Dinner, \"fancy\"", "food", "2025-07-04");

    expense_command(dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(contains("Exported 1 expenses"));

    let csv = fs::read_to_string(dir.path().join("expenses.csv")).unwrap();
    assert_eq!(
        csv,
        "id,category,date,amount,description\n\
         1,food,2025-07-04,10.50,\"Dinner, \"\"fancy\"\"\"\n"
    );
}

#[test]
fn export_with_no_expenses_creates_nothing() {
    let dir = TempDir::new().unwrap();

    expense_command(dir.path())
        .arg("export")
        .assert()
        .success()
        .stderr(contains("No expenses to export"));

    assert!(!dir.path().join("expenses.csv").exists());
}

#[test]
fn import_appends_exported_records() {
    let source = TempDir::new().unwrap();
    add(source.path(), "10.50", "Dinner", "food", "2025-07-04");
    add(source.path(), "3", "Bus", "transport", "2025-07-05");
    expense_command(source.path()).arg("export").assert().success();

    let target = TempDir::new().unwrap();
    add(target.path(), "7", "Movie", "entertainment", "2025-06-30");

    expense_command(target.path())
        .args(["import", "--file"])
        .arg(source.path().join("expenses.csv"))
        .assert()
        .success()
        .stdout(contains("Imported 2 expenses (IDs 2-3)"));

    expense_command(target.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Movie"))
        .stdout(contains("Dinner"))
        .stdout(contains("(3 expenses)"));
}

#[test]
fn history_shows_recent_changes() {
    let dir = TempDir::new().unwrap();

    expense_command(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(contains("No history yet."));

    add(dir.path(), "1", "Coffee", "food", "2025-07-01");
    expense_command(dir.path())
        .args(["delete", "--id", "1"])
        .assert()
        .success();

    expense_command(dir.path())
        .args(["history", "--limit", "5"])
        .assert()
        .success()
        .stdout(contains("CREATE"))
        .stdout(contains("DELETE"));
}

#[test]
fn config_shows_paths_and_budget() {
    let dir = TempDir::new().unwrap();

    expense_command(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Monthly budget: $0.00"))
        .stdout(contains("config.json"));
}

#[test]
fn unknown_command_prints_usage() {
    let dir = TempDir::new().unwrap();

    expense_command(dir.path())
        .arg("frobnicate")
        .assert()
        .success()
        .stderr(contains("Usage"));

    expense_command(dir.path())
        .args(["add", "--amount", "5"])
        .assert()
        .success()
        .stderr(contains("--description"));

    assert!(!dir.path().join("expenses.json").exists());
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn corrupt_config_leaves_budget_undefined() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    expense_command(dir.path())
        .args([
            "add", "--amount", "500", "--description", "Laptop", "--category", "other", "--date",
            "2025-07-01",
        ])
        .assert()
        .success()
        .stdout(contains("Warning").not())
        .stdout(contains("Expense added successfully (ID: 1)"));

    expense_command(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Monthly budget: (undefined)"));

    assert_eq!(
        fs::read_to_string(dir.path().join("config.json")).unwrap(),
        "{ not json"
    );
}

#[test]
fn corrupt_ledger_reads_empty_until_next_add() {
    let dir = TempDir::new().unwrap();
    let ledger = dir.path().join("expenses.json");
    fs::write(&ledger, "[{\"id\": ").unwrap();

    expense_command(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No expenses found."));
    assert_eq!(fs::read_to_string(&ledger).unwrap(), "[{\"id\": ");

    add(dir.path(), "4.20", "Tea", "food", "2025-07-02");

    let raw = fs::read_to_string(&ledger).unwrap();
    let records: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], 1);
    assert_eq!(records[0]["amount"], 420);
}
