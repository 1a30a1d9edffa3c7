//! End-to-end tests for the budgetmgr binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budgetmgr(data_dir: &TempDir, backend: &str) -> Command {
    let mut cmd = Command::cargo_bin("budgetmgr").unwrap();
    cmd.env("BUDGETMGR_DATA_DIR", data_dir.path())
        .env("BUDGETMGR_BACKEND", backend)
        .env_remove("BUDGETMGR_LOG");
    cmd
}

fn add(data_dir: &TempDir, backend: &str, ts: &str, category: &str, amount: &str) {
    budgetmgr(data_dir, backend)
        .args(["add", "-t", ts, "-c", category, "-a", amount])
        .assert()
        .success();
}

fn seed_may(data_dir: &TempDir, backend: &str) {
    add(data_dir, backend, "2025-05-01T00:00:00", "salary", "5000.00");
    add(data_dir, backend, "2025-05-10T12:00:00", "groceries", "-400.25");
    add(data_dir, backend, "2025-05-20T09:00:00", "rent", "-800.25");
}

#[test]
fn add_then_list_and_balance() {
    let dir = TempDir::new().unwrap();

    budgetmgr(&dir, "sqlite")
        .args(["add", "-t", "2025-05-01T00:00:00", "-c", "salary", "-a", "5000.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added: [#0] | 2025-05-01T00:00:00 | salary: 5000.00",
        ));
    add(&dir, "sqlite", "2025-05-10T12:00:00", "groceries", "-400.25");

    budgetmgr(&dir, "sqlite")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("salary").and(predicate::str::contains("groceries")));

    budgetmgr(&dir, "sqlite")
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance:  $4599.75"))
        .stdout(predicate::str::contains("Income:   $5000.00"))
        .stdout(predicate::str::contains("Expenses: $400.25"));

    assert!(dir.path().join("data").join("ledger.db").exists());
}

#[test]
fn json_backend_persists_and_retires_ids() {
    let dir = TempDir::new().unwrap();
    add(&dir, "json", "2025-05-01T00:00:00", "salary", "10");
    add(&dir, "json", "2025-05-02T00:00:00", "coffee", "-3.50");

    budgetmgr(&dir, "json")
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: [#1]"));

    budgetmgr(&dir, "json")
        .args(["add", "-t", "2025-05-03T00:00:00", "-c", "coffee", "-a", "-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[#2]"));

    assert!(dir.path().join("data").join("transactions.json").exists());
    assert!(!dir.path().join("data").join("ledger.db").exists());
}

#[test]
fn monthly_summary_exports_csv() {
    let dir = TempDir::new().unwrap();
    seed_may(&dir, "sqlite");
    let out = dir.path().join("may.csv");

    budgetmgr(&dir, "sqlite")
        .args(["summary", "--month", "2025-05", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary for 2025-05"))
        .stdout(predicate::str::contains("$3799.50"));

    let csv = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        csv,
        "category,amount\nsalary,5000.00\ngroceries,-400.25\nrent,-800.25\n\n\
         total_income,5000.00\ntotal_expenses,1200.50\nnet_balance,3799.50\n"
    );
}

#[test]
fn summary_export_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    seed_may(&dir, "sqlite");
    let out = dir.path().join("missing").join("may.csv");

    budgetmgr(&dir, "sqlite")
        .args(["summary", "--month", "2025-05", "-o"])
        .arg(&out)
        .assert()
        .code(6)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn summary_json_export() {
    let dir = TempDir::new().unwrap();
    seed_may(&dir, "json");
    let out = dir.path().join("may.json");

    budgetmgr(&dir, "json")
        .args(["summary", "--period", "2025-05-01..2025-05-31", "-f", "json", "-o"])
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("\"net_balance\": \"3799.50\""));
}

#[test]
fn budget_warning_after_add() {
    let dir = TempDir::new().unwrap();

    budgetmgr(&dir, "sqlite")
        .args(["budget", "set", "groceries", "600.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set budget for 'groceries': $600.00"));

    add(&dir, "sqlite", "2025-05-02T10:00:00", "groceries", "-300.00");

    budgetmgr(&dir, "sqlite")
        .args(["add", "-t", "2025-05-15T10:00:00", "-c", "groceries", "-a", "-400.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: budget for 'groceries' exceeded this month ($700.00 spent of $600.00)",
        ));

    budgetmgr(&dir, "sqlite")
        .args(["budget", "status", "--at", "2025-05-31T00:00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget status for 2025-05"))
        .stdout(predicate::str::contains("OVER"));
}

#[test]
fn chart_with_no_data() {
    let dir = TempDir::new().unwrap();
    seed_may(&dir, "sqlite");

    budgetmgr(&dir, "sqlite")
        .args(["chart", "--month", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data in the specified time range."));

    budgetmgr(&dir, "sqlite")
        .args(["chart", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:"))
        .stdout(predicate::str::contains("Expenses:"));
}

#[test]
fn error_kinds_map_to_exit_codes() {
    let dir = TempDir::new().unwrap();

    budgetmgr(&dir, "sqlite")
        .args(["add", "-t", "2025-5-1T00:00:00", "-c", "x", "-a", "1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Format error"));

    budgetmgr(&dir, "sqlite")
        .args(["add", "-t", "2025-02-30T00:00:00", "-c", "x", "-a", "1"])
        .assert()
        .code(4);

    budgetmgr(&dir, "sqlite")
        .args(["summary", "--from", "2025-06-01", "--to", "2025-05-01"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Validation error"));

    budgetmgr(&dir, "sqlite")
        .args(["summary", "--month", "2025-13"])
        .assert()
        .code(3);

    budgetmgr(&dir, "sqlite")
        .args(["remove", "42"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Transaction not found: 42"));

    budgetmgr(&dir, "sqlite")
        .args(["budget", "remove", "rent"])
        .assert()
        .code(5);

    budgetmgr(&dir, "sqlite")
        .args(["budget", "set", "rent", "0"])
        .assert()
        .code(3);
}

#[test]
fn overflowing_totals_fail_cleanly() {
    let dir = TempDir::new().unwrap();
    add(&dir, "sqlite", "2025-05-01T00:00:00", "windfall", "90000000000000000");
    add(&dir, "sqlite", "2025-05-02T00:00:00", "windfall", "90000000000000000");

    budgetmgr(&dir, "sqlite")
        .arg("balance")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("amount total out of range"));

    budgetmgr(&dir, "sqlite")
        .args(["summary", "--month", "2025-05"])
        .assert()
        .code(3);
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    budgetmgr(&dir, "json")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Storage backend: json"));
}

#[test]
fn config_saves_settings() {
    let dir = TempDir::new().unwrap();

    budgetmgr(&dir, "sqlite")
        .args(["config", "--currency", "€", "--backend", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved settings to"))
        .stdout(predicate::str::contains("Currency symbol: €"));

    let stored = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(stored.contains("\"storage_backend\": \"json\""));

    add(&dir, "sqlite", "2025-05-01T00:00:00", "salary", "10");
    budgetmgr(&dir, "sqlite")
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:   €10.00"));

    budgetmgr(&dir, "sqlite")
        .args(["config", "--backend", "csv"])
        .assert()
        .code(8);
}
