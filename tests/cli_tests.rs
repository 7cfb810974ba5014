use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn pocket(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pocket").unwrap();
    cmd.env("POCKET_LEDGER_DIR", dir).env_remove("POCKET_LEDGER_LOG");
    cmd
}

fn stored_ids(dir: &Path) -> Vec<u64> {
    let blob = std::fs::read_to_string(dir.join("data").join("expenses.json")).unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&blob).unwrap();
    entries.iter().map(|e| e["id"].as_u64().unwrap()).collect()
}

fn add(dir: &Path, amount: &str, category: &str, kind: &str, date: &str) {
    pocket(dir)
        .args(["add", amount, category, "--kind", kind, "--date", date])
        .assert()
        .success()
        .stdout(contains("Added entry:"));
}

#[test]
fn add_then_list_shows_entry_and_totals() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "500", "Salary", "income", "2024-05-01");
    add(temp.path(), "200", "Food", "expense", "2024-05-03");

    pocket(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Rs 500"))
        .stdout(contains("Food"))
        .stdout(contains("Balance: Rs 300"))
        .stdout(contains("Expenses by category:"));
}

#[test]
fn empty_ledger_lists_placeholders() {
    let temp = TempDir::new().unwrap();

    pocket(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No entries found."))
        .stdout(contains("No expense data"));
}

#[test]
fn missing_amount_is_refused() {
    let temp = TempDir::new().unwrap();

    pocket(temp.path())
        .args(["add", "", "Food", "--date", "2024-05-03"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));

    assert!(!temp.path().join("data").join("expenses.json").exists());
}

#[test]
fn large_and_precise_amounts_survive_later_runs() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "500", "Salary", "income", "2024-05-01");
    add(temp.path(), "9007199254740991", "House", "expense", "2024-05-02");
    add(temp.path(), "12.345", "Food", "expense", "2024-05-03");
    add(temp.path(), "1e2", "Bus", "expense", "2024-05-04");
    assert_eq!(stored_ids(temp.path()).len(), 4);

    pocket(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Rs 9007199254740991"))
        .stdout(contains("Rs 12.345"))
        .stdout(contains("Balance: -Rs 9007199254740603.345"));

    pocket(temp.path())
        .args(["add", "9007199254740993", "House", "--date", "2024-05-05"])
        .assert()
        .failure()
        .stderr(contains("out of range"));
    assert_eq!(stored_ids(temp.path()).len(), 4);
}

#[test]
fn filters_by_month_and_search() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "100", "Misc", "expense", "2024-05-01");
    add(temp.path(), "7", "Room 100", "expense", "2024-06-01");

    pocket(temp.path())
        .args(["list", "--search", "100"])
        .assert()
        .success()
        .stdout(contains("Misc"))
        .stdout(contains("Room 100").not());

    pocket(temp.path())
        .args(["list", "--month", "6", "--category", "All"])
        .assert()
        .success()
        .stdout(contains("Room 100"))
        .stdout(contains("2024-05-01").not());
}

#[test]
fn edit_and_delete_by_id() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "200", "Food", "expense", "2024-05-03");
    let id = stored_ids(temp.path())[0].to_string();

    pocket(temp.path())
        .args(["edit", &id, "--amount", "250"])
        .assert()
        .success()
        .stdout(contains("Rs 250"));

    pocket(temp.path())
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(contains("Use --force"));
    assert_eq!(stored_ids(temp.path()).len(), 1);

    pocket(temp.path())
        .args(["delete", &id, "--force"])
        .assert()
        .success()
        .stdout(contains("Deleted entry"));
    assert!(stored_ids(temp.path()).is_empty());

    pocket(temp.path())
        .args(["delete", &id, "--force"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn export_csv_and_refuse_empty() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out.csv");

    pocket(temp.path())
        .args(["export", "csv"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("No data to export"));
    assert!(!out.exists());

    add(temp.path(), "500", "Salary", "income", "2024-05-01");
    pocket(temp.path())
        .args(["export", "csv"])
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert_eq!(csv, "Amount (Rs),Category,Type,Date\n500,Salary,Income,2024-05-01\n");
}

#[test]
fn export_report_has_title() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("report.txt");
    add(temp.path(), "200", "Food", "expense", "2024-05-03");

    pocket(temp.path())
        .args(["export", "report"])
        .arg(&out)
        .assert()
        .success();

    let report = std::fs::read_to_string(&out).unwrap();
    assert!(report.starts_with("Personal Expense Report (Rs)\nGenerated for expense management\n"));
}

#[test]
fn history_records_changes() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "200", "Food", "expense", "2024-05-03");

    pocket(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(contains("CREATE"));
}

#[test]
fn malformed_blob_degrades_to_empty() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("expenses.json"), "{broken").unwrap();

    pocket(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No entries found."));
}

#[test]
fn init_writes_settings() {
    let temp = TempDir::new().unwrap();

    pocket(temp.path()).arg("init").assert().success();
    assert!(temp.path().join("config.json").exists());

    pocket(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Currency symbol: Rs"));
}
