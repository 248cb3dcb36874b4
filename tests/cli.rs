//! End-to-end tests driving the compiled binary against a temp data dir

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn kakeibo(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kakeibo").unwrap();
    cmd.env("KAKEIBO_DATA_DIR", data_dir.path());
    cmd
}

fn seed(data_dir: &TempDir) {
    kakeibo(data_dir)
        .args(["add", "120", "Coffee", "--date", "2024-03-10"])
        .assert()
        .success();
    kakeibo(data_dir)
        .args(["add", "30", "Groceries", "--date", "2024-03-10", "--type", "card"])
        .assert()
        .success();
    kakeibo(data_dir)
        .args(["add", "100", "Coffee", "--date", "2024-03-11"])
        .assert()
        .success();
}

#[test]
fn test_add_and_list() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    kakeibo(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("NT$250"));
}

#[test]
fn test_daily_stats() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    kakeibo(&data_dir)
        .args(["stats", "2024-03-10", "--view", "daily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: NT$150"))
        .stdout(predicate::str::contains("Cash:  NT$120"))
        .stdout(predicate::str::contains("Card:  NT$30"));
}

#[test]
fn test_monthly_stats_merge_descriptions() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    kakeibo(&data_dir)
        .args(["stats", "2024-03-15", "--view", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: NT$250"))
        .stdout(predicate::str::contains("NT$220")); // both Coffees merged
}

#[test]
fn test_stats_json_output() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    kakeibo(&data_dir)
        .args(["stats", "2024-03-10", "--view", "daily", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 150"))
        .stdout(predicate::str::contains("\"chart_data\""));
}

#[test]
fn test_stats_rejects_malformed_date() {
    let data_dir = TempDir::new().unwrap();

    kakeibo(&data_dir)
        .args(["stats", "10/03/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_day_view_header() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    kakeibo(&data_dir)
        .args(["day", "2024-03-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024/03/10"))
        .stdout(predicate::str::contains("SUNDAY"))
        .stdout(predicate::str::contains("NT$150"));
}

#[test]
fn test_calendar_marks_days() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    kakeibo(&data_dir)
        .args(["calendar", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("March 2024"))
        .stdout(predicate::str::contains("10*"))
        .stdout(predicate::str::contains("NT$150"));
}

#[test]
fn test_export_csv() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    kakeibo(&data_dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id,date,description,amount,type"))
        .stdout(predicate::str::contains("2024-03-10,Coffee,120,cash"));
}

#[test]
fn test_clear_with_force() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    kakeibo(&data_dir)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 3 expense(s)."));

    kakeibo(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn test_malformed_record_is_skipped_with_warning() {
    let data_dir = TempDir::new().unwrap();
    seed(&data_dir);

    // Corrupt one record's date directly in the data file
    let expenses_file = data_dir.path().join("data").join("expenses.json");
    let contents = std::fs::read_to_string(&expenses_file).unwrap();
    let corrupted = contents.replacen("2024-03-11", "garbage", 1);
    std::fs::write(&expenses_file, corrupted).unwrap();

    kakeibo(&data_dir)
        .args(["stats", "2024-03-15", "--view", "monthly"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Malformed expense record"))
        .stdout(predicate::str::contains("Total: NT$150"));
}
