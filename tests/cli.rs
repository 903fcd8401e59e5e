use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path())
        .env_remove("EXPENSE_USER");
    cmd
}

fn add(data_dir: &TempDir, user: &str, name: &str, amount: &str, month: &str) {
    expense(data_dir)
        .args(["add", "--user", user, name, amount, "--month", month])
        .assert()
        .success();
}

#[test]
fn new_user_add_and_total() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["user", "new", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created user: Alice"));

    expense(&dir)
        .args([
            "add", "--user", "Alice", "Coffee", "5", "--currency", "USD", "--category", "Food",
            "--month", "January",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense: Coffee - USD 5.00 (Food)"));

    expense(&dir)
        .args(["total", "--user", "Alice"])
        .assert()
        .success()
        .stdout("Total: INR 5.00\n");
}

#[test]
fn missing_user_is_reported() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["user", "check", "Bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "User doesn't exist. Please check the name or create a new user.",
        ));
}

#[test]
fn empty_username_is_rejected() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["user", "new", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter your name."));
}

#[test]
fn add_with_missing_fields_is_rejected() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["user", "new", "Alice"]).assert().success();

    expense(&dir)
        .args(["add", "--user", "Alice", "", "5", "--month", "May"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill in all the fields."));
}

#[test]
fn list_groups_by_month_in_first_seen_order() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["user", "new", "Alice"]).assert().success();
    add(&dir, "Alice", "Rent", "100", "March");
    add(&dir, "Alice", "Bus", "2.50", "May");
    add(&dir, "Alice", "Lunch", "7", "March");

    let output = expense(&dir)
        .args(["list", "--user", "Alice"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let march = stdout.find("March").unwrap();
    let may = stdout.find("May").unwrap();
    assert!(march < may);
    assert!(stdout.contains("1. Rent - INR 100.00 ()  [#1]"));
    assert!(stdout.contains("2. Lunch - INR 7.00 ()  [#3]"));
    assert!(stdout.contains("1. Bus - INR 2.50 ()  [#2]"));
    assert!(stdout.ends_with("Total: INR 109.50\n"));
}

#[test]
fn edit_and_delete_by_position() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["user", "new", "Alice"]).assert().success();
    add(&dir, "Alice", "Coffee", "5", "January");
    add(&dir, "Alice", "Tea", "2", "January");

    expense(&dir)
        .args(["edit", "--user", "Alice", "2", "--amount", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated expense #2: Tea - INR 3.00 ()"));

    expense(&dir)
        .args(["delete", "--user", "Alice", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense: Coffee"));

    expense(&dir)
        .args(["total", "--user", "Alice"])
        .assert()
        .success()
        .stdout("Total: INR 3.00\n");
}

#[test]
fn delete_out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["user", "new", "Alice"]).assert().success();
    add(&dir, "Alice", "Coffee", "5", "January");

    expense(&dir)
        .args(["delete", "--user", "Alice", "4", "--yes"])
        .assert()
        .failure();
}

#[test]
fn declined_delete_keeps_expense() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["user", "new", "Alice"]).assert().success();
    add(&dir, "Alice", "Coffee", "5", "January");

    expense(&dir)
        .args(["delete", "--user", "Alice", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    expense(&dir)
        .args(["total", "--user", "Alice"])
        .assert()
        .stdout("Total: INR 5.00\n");
}

#[test]
fn new_user_replaces_existing_data() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["user", "new", "Alice"]).assert().success();
    add(&dir, "Alice", "Coffee", "5", "January");

    expense(&dir)
        .args(["user", "new", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Previously stored expenses were discarded."));

    expense(&dir)
        .args(["total", "--user", "Alice"])
        .assert()
        .stdout("Total: INR 0.00\n");
}

#[test]
fn data_is_kept_per_user() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["user", "new", "Alice"]).assert().success();
    expense(&dir).args(["user", "new", "Bob"]).assert().success();
    add(&dir, "Alice", "Coffee", "5", "January");

    expense(&dir)
        .args(["total", "--user", "Bob"])
        .assert()
        .stdout("Total: INR 0.00\n");

    expense(&dir)
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice").and(predicate::str::contains("Bob")));
}

#[test]
fn user_from_environment() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["user", "new", "Alice"]).assert().success();

    expense(&dir)
        .env("EXPENSE_USER", "Alice")
        .args(["add", "Coffee", "5", "--month", "January"])
        .assert()
        .success();

    expense(&dir)
        .env("EXPENSE_USER", "Alice")
        .arg("total")
        .assert()
        .stdout("Total: INR 5.00\n");
}

#[test]
fn export_csv_writes_rows() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["user", "new", "Alice"]).assert().success();
    add(&dir, "Alice", "Coffee", "5", "January");

    let out = dir.path().join("alice.csv");
    expense(&dir)
        .args(["export", "--user", "Alice", "--format", "csv"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expense(s) for Alice"));

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("Position,ID,Month,Name,Amount,Currency,Category\n"));
    assert!(contents.contains(",January,Coffee,5.00,INR,"));
}

#[test]
fn history_records_changes() {
    let dir = TempDir::new().unwrap();
    expense(&dir).args(["user", "new", "Alice"]).assert().success();
    add(&dir, "Alice", "Coffee", "5", "January");

    expense(&dir)
        .args(["history", "--user", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice: Coffee"));
}
