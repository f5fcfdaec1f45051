//! End-to-end tests for the envelope-balance binary

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CHECKING: &str = "00000000-0000-0000-0000-000000000001";
const BILLS: &str = "00000000-0000-0000-0000-000000000002";
const SAVINGS: &str = "00000000-0000-0000-0000-000000000003";

fn balanced_snapshot() -> String {
    format!(
        r#"{{
  "budget": {{ "month": "2025-01", "name": "January" }},
  "accounts": [
    {{ "id": "{CHECKING}", "name": "Checking" }},
    {{ "id": "{BILLS}", "name": "Bills" }},
    {{ "id": "{SAVINGS}", "name": "Savings" }}
  ],
  "income": [ {{ "account_id": "{CHECKING}", "amount": "1500", "description": "Salary" }} ],
  "expenses": [ {{ "account_id": "{BILLS}", "amount": "800" }} ],
  "savings": [ {{ "account_id": "{SAVINGS}", "amount": "700" }} ]
}}"#
    )
}

fn unbalanced_snapshot() -> String {
    format!(
        r#"{{
  "budget": {{ "month": "2025-02" }},
  "income": [
    {{ "account_id": "{CHECKING}", "amount": "1000" }},
    {{ "account_id": "{BILLS}", "amount": "1000.00" }}
  ]
}}"#
    )
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("envelope-balance").unwrap();
        cmd.env("ENVELOPE_BALANCE_DATA_DIR", self.dir.path().join("data"))
            .env_remove("ENVELOPE_BALANCE_LOG");
        cmd
    }
}

#[test]
fn plan_prints_transfer_table() {
    let fixture = Fixture::new();
    let snapshot = fixture.write("january.json", &balanced_snapshot());

    fixture
        .command()
        .arg("plan")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Transfer plan for January (2025-01)"))
        .stdout(predicate::str::contains("Checking"))
        .stdout(predicate::str::contains("$800.00"))
        .stdout(predicate::str::contains("$700.00"))
        .stdout(predicate::str::contains("Total to move: $1500.00"));
}

#[test]
fn plan_todo_format() {
    let fixture = Fixture::new();
    let snapshot = fixture.write("january.json", &balanced_snapshot());

    fixture
        .command()
        .args(["plan", "--format", "todo"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[ ] Move $800.00 from Checking to Bills",
        ))
        .stdout(predicate::str::contains(
            "[ ] Move $700.00 from Checking to Savings",
        ));
}

#[test]
fn plan_json_format_is_machine_readable() {
    let fixture = Fixture::new();
    let snapshot = fixture.write("january.json", &balanced_snapshot());

    let output = fixture
        .command()
        .args(["plan", "--format", "json"])
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["balanced"], true);
    assert_eq!(value["transfers"].as_array().unwrap().len(), 2);
    assert_eq!(value["transfers"][0]["amount"], "800");
}

#[test]
fn plan_csv_format() {
    let fixture = Fixture::new();
    let snapshot = fixture.write("january.json", &balanced_snapshot());

    fixture
        .command()
        .args(["plan", "-f", "csv"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Step,Budget Month,From ID"))
        .stdout(predicate::str::contains(",Checking,"))
        .stdout(predicate::str::contains(",Bills,800"));
}

#[test]
fn plan_reads_yaml_snapshots_from_data_dir() {
    let fixture = Fixture::new();
    let snapshots = fixture.dir.path().join("data").join("snapshots");
    fs::create_dir_all(&snapshots).unwrap();
    fs::write(
        snapshots.join("march.yaml"),
        format!(
            "budget:\n  month: \"2025-03\"\nincome:\n  - account_id: {CHECKING}\n    amount: \"1000.33\"\nexpenses:\n  - account_id: {BILLS}\n    amount: \"1000.33\"\n"
        ),
    )
    .unwrap();

    fixture
        .command()
        .args(["plan", "march.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1000.33"));
}

#[test]
fn plan_strict_fails_on_unbalanced_budget() {
    let fixture = Fixture::new();
    let snapshot = fixture.write("february.json", &unbalanced_snapshot());

    fixture
        .command()
        .args(["plan", "--strict"])
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget is unbalanced"));
}

#[test]
fn plan_warns_on_unbalanced_budget() {
    let fixture = Fixture::new();
    let snapshot = fixture.write("february.json", &unbalanced_snapshot());

    fixture
        .command()
        .arg("plan")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("No transfers needed."))
        .stdout(predicate::str::contains("budget is unbalanced"));
}

#[test]
fn positions_lists_every_account() {
    let fixture = Fixture::new();
    let snapshot = fixture.write("january.json", &balanced_snapshot());

    fixture
        .command()
        .arg("positions")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Surplus"))
        .stdout(predicate::str::contains("-$800.00"))
        .stdout(predicate::str::contains("TOTAL"));
}

#[test]
fn check_exit_status_follows_balance() {
    let fixture = Fixture::new();
    let balanced = fixture.write("january.json", &balanced_snapshot());
    let unbalanced = fixture.write("february.json", &unbalanced_snapshot());

    fixture
        .command()
        .arg("check")
        .arg(&balanced)
        .assert()
        .success()
        .stdout(predicate::str::contains("Status:         Balanced"));

    fixture
        .command()
        .arg("check")
        .arg(&unbalanced)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unbalanced"));
}

#[test]
fn negative_amounts_are_rejected() {
    let fixture = Fixture::new();
    let snapshot = fixture.write(
        "broken.json",
        &format!(
            r#"{{ "budget": {{ "month": "2025-01" }},
                 "expenses": [ {{ "account_id": "{BILLS}", "amount": "-5" }} ] }}"#
        ),
    );

    fixture
        .command()
        .arg("plan")
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn out_of_range_totals_are_rejected() {
    let fixture = Fixture::new();
    let snapshot = fixture.write(
        "huge.json",
        &format!(
            r#"{{ "budget": {{ "month": "2025-01" }},
                 "income": [
                   {{ "account_id": "{CHECKING}", "amount": "79228162514264337593543950335" }},
                   {{ "account_id": "{CHECKING}", "amount": "79228162514264337593543950335" }}
                 ] }}"#
        ),
    );

    for command in ["plan", "positions"] {
        fixture
            .command()
            .arg(command)
            .arg(&snapshot)
            .assert()
            .failure()
            .stderr(predicate::str::contains("exceeds the supported amount range"));
    }
}

#[test]
fn bare_number_amounts_are_rejected() {
    let fixture = Fixture::new();
    let snapshot = fixture.write(
        "float.json",
        &format!(
            r#"{{ "budget": {{ "month": "2025-01" }},
                 "income": [ {{ "account_id": "{CHECKING}", "amount": 12345678901234567.89 }} ] }}"#
        ),
    );

    fixture
        .command()
        .arg("plan")
        .arg(&snapshot)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn missing_snapshot_is_reported() {
    let fixture = Fixture::new();

    fixture
        .command()
        .args(["plan", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn config_init_writes_settings() {
    let fixture = Fixture::new();

    fixture
        .command()
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Output format:      table"));

    assert!(fixture.dir.path().join("data").join("config.json").exists());
}
