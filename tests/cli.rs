#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SCRIPT: &str = r#"[
  { "op": "new_roster", "shop_name": "Corner Store" },
  { "op": "set_working_hours", "day": "Monday", "start": "08:00", "end": "18:00" },
  { "op": "add_shift", "day": "Monday", "start": "08:00", "end": "12:00", "minimum_workers": 2 },
  { "op": "register_staff", "given_name": "Jane", "family_name": "Doe" },
  { "op": "assign_staff", "day": "Monday", "start": "08:00", "end": "12:00",
    "given_name": "Jane", "family_name": "Doe" },
  { "op": "roster_for_day", "day": "Monday" },
  { "op": "understaffed_shifts" }
]"#;

#[test]
fn run_prints_one_json_line_per_request() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("script.json");
    fs::write(&script, SCRIPT).unwrap();

    Command::cargo_bin("shiftman-cli")
        .unwrap()
        .args(["run", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"["Corner Store","Monday 08:00-18:00","Monday[08:00-12:00] [No manager assigned] [Jane Doe]"]"#,
        ))
        .stdout(predicate::str::contains(r#"["Monday[08:00-12:00]"]"#));
}

#[test]
fn run_reports_failed_requests() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("script.json");
    fs::write(
        &script,
        r#"[{ "op": "set_working_hours", "day": "Monday", "start": "08:00", "end": "18:00" }]"#,
    )
    .unwrap();

    Command::cargo_bin("shiftman-cli")
        .unwrap()
        .args(["run", "--script"])
        .arg(&script)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Please create a new roster first."))
        .stderr(predicate::str::contains("1 request(s) failed"));
}

#[test]
fn check_flags_understaffed_shift_and_exports_csv() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("script.json");
    fs::write(&script, SCRIPT).unwrap();
    let out = dir.path().join("week.csv");

    Command::cargo_bin("shiftman-cli")
        .unwrap()
        .args(["check", "--script"])
        .arg(&script)
        .arg("--out-csv")
        .arg(&out)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Understaffed: Monday[08:00-12:00]"))
        .stdout(predicate::str::contains("No manager: Monday[08:00-12:00]"));

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.contains("Monday,08:00,12:00,2,,Jane Doe"));
}

#[test]
fn shop_and_staff_csv_seed_the_session() {
    let dir = tempdir().unwrap();
    let staff = dir.path().join("staff.csv");
    fs::write(&staff, "given_name,family_name\nSam,Roe\n").unwrap();
    let script = dir.path().join("script.json");
    fs::write(&script, r#"[{ "op": "registered_staff" }]"#).unwrap();

    Command::cargo_bin("shiftman-cli")
        .unwrap()
        .args(["run", "--shop", "Corner Store", "--staff-csv"])
        .arg(&staff)
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::diff("[\"Sam Roe\"]\n"));
}

#[test]
fn bad_minimum_workers_fails_only_that_request() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("script.json");
    fs::write(
        &script,
        r#"[
  { "op": "new_roster", "shop_name": "Corner Store" },
  { "op": "set_working_hours", "day": "Monday", "start": "08:00", "end": "18:00" },
  { "op": "add_shift", "day": "Monday", "start": "08:00", "end": "12:00", "minimum_workers": -1 },
  { "op": "add_shift", "day": "Monday", "start": "08:00", "end": "12:00", "minimum_workers": "two" },
  { "op": "add_shift", "day": "Monday", "start": "13:00", "end": "17:00", "minimum_workers": "1" },
  { "op": "shifts_without_managers" }
]"#,
    )
    .unwrap();

    Command::cargo_bin("shiftman-cli")
        .unwrap()
        .args(["run", "--script"])
        .arg(&script)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            r#""%ERROR% --- Please provide a non-negative minimum number of workers.""#,
        ))
        .stdout(predicate::str::contains(r#"["Monday[13:00-17:00]"]"#))
        .stderr(predicate::str::contains("2 request(s) failed"));
}

#[test]
fn query_without_roster_counts_as_failure() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("script.json");
    fs::write(&script, r#"[{ "op": "unassigned_staff" }]"#).unwrap();

    Command::cargo_bin("shiftman-cli")
        .unwrap()
        .args(["run", "--script"])
        .arg(&script)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#"["ERROR: no roster has been created"]"#))
        .stderr(predicate::str::contains("1 request(s) failed"));
}
