#![forbid(unsafe_code)]
use shiftman::io::{export_shifts_csv, import_staff_csv, register_staff_records, StaffRecord};
use shiftman::{Role, Roster};
use std::fs;
use tempfile::tempdir;

#[test]
fn import_staff_then_export_week() {
    let dir = tempdir().unwrap();
    let staff_csv = dir.path().join("staff.csv");
    fs::write(
        &staff_csv,
        "given_name,family_name\nJane,Doe\n Sam , Roe \nJohn,Doe\n",
    )
    .unwrap();

    let records = import_staff_csv(&staff_csv).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].given_name, "Sam");

    let mut r = Roster::new("Corner Store").unwrap();
    register_staff_records(&mut r, &records).unwrap();
    assert_eq!(r.registered_staff(), ["Jane Doe", "John Doe", "Sam Roe"]);

    r.set_working_hours("Monday", "08:00", "18:00").unwrap();
    r.add_shift("Monday", "08:00", "12:00", 2).unwrap();
    r.set_working_hours("Sunday", "10:00", "16:00").unwrap();
    r.add_shift("Sunday", "10:00", "16:00", 1).unwrap();
    r.assign_staff("Monday", "08:00", "12:00", "John", "Doe", Role::Manager)
        .unwrap();
    r.assign_staff("Monday", "08:00", "12:00", "Sam", "Roe", Role::Worker)
        .unwrap();
    r.assign_staff("Monday", "08:00", "12:00", "Jane", "Doe", Role::Worker)
        .unwrap();

    let out = dir.path().join("week.csv");
    export_shifts_csv(&out, &r).unwrap();
    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        [
            "day,start,end,minimum_workers,manager,workers",
            "Monday,08:00,12:00,2,John Doe,Jane Doe;Sam Roe",
            "Sunday,10:00,16:00,1,,",
        ]
    );
}

#[test]
fn duplicate_rows_fail_the_import() {
    let dir = tempdir().unwrap();
    let staff_csv = dir.path().join("staff.csv");
    fs::write(&staff_csv, "given_name,family_name\nJane,Doe\njane,doe\n").unwrap();

    let records = import_staff_csv(&staff_csv).unwrap();
    let mut r = Roster::new("Corner Store").unwrap();
    let err = register_staff_records(&mut r, &records).unwrap_err();
    assert!(err.to_string().contains("registering jane doe"));
}

#[test]
fn failed_import_registers_nobody() {
    let dir = tempdir().unwrap();
    let staff_csv = dir.path().join("staff.csv");
    fs::write(
        &staff_csv,
        "given_name,family_name\nJane,Doe\nSam,Roe\njane,doe\n",
    )
    .unwrap();
    let records = import_staff_csv(&staff_csv).unwrap();

    let mut r = Roster::new("Corner Store").unwrap();
    assert!(register_staff_records(&mut r, &records).is_err());
    assert!(r.registered_staff().is_empty());

    // doublon avec une personne déjà enregistrée
    r.register_staff("Sam", "Roe").unwrap();
    let batch = [
        StaffRecord {
            given_name: "Ada".into(),
            family_name: "Lee".into(),
        },
        StaffRecord {
            given_name: "SAM".into(),
            family_name: "ROE".into(),
        },
    ];
    let err = register_staff_records(&mut r, &batch).unwrap_err();
    assert!(err.to_string().contains("registering SAM ROE"));
    assert_eq!(r.registered_staff(), ["Sam Roe"]);
}

#[test]
fn empty_name_row_is_rejected() {
    let dir = tempdir().unwrap();
    let staff_csv = dir.path().join("staff.csv");
    fs::write(&staff_csv, "given_name,family_name\nJane,\n").unwrap();
    assert!(import_staff_csv(&staff_csv).is_err());
}
