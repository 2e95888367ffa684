#![forbid(unsafe_code)]
use shiftman::{RosterOptions, ShiftManService, NO_ROSTER};

#[test]
fn queries_before_roster_return_sentinel() {
    let mut s = ShiftManService::new();
    assert_eq!(s.get_registered_staff(), [NO_ROSTER]);
    assert_eq!(s.understaffed_shifts(), [NO_ROSTER]);
    assert_eq!(s.get_roster_for_day("Monday"), [NO_ROSTER]);
    assert_eq!(s.display_roster(), NO_ROSTER);
    assert_eq!(
        s.register_staff("Jane", "Doe"),
        "%ERROR% --- Please create a new roster first."
    );
}

#[test]
fn status_strings() {
    let mut s = ShiftManService::new();
    assert_eq!(s.new_roster("Corner Store"), "");
    assert_eq!(
        s.set_working_hours("Mon", "08:00", "18:00"),
        "%ERROR% --- Please provide a valid name of day"
    );
    assert_eq!(
        s.set_working_hours("Monday", "18:00", "08:00"),
        "%ERROR% --- Please provide a valid start and/or end time."
    );
    assert_eq!(s.set_working_hours("Monday", "08:00", "18:00"), "");
    assert_eq!(
        s.add_shift("Monday", "08:00", "12:00", "two"),
        "%ERROR% --- Please provide a non-negative minimum number of workers."
    );
    assert_eq!(
        s.add_shift("Monday", "08:00", "12:00", "-1"),
        "%ERROR% --- Please provide a non-negative minimum number of workers."
    );
    // jour et créneau passent avant le nombre de workers
    assert_eq!(
        s.add_shift("Funday", "08:00", "12:00", "x"),
        "%ERROR% --- Please provide a valid name of day"
    );
    assert_eq!(
        s.add_shift("Monday", "12:00", "08:00", "x"),
        "%ERROR% --- Please provide a valid start and/or end time."
    );
    assert_eq!(s.add_shift("Monday", "08:00", "12:00", "2"), "");
    assert_eq!(
        s.add_shift("Monday", "08:00", "12:00", "2"),
        "%ERROR% --- Specified shift has already been set."
    );
    assert_eq!(
        s.register_staff("", "Doe"),
        "%ERROR% --- Please provide a non-empty GivenName and/or FamilyName."
    );
    assert_eq!(s.register_staff("Jane", "Doe"), "");
    assert_eq!(
        s.register_staff("JANE", "doe"),
        "%ERROR% --- Staff already registered."
    );
    assert_eq!(
        s.assign_staff("Monday", "09:00", "12:00", "Jane", "Doe", false),
        "%ERROR% --- Specified shift has not been previously set."
    );
    assert_eq!(
        s.assign_staff("Monday", "08:00", "12:00", "Jane", "Doe", false),
        ""
    );
    assert_eq!(
        s.get_roster_for_day("Monday"),
        [
            "Corner Store",
            "Monday 08:00-18:00",
            "Monday[08:00-12:00] [No manager assigned] [Jane Doe]"
        ]
    );
}

#[test]
fn failed_creation_discards_roster() {
    let mut s = ShiftManService::new();
    assert_eq!(s.new_roster("Corner Store"), "");
    assert_eq!(
        s.new_roster(""),
        "%ERROR% --- Please provide a non-empty shop name."
    );
    assert!(s.roster().is_none());
    assert_eq!(s.get_unassigned_staff(), [NO_ROSTER]);
}

#[test]
fn strict_service_surfaces_silent_cases() {
    let mut s = ShiftManService::with_options(RosterOptions::strict());
    s.new_roster("Corner Store");
    assert_eq!(
        s.add_shift("Monday", "08:00", "12:00", "1"),
        "%ERROR% --- Please set the working hours of that day first."
    );
    s.set_working_hours("Monday", "08:00", "18:00");
    s.add_shift("Monday", "08:00", "12:00", "1");
    assert_eq!(
        s.assign_staff("Monday", "08:00", "12:00", "Ghost", "Writer", true),
        "%ERROR% --- Specified staff member has not been registered."
    );
}

#[test]
fn issue_report_and_display() {
    let mut s = ShiftManService::new();
    s.new_roster("Corner Store");
    s.set_working_hours("Monday", "08:00", "18:00");
    s.add_shift("Monday", "08:00", "12:00", "1");
    s.register_staff("Jane", "Doe");
    s.register_staff("Sam", "Roe");
    s.assign_staff("Monday", "08:00", "12:00", "Jane", "Doe", true);

    assert_eq!(
        s.report_roster_issues(),
        "Understaffed: Monday[08:00-12:00]\nUnassigned: Sam Roe"
    );
    assert_eq!(
        s.display_roster(),
        "Corner Store\nMonday 08:00-18:00\nMonday[08:00-12:00] Manager:Doe, Jane [No workers assigned]"
    );

    s.assign_staff("Monday", "08:00", "12:00", "Sam", "Roe", false);
    assert_eq!(s.report_roster_issues(), "");
    assert_eq!(s.get_shifts_managed_by("jane doe"), ["Doe, Jane", "Monday[08:00-12:00]"]);
    assert_eq!(s.get_roster_for_worker("Sam Roe"), ["Roe, Sam", "Monday[08:00-12:00]"]);
    assert!(s.shifts_without_managers().is_empty());
    assert!(s.overstaffed_shifts().is_empty());
}
