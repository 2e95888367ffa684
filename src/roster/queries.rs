use super::{util, Roster, RosterReport};
use crate::model::{Shift, ShiftId, StaffMember};
use crate::time::Weekday;
use std::iter;

pub(super) fn registered_staff(roster: &Roster) -> Vec<String> {
    roster.staff().map(StaffMember::full_name).collect()
}

pub(super) fn unassigned_staff(roster: &Roster) -> Vec<String> {
    roster
        .staff()
        .filter(|m| m.is_unassigned())
        .map(StaffMember::full_name)
        .collect()
}

pub(super) fn roster_for_worker(roster: &Roster, full_name: &str) -> Vec<String> {
    let Some(id) = roster.find_staff(full_name) else {
        return Vec::new();
    };
    let member = roster.member_at(id);
    titled_shift_list(member, member.worker_shifts().collect())
}

pub(super) fn shifts_managed_by(roster: &Roster, full_name: &str) -> Vec<String> {
    let Some(id) = roster.find_staff(full_name) else {
        return Vec::new();
    };
    let member = roster.member_at(id);
    titled_shift_list(member, member.manager_shifts().collect())
}

/// `["Family, Given", shift...]`, vide s'il n'y a aucun shift.
fn titled_shift_list(member: &StaffMember, shifts: Vec<ShiftId>) -> Vec<String> {
    if shifts.is_empty() {
        return Vec::new();
    }
    iter::once(member.formatted_name())
        .chain(shifts.iter().map(ShiftId::to_string))
        .collect()
}

pub(super) fn roster_for_day(roster: &Roster, day: &str) -> Vec<String> {
    Weekday::from_name(day)
        .map(|weekday| day_lines(roster, weekday))
        .unwrap_or_default()
}

pub(super) fn display_roster(roster: &Roster) -> Vec<String> {
    Weekday::ALL
        .into_iter()
        .flat_map(|weekday| day_lines(roster, weekday))
        .collect()
}

fn day_lines(roster: &Roster, weekday: Weekday) -> Vec<String> {
    let schedule = roster.day(weekday);
    let Some(hours) = schedule.working_hours() else {
        return Vec::new();
    };
    if schedule.shifts().is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(schedule.shifts().len() + 2);
    lines.push(roster.shop_name().to_string());
    lines.push(format!("{weekday} {hours}"));
    lines.extend(
        schedule
            .shifts()
            .iter()
            .map(|id| shift_line(roster, roster.shift_at(*id))),
    );
    lines
}

/// `Monday[08:00-12:00] Manager:Doe, John [Jane Doe, Sam Roe]`
fn shift_line(roster: &Roster, shift: &Shift) -> String {
    let manager = match shift.manager() {
        Some(id) => format!("Manager:{}", roster.member_at(id).formatted_name()),
        None => "[No manager assigned]".to_string(),
    };
    let workers = if shift.workers().is_empty() {
        "[No workers assigned]".to_string()
    } else {
        let names: Vec<String> = shift
            .workers()
            .iter()
            .map(|id| roster.member_at(*id).full_name())
            .collect();
        util::bracketed(&names)
    };
    format!("{shift} {manager} {workers}")
}

fn matching_shifts(roster: &Roster, pred: impl Fn(&Shift) -> bool) -> Vec<ShiftId> {
    roster
        .week_shifts()
        .filter(|s| pred(*s))
        .map(Shift::id)
        .collect()
}

fn render(ids: Vec<ShiftId>) -> Vec<String> {
    ids.iter().map(ShiftId::to_string).collect()
}

pub(super) fn shifts_without_manager(roster: &Roster) -> Vec<String> {
    render(matching_shifts(roster, |s| s.manager().is_none()))
}

pub(super) fn understaffed_shifts(roster: &Roster) -> Vec<String> {
    render(matching_shifts(roster, Shift::is_understaffed))
}

pub(super) fn overstaffed_shifts(roster: &Roster) -> Vec<String> {
    render(matching_shifts(roster, Shift::is_overstaffed))
}

pub(super) fn report(roster: &Roster) -> RosterReport {
    RosterReport {
        understaffed: matching_shifts(roster, Shift::is_understaffed),
        overstaffed: matching_shifts(roster, Shift::is_overstaffed),
        without_manager: matching_shifts(roster, |s| s.manager().is_none()),
        unassigned_staff: unassigned_staff(roster),
    }
}
