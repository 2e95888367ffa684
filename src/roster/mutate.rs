use super::{util, Roster, RosterError};
use crate::model::{Role, ShiftId, StaffId, StaffMember};
use crate::time::{TimeRange, Weekday};

pub(super) fn set_working_hours(
    roster: &mut Roster,
    day: &str,
    start: &str,
    end: &str,
) -> Result<(), RosterError> {
    let hours = TimeRange::parse(start, end)?;
    let weekday: Weekday = day.parse()?;

    roster.days[weekday.index()].set_working_hours(hours);
    log_event!(debug, day = %weekday, hours = %hours, "working hours set");
    Ok(())
}

pub(super) fn add_shift(
    roster: &mut Roster,
    day: &str,
    start: &str,
    end: &str,
    minimum_workers: u32,
) -> Result<Option<ShiftId>, RosterError> {
    let range = TimeRange::parse(start, end)?;
    let weekday: Weekday = day.parse()?;
    let opts = roster.options;
    let schedule = &mut roster.days[weekday.index()];

    if !schedule.is_configured() {
        if opts.require_working_hours {
            return Err(RosterError::WorkingHoursNotSet(weekday.to_string()));
        }
        log_event!(warn, day = %weekday, range = %range, "shift ignored: working hours not set");
        return Ok(None);
    }

    if opts.reject_duplicate_shifts {
        if let Some(existing) = schedule.find_shift(range) {
            return Err(RosterError::DuplicateShift(existing));
        }
    }

    let id = schedule.add_shift(range, minimum_workers, &mut roster.shifts);
    log_event!(debug, shift = ?id, minimum_workers, "shift added");
    Ok(id)
}

pub(super) fn register_staff(
    roster: &mut Roster,
    given: &str,
    family: &str,
) -> Result<StaffId, RosterError> {
    if given.is_empty() || family.is_empty() {
        return Err(RosterError::InvalidStaffName);
    }
    let name = util::full_name(given, family);
    if util::find_by_full_name(&roster.staff, &name).is_some() {
        return Err(RosterError::DuplicateStaff(name));
    }

    let id = StaffId::new(roster.staff.len());
    roster
        .staff
        .push(StaffMember::new(id, given.to_string(), family.to_string()));
    roster.directory.push(id);
    let staff = &roster.staff;
    roster
        .directory
        .sort_by(|a, b| staff[a.index()].cmp_by_name(&staff[b.index()]));

    log_event!(debug, staff = %name, "staff registered");
    Ok(id)
}

pub(super) fn assign_staff(
    roster: &mut Roster,
    day: &str,
    start: &str,
    end: &str,
    given: &str,
    family: &str,
    role: Role,
) -> Result<(), RosterError> {
    let weekday: Weekday = day.parse()?;
    // des bornes invalides ne peuvent désigner aucun shift existant
    let range = TimeRange::parse(start, end)
        .map_err(|_| RosterError::ShiftNotFound(format!("{weekday} {start}-{end}")))?;
    let shift_id = roster.days[weekday.index()]
        .find_shift(range)
        .ok_or_else(|| RosterError::ShiftNotFound(util::describe_slot(weekday, range)))?;

    let name = util::full_name(given, family);
    let Some(staff_id) = util::find_by_full_name(&roster.staff, &name) else {
        if roster.options.reject_unknown_staff {
            return Err(RosterError::StaffNotFound(name));
        }
        log_event!(
            warn,
            staff = %name,
            shift = %shift_id,
            "assignment ignored: staff not registered"
        );
        return Ok(());
    };

    let shift = &mut roster.shifts[shift_id.index()];
    let previous_manager = shift.manager();
    roster.staff[staff_id.index()].assign_to(shift, role);

    match role {
        Role::Manager => {
            if let Some(previous) = previous_manager.filter(|p| *p != staff_id) {
                roster.staff[previous.index()].release_management(shift_id);
            }
        }
        Role::Worker => {
            roster.shifts[shift_id.index()].add_worker(staff_id, &roster.staff);
        }
    }

    log_event!(debug, staff = %name, shift = %shift_id, ?role, "staff assigned");
    Ok(())
}
