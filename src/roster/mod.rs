mod mutate;
mod queries;
mod types;
mod util;

pub use types::{RosterError, RosterOptions, RosterReport};

use crate::model::{DaySchedule, Role, Shift, ShiftId, StaffId, StaffMember};
use crate::time::Weekday;
use std::fmt;

/// Roster hebdomadaire d'un magasin : racine d'agrégat.
///
/// Possède les sept [`DaySchedule`] ainsi que deux arènes (`shifts`, `staff`)
/// ; shifts et personnes se référencent mutuellement par [`ShiftId`] /
/// [`StaffId`]. Toute mutation est validée avant d'être appliquée.
#[derive(Debug, Clone)]
pub struct Roster {
    shop_name: String,
    days: [DaySchedule; 7],
    shifts: Vec<Shift>,
    staff: Vec<StaffMember>,
    /// Annuaire trié par nom de famille puis prénom.
    directory: Vec<StaffId>,
    options: RosterOptions,
}

impl Roster {
    pub fn new(shop_name: &str) -> Result<Self, RosterError> {
        Self::with_options(shop_name, RosterOptions::default())
    }

    pub fn with_options(shop_name: &str, options: RosterOptions) -> Result<Self, RosterError> {
        if shop_name.is_empty() {
            return Err(RosterError::InvalidShopName);
        }
        log_event!(debug, shop = shop_name, ?options, "roster created");
        Ok(Self {
            shop_name: shop_name.to_string(),
            days: Weekday::ALL.map(DaySchedule::new),
            shifts: Vec::new(),
            staff: Vec::new(),
            directory: Vec::new(),
            options,
        })
    }

    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }
    pub fn options(&self) -> RosterOptions {
        self.options
    }

    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        &self.days[weekday.index()]
    }
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// `None` pour un identifiant issu d'un autre roster.
    pub fn shift(&self, id: ShiftId) -> Option<&Shift> {
        self.shifts.get(id.index()).filter(|s| s.id() == id)
    }
    pub fn staff_member(&self, id: StaffId) -> Option<&StaffMember> {
        self.staff.get(id.index())
    }

    // identifiants internes : toujours valides pour ce roster
    fn shift_at(&self, id: ShiftId) -> &Shift {
        &self.shifts[id.index()]
    }
    fn member_at(&self, id: StaffId) -> &StaffMember {
        &self.staff[id.index()]
    }

    /// Personnel dans l'ordre de l'annuaire.
    pub fn staff(&self) -> impl Iterator<Item = &StaffMember> + '_ {
        self.directory.iter().map(move |id| self.member_at(*id))
    }

    /// Recherche insensible à la casse sur `"Given Family"`.
    pub fn find_staff(&self, full_name: &str) -> Option<StaffId> {
        util::find_by_full_name(&self.staff, full_name)
    }

    /// Tous les shifts, jour par jour, chacun dans l'ordre chronologique.
    pub fn week_shifts(&self) -> impl Iterator<Item = &Shift> + '_ {
        self.days
            .iter()
            .flat_map(move |d| d.shifts().iter().map(move |id| self.shift_at(*id)))
    }

    pub fn set_working_hours(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
    ) -> Result<(), RosterError> {
        mutate::set_working_hours(self, day, start, end)
    }

    /// Renvoie `Ok(None)` quand le jour n'a pas encore d'horaires et que
    /// `require_working_hours` est désactivé.
    pub fn add_shift(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
        minimum_workers: u32,
    ) -> Result<Option<ShiftId>, RosterError> {
        mutate::add_shift(self, day, start, end, minimum_workers)
    }

    pub fn register_staff(&mut self, given: &str, family: &str) -> Result<StaffId, RosterError> {
        mutate::register_staff(self, given, family)
    }

    pub fn assign_staff(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
        given: &str,
        family: &str,
        role: Role,
    ) -> Result<(), RosterError> {
        mutate::assign_staff(self, day, start, end, given, family, role)
    }

    pub fn registered_staff(&self) -> Vec<String> {
        queries::registered_staff(self)
    }

    pub fn unassigned_staff(&self) -> Vec<String> {
        queries::unassigned_staff(self)
    }

    pub fn roster_for_worker(&self, full_name: &str) -> Vec<String> {
        queries::roster_for_worker(self, full_name)
    }

    pub fn roster_for_day(&self, day: &str) -> Vec<String> {
        queries::roster_for_day(self, day)
    }

    pub fn shifts_managed_by(&self, full_name: &str) -> Vec<String> {
        queries::shifts_managed_by(self, full_name)
    }

    pub fn shifts_without_manager(&self) -> Vec<String> {
        queries::shifts_without_manager(self)
    }

    pub fn understaffed_shifts(&self) -> Vec<String> {
        queries::understaffed_shifts(self)
    }

    pub fn overstaffed_shifts(&self) -> Vec<String> {
        queries::overstaffed_shifts(self)
    }

    /// Toute la semaine, un bloc par jour ayant au moins un shift.
    pub fn display_roster(&self) -> Vec<String> {
        queries::display_roster(self)
    }

    pub fn report(&self) -> RosterReport {
        queries::report(self)
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shop_name)
    }
}
