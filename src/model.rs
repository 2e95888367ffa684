use crate::time::{TimeRange, Weekday};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Poignée vers un membre du personnel (index dans l'arène du roster).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StaffId(usize);

impl StaffId {
    pub(crate) fn new(slot: usize) -> Self {
        Self(slot)
    }
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Poignée vers un shift.
///
/// L'ordre dérivé est l'ordre chronologique de la semaine : jour, début,
/// fin, puis ordre de déclaration pour départager deux shifts identiques.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShiftId {
    day: Weekday,
    range: TimeRange,
    slot: usize,
}

impl ShiftId {
    pub(crate) fn new(day: Weekday, range: TimeRange, slot: usize) -> Self {
        Self { day, range, slot }
    }
    pub fn day(&self) -> Weekday {
        self.day
    }
    pub fn range(&self) -> TimeRange {
        self.range
    }
    pub fn index(&self) -> usize {
        self.slot
    }
}

/// `Monday[08:00-12:00]`
impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.day, self.range)
    }
}

/// Rôle tenu sur un shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Worker,
    Manager,
}

impl Role {
    pub fn from_manager_flag(is_manager: bool) -> Self {
        if is_manager {
            Role::Manager
        } else {
            Role::Worker
        }
    }
}

/// Membre du personnel enregistré.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffMember {
    id: StaffId,
    given_name: String,
    family_name: String,
    assigned: BTreeSet<ShiftId>,
    as_worker: BTreeSet<ShiftId>,
    as_manager: BTreeSet<ShiftId>,
}

impl StaffMember {
    pub(crate) fn new(id: StaffId, given_name: String, family_name: String) -> Self {
        Self {
            id,
            given_name,
            family_name,
            assigned: BTreeSet::new(),
            as_worker: BTreeSet::new(),
            as_manager: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> StaffId {
        self.id
    }
    pub fn given_name(&self) -> &str {
        &self.given_name
    }
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// `"Given Family"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }

    /// `"Family, Given"`
    pub fn formatted_name(&self) -> String {
        format!("{}, {}", self.family_name, self.given_name)
    }

    /// Comparaison de l'identité complète, insensible à la casse.
    pub fn matches_full_name(&self, full_name: &str) -> bool {
        self.full_name().to_lowercase() == full_name.to_lowercase()
    }

    /// Ordre de l'annuaire : nom de famille puis prénom (sensible à la casse).
    pub fn cmp_by_name(&self, other: &StaffMember) -> Ordering {
        self.family_name
            .cmp(&other.family_name)
            .then_with(|| self.given_name.cmp(&other.given_name))
    }

    /// Enregistre le shift côté personne. Pour un manager, positionne aussi
    /// le manager du shift ; pour un worker, l'appelant doit encore appeler
    /// [`Shift::add_worker`].
    pub(crate) fn assign_to(&mut self, shift: &mut Shift, role: Role) {
        let id = shift.id();
        self.assigned.insert(id);
        match role {
            Role::Manager => {
                shift.assign_manager(self.id);
                self.as_manager.insert(id);
            }
            Role::Worker => {
                self.as_worker.insert(id);
            }
        }
    }

    /// Retire un shift dont la personne n'est plus manager.
    pub(crate) fn release_management(&mut self, shift: ShiftId) {
        self.as_manager.remove(&shift);
        if !self.as_worker.contains(&shift) {
            self.assigned.remove(&shift);
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.assigned.is_empty()
    }

    pub fn assigned_shifts(&self) -> impl Iterator<Item = ShiftId> + '_ {
        self.assigned.iter().copied()
    }

    /// Shifts tenus comme worker, dans l'ordre chronologique.
    pub fn worker_shifts(&self) -> impl Iterator<Item = ShiftId> + '_ {
        self.as_worker.iter().copied()
    }

    /// Shifts tenus comme manager, dans l'ordre chronologique.
    pub fn manager_shifts(&self) -> impl Iterator<Item = ShiftId> + '_ {
        self.as_manager.iter().copied()
    }
}

/// Créneau d'un jour avec un objectif d'effectif minimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    id: ShiftId,
    minimum_workers: u32,
    manager: Option<StaffId>,
    workers: Vec<StaffId>,
}

impl Shift {
    pub(crate) fn new(id: ShiftId, minimum_workers: u32) -> Self {
        Self {
            id,
            minimum_workers,
            manager: None,
            workers: Vec::new(),
        }
    }

    pub fn id(&self) -> ShiftId {
        self.id
    }
    pub fn day(&self) -> Weekday {
        self.id.day
    }
    pub fn range(&self) -> TimeRange {
        self.id.range
    }
    pub fn minimum_workers(&self) -> u32 {
        self.minimum_workers
    }
    pub fn manager(&self) -> Option<StaffId> {
        self.manager
    }
    /// Workers triés par nom de famille puis prénom, sans doublon.
    pub fn workers(&self) -> &[StaffId] {
        &self.workers
    }

    /// Remplace le manager courant ; renvoie le précédent s'il y en avait un.
    pub fn assign_manager(&mut self, staff: StaffId) -> Option<StaffId> {
        self.manager.replace(staff)
    }

    /// Ajoute un worker s'il n'est pas déjà présent. `directory` est l'arène
    /// du personnel, utilisée pour le tri alphabétique.
    pub(crate) fn add_worker(&mut self, staff: StaffId, directory: &[StaffMember]) -> bool {
        if self.workers.contains(&staff) {
            return false;
        }
        self.workers.push(staff);
        self.workers
            .sort_by(|a, b| directory[a.index()].cmp_by_name(&directory[b.index()]));
        true
    }

    pub fn is_understaffed(&self) -> bool {
        (self.workers.len() as u64) < u64::from(self.minimum_workers)
    }

    pub fn is_overstaffed(&self) -> bool {
        (self.workers.len() as u64) > u64::from(self.minimum_workers)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}

/// Un des sept jours du roster : horaires d'ouverture et shifts déclarés.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    weekday: Weekday,
    working_hours: Option<TimeRange>,
    shifts: Vec<ShiftId>,
}

impl DaySchedule {
    pub fn new(weekday: Weekday) -> Self {
        Self {
            weekday,
            working_hours: None,
            shifts: Vec::new(),
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
    pub fn working_hours(&self) -> Option<TimeRange> {
        self.working_hours
    }
    pub fn is_configured(&self) -> bool {
        self.working_hours.is_some()
    }
    /// Shifts du jour dans l'ordre chronologique.
    pub fn shifts(&self) -> &[ShiftId] {
        &self.shifts
    }

    /// Écrase les horaires précédents le cas échéant.
    pub fn set_working_hours(&mut self, hours: TimeRange) {
        self.working_hours = Some(hours);
    }

    /// Déclare un shift dans `arena`. Sans horaires d'ouverture, rien n'est
    /// créé et `None` est renvoyé.
    pub fn add_shift(
        &mut self,
        range: TimeRange,
        minimum_workers: u32,
        arena: &mut Vec<Shift>,
    ) -> Option<ShiftId> {
        if !self.is_configured() {
            return None;
        }
        let id = ShiftId::new(self.weekday, range, arena.len());
        arena.push(Shift::new(id, minimum_workers));
        self.shifts.push(id);
        self.shifts.sort();
        Some(id)
    }

    /// Premier shift (dans l'ordre chronologique) ayant exactement ces bornes.
    pub fn find_shift(&self, range: TimeRange) -> Option<ShiftId> {
        self.shifts.iter().copied().find(|id| id.range == range)
    }
}
