use crate::model::{StaffId, StaffMember};
use crate::time::{TimeRange, Weekday};

pub(super) fn full_name(given: &str, family: &str) -> String {
    format!("{given} {family}")
}

/// Recherche insensible à la casse sur `"Given Family"`.
pub(super) fn find_by_full_name(staff: &[StaffMember], full_name: &str) -> Option<StaffId> {
    staff
        .iter()
        .find(|m| m.matches_full_name(full_name))
        .map(StaffMember::id)
}

/// `"Monday 08:00-12:00"`, utilisé pour les messages d'erreur.
pub(super) fn describe_slot(day: Weekday, range: TimeRange) -> String {
    format!("{day} {range}")
}

/// `"[Jane Doe, John Smith]"`
pub(super) fn bracketed(names: &[String]) -> String {
    format!("[{}]", names.join(", "))
}
