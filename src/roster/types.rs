use crate::model::ShiftId;
use thiserror::Error;

/// Options de validation du roster.
///
/// Les valeurs par défaut reproduisent les tolérances historiques (no-op
/// silencieux) sauf pour les shifts dupliqués, refusés.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterOptions {
    pub reject_duplicate_shifts: bool,
    pub reject_unknown_staff: bool,
    pub require_working_hours: bool,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            reject_duplicate_shifts: true,
            reject_unknown_staff: false,
            require_working_hours: false,
        }
    }
}

impl RosterOptions {
    /// Toutes les vérifications activées.
    pub fn strict() -> Self {
        Self {
            reject_duplicate_shifts: true,
            reject_unknown_staff: true,
            require_working_hours: true,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("shop name cannot be empty")]
    InvalidShopName,
    #[error("invalid time range: expected hh:mm bounds within a day, start before end")]
    InvalidTimeRange,
    #[error("unknown day: {0}")]
    UnknownDay(String),
    #[error("given and family names cannot be empty")]
    InvalidStaffName,
    #[error("staff already registered: {0}")]
    DuplicateStaff(String),
    #[error("no shift {0} declared")]
    ShiftNotFound(String),
    #[error("unknown staff member: {0}")]
    StaffNotFound(String),
    #[error("shift already declared: {0}")]
    DuplicateShift(ShiftId),
    #[error("working hours not set for {0}")]
    WorkingHoursNotSet(String),
    #[error("invalid minimum workers: {0}")]
    InvalidMinimumWorkers(String),
}

impl RosterError {
    /// Message destiné à l'utilisateur final de la façade.
    pub fn status_message(&self) -> &'static str {
        match self {
            RosterError::InvalidShopName => "Please provide a non-empty shop name.",
            RosterError::InvalidTimeRange => "Please provide a valid start and/or end time.",
            RosterError::UnknownDay(_) => "Please provide a valid name of day",
            RosterError::InvalidStaffName => {
                "Please provide a non-empty GivenName and/or FamilyName."
            }
            RosterError::DuplicateStaff(_) => "Staff already registered.",
            RosterError::ShiftNotFound(_) => "Specified shift has not been previously set.",
            RosterError::StaffNotFound(_) => "Specified staff member has not been registered.",
            RosterError::DuplicateShift(_) => "Specified shift has already been set.",
            RosterError::WorkingHoursNotSet(_) => "Please set the working hours of that day first.",
            RosterError::InvalidMinimumWorkers(_) => {
                "Please provide a non-negative minimum number of workers."
            }
        }
    }
}

/// Bilan des problèmes de staffing, chaque liste dans l'ordre de la semaine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterReport {
    pub understaffed: Vec<ShiftId>,
    pub overstaffed: Vec<ShiftId>,
    pub without_manager: Vec<ShiftId>,
    /// Noms complets, ordre de l'annuaire.
    pub unassigned_staff: Vec<String>,
}

impl RosterReport {
    pub fn is_clean(&self) -> bool {
        self.understaffed.is_empty()
            && self.overstaffed.is_empty()
            && self.without_manager.is_empty()
            && self.unassigned_staff.is_empty()
    }
}
