#![forbid(unsafe_code)]
//! Shiftman — roster hebdomadaire d'un magasin.
//!
//! - Horaires d'ouverture par jour, shifts déclarés dans ces horaires.
//! - Annuaire du personnel, affectation worker / manager.
//! - Requêtes : personnel non affecté, shifts sous/sur-staffés, sans manager,
//!   vues par jour et par personne.
//! - Heures échangées en `"hh:mm"`, jours en anglais (sensible à la casse).

// Journalisation optionnelle (feature `logging`) ; sans la feature, les
// événements disparaissent à la compilation.
#[cfg(feature = "logging")]
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {};
}

#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod roster;
#[cfg(feature = "serde")]
pub mod script;
pub mod service;
pub mod time;

pub use model::{DaySchedule, Role, Shift, ShiftId, StaffId, StaffMember};
pub use roster::{Roster, RosterError, RosterOptions, RosterReport};
pub use service::{ShiftManService, NO_ROSTER};
pub use time::{TimeRange, Weekday, MINUTES_PER_DAY};
