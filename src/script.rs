//! Scripts JSON de requêtes rejoués contre un [`ShiftManService`].
//!
//! ```json
//! [
//!   { "op": "new_roster", "shop_name": "Corner Store" },
//!   { "op": "set_working_hours", "day": "Monday", "start": "08:00", "end": "18:00" },
//!   { "op": "roster_for_day", "day": "Monday" }
//! ]
//! ```

use crate::service::{ShiftManService, NO_ROSTER};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    NewRoster {
        shop_name: String,
    },
    SetWorkingHours {
        day: String,
        start: String,
        end: String,
    },
    AddShift {
        day: String,
        start: String,
        end: String,
        minimum_workers: MinimumWorkers,
    },
    RegisterStaff {
        given_name: String,
        family_name: String,
    },
    AssignStaff {
        day: String,
        start: String,
        end: String,
        given_name: String,
        family_name: String,
        #[serde(default)]
        is_manager: bool,
    },
    RegisteredStaff,
    UnassignedStaff,
    ShiftsWithoutManagers,
    UnderstaffedShifts,
    OverstaffedShifts,
    RosterForDay {
        day: String,
    },
    RosterForWorker {
        name: String,
    },
    ShiftsManagedBy {
        name: String,
    },
    ReportRosterIssues,
    DisplayRoster,
}

/// Nombre minimum de workers tel qu'écrit dans le script : nombre JSON ou
/// chaîne. La validation est laissée au service, qui répond par un statut
/// d'erreur au lieu de rejeter tout le script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinimumWorkers {
    Number(serde_json::Number),
    Text(String),
}

impl MinimumWorkers {
    fn as_text(&self) -> String {
        match self {
            MinimumWorkers::Number(n) => n.to_string(),
            MinimumWorkers::Text(s) => s.clone(),
        }
    }
}

impl From<u32> for MinimumWorkers {
    fn from(n: u32) -> Self {
        MinimumWorkers::Number(n.into())
    }
}

/// Statut (`""` ou `"%ERROR% --- ..."`) pour une mutation, lignes pour une requête.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Status(String),
    Lines(Vec<String>),
}

impl Response {
    /// Statut d'erreur, ou sentinelle renvoyée faute de roster.
    pub fn is_error(&self) -> bool {
        match self {
            Response::Status(s) => s.starts_with("%ERROR%") || s == NO_ROSTER,
            Response::Lines(lines) => matches!(lines.as_slice(), [only] if only == NO_ROSTER),
        }
    }
}

impl Request {
    pub fn apply(&self, service: &mut ShiftManService) -> Response {
        match self {
            Request::NewRoster { shop_name } => Response::Status(service.new_roster(shop_name)),
            Request::SetWorkingHours { day, start, end } => {
                Response::Status(service.set_working_hours(day, start, end))
            }
            Request::AddShift {
                day,
                start,
                end,
                minimum_workers,
            } => Response::Status(service.add_shift(day, start, end, &minimum_workers.as_text())),
            Request::RegisterStaff {
                given_name,
                family_name,
            } => Response::Status(service.register_staff(given_name, family_name)),
            Request::AssignStaff {
                day,
                start,
                end,
                given_name,
                family_name,
                is_manager,
            } => Response::Status(service.assign_staff(
                day,
                start,
                end,
                given_name,
                family_name,
                *is_manager,
            )),
            Request::RegisteredStaff => Response::Lines(service.get_registered_staff()),
            Request::UnassignedStaff => Response::Lines(service.get_unassigned_staff()),
            Request::ShiftsWithoutManagers => Response::Lines(service.shifts_without_managers()),
            Request::UnderstaffedShifts => Response::Lines(service.understaffed_shifts()),
            Request::OverstaffedShifts => Response::Lines(service.overstaffed_shifts()),
            Request::RosterForDay { day } => Response::Lines(service.get_roster_for_day(day)),
            Request::RosterForWorker { name } => {
                Response::Lines(service.get_roster_for_worker(name))
            }
            Request::ShiftsManagedBy { name } => {
                Response::Lines(service.get_shifts_managed_by(name))
            }
            Request::ReportRosterIssues => Response::Status(service.report_roster_issues()),
            Request::DisplayRoster => Response::Status(service.display_roster()),
        }
    }
}

pub fn parse_script(json: &str) -> anyhow::Result<Vec<Request>> {
    serde_json::from_str(json).context("parsing request script")
}

pub fn load_script<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Request>> {
    let path = path.as_ref();
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_script(&data)
}

/// Rejoue toutes les requêtes dans l'ordre.
pub fn replay(service: &mut ShiftManService, requests: &[Request]) -> Vec<Response> {
    requests.iter().map(|r| r.apply(service)).collect()
}
