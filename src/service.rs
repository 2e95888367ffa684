use crate::model::Role;
use crate::roster::{Roster, RosterError, RosterOptions, RosterReport};
use crate::time::{TimeRange, Weekday};

/// Réponse unique des requêtes émises avant toute création de roster.
pub const NO_ROSTER: &str = "ERROR: no roster has been created";

const ERROR_PREFIX: &str = "%ERROR% --- ";
const NO_ROSTER_STATUS: &str = "Please create a new roster first.";

/// Façade requête/réponse au-dessus d'un [`Roster`].
///
/// Les mutations renvoient `""` en cas de succès, sinon
/// `"%ERROR% --- <message>"`. Les requêtes renvoient des lignes, ou
/// `[NO_ROSTER]` tant qu'aucun roster n'a été créé. Une instance correspond
/// à une session : aucun état global.
#[derive(Debug, Default)]
pub struct ShiftManService {
    roster: Option<Roster>,
    options: RosterOptions,
}

impl ShiftManService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RosterOptions) -> Self {
        Self {
            roster: None,
            options,
        }
    }

    pub fn roster(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }
    pub fn roster_mut(&mut self) -> Option<&mut Roster> {
        self.roster.as_mut()
    }

    /// Un nom invalide abandonne aussi le roster précédent.
    pub fn new_roster(&mut self, shop_name: &str) -> String {
        match Roster::with_options(shop_name, self.options) {
            Ok(roster) => {
                self.roster = Some(roster);
                String::new()
            }
            Err(err) => {
                self.roster = None;
                status(Err(err))
            }
        }
    }

    pub fn set_working_hours(&mut self, day: &str, start: &str, end: &str) -> String {
        self.mutate(|r| r.set_working_hours(day, start, end))
    }

    pub fn add_shift(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
        minimum_workers: &str,
    ) -> String {
        self.mutate(|r| {
            // créneau et jour sont signalés avant le nombre de workers
            TimeRange::parse(start, end)?;
            day.parse::<Weekday>()?;
            let minimum = parse_minimum_workers(minimum_workers)?;
            r.add_shift(day, start, end, minimum).map(|_| ())
        })
    }

    pub fn register_staff(&mut self, given_name: &str, family_name: &str) -> String {
        self.mutate(|r| r.register_staff(given_name, family_name).map(|_| ()))
    }

    pub fn assign_staff(
        &mut self,
        day: &str,
        start: &str,
        end: &str,
        given_name: &str,
        family_name: &str,
        is_manager: bool,
    ) -> String {
        let role = Role::from_manager_flag(is_manager);
        self.mutate(|r| r.assign_staff(day, start, end, given_name, family_name, role))
    }

    pub fn get_registered_staff(&self) -> Vec<String> {
        self.query(Roster::registered_staff)
    }

    pub fn get_unassigned_staff(&self) -> Vec<String> {
        self.query(Roster::unassigned_staff)
    }

    pub fn shifts_without_managers(&self) -> Vec<String> {
        self.query(Roster::shifts_without_manager)
    }

    pub fn understaffed_shifts(&self) -> Vec<String> {
        self.query(Roster::understaffed_shifts)
    }

    pub fn overstaffed_shifts(&self) -> Vec<String> {
        self.query(Roster::overstaffed_shifts)
    }

    pub fn get_roster_for_day(&self, day: &str) -> Vec<String> {
        self.query(|r| r.roster_for_day(day))
    }

    pub fn get_roster_for_worker(&self, worker_name: &str) -> Vec<String> {
        self.query(|r| r.roster_for_worker(worker_name))
    }

    pub fn get_shifts_managed_by(&self, manager_name: &str) -> Vec<String> {
        self.query(|r| r.shifts_managed_by(manager_name))
    }

    /// Bilan texte des problèmes ; chaîne vide si le roster est sain.
    pub fn report_roster_issues(&self) -> String {
        match &self.roster {
            Some(roster) => render_report(&roster.report()),
            None => NO_ROSTER.to_string(),
        }
    }

    /// Semaine complète, une ligne par entrée.
    pub fn display_roster(&self) -> String {
        match &self.roster {
            Some(roster) => roster.display_roster().join("\n"),
            None => NO_ROSTER.to_string(),
        }
    }

    fn mutate(&mut self, op: impl FnOnce(&mut Roster) -> Result<(), RosterError>) -> String {
        match self.roster.as_mut() {
            Some(roster) => status(op(roster)),
            None => format!("{ERROR_PREFIX}{NO_ROSTER_STATUS}"),
        }
    }

    fn query(&self, op: impl FnOnce(&Roster) -> Vec<String>) -> Vec<String> {
        match &self.roster {
            Some(roster) => op(roster),
            None => vec![NO_ROSTER.to_string()],
        }
    }
}

fn status(result: Result<(), RosterError>) -> String {
    match result {
        Ok(()) => String::new(),
        Err(err) => format!("{ERROR_PREFIX}{}", err.status_message()),
    }
}

fn parse_minimum_workers(raw: &str) -> Result<u32, RosterError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| RosterError::InvalidMinimumWorkers(raw.to_string()))
}

fn render_report(report: &RosterReport) -> String {
    let mut lines = Vec::new();
    for shift in &report.understaffed {
        lines.push(format!("Understaffed: {shift}"));
    }
    for shift in &report.overstaffed {
        lines.push(format!("Overstaffed: {shift}"));
    }
    for shift in &report.without_manager {
        lines.push(format!("No manager: {shift}"));
    }
    for name in &report.unassigned_staff {
        lines.push(format!("Unassigned: {name}"));
    }
    lines.join("\n")
}
