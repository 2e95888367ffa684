use crate::roster::RosterError;
use chrono::{NaiveTime, Timelike};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Nombre de minutes dans une journée ; borne exclusive de [`TimeRange`].
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Jour de la semaine, ordonné du lundi (1) au dimanche (7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn order(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Correspondance exacte, sensible à la casse (`"monday"` est refusé).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.order()) - 1
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| RosterError::UnknownDay(s.to_string()))
    }
}

/// Intervalle semi-ouvert `[start, end)` d'une journée, en minutes depuis minuit.
///
/// Toujours valide une fois construit : `start < end < 1440`, pas de
/// chevauchement de minuit. L'ordre dérivé trie par début puis fin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeRange {
    start: u16,
    end: u16,
}

impl TimeRange {
    pub fn new(start: u16, end: u16) -> Result<Self, RosterError> {
        if start >= MINUTES_PER_DAY || end >= MINUTES_PER_DAY || start >= end {
            return Err(RosterError::InvalidTimeRange);
        }
        Ok(Self { start, end })
    }

    /// Construit un intervalle à partir de deux heures `"hh:mm"`.
    pub fn parse(start: &str, end: &str) -> Result<Self, RosterError> {
        Self::new(parse_clock(start)?, parse_clock(end)?)
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// Compare uniquement les heures de début.
    pub fn compare_start(&self, other: &TimeRange) -> Ordering {
        self.start.cmp(&other.start)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

/// `"hh:mm"` → minutes depuis minuit.
pub fn parse_clock(raw: &str) -> Result<u16, RosterError> {
    let time = NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| RosterError::InvalidTimeRange)?;
    // hour() < 24 et minute() < 60 : tient dans un u16
    Ok((time.hour() * 60 + time.minute()) as u16)
}

pub fn format_clock(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
