use chrono::{Datelike, Timelike};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoursError {
    #[error("weekday out of range: {0} (expected 0..=6, 0 = Sunday)")]
    WeekdayOutOfRange(u8),
    #[error("minutes out of range: {0} (expected 0..=1439)")]
    MinutesOutOfRange(u16),
}

/// Instant de requête : jour de semaine (0 = dimanche .. 6 = samedi) +
/// minutes depuis minuit. Capturé une fois par l'appelant ; la lib ne lit
/// jamais l'horloge elle-même.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryInstant {
    weekday: u8,
    minutes: u16,
}

impl QueryInstant {
    pub fn new(weekday: u8, minutes: u16) -> Result<Self, HoursError> {
        if weekday > 6 {
            return Err(HoursError::WeekdayOutOfRange(weekday));
        }
        if minutes > 1439 {
            return Err(HoursError::MinutesOutOfRange(minutes));
        }
        Ok(Self { weekday, minutes })
    }

    /// Depuis une valeur d'horloge chrono (`DateTime<Tz>`, `NaiveDateTime`, ...).
    /// Totale : chrono garantit les bornes exigées ici.
    pub fn from_clock<T: Datelike + Timelike>(clock: &T) -> Self {
        Self {
            weekday: clock.weekday().num_days_from_sunday() as u8,
            minutes: (clock.hour() * 60 + clock.minute()) as u16,
        }
    }

    pub fn weekday(&self) -> u8 {
        self.weekday
    }

    pub fn minutes(&self) -> u16 {
        self.minutes
    }
}

/// Couverture en jours d'une règle d'horaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySpec {
    /// Raccourci `24/7` n'importe où dans la ligne.
    AlwaysOpen,
    /// Ligne sans préfixe de jour : s'applique à tous les jours.
    Generic,
    /// Intervalle inclusif ; `start > end` enjambe la fin de semaine.
    Range(u8, u8),
    Single(u8),
}

impl DaySpec {
    pub fn matches(&self, weekday: u8) -> bool {
        match *self {
            DaySpec::AlwaysOpen | DaySpec::Generic => true,
            DaySpec::Range(start, end) if start <= end => (start..=end).contains(&weekday),
            DaySpec::Range(start, end) => weekday >= start || weekday <= end,
            DaySpec::Single(day) => weekday == day,
        }
    }
}

/// Une ligne classifiée : couverture en jours + texte horaire brut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    pub days: DaySpec,
    pub hours: String,
}

impl ParsedRule {
    /// Fenêtre horaire de la règle, si le texte en contient une lisible.
    pub fn window(&self) -> Option<TimeWindow> {
        super::window::parse_time_window(&self.hours)
    }
}

/// Fenêtre horaire en minutes depuis minuit ; `wraps` marque les nuits
/// (fin avant début, ex. `20:00 - 02:00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: u16,
    pub end: u16,
    pub wraps: bool,
}

impl TimeWindow {
    pub fn contains(&self, minutes: u16) -> bool {
        if self.wraps {
            minutes >= self.start || minutes < self.end
        } else {
            minutes >= self.start && minutes < self.end
        }
    }
}

/// Paire d'affichage pour une ligne de tableau horaire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub days: String,
    pub hours: String,
}
