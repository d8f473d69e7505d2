mod days;
mod eval;
mod parse;
mod types;
mod window;

pub use types::{DaySpec, HoursError, ParsedRule, QueryInstant, ScheduleRow, TimeWindow};

use days::DAY_NAMES;

/// Horaire hebdomadaire analysé : règles ordonnées + nombre de lignes
/// écartées. Aucun état caché, re-dérivable du même texte à chaque appel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    rules: Vec<ParsedRule>,
    dropped: usize,
}

impl Schedule {
    pub fn parse(text: &str) -> Self {
        parse::parse_schedule(text)
    }

    pub fn rules(&self) -> &[ParsedRule] {
        &self.rules
    }

    /// Lignes non vides qui n'ont produit aucune règle. Signal secondaire
    /// pour outiller la validation de contenu ; jamais une erreur.
    pub fn dropped_lines(&self) -> usize {
        self.dropped
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn is_open_at(&self, now: QueryInstant) -> bool {
        eval::evaluate(&self.rules, now)
    }

    /// Projection d'affichage : une paire `{jours, horaire}` par règle,
    /// dans l'ordre source. Le texte horaire reste brut.
    pub fn rows(&self) -> Vec<ScheduleRow> {
        self.rules
            .iter()
            .map(|rule| {
                let days = match rule.days {
                    DaySpec::AlwaysOpen | DaySpec::Generic => "Mon - Sun".to_string(),
                    DaySpec::Range(start, end) => {
                        format!("{} - {}", DAY_NAMES[start as usize], DAY_NAMES[end as usize])
                    }
                    DaySpec::Single(day) => DAY_NAMES[day as usize].to_string(),
                };
                ScheduleRow {
                    days,
                    hours: rule.hours.clone(),
                }
            })
            .collect()
    }
}

/// Façade : le lieu est-il ouvert à l'instant donné ?
///
/// Texte absent ou vide => ouvert (défaut optimiste assumé) ; texte présent
/// mais inexploitable => fermé pour tous les jours. Cette asymétrie est une
/// politique reprise telle quelle, pas un bug.
pub fn is_open_now(schedule_text: Option<&str>, now: QueryInstant) -> bool {
    let Some(text) = schedule_text else {
        return true;
    };
    if text.is_empty() {
        return true;
    }
    Schedule::parse(text).is_open_at(now)
}
