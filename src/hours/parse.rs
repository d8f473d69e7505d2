use super::days::normalize_day;
use super::types::{DaySpec, ParsedRule};
use super::Schedule;

/// Découpe le texte en lignes de règle : trim, lignes vides écartées,
/// ordre source préservé.
pub(super) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

pub(super) fn parse_schedule(text: &str) -> Schedule {
    let mut rules = Vec::new();
    let mut dropped = 0usize;

    for line in split_lines(text) {
        match classify(line) {
            Some(rule) => {
                let generic = rule.days == DaySpec::Generic;
                rules.push(rule);
                // Une ligne sans préfixe de jour vaut pour toute la semaine :
                // elle clôt la lecture, les lignes suivantes ne sont pas lues.
                if generic {
                    break;
                }
            }
            None => dropped += 1,
        }
    }

    Schedule { rules, dropped }
}

/// Classifie une ligne, ou `None` si elle ne porte aucune règle exploitable.
///
/// Priorités : raccourci `24/7`, puis ligne débutant par un chiffre (règle
/// générique sans jour), puis `jours: horaire` avec intervalle (`-`) ou jour
/// seul. Tout échec de résolution écarte la ligne en silence.
pub(super) fn classify(line: &str) -> Option<ParsedRule> {
    let trimmed = line.trim();
    let lowered = trimmed.to_lowercase();

    if lowered.contains("24/7") {
        return Some(ParsedRule {
            days: DaySpec::AlwaysOpen,
            hours: trimmed.to_string(),
        });
    }

    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        return Some(ParsedRule {
            days: DaySpec::Generic,
            hours: trimmed.to_string(),
        });
    }

    let (day_part, time_part) = trimmed.split_once(':')?;
    let hours = time_part.trim().to_string();

    if let Some((from, to)) = day_part.split_once('-') {
        let start = normalize_day(from)?;
        let end = normalize_day(to)?;
        return Some(ParsedRule {
            days: DaySpec::Range(start, end),
            hours,
        });
    }

    let day = normalize_day(day_part)?;
    Some(ParsedRule {
        days: DaySpec::Single(day),
        hours,
    })
}
