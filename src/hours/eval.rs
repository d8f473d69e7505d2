use super::types::{DaySpec, ParsedRule, QueryInstant};

/// Parcours linéaire, première règle applicable gagnante.
///
/// Deux lignes peuvent décrire le même jour ; seule la première compte, y
/// compris sur du contenu mal formé : le texte existant dépend de l'ordre
/// des lignes. Aucune règle applicable => fermé.
pub(super) fn evaluate(rules: &[ParsedRule], now: QueryInstant) -> bool {
    for rule in rules {
        match rule.days {
            DaySpec::AlwaysOpen => return true,
            DaySpec::Generic => return window_matches(rule, now),
            DaySpec::Range(..) | DaySpec::Single(_) => {
                if rule.days.matches(now.weekday()) {
                    return window_matches(rule, now);
                }
            }
        }
    }
    false
}

// Fenêtre illisible => la règle sélectionnée ne peut pas ouvrir.
fn window_matches(rule: &ParsedRule, now: QueryInstant) -> bool {
    rule.window()
        .map(|window| window.contains(now.minutes()))
        .unwrap_or(false)
}
