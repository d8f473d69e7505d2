/// Abréviations canoniques anglaises, 0 = dimanche .. 6 = samedi.
pub(super) const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Normalise un jeton de jour vers son index canonique (0 = dimanche).
///
/// Le jeton est mis en minuscules puis tronqué à ses trois premiers
/// caractères (caractères, pas octets : la table contient du cyrillique et
/// du grec). Table fermée : latin (anglais, serbe), cyrillique (macédonien,
/// serbe), grec. Jeton inconnu => `None`, la règle est ignorée.
pub(super) fn normalize_day(token: &str) -> Option<u8> {
    let key: String = token.trim().to_lowercase().chars().take(3).collect();
    match key.as_str() {
        "sun" | "ned" | "нед" | "κυρ" => Some(0),
        "mon" | "pon" | "пон" | "δευ" => Some(1),
        "tue" | "uto" | "вто" | "уто" | "τρι" | "τρί" => Some(2),
        "wed" | "sre" | "сре" | "τετ" => Some(3),
        "thu" | "čet" | "чет" | "πεμ" | "πέμ" => Some(4),
        "fri" | "pet" | "пет" | "παρ" => Some(5),
        "sat" | "sub" | "саб" | "суб" | "σαβ" | "σάβ" => Some(6),
        _ => None,
    }
}
