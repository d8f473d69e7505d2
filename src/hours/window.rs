use super::types::TimeWindow;
use regex::Regex;
use std::sync::OnceLock;

fn window_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d{1,2}):(\d{2})\s*-\s*(\d{1,2}):(\d{2})").expect("motif horaire valide")
    })
}

/// Extrait la première occurrence `HH:MM - HH:MM` de `spec`, en minutes
/// depuis minuit. Les heures ne sont pas bornées au-delà du motif : `25:00`
/// passe mais ne peut jamais couvrir un instant valide.
pub(super) fn parse_time_window(spec: &str) -> Option<TimeWindow> {
    let caps = window_pattern().captures(spec)?;
    let start = minutes_since_midnight(&caps[1], &caps[2])?;
    let end = minutes_since_midnight(&caps[3], &caps[4])?;
    Some(TimeWindow {
        start,
        end,
        wraps: end < start,
    })
}

fn minutes_since_midnight(hours: &str, minutes: &str) -> Option<u16> {
    let h: u16 = hours.parse().ok()?;
    let m: u16 = minutes.parse().ok()?;
    Some(h * 60 + m)
}
