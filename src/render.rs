use crate::hours::Schedule;

/// Permet de customiser le rendu d'un horaire (terminal, mail, etc.).
pub trait ScheduleRenderer {
    fn render(&self, name: &str, schedule: &Schedule) -> String;
}

/// Tableau texte simple : une ligne par règle, colonne jours alignée.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextTable;

impl ScheduleRenderer for TextTable {
    fn render(&self, name: &str, schedule: &Schedule) -> String {
        let rows = schedule.rows();
        let mut out = format!("{name}\n");

        if rows.is_empty() {
            out.push_str("  (no usable schedule)\n");
        } else {
            let width = rows
                .iter()
                .map(|row| row.days.chars().count())
                .max()
                .unwrap_or(0);
            for row in &rows {
                out.push_str(&format!("  {:<width$}  {}\n", row.days, row.hours));
            }
        }

        let dropped = schedule.dropped_lines();
        if dropped > 0 {
            out.push_str(&format!("  ({dropped} line(s) ignored)\n"));
        }
        out
    }
}
