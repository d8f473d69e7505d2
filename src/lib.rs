#![forbid(unsafe_code)]
//! Otvoreno — interprète d'horaires d'ouverture en texte libre (sans BD).
//!
//! - Texte hebdomadaire multi-script (latin, cyrillique, grec).
//! - Évaluation pure « ouvert maintenant » contre un instant fourni.
//! - Annuaire de fiches JSON/CSV côté CLI ; écriture atomique.
//! - Aucune E/S ni horloge dans le cœur ; tout instant vient de l'appelant.

pub mod hours;
pub mod io;
pub mod model;
pub mod render;
pub mod storage;

pub use hours::{
    is_open_now, DaySpec, HoursError, ParsedRule, QueryInstant, Schedule, ScheduleRow, TimeWindow,
};
pub use model::{Directory, Listing, ListingId};
pub use render::{ScheduleRenderer, TextTable};
pub use storage::{JsonStorage, Storage};
