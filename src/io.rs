use crate::hours::QueryInstant;
use crate::model::{Directory, Listing};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de fiches depuis CSV: header `name,category,hours`.
///
/// La colonne `hours` peut contenir des sauts de ligne (cellule entre
/// guillemets) : une ligne de règle par saut.
pub fn import_listings_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Listing>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid listing row (empty name)");
        }
        let mut listing = Listing::new(name);
        if let Some(category) = rec.get(1) {
            let category = category.trim();
            if !category.is_empty() {
                listing.category = Some(category.to_string());
            }
        }
        if let Some(hours) = rec.get(2) {
            // Pas de trim global : les lignes internes sont nettoyées au
            // parsing, et un texte vide doit rester absent (fail-open).
            if !hours.is_empty() {
                listing.hours = Some(hours.to_string());
            }
        }
        out.push(listing);
    }
    Ok(out)
}

/// Export JSON de l'annuaire (jolie mise en forme)
pub fn export_directory_json<P: AsRef<Path>>(path: P, directory: &Directory) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(directory)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du statut ouvert/fermé à un instant: header `id,name,status`
pub fn export_status_csv<P: AsRef<Path>>(
    path: P,
    directory: &Directory,
    now: QueryInstant,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "name", "status"])?;
    for listing in &directory.listings {
        let status = if listing.is_open_at(now) {
            "open"
        } else {
            "closed"
        };
        w.write_record([listing.id.as_str(), listing.name.as_str(), status])?;
    }
    w.flush()?;
    Ok(())
}
