#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use otvoreno::{
    hours::{QueryInstant, Schedule},
    io,
    model::Listing,
    render::{ScheduleRenderer, TextTable},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste d'annuaire de lieux avec horaires en texte libre
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de l'annuaire
    #[arg(long, global = true, default_value = "directory.json")]
    directory: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter une fiche
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: Option<String>,
        /// Texte horaire ; `\n` littéral accepté comme saut de ligne
        #[arg(long)]
        hours: Option<String>,
    },

    /// Importer des fiches depuis un CSV (`name,category,hours`)
    Import {
        #[arg(long)]
        csv: String,
    },

    /// Lister et optionnellement filtrer/exporter
    List {
        /// Ne garder que les fiches ouvertes à l'instant évalué
        #[arg(long)]
        open_now: bool,
        /// Instant d'évaluation (RFC3339 ou `YYYY-MM-DDTHH:MM:SS` local) ;
        /// défaut : horloge locale
        #[arg(long)]
        at: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Afficher l'horaire analysé d'une fiche
    Show {
        #[arg(long)]
        name: String,
    },

    /// Vérifier les textes horaires et signaler ceux inexploitables
    Check {
        /// Export CSV des constats (optionnel)
        #[arg(long)]
        report: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.directory)?;
    let mut directory = storage.load_or_default();

    let code = match cli.cmd {
        Commands::Add {
            name,
            category,
            hours,
        } => {
            let mut listing = Listing::new(name);
            listing.category = category;
            listing.hours = hours.map(|h| h.replace("\\n", "\n"));
            directory.listings.push(listing);
            storage.save(&directory)?;
            0
        }
        Commands::Import { csv } => {
            let listings = io::import_listings_csv(csv)?;
            directory.listings.extend(listings);
            storage.save(&directory)?;
            0
        }
        Commands::List {
            open_now,
            at,
            out_json,
            out_csv,
        } => {
            let now = resolve_instant(at.as_deref())?;
            if let Some(path) = out_json {
                io::export_directory_json(path, &directory)?;
            }
            if let Some(path) = out_csv {
                io::export_status_csv(path, &directory, now)?;
            }
            // impression compacte
            for listing in &directory.listings {
                let open = listing.is_open_at(now);
                if open_now && !open {
                    continue;
                }
                let status = if open { "open" } else { "closed" };
                println!(
                    "{} | {} | {}",
                    listing.id.as_str(),
                    listing.name,
                    status
                );
            }
            0
        }
        Commands::Show { name } => {
            let listing = directory
                .find_by_name(&name)
                .ok_or_else(|| anyhow::anyhow!("unknown listing: {}", name))?;
            let schedule = listing.schedule().unwrap_or_default();
            let renderer = TextTable;
            print!("{}", renderer.render(&listing.name, &schedule));
            0
        }
        Commands::Check { report } => {
            let findings: Vec<(&Listing, Schedule)> = directory
                .listings
                .iter()
                .filter_map(|listing| {
                    let text = listing.hours.as_deref()?;
                    if text.is_empty() {
                        return None;
                    }
                    let schedule = Schedule::parse(text);
                    if schedule.is_empty() || schedule.dropped_lines() > 0 {
                        Some((listing, schedule))
                    } else {
                        None
                    }
                })
                .collect();

            if findings.is_empty() {
                println!("OK: all schedules usable");
                0
            } else {
                eprintln!("Found {} unusable schedule(s)", findings.len());
                for (listing, schedule) in &findings {
                    eprintln!(
                        "  {} | {} rule(s), {} line(s) ignored",
                        listing.name,
                        schedule.rules().len(),
                        schedule.dropped_lines()
                    );
                }
                if let Some(path) = report {
                    // CSV simple
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["id", "name", "rules", "dropped_lines"])?;
                    for (listing, schedule) in &findings {
                        let rules = schedule.rules().len().to_string();
                        let dropped = schedule.dropped_lines().to_string();
                        w.write_record([
                            listing.id.as_str(),
                            listing.name.as_str(),
                            rules.as_str(),
                            dropped.as_str(),
                        ])?;
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}

/// Instant d'évaluation : `--at` (RFC3339 puis datetime naïf), sinon
/// l'horloge locale capturée une seule fois.
fn resolve_instant(at: Option<&str>) -> Result<QueryInstant> {
    match at {
        Some(raw) => {
            if let Ok(dt) = raw.parse::<DateTime<FixedOffset>>() {
                return Ok(QueryInstant::from_clock(&dt));
            }
            let naive: NaiveDateTime = raw
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid instant: {}", raw))?;
            Ok(QueryInstant::from_clock(&naive))
        }
        None => Ok(QueryInstant::from_clock(&Local::now())),
    }
}
