#![forbid(unsafe_code)]
use otvoreno::{
    io, Directory, JsonStorage, Listing, QueryInstant, Schedule, ScheduleRenderer, Storage,
    TextTable,
};
use tempfile::tempdir;

fn sample_directory() -> Directory {
    let mut open_weekdays = Listing::new("Kafana Central");
    open_weekdays.category = Some("restaurant".into());
    open_weekdays.hours = Some("Пон - Пет: 09:00 - 23:00\nСаб: 10:00 - 01:00".into());

    let mut non_stop = Listing::new("Non-Stop Market");
    non_stop.hours = Some("24/7".into());

    let no_hours = Listing::new("Gallery");

    Directory {
        listings: vec![open_weekdays, non_stop, no_hours],
    }
}

#[test]
fn save_and_load_directory_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("directory.json");
    let storage = JsonStorage::open(&path).unwrap();

    let directory = sample_directory();
    storage.save(&directory).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.listings.len(), 3);
    assert_eq!(loaded.listings[0].hours, directory.listings[0].hours);
    assert_eq!(loaded.listings[2].hours, None);
}

#[test]
fn open_at_filter_honors_schedules() {
    let directory = sample_directory();

    // mercredi 12:00 : tout le monde est ouvert (Gallery par fail-open)
    let wednesday_noon = QueryInstant::new(3, 12 * 60).unwrap();
    assert_eq!(directory.open_at(wednesday_noon).len(), 3);

    // dimanche 12:00 : Kafana fermée, Non-Stop et Gallery ouvertes
    let sunday_noon = QueryInstant::new(0, 12 * 60).unwrap();
    let open = directory.open_at(sunday_noon);
    assert_eq!(open.len(), 2);
    assert!(open.iter().all(|l| l.name != "Kafana Central"));
}

#[test]
fn import_listings_csv_keeps_multiline_hours() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("listings.csv");
    std::fs::write(
        &path,
        "name,category,hours\nKafana Central,restaurant,\"Пон - Пет: 09:00 - 23:00\nСаб: 10:00 - 01:00\"\nGallery,,\n",
    )
    .unwrap();

    let listings = io::import_listings_csv(&path).unwrap();
    assert_eq!(listings.len(), 2);

    let kafana = &listings[0];
    let schedule = kafana.schedule().unwrap();
    assert_eq!(schedule.rules().len(), 2);
    assert_eq!(schedule.dropped_lines(), 0);

    // colonne vide => champ absent, pas une chaîne vide
    assert_eq!(listings[1].hours, None);
    assert_eq!(listings[1].category, None);
}

#[test]
fn export_status_csv_reports_open_and_closed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("status.csv");
    let directory = sample_directory();

    let sunday_noon = QueryInstant::new(0, 12 * 60).unwrap();
    io::export_status_csv(&path, &directory, sunday_noon).unwrap();

    let report = std::fs::read_to_string(&path).unwrap();
    assert!(report.starts_with("id,name,status"));
    assert!(report.contains("Kafana Central,closed"));
    assert!(report.contains("Non-Stop Market,open"));
    assert!(report.contains("Gallery,open"));
}

#[test]
fn text_table_renders_rows_and_ignored_lines() {
    let schedule = Schedule::parse("Mon - Fri: 09:00 - 17:00\nSat: 10:00 - 14:00\nbroken line");
    let out = TextTable.render("Kafana Central", &schedule);
    insta::assert_snapshot!(out.trim_end(), @r###"
Kafana Central
  Mon - Fri  09:00 - 17:00
  Sat        10:00 - 14:00
  (1 line(s) ignored)
"###);
}

#[test]
fn text_table_marks_unusable_schedules() {
    let schedule = Schedule::parse("garbled nonsense");
    let out = TextTable.render("Bad Venue", &schedule);
    assert!(out.contains("(no usable schedule)"));
    assert!(out.contains("(1 line(s) ignored)"));
}
