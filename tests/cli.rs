#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli(directory: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("otvoreno-cli").unwrap();
    cmd.arg("--directory").arg(directory);
    cmd
}

fn add(directory: &std::path::Path, name: &str, hours: Option<&str>) {
    let mut cmd = cli(directory);
    cmd.args(["add", "--name", name]);
    if let Some(hours) = hours {
        cmd.args(["--hours", hours]);
    }
    cmd.assert().success();
}

#[test]
fn list_open_now_filters_by_instant() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("directory.json");

    add(&path, "Standard", Some("Mon - Fri: 09:00 - 17:00"));
    add(&path, "NonStop", Some("24/7"));

    // mercredi 10:00
    cli(&path)
        .args(["list", "--open-now", "--at", "2025-10-22T10:00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standard").and(predicate::str::contains("NonStop")));

    // samedi 10:00
    cli(&path)
        .args(["list", "--open-now", "--at", "2025-10-25T10:00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NonStop").and(predicate::str::contains("Standard").not()));
}

#[test]
fn add_accepts_literal_newline_escapes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("directory.json");

    add(
        &path,
        "TwoLines",
        Some("Mon - Fri: 09:00 - 17:00\\nSat: 10:00 - 14:00"),
    );

    cli(&path)
        .args(["show", "--name", "TwoLines"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Mon - Fri  09:00 - 17:00")
                .and(predicate::str::contains("Sat")),
        );
}

#[test]
fn check_flags_unusable_schedules_with_exit_code_2() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("directory.json");

    add(&path, "Good", Some("Mon - Fri: 09:00 - 17:00"));

    cli(&path)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));

    add(&path, "Bad", Some("garbled nonsense"));

    let report = dir.path().join("report.csv");
    cli(&path)
        .args(["check", "--report"])
        .arg(&report)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unusable schedule"));

    let report = std::fs::read_to_string(&report).unwrap();
    assert!(report.starts_with("id,name,rules,dropped_lines"));
    assert!(report.contains("Bad"));
    assert!(!report.contains("Good"));
}

#[test]
fn missing_hours_means_always_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("directory.json");

    add(&path, "Gallery", None);

    cli(&path)
        .args(["list", "--open-now", "--at", "2025-10-22T03:00:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gallery"));

    // sans texte horaire, check n'a rien à signaler
    cli(&path).arg("check").assert().success();
}
