use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn setup_test_directory() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("café.txt"), "coffee").unwrap();
    fs::write(dir.path().join("report.txt"), "plain").unwrap();
    fs::create_dir_all(dir.path().join("Übersicht")).unwrap();
    fs::write(dir.path().join("Übersicht").join("naïve?.md"), "nested").unwrap();
    dir
}

fn cmd() -> Command {
    Command::cargo_bin("rename-to-ascii").unwrap()
}

#[test]
fn test_no_rename_lists_proposals_only() {
    let dir = setup_test_directory();

    cmd()
        .arg(dir.path())
        .args(["--compatibility", "windows", "--no-rename"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cafe.txt"))
        .stdout(predicate::str::contains("naive(q).md"))
        .stdout(predicate::str::contains("Directories:"))
        .stdout(predicate::str::contains("report.txt").not());

    assert!(dir.path().join("café.txt").exists());
    assert!(dir.path().join("Übersicht").exists());
}

#[test]
fn test_skip_confirmation_renames_whole_tree() {
    let dir = setup_test_directory();

    cmd()
        .arg(dir.path())
        .args(["-c", "windows", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 3 of 3 entries."));

    assert!(dir.path().join("cafe.txt").is_file());
    assert!(dir.path().join("report.txt").is_file());
    assert!(dir.path().join("Ubersicht").join("naive(q).md").is_file());
    assert!(!dir.path().join("Übersicht").exists());
}

#[test]
fn test_flat_and_exclude_directories() {
    let dir = setup_test_directory();

    cmd()
        .arg(dir.path())
        .args(["--flat", "--exclude-directories", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 1 of 1 entries."));

    assert!(dir.path().join("cafe.txt").is_file());
    assert!(dir.path().join("Übersicht").join("naïve?.md").is_file());
}

#[test]
fn test_declining_confirmation_changes_nothing() {
    let dir = setup_test_directory();

    cmd()
        .arg(dir.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));

    assert!(dir.path().join("café.txt").exists());
}

#[test]
fn test_accepting_confirmation_from_stdin() {
    let dir = setup_test_directory();

    cmd()
        .arg(dir.path().join("café.txt"))
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(dir.path().join("cafe.txt").is_file());
}

#[test]
fn test_nothing_to_rename() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("report.txt"), "plain").unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to rename."));
}

#[test]
fn test_json_output() {
    let dir = setup_test_directory();

    let output = cmd()
        .arg(dir.path())
        .args(["--json", "--flat"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["files"].as_array().unwrap().len(), 1);
    assert_eq!(value["dirs"].as_array().unwrap().len(), 1);
    assert!(dir.path().join("café.txt").exists());
}

#[test]
fn test_invalid_platform() {
    let dir = setup_test_directory();

    cmd()
        .arg(dir.path())
        .args(["-c", "amiga", "-n"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid platform 'amiga'"));
}

#[test]
fn test_missing_path() {
    cmd()
        .arg("/missing/path")
        .arg("-n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn test_conflicting_replacements_file() {
    let dir = setup_test_directory();
    let config = dir.path().join("replacements.json");
    fs::write(&config, r#"{ "?": "*" }"#).unwrap();

    cmd()
        .arg(dir.path().join("Übersicht"))
        .args(["-c", "windows", "-n", "-r"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("contains a forbidden character"));
}

#[test]
fn test_custom_replacements_file() {
    let dir = setup_test_directory();
    let config = dir.path().join("replacements.json");
    fs::write(&config, r#"{ "?": "" }"#).unwrap();

    cmd()
        .arg(dir.path().join("Übersicht"))
        .args(["-c", "windows", "-y", "-r"])
        .arg(&config)
        .assert()
        .success();

    assert!(dir.path().join("Ubersicht").join("naive.md").is_file());
}

#[test]
fn test_collisions_are_reported_and_skipped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("é.txt"), "1").unwrap();
    fs::write(dir.path().join("è.txt"), "2").unwrap();

    cmd()
        .arg(dir.path())
        .arg("-y")
        .assert()
        .success()
        .stderr(predicate::str::contains("will be skipped"))
        .stdout(predicate::str::contains("Renamed 0 of 2 entries."));

    assert!(!dir.path().join("e.txt").exists());
}
