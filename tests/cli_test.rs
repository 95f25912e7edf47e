//! CLI integration tests for argument parsing and output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Creates a test Command for the idfmt binary.
fn idfmt_cmd() -> Command {
    Command::cargo_bin("idfmt").expect("idfmt binary builds")
}

#[test]
fn test_help_flag() {
    idfmt_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--type"))
        .stdout(predicate::str::contains("--region"))
        .stdout(predicate::str::contains("--catalog"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn test_formats_credit_card() {
    idfmt_cmd()
        .args(["--type", "credit-card", "0000111122223333"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0000 1111 2222 3333"));
}

#[test]
fn test_formats_with_region() {
    idfmt_cmd()
        .args(["--type", "phone", "--region", "brazil", "911112222"])
        .assert()
        .success()
        .stdout(predicate::str::contains("91111-2222"));
}

#[test]
fn test_unmatched_value_echoes_input() {
    idfmt_cmd()
        .args(["--type", "credit-card", "00001111222233335555"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00001111222233335555"));
}

#[test]
fn test_verbose_reports_template() {
    idfmt_cmd()
        .args(["--verbose", "--type", "cpf", "--region", "brazil", "11122233300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Normalized: 11122233300"))
        .stdout(predicate::str::contains("###.###.###-##"))
        .stdout(predicate::str::contains("111.222.333-00"));
}

#[test]
fn test_normalize_subcommand() {
    idfmt_cmd()
        .args(["normalize", "--type", "phone", "+55 11 2222 3333"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+551122223333"));
}

#[test]
fn test_normalize_without_type_drops_plus() {
    idfmt_cmd()
        .args(["normalize", "+55 11 2222 3333"])
        .assert()
        .success()
        .stdout(predicate::str::contains("551122223333").and(predicate::str::contains("+").not()));
}

#[test]
fn test_custom_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("formats.json");
    fs::write(
        &path,
        r######"[{ "type": "pin", "length": 6, "format": "### ###" }]"######,
    )
    .unwrap();

    idfmt_cmd()
        .arg("--catalog")
        .arg(path.as_os_str())
        .args(["--type", "pin", "123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("123 456"));
}

#[test]
fn test_unreadable_catalog_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.json");

    idfmt_cmd()
        .arg("--catalog")
        .arg(missing.as_os_str())
        .args(["--type", "pin", "123456"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_missing_value_fails() {
    idfmt_cmd()
        .args(["--type", "phone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("VALUE is required"));
}
