//! End-to-end CLI tests
//!
//! Runs the colortally binary against temporary CSV datasets.

use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const BALANCED: &str = "\
Grade,Blue,Green,Pink,Purple,Yellow
9,4,4,4,4,4
10,3,5,4,4,4
11,5,3,4,4,4
";

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_text_report() {
    let data = write_csv(BALANCED);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("colortally");
    cmd.arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("So far, 3 students have participated."))
        .stdout(predicate::str::contains("Average per Bag: 20"))
        .stdout(predicate::str::contains("Chi-Square Statistic: 0.00"))
        .stdout(predicate::str::contains("cannot reject the null hypothesis"));
}

#[test]
fn test_tail_limits_table() {
    let data = write_csv(BALANCED);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("colortally");
    cmd.arg("--tail")
        .arg("1")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Your M&M Data (1 rows) ==="));
}

#[test]
fn test_tail_out_of_range_fails() {
    let data = write_csv(BALANCED);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("colortally");
    cmd.arg("--tail")
        .arg("4")
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_whole_data_reference_line() {
    let data = write_csv(BALANCED);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("colortally");
    cmd.arg("--whole-data")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Expected per color if all equally likely: 12.0"));
}

#[test]
fn test_json_format() {
    let data = write_csv(BALANCED);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("colortally");
    let output = cmd
        .arg("--format")
        .arg("json")
        .arg(data.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["participants"], 3);
    assert_eq!(value["test"]["verdict"], "FailToReject");
}

#[test]
fn test_csv_format() {
    let data = write_csv(BALANCED);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("colortally");
    cmd.arg("--format")
        .arg("csv")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "grade,Blue,Green,Pink,Purple,Yellow,total",
        ))
        .stdout(predicate::str::contains("10,3,5,4,4,4,20"))
        .stdout(predicate::str::contains("color,frequency"))
        .stdout(predicate::str::contains("Blue,12"));
}

#[test]
fn test_invalid_row_fails() {
    let data = write_csv("Grade,Blue,Green,Pink,Purple,Yellow\n9,1,2,-3,4,5\n");
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("colortally");
    cmd.arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid row 1"));
}

#[test]
fn test_zero_total_dataset_fails() {
    let data = write_csv("Grade,Blue,Green,Pink,Purple,Yellow\n9,0,0,0,0,0\n");
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("colortally");
    cmd.arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot compute color shares"));
}

#[test]
fn test_missing_file_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("colortally");
    cmd.arg("/nonexistent/colortally/data.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load dataset"));
}

#[test]
fn test_invalid_alpha_fails() {
    let data = write_csv(BALANCED);
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("colortally");
    cmd.arg("--alpha")
        .arg("1.5")
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("significance_level"));
}

#[test]
fn test_config_file_sets_alpha_and_tail() {
    let data = write_csv(BALANCED);
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[test]\nsignificance_level = 0.01\n\n[view]\ntail = 2").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("colortally");
    cmd.arg("--config")
        .arg(config.path())
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Critical Value alpha: 0.01"))
        .stdout(predicate::str::contains("(2 rows)"));
}
