use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn multab() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_multab"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn json_output() {
    let output = multab()
        .args(["--format", "json", "2", "4", "3", "5"])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["columns"], serde_json::json!([3, 4, 5]));
    assert_eq!(value["rows"][1]["label"], 3);
    assert_eq!(value["rows"][1]["cells"][1], 12);
}

#[test]
fn tsv_output() {
    multab()
        .args(["-f", "tsv", "1", "2", "-1", "0"])
        .assert()
        .success()
        .stdout("\t-1\t0\n1\t-1\t0\n2\t-2\t0\n");
}

#[test]
fn markdown_output() {
    multab()
        .args(["-f", "md", "1", "1", "1", "2"])
        .assert()
        .success()
        .stdout("| × | 1 | 2 |\n|---:|---:|---:|\n| 1 | 1 | 2 |\n");
}

#[test]
fn yaml_output() {
    multab()
        .args(["-f", "yaml", "1", "1", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("columns:").and(predicate::str::contains("rowStart: 1")));
}

#[test]
fn html_output_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("table.html");

    multab()
        .args(["-f", "html", "-o"])
        .arg(&path)
        .args(["2", "3", "4", "4"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&path).expect("file written");
    assert!(html.starts_with("<table aria-label=\"Multiplication Table\">"));
    assert!(html.contains("<tr><th></th><th>4</th></tr>"));
    assert!(html.contains("<tr><th>3</th><td>12</td></tr>"));
}

#[test]
fn rejected_input_leaves_no_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("table.csv");

    multab()
        .args(["-f", "csv", "-o"])
        .arg(&path)
        .args(["5", "1", "1", "1"])
        .assert()
        .code(1);

    assert!(!path.exists());
}
