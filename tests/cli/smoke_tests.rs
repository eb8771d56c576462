use assert_cmd::Command;
use predicates::prelude::*;

fn multab() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_multab"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    multab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("multab"));
}

#[test]
fn renders_default_grid() {
    multab()
        .args(["2", "4", "3", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12").and(predicate::str::contains("20")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn single_zero_cell() {
    multab()
        .args(["-f", "csv", "0", "0", "0", "0"])
        .assert()
        .success()
        .stdout(",0\n0,0\n");
}

#[test]
fn reversed_rows_are_rejected() {
    multab()
        .args(["10", "-5", "0", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("error: Row start must be less than or equal to row end\n");
}

#[test]
fn out_of_bounds_is_rejected() {
    multab()
        .args(["-50", "51", "0", "0"])
        .assert()
        .code(1)
        .stderr("error: Value must be at most 50\n");
}

#[test]
fn bound_check_runs_before_span_check() {
    multab()
        .args(["0", "101", "0", "0"])
        .assert()
        .code(1)
        .stderr("error: Value must be at most 50\n");
}

#[test]
fn span_check_with_wider_bounds() {
    multab()
        .args(["--max", "200", "0", "101", "0", "0"])
        .assert()
        .code(1)
        .stderr("error: Range between start and end values cannot exceed 100.\n");
}

#[test]
fn missing_values_are_reported() {
    multab()
        .args(["1", "2"])
        .assert()
        .code(1)
        .stderr("error: Please enter a start value for columns\n");
}

#[test]
fn non_numeric_value_is_reported() {
    multab()
        .args(["1", "two", "3", "4"])
        .assert()
        .code(1)
        .stderr("error: Please enter a valid number\n");
}

#[test]
fn inverted_limits_are_a_usage_error() {
    multab()
        .args(["--min", "5", "--max", "1", "1", "1", "1", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--min/--max"));
}
