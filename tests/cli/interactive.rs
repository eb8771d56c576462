use assert_cmd::Command;
use predicates::prelude::*;

fn multab() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_multab"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn each_line_renders_or_reports() {
    multab()
        .args(["-i", "-f", "csv"])
        .write_stdin("1 2 1 2\n10 -5 0 0\n3 3 3 3\n")
        .assert()
        .success()
        .stdout(",1,2\n1,1,2\n2,2,4\n,3\n3,9\n")
        .stderr("error: Row start must be less than or equal to row end\n");
}

#[test]
fn interactive_rejects_positionals() {
    multab()
        .args(["-i", "1", "2", "3", "4"])
        .assert()
        .code(2);
}

#[test]
fn verbose_logging_goes_to_stderr() {
    multab()
        .args(["-i", "-v", "-f", "csv"])
        .write_stdin("0 0 0 0\n")
        .assert()
        .success()
        .stdout(",0\n0,0\n")
        .stderr(predicate::str::contains("rendering 1x1 table"));
}

#[test]
fn blank_comma_field_builds_no_table() {
    multab()
        .args(["-i", "-f", "csv"])
        .write_stdin("1,,3,4\n1,2,3,4\n")
        .assert()
        .success()
        .stdout(",3,4\n1,3,4\n2,6,8\n")
        .stderr("error: Please enter an end value for rows\n");
}
