use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn tally() -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_bad_store_op_shows_syntax() {
    tally()
        .args(["store", "put:a=1,2", "frobnicate:a"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("put:KEY=VALUE,NEXT"));
}

#[test]
fn test_bad_record_is_user_error() {
    tally()
        .args(["store", "put:a=five,8"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("VALUE,NEXT"));
}

#[test]
fn test_checked_overflow_fails() {
    tally()
        .args(["accumulate", "--checked", "9223372036854775807", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--checked"));
}

#[test]
fn test_unchecked_overflow_wraps() {
    tally()
        .args(["accumulate", "9223372036854775807", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-9223372036854775808"));
}

#[test]
fn test_non_integer_delta_is_usage_error() {
    tally().args(["accumulate", "five"]).assert().code(2);
}

#[test]
fn test_missing_config_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();

    tally()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("demo")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key() {
    tally()
        .args(["config", "get", "nope.nothing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_verbose_error_has_no_hint() {
    tally()
        .args(["-v", "store", "bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}

#[test]
fn test_unknown_output_format_in_config() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[output]\nformat = \"xml\"").unwrap();

    tally()
        .arg("--config")
        .arg(file.path())
        .args(["accumulate", "5"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration error"));
}
