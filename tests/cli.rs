use assert_cmd::{Command, cargo_bin_cmd};
use predicates::prelude::*;

fn degree() -> Command {
    cargo_bin_cmd!("degree")
}

// -- Help & version --

#[test]
fn help_shows_usage_and_examples() {
    degree()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Convert a temperature between Celsius and Fahrenheit")
                .and(predicate::str::contains("Examples:")),
        );
}

#[test]
fn version_shows_version() {
    degree()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// -- Conversions --

#[test]
fn celsius_converts_with_default_precision() {
    degree()
        .args(["-c", "25"])
        .assert()
        .success()
        .stdout("25.0°C = 77.00°F\n");
}

#[test]
fn fahrenheit_converts_with_default_precision() {
    degree()
        .args(["--fahrenheit", "77"])
        .assert()
        .success()
        .stdout("77.0°F = 25.00°C\n");
}

#[test]
fn fractional_input_keeps_its_own_representation() {
    degree()
        .args(["-c", "36.6"])
        .assert()
        .success()
        .stdout("36.6°C = 97.88°F\n");
}

#[test]
fn negative_input_converts() {
    degree()
        .args(["-f", "-40"])
        .assert()
        .success()
        .stdout("-40.0°F = -40.00°C\n");
}

// -- Precision --

#[test]
fn precision_zero_drops_the_decimal_point() {
    degree()
        .args(["-c", "100", "-p", "0"])
        .assert()
        .success()
        .stdout("100.0°C = 212°F\n");
}

#[test]
fn precision_five_prints_five_digits() {
    degree()
        .args(["-c", "0", "--precision", "5"])
        .assert()
        .success()
        .stdout("0.0°C = 32.00000°F\n");
}

#[test]
fn precision_above_the_cap_is_rejected() {
    degree()
        .args(["-c", "25", "-p", "6"])
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Error: precision must be between 0 and 5, got 6")
                .and(predicate::str::contains("Usage:")),
        );
}

// -- Flag validation --

#[test]
fn both_temperature_flags_are_rejected() {
    degree()
        .args(["-c", "1", "-f", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_temperature_flag_is_rejected() {
    degree()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("required"));
}

#[test]
fn unparseable_temperature_is_rejected() {
    degree()
        .args(["-c", "warm"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn fractional_precision_is_rejected() {
    degree()
        .args(["-c", "1", "-p", "2.5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid value"));
}
