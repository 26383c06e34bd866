//! End-to-end tests for the binary: recalculation commands, config
//! handling, and JSON output. Network-backed commands are not exercised here.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VALID_CONFIG: &str = r#"
[provider]
api_url = "https://api.the-odds-api.com"
sport_key = "soccer_epl"

[engine]
reference_bookmaker = "betfair_ex_eu"
"#;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("layline.toml");
    std::fs::write(&path, content).unwrap();
    path
}

fn layline(config: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("layline").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn lay_prints_the_priced_slip() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, VALID_CONFIG);

    layline(&config)
        .args(["lay", "--back", "2.00", "--lay", "1.90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("108.11"))
        .stdout(predicate::str::contains("97.30"))
        .stdout(predicate::str::contains("2.70"))
        .stdout(predicate::str::contains("102.70"));
}

#[test]
fn lay_honors_explicit_stake_and_commission() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, VALID_CONFIG);

    layline(&config)
        .args([
            "lay",
            "--stake",
            "200",
            "--commission",
            "0.05",
            "--back",
            "2.00",
            "--lay",
            "1.90",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("216.22"))
        .stdout(predicate::str::contains("102.70"));
}

#[test]
fn dutch_prints_the_priced_slip() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, VALID_CONFIG);

    layline(&config)
        .args(["dutch", "2.10", "3.30", "4.10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("214.86"))
        .stdout(predicate::str::contains("-4.86"))
        .stdout(predicate::str::contains("97.74"));
}

#[test]
fn json_flag_emits_parseable_output() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, VALID_CONFIG);

    let output = layline(&config)
        .args(["--json", "lay", "--back", "2.00", "--lay", "1.90"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["pricing"]["rating"], serde_json::json!("102.70"));
    assert_eq!(value["pricing"]["lay_stake"], serde_json::json!("108.11"));
}

#[test]
fn back_price_at_or_below_one_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, VALID_CONFIG);

    layline(&config)
        .args(["lay", "--back", "1.00", "--lay", "1.90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than 1.0"));
}

#[test]
fn missing_config_file_fails_with_a_message() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("nonexistent.toml");

    layline(&config)
        .args(["lay", "--back", "2.00", "--lay", "1.90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn invalid_config_values_fail_validation() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        &format!("{VALID_CONFIG}default_stake = -5\n"),
    );

    layline(&config)
        .args(["lay", "--back", "2.00", "--lay", "1.90"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("engine.default_stake"));
}

#[test]
fn config_validate_reports_ok_for_a_valid_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, VALID_CONFIG);

    layline(&config)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration OK"));
}

#[test]
fn config_show_round_trips_the_loaded_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, VALID_CONFIG);

    layline(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reference_bookmaker"))
        .stdout(predicate::str::contains("betfair_ex_eu"));
}
