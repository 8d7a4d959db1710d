//! End-to-end tests for the ansi-replay binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with an empty HOME so no user config is picked up.
fn ansi_replay(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ansi-replay"));
    cmd.env("HOME", home.path()).env_remove("ANSI_REPLAY_LOG");
    cmd
}

#[test]
fn replays_stdin_as_plain_text_when_piped() {
    let home = TempDir::new().unwrap();
    ansi_replay(&home)
        .write_stdin("\x1b[32m[  ] 0%\r[==] 100%\x1b[0m\r\ndone\r\n\r\n")
        .assert()
        .success()
        .stdout("[==] 100%\ndone\n");
}

#[test]
fn replays_file_argument() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("session.log");
    fs::write(&input, "first\r\nsecond\x1b[1A\rFIRST").unwrap();

    ansi_replay(&home)
        .arg(&input)
        .assert()
        .success()
        .stdout("FIRST\nsecond\n");
}

#[test]
fn dash_reads_stdin() {
    let home = TempDir::new().unwrap();
    ansi_replay(&home)
        .arg("-")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn ansi_format() {
    let home = TempDir::new().unwrap();
    ansi_replay(&home)
        .args(["--format", "ansi"])
        .write_stdin("\x1b[1mbold")
        .assert()
        .success()
        .stdout("\x1b[0;1mbold\x1b[0m\n");
}

#[test]
fn ansi_format_without_hyperlinks() {
    let home = TempDir::new().unwrap();
    ansi_replay(&home)
        .args(["--format", "ansi", "--no-hyperlinks"])
        .write_stdin("\x1b]8;;http://x\x07link\x1b]8;;\x07")
        .assert()
        .success()
        .stdout("\x1b[0mlink\x1b[0m\n");
}

#[test]
fn json_format() {
    let home = TempDir::new().unwrap();
    let output = ansi_replay(&home)
        .args(["--format", "json"])
        .write_stdin("\x1b[31mred")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["lines"][0]["chunks"][0]["text"], "red");
    assert_eq!(value["lines"][0]["chunks"][0]["style"]["foreground"], "red");
}

#[test]
fn raw_discipline_keeps_trailing_lines() {
    let home = TempDir::new().unwrap();
    ansi_replay(&home)
        .args(["--discipline", "raw", "--chunk-size", "1"])
        .write_stdin("a\r\n\r\n")
        .assert()
        .success()
        .stdout("a\n\n\n");
}

#[test]
fn multibyte_input_survives_one_byte_chunks() {
    let home = TempDir::new().unwrap();
    ansi_replay(&home)
        .args(["--chunk-size", "1"])
        .write_stdin("日本\x1b[1D語 🇺🇸")
        .assert()
        .success()
        .stdout("日 語 🇺🇸\n");
}

#[test]
fn config_file_sets_defaults() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("replay.toml");
    fs::write(&config, "[render]\nformat = \"ansi\"\n").unwrap();

    ansi_replay(&home)
        .arg("--config")
        .arg(&config)
        .write_stdin("x")
        .assert()
        .success()
        .stdout("\x1b[0mx\x1b[0m\n");
}

#[test]
fn flags_override_config_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("replay.toml");
    fs::write(&config, "[render]\nformat = \"ansi\"\n").unwrap();

    ansi_replay(&home)
        .arg("--config")
        .arg(&config)
        .args(["--format", "plain"])
        .write_stdin("\x1b[1mx")
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn default_config_location_is_used() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config").join("ansi-replay");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[render]\nformat = \"json\"\n").unwrap();

    ansi_replay(&home)
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"lines\""));
}

#[test]
fn zero_chunk_size_fails() {
    let home = TempDir::new().unwrap();
    ansi_replay(&home)
        .args(["--chunk-size", "0"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("chunk_size must be at least 1"));
}

#[test]
fn missing_file_fails() {
    let home = TempDir::new().unwrap();
    ansi_replay(&home)
        .arg(home.path().join("nope.log"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn verbose_logs_to_stderr() {
    let home = TempDir::new().unwrap();
    ansi_replay(&home)
        .args(["-v"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("x\n")
        .stderr(predicate::str::contains("Replay finished"));
}

#[test]
fn empty_input_prints_nothing() {
    let home = TempDir::new().unwrap();
    ansi_replay(&home)
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn help_mentions_options() {
    let home = TempDir::new().unwrap();
    ansi_replay(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--discipline")
                .and(predicate::str::contains("--chunk-size"))
                .and(predicate::str::contains("--no-hyperlinks")),
        );
}
