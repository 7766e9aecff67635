use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".aula").join("config.json")
}

/// A port nothing listens on, for deterministic connection failures.
const DEAD_URL: &str = "http://127.0.0.1:1";

const BINARY_NAME: &str = "aula-cli";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Setting a default grade should create the config file.
fn set_grade_command_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    // Ensure the file does not exist initially
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-grade")
        .arg("2")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Default grade saved"));

    // Confirm the file was created and holds the grade
    assert!(config_path.exists());
    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("\"grade\": \"2\""));
}

#[test]
/// Clear-config command should delete an existing config file.
fn clear_config_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("clear-config")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Clearing configuration"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
/// A question fetch against a dead host shows the static error message and
/// exits non-zero.
fn question_failure_prints_static_message() {
    let tmp = temp_config_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("question")
        .arg("--grade")
        .arg("1")
        .arg("--question-url")
        .arg(DEAD_URL)
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("Error al obtener pregunta."));
}

#[test]
/// Dashboard actions against a dead host fail with a typed error, not a
/// panic.
fn data_failure_exits_nonzero() {
    let tmp = temp_config_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("data")
        .arg("--dashboard-url")
        .arg(DEAD_URL)
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("Failed to load data."));
}

#[test]
#[ignore] // This requires a live backend on localhost:5000.
fn analyze_prints_pretty_report() {
    let tmp = temp_config_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("analyze")
        .env("HOME", tmp.path())
        .assert()
        .success();
}
