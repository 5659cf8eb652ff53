//! Tests for settings file loading.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_history::Settings;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "log_file = \"game.log\"").expect("write");
    writeln!(file, "log_filter = \"debug\"").expect("write");
    writeln!(file, "history_ascending = false").expect("write");

    let settings = Settings::load_or_default(file.path()).expect("valid file");
    assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
    assert_eq!(settings.log_filter(), "debug");
    assert!(!*settings.history_ascending());
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "history_ascending = [").expect("write");

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
