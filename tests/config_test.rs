//! Integration tests for Settings config loading.
//!
//! These tests pass an explicit local config file from a temp directory.
//! `WASTELAND_*` overrides live in `config_env_test.rs`, a separate binary,
//! so the variables it sets never leak into these tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use wasteland::application::services::Fixture;
use wasteland::application::ApplicationError;
use wasteland::config::{default_fixtures, Settings};

#[test]
fn given_no_overrides_when_defaulting_then_uses_reference_fixtures() {
    // Act
    let settings = Settings::default();

    // Assert
    assert_eq!(settings.start, "AAA");
    assert_eq!(settings.terminal, "ZZZ");
    assert_eq!(settings.max_steps, None);
    assert_eq!(settings.data_dir, PathBuf::from("data"));
    let expected: Vec<u64> = settings.fixtures.iter().map(|f| f.expected).collect();
    assert_eq!(expected, vec![2, 6, 22411]);
}

#[test]
fn given_local_config_when_load_then_overrides_scalars_and_fixtures() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("wasteland.toml");
    fs::write(
        &config_path,
        r#"
start = "11A"
terminal = "11Z"
max_steps = 500

[[fixtures]]
name = "Ghost"
file = "ghost.txt"
expected = 6
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&config_path)).expect("load settings");

    // Assert
    assert_eq!(settings.start, "11A");
    assert_eq!(settings.terminal, "11Z");
    assert_eq!(settings.max_steps, Some(500));
    assert_eq!(settings.fixtures, vec![Fixture::new("Ghost", "ghost.txt", 6)]);
}

#[test]
fn given_local_config_without_fixtures_when_load_then_keeps_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("wasteland.toml");
    fs::write(&config_path, "max_steps = 10\n").unwrap();

    // Act
    let settings = Settings::load(Some(&config_path)).expect("load settings");

    // Assert
    assert_eq!(settings.max_steps, Some(10));
    assert_eq!(settings.fixtures, default_fixtures());
}

#[test]
fn given_data_dir_with_env_var_when_load_then_expands_it() {
    // Arrange
    let temp = TempDir::new().unwrap();
    std::env::set_var("PUZZLE_ROOT_FOR_CONFIG_TEST", temp.path());
    let config_path = temp.path().join("wasteland.toml");
    fs::write(
        &config_path,
        "data_dir = \"$PUZZLE_ROOT_FOR_CONFIG_TEST/puzzles\"\n",
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&config_path)).expect("load settings");

    // Assert
    assert_eq!(settings.data_dir, temp.path().join("puzzles"));
}

#[test]
fn given_blank_label_in_local_config_when_load_then_config_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("wasteland.toml");
    fs::write(&config_path, "terminal = \"   \"\n").unwrap();

    // Act
    let result = Settings::load(Some(&config_path));

    // Assert
    match result {
        Err(ApplicationError::Config { message }) => {
            assert!(message.contains("terminal"), "message: {}", message)
        }
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
fn given_missing_explicit_config_when_load_then_config_error() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("absent.toml");

    let result = Settings::load(Some(&config_path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_invalid_toml_when_load_then_config_error_names_file() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("wasteland.toml");
    fs::write(&config_path, "start = [unterminated\n").unwrap();

    // Act
    let result = Settings::load(Some(&config_path));

    // Assert
    match result {
        Err(ApplicationError::Config { message }) => {
            assert!(message.contains("wasteland.toml"), "message: {}", message)
        }
        other => panic!("expected Config error, got {:?}", other),
    }
}
