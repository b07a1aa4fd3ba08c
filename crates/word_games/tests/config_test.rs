//! Tests for configuration and command-line parsing.

use clap::Parser;
use std::path::Path;
use tempfile::TempDir;
use word_games::{Cli, Command, GameConfig};

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("word_games.toml");
    std::fs::write(&path, contents).expect("Write failed");
    path
}

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(config.words_file(), Path::new("words.txt"));
    assert_eq!(config.save_file(), Path::new("game_save.json"));
    assert_eq!(config.log_file(), Path::new("word_games.log"));
    assert_eq!(*config.hangman_turns(), 10);
    assert!(*config.color());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "hangman_turns = 6\ncolor = false\n");

    let config = GameConfig::from_file(&path).unwrap();
    assert_eq!(*config.hangman_turns(), 6);
    assert!(!*config.color());
    assert_eq!(config.save_file(), Path::new("game_save.json"));
}

#[test]
fn test_zero_turns_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "hangman_turns = 0\n");
    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("hangman_turns"));
}

#[test]
fn test_malformed_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "hangman_turns = \"many\"\n");
    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(GameConfig::load(Some(missing.as_path())).is_err());
}

#[test]
fn test_cli_overrides() {
    let cli = Cli::try_parse_from([
        "word_games",
        "--no-color",
        "--save-file",
        "elsewhere.json",
        "hangman",
        "3",
        "cat",
    ])
    .unwrap();
    assert_eq!(
        cli.command,
        Some(Command::Hangman {
            turns: Some(3),
            word: Some("cat".to_string()),
        })
    );

    let config = GameConfig::default().with_overrides(&cli);
    assert!(!*config.color());
    assert_eq!(config.save_file(), Path::new("elsewhere.json"));
    assert_eq!(config.words_file(), Path::new("words.txt"));
}

#[test]
fn test_cli_rejects_zero_turns() {
    assert!(Cli::try_parse_from(["word_games", "hangman", "0"]).is_err());
}

#[test]
fn test_cli_command_is_optional() {
    let cli = Cli::try_parse_from(["word_games"]).unwrap();
    assert_eq!(cli.command, None);
}
