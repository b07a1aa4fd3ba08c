//! Tests for choosing and starting games.

use clap::Parser;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use word_engine::{Game, MemorySaveSlot, SaveSlot, Variant, WordList};
use word_games::{Cli, Command, GameConfig, GameSelection};

fn saved_slot() -> MemorySaveSlot {
    let mut game = Game::new(Variant::Hangman, Some("saved"), Some(4), &mut WordList::default())
        .expect("Valid game");
    game.guess("s");
    let slot = MemorySaveSlot::new();
    game.save(&slot).expect("Save failed");
    slot
}

fn word_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "{}", contents).expect("Write failed");
    file
}

// ─────────────────────────────────────────────────────────────
//  resolve
// ─────────────────────────────────────────────────────────────

#[test]
fn test_saved_game_takes_precedence() {
    let slot = saved_slot();
    let command = Command::Wordle { word: None };
    let selection = GameSelection::resolve(Some(&command), &slot).unwrap();
    assert_eq!(selection, GameSelection::Restore);
}

#[test]
fn test_saved_game_resumes_without_command() {
    let slot = saved_slot();
    assert_eq!(
        GameSelection::resolve(None, &slot).unwrap(),
        GameSelection::Restore
    );
}

#[test]
fn test_missing_command_is_error() {
    let err = GameSelection::resolve(None, &MemorySaveSlot::new()).unwrap_err();
    assert!(err.message.contains("Please enter a game type"));
}

#[test]
fn test_hangman_command() {
    let command = Command::Hangman {
        turns: Some(4),
        word: Some("word".to_string()),
    };
    let selection = GameSelection::resolve(Some(&command), &MemorySaveSlot::new()).unwrap();
    assert_eq!(
        selection,
        GameSelection::Fresh {
            variant: Variant::Hangman,
            turns: Some(4),
            word: Some("word".to_string()),
        }
    );
}

// ─────────────────────────────────────────────────────────────
//  start
// ─────────────────────────────────────────────────────────────

#[test]
fn test_restore_consumes_save() {
    let slot = saved_slot();
    let game = GameSelection::Restore
        .start(&slot, &GameConfig::default())
        .unwrap();
    assert_eq!(game.answer(), "SAVED");
    assert_eq!(game.guess_log(), ["S"]);
    assert!(!slot.exists());
}

#[test]
fn test_restore_without_save_fails() {
    let result = GameSelection::Restore.start(&MemorySaveSlot::new(), &GameConfig::default());
    assert!(result.is_err());
}

#[test]
fn test_fixed_word_uses_configured_turns() {
    let selection = GameSelection::Fresh {
        variant: Variant::Hangman,
        turns: None,
        word: Some("rhythm".to_string()),
    };
    let game = selection
        .start(&MemorySaveSlot::new(), &GameConfig::default())
        .unwrap();
    assert_eq!(game.answer(), "RHYTHM");
    assert_eq!(game.max_turns(), 10);
}

#[test]
fn test_random_word_from_word_file() {
    let words = word_file("cat\nhangman\ncrane\n");
    let cli = Cli::try_parse_from([
        "word_games",
        "--words",
        words.path().to_str().unwrap(),
        "wordle",
    ])
    .unwrap();
    let config = GameConfig::default().with_overrides(&cli);

    let selection = GameSelection::resolve(cli.command.as_ref(), &MemorySaveSlot::new()).unwrap();
    let game = selection.start(&MemorySaveSlot::new(), &config).unwrap();
    assert_eq!(game.variant(), Variant::Wordle);
    assert_eq!(game.answer(), "CRANE");
}

#[test]
fn test_missing_word_file_fails() {
    let dir = TempDir::new().unwrap();
    let cli = Cli::try_parse_from([
        "word_games",
        "--words",
        dir.path().join("absent.txt").to_str().unwrap(),
        "hangman",
    ])
    .unwrap();
    let config = GameConfig::default().with_overrides(&cli);

    let selection = GameSelection::resolve(cli.command.as_ref(), &MemorySaveSlot::new()).unwrap();
    assert!(selection.start(&MemorySaveSlot::new(), &config).is_err());
}

#[test]
fn test_word_file_without_fitting_words_fails() {
    let words = word_file("cat\nhangman\n");
    let cli = Cli::try_parse_from([
        "word_games",
        "--words",
        words.path().to_str().unwrap(),
        "wordle",
    ])
    .unwrap();
    let config = GameConfig::default().with_overrides(&cli);

    let selection = GameSelection::resolve(cli.command.as_ref(), &MemorySaveSlot::new()).unwrap();
    let err = selection
        .start(&MemorySaveSlot::new(), &config)
        .unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to start wordle"));
}
