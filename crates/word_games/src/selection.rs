//! Choosing between resuming a saved game and starting a new one.

use crate::cli::Command;
use crate::config::{ConfigError, GameConfig};
use crate::words_file::load_word_list;
use anyhow::{Context, Result};
use tracing::{info, instrument};
use word_engine::{Game, SaveSlot, Variant, WordList};

/// What the process should play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSelection {
    /// Resume the game in the save slot.
    Restore,
    /// Start a new game.
    Fresh {
        /// Which rule set.
        variant: Variant,
        /// Turn budget, Hangman only.
        turns: Option<u32>,
        /// Fixed secret word, otherwise drawn from the word list.
        word: Option<String>,
    },
}

impl GameSelection {
    /// Picks the game to play. A saved game takes precedence over `command`.
    #[instrument(skip(slot))]
    pub fn resolve<S: SaveSlot + ?Sized>(
        command: Option<&Command>,
        slot: &S,
    ) -> Result<Self, ConfigError> {
        if slot.exists() {
            if command.is_some() {
                info!("Saved game found, ignoring requested game");
            }
            return Ok(Self::Restore);
        }

        match command {
            None => Err(ConfigError::new(
                "Please enter a game type: hangman or wordle",
            )),
            Some(Command::Hangman { turns, word }) => Ok(Self::Fresh {
                variant: Variant::Hangman,
                turns: *turns,
                word: word.clone(),
            }),
            Some(Command::Wordle { word }) => Ok(Self::Fresh {
                variant: Variant::Wordle,
                turns: None,
                word: word.clone(),
            }),
        }
    }

    /// Builds the game. Restoring consumes the save.
    #[instrument(skip(slot, config))]
    pub fn start<S: SaveSlot + ?Sized>(self, slot: &S, config: &GameConfig) -> Result<Game> {
        match self {
            Self::Restore => {
                let game = Game::restore(slot).context("Failed to restore saved game")?;
                info!(variant = %game.variant(), turns_remaining = game.turns_remaining(), "Saved game restored");
                Ok(game)
            }
            Self::Fresh {
                variant,
                turns,
                word,
            } => {
                let mut words = match &word {
                    Some(_) => WordList::default(),
                    None => load_word_list(config.words_file())?,
                };
                let turns = match variant {
                    Variant::Hangman => Some(turns.unwrap_or(*config.hangman_turns())),
                    Variant::Wordle => turns,
                };
                let game = Game::new(variant, word.as_deref(), turns, &mut words)
                    .with_context(|| format!("Failed to start {}", variant))?;
                info!(%variant, max_turns = game.max_turns(), "New game started");
                Ok(game)
            }
        }
    }
}
