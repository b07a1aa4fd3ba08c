//! Save snapshots and the single save slot.
//!
//! A snapshot holds everything needed to rebuild an in-progress game: the
//! variant tag, the plaintext answer, the turn budget, and the raw guess
//! log. Restoring consumes the slot, so a saved game resumes exactly once.

use crate::error::SnapshotError;
use crate::game::{Game, HangmanGame, HangmanGuess, WordleGame};
use crate::secret::{LetterRevealWord, PositionalWord, SecretWord};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Serializable form of an in-progress game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Which rules the game follows.
    pub variant: Variant,
    /// The answer, uppercase and unmasked.
    pub answer: String,
    /// Turn budget.
    pub max_turns: u32,
    /// Guess log in submission order. Hangman word attempts are `""`.
    pub guesses: Vec<String>,
}

impl Game {
    /// Captures the game for saving.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::GameOver`] if the game already ended.
    #[instrument(skip(self), fields(variant = %self.variant()))]
    pub fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        if !self.is_active() {
            return Err(SnapshotError::GameOver);
        }
        Ok(Snapshot {
            variant: self.variant(),
            answer: self.answer().to_string(),
            max_turns: self.max_turns(),
            guesses: self.guess_log(),
        })
    }

    /// Rebuilds a game from a snapshot, replaying its guess log verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer is invalid for the variant, the budget
    /// is zero or wrong, or the log does not fit the budget.
    #[instrument(skip(snapshot), fields(variant = %snapshot.variant, guesses = snapshot.guesses.len()))]
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        let Snapshot {
            variant,
            answer,
            max_turns,
            guesses,
        } = snapshot;

        let game = match variant {
            Variant::Hangman => {
                let log = guesses
                    .iter()
                    .map(|g| HangmanGuess::from_log_entry(g))
                    .collect::<Result<Vec<_>, _>>()?;
                Game::Hangman(HangmanGame::from_log(
                    LetterRevealWord::new(&answer)?,
                    max_turns,
                    log,
                )?)
            }
            Variant::Wordle => Game::Wordle(WordleGame::from_log(
                PositionalWord::new(&answer)?,
                max_turns,
                guesses,
            )?),
        };
        debug!(status = %game.status(), remaining = game.turns_remaining(), "Game rebuilt");
        Ok(game)
    }

    /// Writes the game to `slot`, replacing any previous save.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or the slot cannot be written.
    #[instrument(skip(self, slot))]
    pub fn save<S: SaveSlot + ?Sized>(&self, slot: &S) -> Result<(), SnapshotError> {
        let snapshot = self.snapshot()?;
        slot.store(&snapshot)?;
        info!(variant = %snapshot.variant, guesses = snapshot.guesses.len(), "Game saved");
        Ok(())
    }

    /// Restores the saved game from `slot` and empties the slot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::NoSavedGame`] if the slot is empty. A save
    /// that cannot be rebuilt is left in place and its error returned.
    #[instrument(skip(slot))]
    pub fn restore<S: SaveSlot + ?Sized>(slot: &S) -> Result<Self, SnapshotError> {
        let snapshot = slot.load()?;
        let game = Self::from_snapshot(snapshot)?;
        slot.clear()?;
        info!(variant = %game.variant(), "Saved game restored");
        Ok(game)
    }
}

/// A single durable location for one saved game.
pub trait SaveSlot {
    /// Returns true if a save is present.
    fn exists(&self) -> bool;

    /// Reads the saved snapshot without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::NoSavedGame`] if nothing is saved.
    fn load(&self) -> Result<Snapshot, SnapshotError>;

    /// Writes `snapshot`, replacing any previous save.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn store(&self, snapshot: &Snapshot) -> Result<(), SnapshotError>;

    /// Removes the save. Clearing an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing save cannot be removed.
    fn clear(&self) -> Result<(), SnapshotError>;
}

/// Save slot backed by a JSON file.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a save is either fully present or absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSaveSlot {
    path: PathBuf,
}

impl FileSaveSlot {
    /// Default save file name, relative to the working directory.
    pub const DEFAULT_FILE: &'static str = "game_save.json";

    /// Creates a slot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the save file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for FileSaveSlot {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FILE)
    }
}

impl SaveSlot for FileSaveSlot {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Snapshot, SnapshotError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No save file");
                return Err(SnapshotError::NoSavedGame);
            }
            Err(e) => return Err(e.into()),
        };
        let snapshot = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    #[instrument(skip(self, snapshot), fields(path = %self.path.display()))]
    fn store(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let temp = self.temp_path();
        std::fs::write(&temp, json)?;
        if let Err(e) = std::fs::rename(&temp, &self.path) {
            warn!(error = %e, "Rename failed, removing temporary save");
            let _ = std::fs::remove_file(&temp);
            return Err(e.into());
        }
        debug!("Save file written");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn clear(&self) -> Result<(), SnapshotError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Save file removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Save slot held in memory, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySaveSlot {
    snapshot: RefCell<Option<Snapshot>>,
}

impl MemorySaveSlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot already holding `snapshot`.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RefCell::new(Some(snapshot)),
        }
    }

    /// Returns a copy of the stored snapshot, if any.
    pub fn peek(&self) -> Option<Snapshot> {
        self.snapshot.borrow().clone()
    }
}

impl SaveSlot for MemorySaveSlot {
    fn exists(&self) -> bool {
        self.snapshot.borrow().is_some()
    }

    fn load(&self) -> Result<Snapshot, SnapshotError> {
        self.peek().ok_or(SnapshotError::NoSavedGame)
    }

    fn store(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        self.snapshot.replace(Some(snapshot.clone()));
        Ok(())
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        self.snapshot.replace(None);
        Ok(())
    }
}
