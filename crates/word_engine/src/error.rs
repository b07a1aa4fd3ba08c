//! Error types for word construction, game setup, and save snapshots.

use derive_more::{Display, Error};

/// Error raised when a secret word cannot be chosen or constructed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordError {
    /// The word source has no candidate meeting the variant's constraint.
    #[display("No words available")]
    NoWordsAvailable,

    /// The word is empty after trimming.
    #[display("Secret word must not be empty")]
    EmptyWord,

    /// The word contains a character that is not an ASCII letter.
    #[display("Secret word contains invalid character {found:?}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },

    /// The word does not have the fixed width the variant requires.
    #[display("Word must be {expected} letters long, got {actual}")]
    WrongLength {
        /// Required number of letters.
        expected: usize,
        /// Number of letters supplied.
        actual: usize,
    },
}

/// Error raised when a game cannot be set up.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The secret word could not be constructed.
    #[display("Invalid secret word: {source}")]
    Word {
        /// Underlying word error.
        source: WordError,
    },

    /// The turn budget must allow at least one guess.
    #[display("Turn budget must be at least 1")]
    ZeroTurns,
}

impl From<WordError> for GameError {
    fn from(source: WordError) -> Self {
        Self::Word { source }
    }
}

/// Error raised while saving or restoring a game snapshot.
#[derive(Debug, Display, Error)]
pub enum SnapshotError {
    /// There is no saved game to restore.
    #[display("No saved game found")]
    NoSavedGame,

    /// Only an active game can be saved.
    #[display("Game is already over and cannot be saved")]
    GameOver,

    /// Reading, writing, or removing the save file failed.
    #[display("Save file I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The save file is not valid snapshot JSON.
    #[display("Save file format error: {source}")]
    Format {
        /// Underlying serde error.
        source: serde_json::Error,
    },

    /// The snapshot parsed but describes an impossible game.
    #[display("Inconsistent saved game: {reason}")]
    Inconsistent {
        /// What was wrong with it.
        reason: String,
    },

    /// The saved word or turn budget failed game setup.
    #[display("Saved game could not be rebuilt: {source}")]
    Setup {
        /// Underlying setup error.
        source: GameError,
    },
}

impl SnapshotError {
    /// Creates an inconsistency error.
    pub fn inconsistent(reason: impl Into<String>) -> Self {
        Self::Inconsistent {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(source: serde_json::Error) -> Self {
        Self::Format { source }
    }
}

impl From<GameError> for SnapshotError {
    fn from(source: GameError) -> Self {
        Self::Setup { source }
    }
}

impl From<WordError> for SnapshotError {
    fn from(source: WordError) -> Self {
        Self::Setup {
            source: source.into(),
        }
    }
}
