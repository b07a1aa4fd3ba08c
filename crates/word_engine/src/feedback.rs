//! Per-letter feedback for positional guesses.

use serde::{Deserialize, Serialize};

/// How a guessed letter relates to the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Right letter in the right position.
    Exact,
    /// Letter appears somewhere else in the answer.
    Present,
    /// Letter does not appear in the answer.
    Absent,
}

/// One cell of a positional board row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Unguessed cell.
    Blank,
    /// A guessed letter and its evaluation.
    Scored {
        /// The uppercase letter.
        letter: char,
        /// Its evaluation against the answer.
        mark: Mark,
    },
}

impl Tile {
    /// Creates a scored tile.
    pub fn scored(letter: char, mark: Mark) -> Self {
        Self::Scored { letter, mark }
    }

    /// Returns the letter, if any.
    pub fn letter(&self) -> Option<char> {
        match self {
            Tile::Blank => None,
            Tile::Scored { letter, .. } => Some(*letter),
        }
    }

    /// Returns the mark, if the tile was scored.
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Tile::Blank => None,
            Tile::Scored { mark, .. } => Some(*mark),
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tile::Blank => write!(f, " _ "),
            Tile::Scored {
                letter,
                mark: Mark::Exact,
            } => write!(f, "[{letter}]"),
            Tile::Scored {
                letter,
                mark: Mark::Present,
            } => write!(f, "({letter})"),
            Tile::Scored {
                letter,
                mark: Mark::Absent,
            } => write!(f, " {letter} "),
        }
    }
}
