//! Word engine - pure logic for word-guessing games.
//!
//! Two rule sets share one driving interface:
//!
//! - **Hangman**: guess letters to reveal the word, or guess the whole word.
//! - **Wordle**: guess five-letter words and read per-letter feedback.
//!
//! A [`Game`] is driven with [`Game::guess`], which takes one line of input
//! and returns a structured [`Prompt`]. An active game can be written to a
//! [`SaveSlot`] and restored from it exactly once.
//!
//! # Example
//!
//! ```
//! use word_engine::{Game, GameStatus, Variant, WordList};
//!
//! let mut words = WordList::default();
//! let mut game = Game::new(Variant::Wordle, Some("tests"), None, &mut words)?;
//! game.guess("tests");
//! assert_eq!(game.status(), GameStatus::Won);
//! # Ok::<(), word_engine::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod feedback;
mod game;
mod prompt;
mod secret;
mod snapshot;
mod variant;
mod words;

pub use error::{GameError, SnapshotError, WordError};
pub use feedback::{Mark, Tile};
pub use game::{
    DEFAULT_HANGMAN_TURNS, Game, GameStatus, HangmanGame, HangmanGuess, WORDLE_TURNS, WordleGame,
};
pub use prompt::{Prompt, PromptLine};
pub use secret::{LetterRevealWord, PositionalWord, SecretWord, WORDLE_WIDTH};
pub use snapshot::{FileSaveSlot, MemorySaveSlot, SaveSlot, Snapshot};
pub use variant::Variant;
pub use words::{WordConstraint, WordList, WordSource};
