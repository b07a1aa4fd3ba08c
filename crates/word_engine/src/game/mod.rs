//! Game state machines and the variant union over them.

mod hangman;
mod wordle;

pub use hangman::{DEFAULT_HANGMAN_TURNS, HangmanGame, HangmanGuess};
pub use wordle::{WORDLE_TURNS, WordleGame};

use crate::error::GameError;
use crate::prompt::Prompt;
use crate::secret::{LetterRevealWord, PositionalWord, SecretWord};
use crate::variant::Variant;
use crate::words::WordSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Where a game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Guesses are still accepted.
    Active,
    /// The word was found.
    Won,
    /// The turn budget ran out.
    Lost,
}

impl GameStatus {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// A game of either variant.
///
/// Callers drive every game through this type; variant-specific rules stay
/// inside the wrapped machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Game {
    /// Letter-reveal rules.
    Hangman(HangmanGame),
    /// Positional-feedback rules.
    Wordle(WordleGame),
}

impl Game {
    /// Starts a new game.
    ///
    /// Uses `word` as the answer when given, otherwise draws one from
    /// `source`. `turns` sets the Hangman budget (defaulting to
    /// [`DEFAULT_HANGMAN_TURNS`]); Wordle always has [`WORDLE_TURNS`].
    ///
    /// # Errors
    ///
    /// Returns a [`GameError`] if the word is invalid for the variant, the
    /// source has no suitable word, or the turn budget is zero.
    #[instrument(skip(word, source), fields(explicit_word = word.is_some()))]
    pub fn new<S: WordSource + ?Sized>(
        variant: Variant,
        word: Option<&str>,
        turns: Option<u32>,
        source: &mut S,
    ) -> Result<Self, GameError> {
        let game = match variant {
            Variant::Hangman => {
                let secret = match word {
                    Some(word) => LetterRevealWord::new(word)?,
                    None => LetterRevealWord::random(source)?,
                };
                let turns = turns.unwrap_or(DEFAULT_HANGMAN_TURNS);
                Game::Hangman(HangmanGame::new(secret, turns)?)
            }
            Variant::Wordle => {
                if let Some(turns) = turns.filter(|t| *t != WORDLE_TURNS) {
                    warn!(turns, "Wordle has a fixed turn budget, ignoring requested turns");
                }
                let secret = match word {
                    Some(word) => PositionalWord::new(word)?,
                    None => PositionalWord::random(source)?,
                };
                Game::Wordle(WordleGame::new(secret))
            }
        };
        debug!(answer = game.answer(), max_turns = game.max_turns(), "Game created");
        Ok(game)
    }

    /// Applies one line of input and returns the prompt to show next.
    pub fn guess(&mut self, input: &str) -> Prompt {
        match self {
            Game::Hangman(game) => game.guess(input),
            Game::Wordle(game) => game.guess(input),
        }
    }

    /// Returns the variant tag.
    pub fn variant(&self) -> Variant {
        match self {
            Game::Hangman(_) => Variant::Hangman,
            Game::Wordle(_) => Variant::Wordle,
        }
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        match self {
            Game::Hangman(game) => game.status(),
            Game::Wordle(game) => game.status(),
        }
    }

    /// Returns true while guesses are accepted.
    pub fn is_active(&self) -> bool {
        !self.status().is_terminal()
    }

    /// Returns the turn budget.
    pub fn max_turns(&self) -> u32 {
        match self {
            Game::Hangman(game) => game.max_turns(),
            Game::Wordle(game) => game.max_turns(),
        }
    }

    /// Turns left before the game is lost.
    pub fn turns_remaining(&self) -> u32 {
        match self {
            Game::Hangman(game) => game.turns_remaining(),
            Game::Wordle(game) => game.turns_remaining(),
        }
    }

    /// Returns the uppercase answer.
    pub fn answer(&self) -> &str {
        match self {
            Game::Hangman(game) => game.secret().answer(),
            Game::Wordle(game) => game.secret().answer(),
        }
    }

    /// The guess log as snapshot entries, in submission order.
    pub fn guess_log(&self) -> Vec<String> {
        match self {
            Game::Hangman(game) => game
                .guesses()
                .iter()
                .map(|g| g.to_log_entry())
                .collect(),
            Game::Wordle(game) => game.guesses().to_vec(),
        }
    }
}
