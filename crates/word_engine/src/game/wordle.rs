//! Fixed-width word guessing machine (Wordle rules).

use super::GameStatus;
use crate::error::SnapshotError;
use crate::feedback::Tile;
use crate::prompt::Prompt;
use crate::secret::{PositionalWord, SecretWord, WORDLE_WIDTH};
use tracing::{debug, info, instrument};

/// Fixed turn budget for every Wordle game.
pub const WORDLE_TURNS: u32 = 5;

const WELCOME: &str = "Welcome to Wordle";
const GUESS_PROMPT: &str = "Enter a five letter word guess:";
const REMAINING: &str = "Number of guesses remaining:";
const CORRECT: &str = "You guessed the word";
const OUT_OF_TURNS: &str = "You are out of turns: game over";

/// Wordle game: five-letter guesses scored against a five-letter answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordleGame {
    secret: PositionalWord,
    guesses: Vec<String>,
    status: GameStatus,
}

impl WordleGame {
    /// Starts a game with an empty board.
    #[instrument(skip(secret))]
    pub fn new(secret: PositionalWord) -> Self {
        Self {
            secret,
            guesses: Vec::new(),
            status: GameStatus::Active,
        }
    }

    /// Rebuilds a game from a saved guess log, replaying it verbatim.
    pub(crate) fn from_log(
        secret: PositionalWord,
        max_turns: u32,
        guesses: Vec<String>,
    ) -> Result<Self, SnapshotError> {
        if max_turns != WORDLE_TURNS {
            return Err(SnapshotError::inconsistent(format!(
                "wordle turn budget must be {WORDLE_TURNS}, found {max_turns}"
            )));
        }
        if guesses.len() > WORDLE_TURNS as usize {
            return Err(SnapshotError::inconsistent(format!(
                "{} guesses exceed the budget of {WORDLE_TURNS}",
                guesses.len()
            )));
        }
        if let Some(bad) = guesses.iter().find(|g| g.chars().count() != WORDLE_WIDTH) {
            return Err(SnapshotError::inconsistent(format!(
                "wordle guess {bad:?} is not {WORDLE_WIDTH} letters"
            )));
        }

        let mut game = Self::new(secret);
        game.guesses = guesses.iter().map(|g| g.to_ascii_uppercase()).collect();
        game.status = if game.guesses.iter().any(|g| game.secret.check(g)) {
            GameStatus::Won
        } else if game.turns_remaining() == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Active
        };
        Ok(game)
    }

    /// Applies one line of input and returns the board to show next.
    ///
    /// Only input of exactly [`WORDLE_WIDTH`] characters uses a turn.
    #[instrument(skip(self, input), fields(status = ?self.status, used = self.guesses.len()))]
    pub fn guess(&mut self, input: &str) -> Prompt {
        if self.status.is_terminal() {
            debug!("Game over, guess ignored");
            return self.prompt();
        }

        let input = input.trim();
        if input.chars().count() != WORDLE_WIDTH {
            debug!(len = input.chars().count(), "Wrong length, no turn used");
            return self.prompt();
        }

        self.guesses.push(input.to_ascii_uppercase());
        self.status = if self.secret.check(input) {
            GameStatus::Won
        } else if self.turns_remaining() == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Active
        };

        if self.status.is_terminal() {
            info!(status = ?self.status, turns_used = self.guesses.len(), "Wordle game finished");
        }
        self.prompt()
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the turn budget.
    pub fn max_turns(&self) -> u32 {
        WORDLE_TURNS
    }

    /// Turns left before the game is lost.
    pub fn turns_remaining(&self) -> u32 {
        WORDLE_TURNS.saturating_sub(self.guesses.len() as u32)
    }

    /// Returns the uppercase guesses in submission order.
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Returns the secret word.
    pub fn secret(&self) -> &PositionalWord {
        &self.secret
    }

    /// One row per turn: scored rows for guesses made, blank rows after.
    pub fn board(&self) -> Vec<[Tile; WORDLE_WIDTH]> {
        (0..WORDLE_TURNS as usize)
            .map(|row| {
                self.guesses
                    .get(row)
                    .and_then(|g| self.secret.evaluate(g).ok())
                    .unwrap_or_else(PositionalWord::render_empty)
            })
            .collect()
    }

    /// Builds the prompt for the current state.
    pub fn prompt(&self) -> Prompt {
        let remaining = format!("{REMAINING} {}", self.turns_remaining());
        let mut prompt = Prompt::new().blank();
        if self.guesses.is_empty() {
            prompt = prompt.text(WELCOME).text(remaining.clone());
        }
        for row in self.board() {
            prompt = prompt.tiles(row);
        }

        match self.status {
            GameStatus::Active if self.guesses.is_empty() => prompt.text(GUESS_PROMPT),
            GameStatus::Active => prompt.text(remaining).text(GUESS_PROMPT),
            GameStatus::Won => prompt.text(CORRECT),
            GameStatus::Lost => prompt
                .text(OUT_OF_TURNS)
                .text(format!("Word: {}", self.secret.render_full())),
        }
    }
}
