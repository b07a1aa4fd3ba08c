//! Letter/word guessing machine (Hangman rules).

use super::GameStatus;
use crate::error::{GameError, SnapshotError};
use crate::prompt::Prompt;
use crate::secret::{LetterRevealWord, SecretWord};
use tracing::{debug, info, instrument};

/// Turn budget used when the caller does not choose one.
pub const DEFAULT_HANGMAN_TURNS: u32 = 10;

const WELCOME: &str = "Welcome to Hangman";
const GUESS_PROMPT: &str = "Please Enter a Letter or Guess the word";
const REMAINING: &str = "Number of guesses remaining:";
const CORRECT: &str = "You guessed the word";
const INCORRECT: &str = "Incorrect guess";
const OUT_OF_TURNS: &str = "You are out of turns: game over";

/// One recorded Hangman turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HangmanGuess {
    /// A single uppercase letter.
    Letter(char),
    /// A whole-word attempt. Only the spent turn is kept, not the word.
    Word,
}

impl HangmanGuess {
    /// The entry written to a save snapshot: the letter, or `""` for a word.
    pub fn to_log_entry(self) -> String {
        match self {
            HangmanGuess::Letter(letter) => letter.to_string(),
            HangmanGuess::Word => String::new(),
        }
    }

    /// Parses a snapshot entry. Blank entries are word attempts.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Inconsistent`] for entries longer than one
    /// character.
    pub fn from_log_entry(entry: &str) -> Result<Self, SnapshotError> {
        let mut chars = entry.trim().chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(HangmanGuess::Word),
            (Some(letter), None) => Ok(HangmanGuess::Letter(letter.to_ascii_uppercase())),
            _ => Err(SnapshotError::inconsistent(format!(
                "hangman guess {entry:?} is neither a letter nor a word marker"
            ))),
        }
    }
}

/// Hangman game: letters reveal the word, whole-word guesses win outright.
///
/// Every new letter and every whole-word attempt costs one turn. Empty
/// input and repeated letters cost nothing and just re-render the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HangmanGame {
    secret: LetterRevealWord,
    max_turns: u32,
    guesses: Vec<HangmanGuess>,
    status: GameStatus,
}

impl HangmanGame {
    /// Starts a game with an empty guess log.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ZeroTurns`] if `max_turns` is zero.
    #[instrument(skip(secret))]
    pub fn new(secret: LetterRevealWord, max_turns: u32) -> Result<Self, GameError> {
        if max_turns == 0 {
            return Err(GameError::ZeroTurns);
        }
        Ok(Self {
            secret,
            max_turns,
            guesses: Vec::new(),
            status: GameStatus::Active,
        })
    }

    /// Rebuilds a game from a saved guess log, replaying it verbatim.
    pub(crate) fn from_log(
        secret: LetterRevealWord,
        max_turns: u32,
        guesses: Vec<HangmanGuess>,
    ) -> Result<Self, SnapshotError> {
        let mut game = Self::new(secret, max_turns)?;
        if guesses.len() > max_turns as usize {
            return Err(SnapshotError::inconsistent(format!(
                "{} guesses exceed the budget of {max_turns}",
                guesses.len()
            )));
        }
        game.guesses = guesses;
        game.settle(false);
        Ok(game)
    }

    /// Applies one line of input and returns the prompt to show next.
    ///
    /// Longer than one character is a whole-word guess; exactly one
    /// character is a letter guess unless it was already tried. Anything
    /// else, and any input once the game is over, changes nothing.
    /// Input is trimmed first, so `" a"` is the letter guess `A`.
    #[instrument(skip(self, input), fields(status = ?self.status, used = self.guesses.len()))]
    pub fn guess(&mut self, input: &str) -> Prompt {
        if self.status.is_terminal() {
            debug!("Game over, guess ignored");
            return self.prompt(false);
        }

        let input = input.trim();
        let mut chars = input.chars();
        let word_attempt = match (chars.next(), chars.next()) {
            (None, _) => false,
            (Some(letter), None) => {
                let letter = letter.to_ascii_uppercase();
                if self.guessed_letters().contains(&letter) {
                    debug!(%letter, "Duplicate letter, no turn used");
                } else {
                    self.guesses.push(HangmanGuess::Letter(letter));
                    self.settle(false);
                }
                false
            }
            _ => {
                self.guesses.push(HangmanGuess::Word);
                let solved = self.secret.check(input);
                self.settle(solved);
                true
            }
        };

        if self.status.is_terminal() {
            info!(status = ?self.status, turns_used = self.guesses.len(), "Hangman game finished");
        }
        self.prompt(word_attempt)
    }

    /// Recomputes the status after the log changed.
    fn settle(&mut self, solved: bool) {
        self.status = if solved || self.secret.all_letters_revealed(&self.guessed_letters()) {
            GameStatus::Won
        } else if self.turns_remaining() == 0 {
            GameStatus::Lost
        } else {
            GameStatus::Active
        };
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the turn budget.
    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Turns left before the game is lost.
    pub fn turns_remaining(&self) -> u32 {
        self.max_turns.saturating_sub(self.guesses.len() as u32)
    }

    /// Returns the guess log in submission order.
    pub fn guesses(&self) -> &[HangmanGuess] {
        &self.guesses
    }

    /// Returns the letters guessed so far, in submission order.
    pub fn guessed_letters(&self) -> Vec<char> {
        self.guesses
            .iter()
            .filter_map(|g| match g {
                HangmanGuess::Letter(letter) => Some(*letter),
                HangmanGuess::Word => None,
            })
            .collect()
    }

    /// Returns the guessed letters sorted for display.
    pub fn sorted_letters(&self) -> Vec<char> {
        let mut letters = self.guessed_letters();
        letters.sort_unstable();
        letters
    }

    /// Returns the secret word.
    pub fn secret(&self) -> &LetterRevealWord {
        &self.secret
    }

    /// Builds the prompt for the current state.
    ///
    /// `word_attempt` says whether the last input was a whole-word guess.
    pub fn prompt(&self, word_attempt: bool) -> Prompt {
        let masked = self.secret.render(&self.guessed_letters());
        let remaining = format!("{REMAINING} {}", self.turns_remaining());
        let prompt = Prompt::new().blank();

        if self.guesses.is_empty() {
            return prompt
                .text(WELCOME)
                .text(masked)
                .text(remaining)
                .blank()
                .text(GUESS_PROMPT);
        }

        let letters: String = self.sorted_letters().into_iter().collect();
        let guessed = format!("Guesses: {letters}");
        let word = format!("Word: {}", self.secret.render_full());

        match self.status {
            GameStatus::Won if word_attempt => prompt.text(word).text(CORRECT),
            GameStatus::Won => prompt.text(masked).text(guessed).text(CORRECT),
            GameStatus::Active => {
                let prompt = if word_attempt {
                    prompt.text(INCORRECT).blank()
                } else {
                    prompt
                };
                prompt
                    .text(masked)
                    .text(guessed)
                    .text(remaining)
                    .text(GUESS_PROMPT)
            }
            GameStatus::Lost => {
                let prompt = if word_attempt {
                    prompt.text(INCORRECT)
                } else {
                    prompt
                };
                prompt.text(masked).text(guessed).text(word).text(OUT_OF_TURNS)
            }
        }
    }
}
