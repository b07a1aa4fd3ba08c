//! Secret words for the two game variants.
//!
//! Both kinds share the [`SecretWord`] capability: construction from an
//! explicit word or a [`WordSource`], plus a case-insensitive `check`.
//! Rendering differs per variant and lives on the concrete types.

use super::error::WordError;
use super::feedback::{Mark, Tile};
use super::words::{WordConstraint, WordSource};
use tracing::{debug, instrument};

/// Number of letters in every positional-feedback answer.
pub const WORDLE_WIDTH: usize = 5;

/// Placeholder shown for an unrevealed letter.
const HIDDEN: char = '_';

/// Behavior shared by every secret word.
pub trait SecretWord: Sized {
    /// Constraint a random answer must meet.
    const CONSTRAINT: WordConstraint;

    /// Builds a secret from an explicit word, validating it for the variant.
    ///
    /// # Errors
    ///
    /// Returns a [`WordError`] if the word is empty, contains non-letters, or
    /// has the wrong length for the variant.
    fn new(word: &str) -> Result<Self, WordError>;

    /// The uppercase answer.
    fn answer(&self) -> &str;

    /// Picks a random answer from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::NoWordsAvailable`] if the source has no
    /// qualifying word.
    fn random<S: WordSource + ?Sized>(source: &mut S) -> Result<Self, WordError> {
        let word = source.random_word(Self::CONSTRAINT)?;
        Self::new(&word)
    }

    /// Case-insensitive exact match against the answer.
    fn check(&self, candidate: &str) -> bool {
        candidate.eq_ignore_ascii_case(self.answer())
    }
}

/// Trims and uppercases a word, rejecting anything but ASCII letters.
fn normalize(word: &str) -> Result<String, WordError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(WordError::EmptyWord);
    }
    if let Some(found) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(WordError::InvalidCharacter { found });
    }
    Ok(word.to_ascii_uppercase())
}

/// Spaces out a sequence of letters: `HANG` becomes `H A N G`.
fn spaced(letters: impl Iterator<Item = char>) -> String {
    letters
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

// ─────────────────────────────────────────────────────────────
//  Letter-reveal word (Hangman)
// ─────────────────────────────────────────────────────────────

/// Hangman answer: letters are revealed as they are guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRevealWord {
    answer: String,
}

impl SecretWord for LetterRevealWord {
    const CONSTRAINT: WordConstraint = WordConstraint::AnyLength;

    #[instrument(skip(word))]
    fn new(word: &str) -> Result<Self, WordError> {
        let answer = normalize(word)?;
        debug!(len = answer.len(), "Letter-reveal word created");
        Ok(Self { answer })
    }

    fn answer(&self) -> &str {
        &self.answer
    }
}

impl LetterRevealWord {
    /// True iff every distinct answer letter appears among `guessed`.
    ///
    /// Guessed letters compare case-insensitively; extra letters are ignored.
    pub fn all_letters_revealed(&self, guessed: &[char]) -> bool {
        self.answer
            .chars()
            .all(|letter| is_guessed(letter, guessed))
    }

    /// Masked view: guessed letters shown, others as `_`, space-separated.
    pub fn render(&self, guessed: &[char]) -> String {
        spaced(self.answer.chars().map(|letter| {
            if is_guessed(letter, guessed) {
                letter
            } else {
                HIDDEN
            }
        }))
    }

    /// Unmasked view of the whole answer, space-separated.
    pub fn render_full(&self) -> String {
        spaced(self.answer.chars())
    }
}

fn is_guessed(letter: char, guessed: &[char]) -> bool {
    guessed.iter().any(|g| g.eq_ignore_ascii_case(&letter))
}

// ─────────────────────────────────────────────────────────────
//  Positional-feedback word (Wordle)
// ─────────────────────────────────────────────────────────────

/// Wordle answer: guesses are scored letter by letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalWord {
    answer: String,
}

impl SecretWord for PositionalWord {
    const CONSTRAINT: WordConstraint = WordConstraint::ExactLength(WORDLE_WIDTH);

    #[instrument(skip(word))]
    fn new(word: &str) -> Result<Self, WordError> {
        let answer = normalize(word)?;
        let actual = answer.chars().count();
        if actual != WORDLE_WIDTH {
            return Err(WordError::WrongLength {
                expected: WORDLE_WIDTH,
                actual,
            });
        }
        debug!("Positional word created");
        Ok(Self { answer })
    }

    fn answer(&self) -> &str {
        &self.answer
    }
}

impl PositionalWord {
    /// Scores `candidate` position by position.
    ///
    /// Exact matches are decided per position. Any other letter found
    /// anywhere in the answer is marked [`Mark::Present`], without counting
    /// how many times it occurs, so a repeated guess letter can be marked
    /// present more often than the answer contains it.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::WrongLength`] if `candidate` is not
    /// [`WORDLE_WIDTH`] characters long.
    pub fn evaluate(&self, candidate: &str) -> Result<[Tile; WORDLE_WIDTH], WordError> {
        let guess: Vec<char> = candidate.to_ascii_uppercase().chars().collect();
        if guess.len() != WORDLE_WIDTH {
            return Err(WordError::WrongLength {
                expected: WORDLE_WIDTH,
                actual: guess.len(),
            });
        }
        let answer: Vec<char> = self.answer.chars().collect();

        Ok(std::array::from_fn(|pos| {
            let letter = guess[pos];
            let mark = if letter == answer[pos] {
                Mark::Exact
            } else if answer.contains(&letter) {
                Mark::Present
            } else {
                Mark::Absent
            };
            Tile::scored(letter, mark)
        }))
    }

    /// A row of blank tiles for an unused turn.
    pub fn render_empty() -> [Tile; WORDLE_WIDTH] {
        [Tile::Blank; WORDLE_WIDTH]
    }

    /// Unmasked view of the whole answer, space-separated.
    pub fn render_full(&self) -> String {
        spaced(self.answer.chars())
    }
}
