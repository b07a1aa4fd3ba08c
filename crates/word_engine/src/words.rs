//! Random word supply.

use super::error::WordError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which words a variant accepts as its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordConstraint {
    /// Any non-empty word.
    AnyLength,
    /// Words with exactly this many letters.
    ExactLength(usize),
}

impl WordConstraint {
    /// Returns true if `word` satisfies the constraint.
    pub fn admits(&self, word: &str) -> bool {
        match self {
            WordConstraint::AnyLength => !word.is_empty(),
            WordConstraint::ExactLength(width) => word.chars().count() == *width,
        }
    }
}

/// Supplier of random candidate words.
pub trait WordSource {
    /// Returns one word meeting `constraint`.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::NoWordsAvailable`] if no candidate qualifies.
    fn random_word(&mut self, constraint: WordConstraint) -> Result<String, WordError>;
}

/// In-memory word list with its own random number generator.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    rng: StdRng,
}

impl WordList {
    /// Creates a word list from raw entries.
    ///
    /// Entries are trimmed and uppercased; blank entries and entries with
    /// anything other than ASCII letters are dropped.
    #[instrument(skip(words))]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, StdRng::from_entropy())
    }

    /// Creates a word list with a deterministic generator.
    pub fn with_seed<I, S>(words: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng<I, S>(words: I, rng: StdRng) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();
        debug!(count = words.len(), "Word list built");
        Self { words, rng }
    }

    /// Returns the accepted words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of accepted words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}

impl WordSource for WordList {
    #[instrument(skip(self), fields(available = self.words.len()))]
    fn random_word(&mut self, constraint: WordConstraint) -> Result<String, WordError> {
        let candidates: Vec<&String> = self
            .words
            .iter()
            .filter(|w| constraint.admits(w))
            .collect();
        let word = candidates
            .choose(&mut self.rng)
            .map(|w| (*w).clone())
            .ok_or(WordError::NoWordsAvailable)?;
        debug!(candidates = candidates.len(), "Picked random word");
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_normalized() {
        let list = WordList::new(["  apple\n", "", "co-op", "Hangs"]);
        assert_eq!(list.words(), ["APPLE", "HANGS"]);
    }

    #[test]
    fn test_exact_length_filters_candidates() {
        let mut list = WordList::with_seed(["CAT", "HORSE", "ELEPHANT"], 7);
        for _ in 0..10 {
            let word = list
                .random_word(WordConstraint::ExactLength(5))
                .expect("one candidate");
            assert_eq!(word, "HORSE");
        }
    }

    #[test]
    fn test_empty_list_has_no_words() {
        let mut list = WordList::default();
        assert_eq!(
            list.random_word(WordConstraint::AnyLength),
            Err(WordError::NoWordsAvailable)
        );
    }

    #[test]
    fn test_no_word_matches_width() {
        let mut list = WordList::with_seed(["CAT", "DOG"], 1);
        assert_eq!(
            list.random_word(WordConstraint::ExactLength(5)),
            Err(WordError::NoWordsAvailable)
        );
    }
}
