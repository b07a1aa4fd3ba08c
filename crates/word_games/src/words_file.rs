//! Word list file loading.

use crate::config::ConfigError;
use std::path::Path;
use tracing::{info, instrument, warn};
use word_engine::WordList;

/// Reads a word list, one word per line.
///
/// Blank lines and entries with non-alphabetic characters are dropped by
/// [`WordList`]; an empty result is not an error here, the game reports it
/// when it needs a random word.
#[instrument(fields(path = %path.display()))]
pub fn load_word_list(path: &Path) -> Result<WordList, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(format!(
            "Failed to read word file {}: {}",
            path.display(),
            e
        ))
    })?;

    let words = WordList::new(content.lines());
    if words.is_empty() {
        warn!("Word file contains no usable words");
    } else {
        info!(count = words.len(), "Word list loaded");
    }
    Ok(words)
}
