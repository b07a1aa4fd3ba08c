//! Game configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use word_engine::{DEFAULT_HANGMAN_TURNS, FileSaveSlot};

/// Settings shared by every game started from this process.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Word list file, one word per line.
    #[serde(default = "default_words_file")]
    words_file: PathBuf,

    /// Single save slot for interrupted games.
    #[serde(default = "default_save_file")]
    save_file: PathBuf,

    /// Where tracing output goes.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Hangman turn budget when the command line gives none.
    #[serde(default = "default_hangman_turns")]
    hangman_turns: u32,

    /// Whether prompts are drawn with terminal colors.
    #[serde(default = "default_color")]
    color: bool,
}

fn default_words_file() -> PathBuf {
    PathBuf::from("words.txt")
}

fn default_save_file() -> PathBuf {
    PathBuf::from(FileSaveSlot::DEFAULT_FILE)
}

fn default_log_file() -> PathBuf {
    PathBuf::from("word_games.log")
}

fn default_hangman_turns() -> u32 {
    DEFAULT_HANGMAN_TURNS
}

fn default_color() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words_file: default_words_file(),
            save_file: default_save_file(),
            log_file: default_log_file(),
            hangman_turns: default_hangman_turns(),
            color: default_color(),
        }
    }
}

impl GameConfig {
    /// Config file looked up in the working directory.
    pub const DEFAULT_FILE: &'static str = "word_games.toml";

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.hangman_turns == 0 {
            return Err(ConfigError::new("hangman_turns must be at least 1"));
        }

        info!(words_file = %config.words_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, else the default file if it exists, else
    /// built-in defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(Self::DEFAULT_FILE).is_file() => Self::from_file(Self::DEFAULT_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip_all)]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(words) = &cli.words {
            self.words_file = words.clone();
        }
        if let Some(save_file) = &cli.save_file {
            self.save_file = save_file.clone();
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if cli.no_color {
            self.color = false;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
