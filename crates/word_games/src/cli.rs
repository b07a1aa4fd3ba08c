//! Command-line interface for word_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Word Games - Hangman and Wordle in the terminal
///
/// A saved game in the working directory is always resumed first; the
/// command is only needed to start a new game.
#[derive(Parser, Debug)]
#[command(name = "word_games")]
#[command(about = "Play Hangman or Wordle in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: word_games.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Word list file, one word per line
    #[arg(long)]
    pub words: Option<PathBuf>,

    /// Save file used when the game is interrupted
    #[arg(long)]
    pub save_file: Option<PathBuf>,

    /// Log file for tracing output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print prompts as plain text without colors
    #[arg(long)]
    pub no_color: bool,

    /// Game to start
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available games
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Guess letters to reveal a hidden word
    Hangman {
        /// Number of turns (default from config, or 10)
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        turns: Option<u32>,

        /// Secret word (random from the word list if omitted)
        word: Option<String>,
    },

    /// Guess a five letter word in five turns
    Wordle {
        /// Secret word (random five letter word if omitted)
        word: Option<String>,
    },
}
