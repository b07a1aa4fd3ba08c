//! Word Games - terminal Hangman and Wordle
//!
//! The application layer around [`word_engine`]:
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Selection**: resume the saved game or start the requested one
//! - **Runner**: the input/prompt loop with save-on-interrupt
//! - **Render**: plain or colored terminal output
//!
//! # Example
//!
//! ```no_run
//! use word_games::{GameRunner, PromptRenderer};
//! use word_engine::{Game, MemorySaveSlot, Variant, WordList};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let game = Game::new(Variant::Wordle, Some("crane"), None, &mut WordList::default())?;
//! let mut runner = GameRunner::new(game, MemorySaveSlot::new(), PromptRenderer::plain());
//! let outcome = runner
//!     .run(&b"react\ncrane\n"[..], &mut std::io::stdout(), std::future::pending())
//!     .await?;
//! assert_eq!(outcome.exit_code(), 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod runner;
mod selection;
mod signals;
mod words_file;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use render::PromptRenderer;
pub use runner::{EXIT_SIGNAL_BASE, GameRunner, RunOutcome};
pub use selection::GameSelection;
pub use signals::{Interrupt, InterruptListener};
pub use words_file::load_word_list;
