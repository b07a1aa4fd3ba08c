//! The input/prompt loop.

use crate::render::PromptRenderer;
use crate::signals::Interrupt;
use std::future::Future;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, error, info, instrument, warn};
use word_engine::{Game, GameStatus, SaveSlot, SnapshotError};

/// Exit codes for signal-terminated runs are this plus the signal number.
pub const EXIT_SIGNAL_BASE: i32 = 128;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The game reached a terminal state.
    Finished(GameStatus),
    /// An interrupt arrived; the game was saved.
    Interrupted(Interrupt),
    /// Input ended before the game did; the game was saved.
    InputClosed,
}

impl RunOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Finished(_) => 0,
            Self::Interrupted(signal) => EXIT_SIGNAL_BASE + signal.signal_number(),
            Self::InputClosed => 1,
        }
    }
}

/// Drives one game from lines of input until it ends or is interrupted.
#[derive(Debug)]
pub struct GameRunner<S> {
    game: Game,
    slot: S,
    renderer: PromptRenderer,
}

impl<S: SaveSlot> GameRunner<S> {
    /// Creates a runner over `game`, saving into `slot` when stopped early.
    pub fn new(game: Game, slot: S, renderer: PromptRenderer) -> Self {
        Self {
            game,
            slot,
            renderer,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The save slot.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Runs the loop.
    ///
    /// The initial prompt is shown first. Each input line is one guess. If
    /// `interrupt` completes while the game is active, the game is saved
    /// and the run ends; finished games are never saved.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or rendering a prompt fails. Once an
    /// interrupt or end of input arrives the game is saved before anything
    /// is written, and failures to save or to write the notice are logged
    /// without changing the outcome.
    #[instrument(skip_all, fields(variant = %self.game.variant()))]
    pub async fn run<R, W, F>(
        &mut self,
        input: R,
        output: &mut W,
        interrupt: F,
    ) -> io::Result<RunOutcome>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
        F: Future<Output = Interrupt>,
    {
        let mut lines = input.lines();
        tokio::pin!(interrupt);

        let mut prompt = self.game.guess("");
        loop {
            self.renderer.render(&prompt, output)?;

            if !self.game.is_active() {
                let status = self.game.status();
                info!(%status, "Game over");
                return Ok(RunOutcome::Finished(status));
            }

            tokio::select! {
                biased;

                signal = &mut interrupt => {
                    info!(%signal, "Interrupt received");
                    let notice = format!("Caught signal {}, saving game", signal.signal_number());
                    self.save_and_report(output, Some(&notice));
                    return Ok(RunOutcome::Interrupted(signal));
                }

                line = lines.next_line() => match line? {
                    Some(line) => {
                        debug!(input = %line, "Guess received");
                        prompt = self.game.guess(&line);
                    }
                    None => {
                        warn!("Input closed before game ended");
                        self.save_and_report(output, None);
                        return Ok(RunOutcome::InputClosed);
                    }
                },
            }
        }
    }

    /// Saves the game, then writes `notice` and any save failure to
    /// `output`. Output errors are logged and dropped.
    fn save_and_report<W: Write>(&self, output: &mut W, notice: Option<&str>) {
        let saved = self.game.save(&self.slot);
        match &saved {
            Ok(()) => info!(turns_remaining = self.game.turns_remaining(), "Game saved"),
            Err(e) => error!(error = %e, "Failed to save game"),
        }

        if let Err(e) = write_notice(output, notice, saved.as_ref().err()) {
            warn!(error = %e, "Failed to write to output");
        }
    }
}

fn write_notice<W: Write>(
    output: &mut W,
    notice: Option<&str>,
    save_error: Option<&SnapshotError>,
) -> io::Result<()> {
    if let Some(notice) = notice {
        writeln!(output)?;
        writeln!(output, "{}", notice)?;
    }
    if let Some(e) = save_error {
        writeln!(output, "Failed to save game: {}", e)?;
    }
    output.flush()
}
