//! Word Games - terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::path::Path;
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use word_engine::FileSaveSlot;
use word_games::{Cli, GameConfig, GameRunner, GameSelection, InterruptListener, PromptRenderer};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?.with_overrides(&cli);
    init_tracing(config.log_file())?;

    // Installed before anything that can be interrupted
    let mut interrupts = InterruptListener::install().context("Failed to install signal handlers")?;

    let slot = FileSaveSlot::new(config.save_file());
    let game = match GameSelection::resolve(cli.command.as_ref(), &slot)
        .map_err(anyhow::Error::from)
        .and_then(|selection| selection.start(&slot, &config))
    {
        Ok(game) => game,
        Err(e) => {
            error!(error = %e, "Failed to start game");
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    let renderer = PromptRenderer::new(*config.color() && std::io::stdout().is_terminal());
    let mut runner = GameRunner::new(game, slot, renderer);

    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let code = match runner.run(input, &mut stdout, interrupts.recv()).await {
        Ok(outcome) => {
            info!(?outcome, code = outcome.exit_code(), "Exiting");
            outcome.exit_code()
        }
        Err(e) => {
            error!(error = %e, "Game loop failed");
            eprintln!("{}", e);
            1
        }
    };
    let _ = stdout.flush();

    // The blocking stdin reader would otherwise hold up runtime shutdown
    std::process::exit(code);
}

/// Sends tracing output to `log_file` so it never mixes with prompts.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,word_engine=debug,word_games=debug")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    info!("Starting Word Games");
    Ok(())
}
