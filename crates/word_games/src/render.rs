//! Terminal rendering of prompts.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, PrintStyledContent, StyledContent, Stylize, style},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use tracing::instrument;
use word_engine::{Mark, Prompt, PromptLine, Tile};

/// Writes prompts to a terminal or any other writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptRenderer {
    color: bool,
}

impl PromptRenderer {
    /// Creates a renderer; `color` enables screen clearing and colored tiles.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Plain text, no escape sequences.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Colored tiles with screen clearing.
    pub fn colored() -> Self {
        Self::new(true)
    }

    /// Writes one prompt and flushes.
    #[instrument(skip_all, fields(color = self.color, lines = prompt.lines().len()))]
    pub fn render<W: Write>(&self, prompt: &Prompt, out: &mut W) -> io::Result<()> {
        if !self.color {
            write!(out, "{}", prompt)?;
            return out.flush();
        }

        if prompt.clear_screen() {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        for line in prompt.lines() {
            match line {
                PromptLine::Text(text) => queue!(out, Print(text), Print("\n"))?,
                PromptLine::Blank => queue!(out, Print("\n"))?,
                PromptLine::Tiles(row) => {
                    for tile in row {
                        queue!(out, PrintStyledContent(styled_tile(*tile)))?;
                    }
                    queue!(out, Print("\n"))?;
                }
            }
        }
        out.flush()
    }
}

fn styled_tile(tile: Tile) -> StyledContent<String> {
    match tile {
        Tile::Blank => style("   ".to_string()).on(Color::DarkGrey),
        Tile::Scored { letter, mark } => {
            let cell = style(format!(" {} ", letter)).with(Color::White).bold();
            match mark {
                Mark::Exact => cell.on(Color::DarkGreen),
                Mark::Present => cell.on(Color::DarkYellow),
                Mark::Absent => cell.on(Color::DarkGrey),
            }
        }
    }
}
