//! Structured prompts returned by a guess.
//!
//! The engine never emits terminal control codes. A prompt is a list of
//! lines plus a request to clear the screen; a presentation layer decides
//! how to draw it. `Display` gives the plain-text form.

use super::feedback::Tile;

/// One line of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptLine {
    /// Plain text.
    Text(String),
    /// A row of positional feedback tiles.
    Tiles(Vec<Tile>),
    /// An empty spacer line.
    Blank,
}

/// The screen to show after a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    clear_screen: bool,
    lines: Vec<PromptLine>,
}

impl Prompt {
    /// Creates an empty prompt that asks for the screen to be cleared.
    pub fn new() -> Self {
        Self {
            clear_screen: true,
            lines: Vec::new(),
        }
    }

    /// Appends a line of text.
    pub fn text(mut self, line: impl Into<String>) -> Self {
        self.lines.push(PromptLine::Text(line.into()));
        self
    }

    /// Appends a row of tiles.
    pub fn tiles(mut self, row: impl Into<Vec<Tile>>) -> Self {
        self.lines.push(PromptLine::Tiles(row.into()));
        self
    }

    /// Appends an empty line.
    pub fn blank(mut self) -> Self {
        self.lines.push(PromptLine::Blank);
        self
    }

    /// Whether the screen should be cleared before drawing.
    pub fn clear_screen(&self) -> bool {
        self.clear_screen
    }

    /// Returns the prompt lines in order.
    pub fn lines(&self) -> &[PromptLine] {
        &self.lines
    }

    /// Returns true if the plain-text form contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.to_string().contains(needle)
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            match line {
                PromptLine::Text(text) => writeln!(f, "{text}")?,
                PromptLine::Tiles(row) => {
                    for tile in row {
                        write!(f, "{tile}")?;
                    }
                    writeln!(f)?;
                }
                PromptLine::Blank => writeln!(f)?,
            }
        }
        Ok(())
    }
}
