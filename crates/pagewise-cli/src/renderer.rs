//! Terminal rendering for styled documents
//!
//! Documents are printed with ANSI colours through termimad's crossterm
//! re-export, as plain text, or as their JSON fragment tree.

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::error;
use pagewise_core::{text::Run, Colour, Fragment, Sink};
use termimad::crossterm::style::{Attribute, Color, ContentStyle};

/// How documents are written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Rich,
    Plain,
    Json,
}

/// Terminal renderer that prints delivered documents to stdout
pub struct TerminalRenderer {
    mode: OutputMode,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Render a document to stdout
    pub fn render(&self, document: &Fragment) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(document, &mut out)?;
        out.flush().context("Failed to flush stdout")
    }

    /// Render a document to any writer
    pub fn render_to<W: Write>(&self, document: &Fragment, out: &mut W) -> Result<()> {
        match self.mode {
            OutputMode::Rich => {
                for run in document.runs() {
                    write!(out, "{}", paint(&run)).context("Failed to write output")?;
                }
                writeln!(out).context("Failed to write output")?;
            }
            OutputMode::Plain => {
                writeln!(out, "{document}").context("Failed to write output")?;
            }
            OutputMode::Json => {
                serde_json::to_writer_pretty(&mut *out, document)
                    .context("Failed to serialize document")?;
                writeln!(out).context("Failed to write output")?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(OutputMode::Rich)
    }
}

impl Sink for TerminalRenderer {
    fn deliver(&mut self, document: Fragment) {
        if let Err(e) = self.render(&document) {
            error!("Failed to print document: {e:#}");
        }
    }
}

/// Apply a run's effective style as ANSI escapes.
///
/// Clickable runs are underlined since a terminal cannot run them.
fn paint(run: &Run) -> String {
    let mut style = ContentStyle::new();
    style.foreground_color = run.style.colour.map(colour_of);
    if run.style.bold == Some(true) {
        style.attributes.set(Attribute::Bold);
    }
    if run.style.click.is_some() {
        style.attributes.set(Attribute::Underlined);
    }
    style.apply(run.text.as_str()).to_string()
}

fn colour_of(colour: Colour) -> Color {
    match colour {
        Colour::Info => Color::Yellow,
        Colour::Heading => Color::DarkCyan,
        Colour::Error => Color::Red,
        Colour::Command => Color::Cyan,
        Colour::Disabled => Color::DarkGrey,
    }
}
