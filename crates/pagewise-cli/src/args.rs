use std::path::PathBuf;

use clap::Parser;

use crate::renderer::OutputMode;

/// Page through the lines of a text file
///
/// Each line of the input becomes one item. The navigation bar below every
/// page names the command that shows the neighbouring pages, so the output
/// can be driven by re-running `pw` with another page number.
#[derive(Parser)]
#[command(version, about, name = "pw")]
pub struct Args {
    /// File to page through, or `-` for standard input
    pub file: PathBuf,

    /// Page to show, starting at 1
    #[arg(default_value_t = 1)]
    pub page: usize,

    /// Heading shown above each page
    #[arg(long)]
    pub header: Option<String>,

    /// Number of lines per page. Defaults to 10
    #[arg(short = 'n', long)]
    pub page_size: Option<usize>,

    /// Command prefix used by the navigation controls. Defaults to
    /// `pw <FILE>`
    #[arg(long)]
    pub command: Option<String>,

    /// Path to a JSON config file. Defaults to
    /// $XDG_CONFIG_HOME/pagewise/config.json
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the styled document as JSON
    #[arg(long, conflicts_with = "no_color")]
    pub json: bool,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.no_color {
            OutputMode::Plain
        } else {
            OutputMode::Rich
        }
    }

    /// The command navigation controls issue when none is configured.
    pub fn default_command(&self) -> String {
        format!("pw {}", self.file.display())
    }
}
