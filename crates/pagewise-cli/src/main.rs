//! Pagewise CLI Application
//!
//! Pages the lines of a text file through the core paginator and prints the
//! requested page to the terminal.

mod args;
mod listing;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use listing::{line_fragment, read_lines};
use log::info;
use pagewise_core::{PagerBuilder, PagerConfig};
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let config = PagerConfig::load(args.config.as_deref()).context("Failed to load config")?;
    let lines = read_lines(&args.file)?;

    let mut builder = PagerBuilder::new(args.default_command())
        .with_config(&config)
        .with_header(args.header.as_deref());
    if let Some(page_size) = args.page_size {
        builder = builder.with_page_size(page_size);
    }
    if let Some(command) = &args.command {
        builder = builder.with_command(command.as_str());
    }

    let pager = builder
        .build(&lines, line_fragment)
        .context("Invalid pager settings")?;

    info!(
        "Paging {} lines from {} ({} pages)",
        lines.len(),
        args.file.display(),
        pager.total_pages()
    );

    let mut renderer = TerminalRenderer::new(args.output_mode());
    pager.send_page(args.page, &mut renderer);

    Ok(())
}
