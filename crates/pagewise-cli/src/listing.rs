//! Turning input text into pageable items.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use pagewise_core::{Colour, Fragment, Style};

/// One line of the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the input.
    pub number: usize,
    pub text: String,
}

/// Read `path` (or stdin for `-`) into numbered lines.
pub fn read_lines(path: &Path) -> Result<Vec<Line>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read standard input")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    Ok(parse_lines(&content))
}

fn parse_lines(content: &str) -> Vec<Line> {
    content
        .lines()
        .enumerate()
        .map(|(index, text)| Line {
            number: index + 1,
            text: text.to_string(),
        })
        .collect()
}

/// Render a line as `<n>. <text>` with a bold line number.
pub fn line_fragment(line: &Line) -> Fragment {
    Fragment::text(format!("{}. ", line.number))
        .styled(Style::coloured(Colour::Info).with_bold(true))
        .append(Fragment::text(line.text.clone()))
}
