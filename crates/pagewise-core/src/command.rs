//! The textual command grammar issued by navigation controls.
//!
//! Every navigation control runs `"<command> <page>"`. The dispatch layer
//! parses that back into a [`PageCommand`] and re-invokes the listing command
//! with the requested page.

use std::{fmt, str::FromStr};

use crate::error::{PagerError, Result};

/// Build the command text that requests `page` from `command`.
pub fn page_command(command: &str, page: usize) -> String {
    format!("{command} {page}")
}

/// A parsed `"<command> <page>"` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCommand {
    /// Listing command, possibly several words (e.g. `/faction list`).
    pub command: String,
    /// Requested page, 1-based.
    pub page: usize,
}

impl PageCommand {
    pub fn new(command: impl Into<String>, page: usize) -> Self {
        Self {
            command: command.into(),
            page,
        }
    }

    /// Whether this request targets the listing command `expected`.
    pub fn matches(&self, expected: &str) -> bool {
        self.command == expected.trim()
    }
}

impl FromStr for PageCommand {
    type Err = PagerError;

    fn from_str(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let (command, page) = raw
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| {
                PagerError::invalid_input("page_command")
                    .with_reason(format!("expected '<command> <page>', got '{raw}'"))
            })?;

        let command = command.trim_end();
        if command.is_empty() {
            return Err(PagerError::invalid_input("page_command").with_reason("command is empty"));
        }

        let page = page
            .parse::<usize>()
            .ok()
            .filter(|page| *page >= 1)
            .ok_or_else(|| {
                PagerError::invalid_input("page_command")
                    .with_reason(format!("'{page}' is not a page number"))
            })?;

        Ok(Self::new(command, page))
    }
}

impl fmt::Display for PageCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&page_command(&self.command, self.page))
    }
}
