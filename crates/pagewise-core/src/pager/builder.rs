//! Builder for creating and validating Pager instances.

use log::debug;

use super::{ElementTransformer, Pager};
use crate::{
    config::{PagerConfig, DEFAULT_PAGE_SIZE},
    error::{PagerError, Result},
};

/// Builder for creating and configuring [`Pager`] instances.
#[derive(Debug, Clone)]
pub struct PagerBuilder {
    command: String,
    header: Option<String>,
    page_size: usize,
}

impl PagerBuilder {
    /// Creates a builder for the listing command `command`.
    ///
    /// `command` is the prefix navigation controls use to request another
    /// page, e.g. `/faction list` produces `/faction list 2`.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            header: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the heading shown above each page.
    ///
    /// `None` leaves the current heading untouched. An empty heading renders
    /// no header line at all.
    pub fn with_header<S: Into<String>>(mut self, header: Option<S>) -> Self {
        if let Some(header) = header {
            self.header = Some(header.into());
        }
        self
    }

    /// Replaces the listing command given to [`PagerBuilder::new`].
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Sets the number of items per page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Applies stored settings. Values already set explicitly afterwards win.
    pub fn with_config(mut self, config: &PagerConfig) -> Self {
        self.page_size = config.page_size;
        if let Some(command) = &config.command {
            self.command = command.clone();
        }
        self.with_header(config.header.as_deref())
    }

    /// Builds a pager over `items`.
    ///
    /// # Errors
    ///
    /// Returns `PagerError::InvalidInput` if the page size is zero or the
    /// command is blank.
    pub fn build<T, F>(self, items: &[T], transform: F) -> Result<Pager<'_, T, F>>
    where
        F: ElementTransformer<T>,
    {
        if self.page_size == 0 {
            return Err(PagerError::invalid_input("page_size").with_reason("must be at least 1"));
        }

        let command = self.command.trim();
        if command.is_empty() {
            return Err(PagerError::invalid_input("command").with_reason("must not be empty"));
        }

        let header = self.header.filter(|header| !header.is_empty());

        debug!(
            "Building pager for '{}' over {} items, {} per page",
            command,
            items.len(),
            self.page_size
        );

        Ok(Pager {
            command: command.to_string(),
            header,
            page_size: self.page_size,
            items,
            transform,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Fragment;

    fn to_text(item: &u32) -> Fragment {
        Fragment::text(item.to_string())
    }

    #[test]
    fn test_defaults() {
        let items = [1, 2, 3];
        let pager = PagerBuilder::new("list").build(&items, to_text).unwrap();
        assert_eq!(pager.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(pager.header(), None);
        assert_eq!(pager.command(), "list");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = PagerBuilder::new("list")
            .with_page_size(0)
            .build(&[1u32], to_text)
            .unwrap_err();
        assert!(matches!(err, PagerError::InvalidInput { ref field, .. } if field == "page_size"));
    }

    #[test]
    fn test_blank_command_rejected() {
        let err = PagerBuilder::new("   ").build(&[1u32], to_text).unwrap_err();
        assert!(matches!(err, PagerError::InvalidInput { ref field, .. } if field == "command"));
    }

    #[test]
    fn test_empty_header_is_dropped() {
        let pager = PagerBuilder::new("list")
            .with_header(Some(""))
            .build(&[1u32], to_text)
            .unwrap();
        assert_eq!(pager.header(), None);
    }

    #[test]
    fn test_config_then_override() {
        let config = PagerConfig {
            page_size: 4,
            header: Some("Warps".to_string()),
            command: Some("/warps".to_string()),
        };
        let pager = PagerBuilder::new("list")
            .with_config(&config)
            .with_page_size(2)
            .build(&[1u32, 2, 3], to_text)
            .unwrap();

        assert_eq!(pager.page_size(), 2);
        assert_eq!(pager.header(), Some("Warps"));
        assert_eq!(pager.command(), "/warps");
        assert_eq!(pager.total_pages(), 2);

        let pager = PagerBuilder::new("list")
            .with_config(&config)
            .with_command("/homes")
            .build(&[1u32], to_text)
            .unwrap();
        assert_eq!(pager.command(), "/homes");
        assert_eq!(pager.page_size(), 4);
    }
}
