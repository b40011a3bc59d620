//! Splitting a collection into navigable pages.
//!
//! A [`Pager`] is built once per command invocation, renders the requested
//! page and is dropped. It borrows the items rather than copying them and
//! keeps no state between renders, so rendering the same page twice gives
//! the same document.
//!
//! # Page layout
//!
//! ```text
//! ===========[Players ]===========     header (only with a heading)
//! Alice                                 body: one transformed item per line
//! Bob
//! ============[ « < (1/3) > » ]============     footer
//! ```
//!
//! Active footer controls carry a click action running
//! `"<command> <page>"`; see [`crate::command`].
//!
//! ## Submodules
//!
//! - [`builder`]: validating construction of [`Pager`] instances
//! - `count`: page count and page window math
//! - `header`, `body`, `footer`: the three parts of a rendered page
//!
//! # Usage
//!
//! ```rust
//! use pagewise_core::{text::Fragment, PagerBuilder};
//!
//! # fn example() -> pagewise_core::Result<()> {
//! let players = vec!["Alice", "Bob", "Carol"];
//! let pager = PagerBuilder::new("/players")
//!     .with_header(Some("Players"))
//!     .with_page_size(2)
//!     .build(&players, |name: &&str| Fragment::text(*name))?;
//!
//! let mut sink: Vec<Fragment> = Vec::new();
//! pager.send_page(2, &mut sink);
//! assert!(sink[0].to_string().contains("Carol"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod builder;
mod body;
mod count;
mod footer;
mod header;


pub use builder::PagerBuilder;
pub use count::{page_window, total_pages};

use std::fmt;

use log::debug;

use crate::{
    error::{PagerError, Result},
    sink::Sink,
    text::Fragment,
};

/// Converts one item into the fragment shown for it on a page.
///
/// Implemented for every `Fn(&T) -> Fragment`. It is called once per visible
/// item per render, in collection order, and must not fail.
pub trait ElementTransformer<T>: Fn(&T) -> Fragment {}

impl<T, F> ElementTransformer<T> for F where F: Fn(&T) -> Fragment {}

/// Splits borrowed items into pages of styled output.
pub struct Pager<'a, T, F> {
    command: String,
    header: Option<String>,
    page_size: usize,
    items: &'a [T],
    transform: F,
}

impl<T, F> fmt::Debug for Pager<'_, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pager")
            .field("command", &self.command)
            .field("header", &self.header)
            .field("page_size", &self.page_size)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl<'a, T, F> Pager<'a, T, F>
where
    F: ElementTransformer<T>,
{
    /// Creates a pager with the default page size.
    pub fn new(
        command: impl Into<String>,
        header: Option<&str>,
        items: &'a [T],
        transform: F,
    ) -> Result<Self> {
        PagerBuilder::new(command)
            .with_header(header)
            .build(items, transform)
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages; zero when there are no items.
    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size)
    }

    /// Render `page` without checking that it exists.
    ///
    /// A page past the end has an empty body, but its footer is still built
    /// against the real page count.
    pub fn render_page(&self, page: usize) -> Fragment {
        let total_pages = self.total_pages();
        debug!("Rendering page {page}/{total_pages} of '{}'", self.command);

        let mut document = Fragment::empty();
        if let Some(text) = &self.header {
            document = document
                .append(header::render_header(text, total_pages))
                .append(Fragment::text("\n"));
        }

        document
            .append(body::render_body(
                self.items,
                self.page_size,
                page,
                &self.transform,
            ))
            .append(Fragment::text("\n"))
            .append(footer::render_footer(&self.command, page, total_pages))
    }

    /// Render `page` if it exists.
    ///
    /// # Errors
    ///
    /// Returns `PagerError::PageNotPositive` for page 0 and
    /// `PagerError::PageOutOfRange` for pages past the last one.
    pub fn page(&self, page: usize) -> Result<Fragment> {
        let total_pages = self.total_pages();
        if page == 0 {
            return Err(PagerError::PageNotPositive);
        }
        if page > total_pages {
            return Err(PagerError::PageOutOfRange { page, total_pages });
        }
        Ok(self.render_page(page))
    }

    /// Deliver `page` to `sink`, or an error message if it does not exist.
    pub fn send_page<S>(&self, page: usize, sink: &mut S)
    where
        S: Sink + ?Sized,
    {
        match self.page(page) {
            Ok(document) => sink.deliver(document),
            Err(err) => {
                debug!("Rejected page {page} of '{}': {err}", self.command);
                sink.deliver_error(&err.to_string());
            }
        }
    }
}
