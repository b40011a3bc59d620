//! Core library for the Pagewise paginator.
//!
//! This crate splits an arbitrary collection into fixed-size pages and
//! renders each page as a styled document: an optional centred heading, one
//! line per item, and a navigation bar whose controls re-run the listing
//! command with another page number.
//!
//! # Architecture
//!
//! - **Styled text** ([`text`]): an immutable fragment tree with colours,
//!   hover text and click actions, independent of any output backend
//! - **Paginator** ([`pager`]): page math and header/body/footer rendering
//! - **Sinks** ([`sink`]): where finished documents are delivered
//! - **Command grammar** ([`command`]): the `"<command> <page>"` text that
//!   navigation controls issue
//!
//! Rendering is a pure function of the page number and the borrowed items;
//! a pager holds no per-request state.
//!
//! # Quick Start
//!
//! ```rust
//! use pagewise_core::{text::Fragment, Pager};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let letters: Vec<char> = ('A'..='Z').collect();
//! let pager = Pager::new("/letters", Some("Letters"), &letters, |c: &char| {
//!     Fragment::text(c.to_string())
//! })?;
//!
//! assert_eq!(pager.total_pages(), 3);
//!
//! let mut sink: Vec<Fragment> = Vec::new();
//! pager.send_page(3, &mut sink);
//! println!("{}", sink[0]);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod pager;
pub mod sink;
pub mod text;

// Re-export commonly used types
pub use command::{page_command, PageCommand};
pub use config::{PagerConfig, DEFAULT_PAGE_SIZE};
pub use error::{PagerError, Result};
pub use pager::{page_window, total_pages, ElementTransformer, Pager, PagerBuilder};
pub use sink::Sink;
pub use text::{format_list, ClickAction, Colour, Fragment, Style};
