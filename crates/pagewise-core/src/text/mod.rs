//! Styled text fragments.
//!
//! A [`Fragment`] is a pure value: literal runs, styled wrappers and
//! concatenations. Styles carry a named [`Colour`], an optional bold weight,
//! optional hover text and an optional [`ClickAction`]. Nothing in this module
//! depends on a terminal or any other output backend.
//!
//! ```rust
//! use pagewise_core::text::{format_list, Colour, Fragment, Style};
//!
//! let button = Fragment::text(" > ").styled(
//!     Style::coloured(Colour::Command)
//!         .with_hover(Fragment::text("Next Page").coloured(Colour::Info))
//!         .with_click("list 2"),
//! );
//! assert_eq!(button.click_actions()[0].command(), "list 2");
//!
//! let list = format_list(["a", "b"].map(Fragment::text), Fragment::text("\n"));
//! assert_eq!(list.to_string(), "a\nb");
//! ```

mod fragment;
mod list;
mod style;

pub use fragment::{Fragment, Run};
pub use list::format_list;
pub use style::{ClickAction, Colour, Style};
