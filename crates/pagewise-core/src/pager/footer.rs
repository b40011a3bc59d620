//! The navigation bar below a page.
//!
//! ```text
//! ============[ « < (2/3) > » ]============
//! ```
//!
//! The bar has a constant width for a given page count, which the header
//! relies on to line up with it.

use super::count::digit_width;
use crate::{
    command::page_command,
    text::{Colour, Fragment, Style},
};

const LEFT_BRACKET: &str = "============[";
const RIGHT_BRACKET: &str = "]============";

/// A single navigation control.
struct Button {
    label: &'static str,
    hover: &'static str,
    target: usize,
}

impl Button {
    /// Render the button, active or greyed out.
    fn render(&self, command: &str, enabled: bool) -> Fragment {
        let label = Fragment::text(self.label);
        if !enabled {
            return label.coloured(Colour::Disabled);
        }

        label.styled(
            Style::coloured(Colour::Command)
                .with_hover(Fragment::text(self.hover).coloured(Colour::Info))
                .with_click(page_command(command, self.target)),
        )
    }
}

/// Render the navigation bar for `page` of `total_pages`.
pub(super) fn render_footer(command: &str, page: usize, total_pages: usize) -> Fragment {
    Fragment::concat([
        Fragment::text(LEFT_BRACKET).coloured(Colour::Info),
        first_prev_buttons(command, page, total_pages),
        page_indicator(page, total_pages),
        next_last_buttons(command, page, total_pages),
        Fragment::text(RIGHT_BRACKET).coloured(Colour::Info),
    ])
}

fn first_prev_buttons(command: &str, page: usize, total_pages: usize) -> Fragment {
    let enabled = page > 1;
    let first = Button {
        label: " «",
        hover: "First Page",
        target: 1,
    };
    let prev = Button {
        label: " < ",
        hover: "Previous Page",
        target: page.saturating_sub(1).min(total_pages.max(1)),
    };

    Fragment::concat([first.render(command, enabled), prev.render(command, enabled)])
}

fn next_last_buttons(command: &str, page: usize, total_pages: usize) -> Fragment {
    let enabled = page < total_pages;
    let next = Button {
        label: " > ",
        hover: "Next Page",
        target: page.saturating_add(1),
    };
    let last = Button {
        label: "» ",
        hover: "Last Page",
        target: total_pages,
    };

    Fragment::concat([next.render(command, enabled), last.render(command, enabled)])
}

/// `(<page>/<total>)` with the page right-aligned to the total's width.
fn page_indicator(page: usize, total_pages: usize) -> Fragment {
    let width = digit_width(total_pages);
    Fragment::text(format!("({page:>width$}/{total_pages})")).coloured(Colour::Heading)
}
