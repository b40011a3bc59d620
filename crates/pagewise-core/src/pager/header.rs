//! The centred heading line above a page.

use super::count::digit_width;
use crate::text::{Colour, Fragment};

/// Width of the footer's fixed text, excluding the two page numbers.
const FOOTER_FIXED_WIDTH: usize = 37;

/// Padding shorter than this looks broken and is dropped.
const MIN_PADDING: usize = 3;

/// Render `====[<text>]====` with padding sized to line up with the footer.
///
/// Odd-length text gets a trailing space so the brackets sit evenly.
pub(super) fn render_header(text: &str, total_pages: usize) -> Fragment {
    let (text, padding) = balanced_header(text, total_pages);
    let pad = "=".repeat(padding);

    Fragment::concat([
        Fragment::text(format!("{pad}[")).coloured(Colour::Info),
        Fragment::text(text).coloured(Colour::Heading),
        Fragment::text(format!("]{pad}")).coloured(Colour::Info),
    ])
}

/// The heading text as rendered and the padding on each side of it.
fn balanced_header(text: &str, total_pages: usize) -> (String, usize) {
    let mut text = text.to_string();
    let mut header_width = 2 + text.chars().count();
    if text.chars().count() % 2 == 1 {
        text.push(' ');
        header_width += 1;
    }

    let padding = footer_width(total_pages).saturating_sub(header_width) / 2;
    if padding < MIN_PADDING {
        (text, 0)
    } else {
        (text, padding)
    }
}

/// Width the header aims to match.
fn footer_width(total_pages: usize) -> usize {
    FOOTER_FIXED_WIDTH + 2 * digit_width(total_pages)
}
