//! The list of items shown on a page.

use super::{count::page_window, ElementTransformer};
use crate::text::{format_list, Fragment};

/// Transform the items on `page`, one per line.
///
/// No bounds checks: a page past the end renders as an empty list.
pub(super) fn render_body<T, F>(items: &[T], page_size: usize, page: usize, transform: &F) -> Fragment
where
    F: ElementTransformer<T>,
{
    let (start, end) = page_window(items.len(), page_size, page);
    format_list(items[start..end].iter().map(transform), Fragment::text("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Vec<char> {
        ('A'..='Z').collect()
    }

    fn render(items: &[char], page_size: usize, page: usize) -> String {
        render_body(items, page_size, page, &|c: &char| Fragment::text(c.to_string())).plain_text()
    }

    #[test]
    fn test_full_and_partial_pages() {
        let items = letters();
        assert_eq!(render(&items, 10, 1), "A\nB\nC\nD\nE\nF\nG\nH\nI\nJ");
        assert_eq!(render(&items, 10, 3), "U\nV\nW\nX\nY\nZ");
    }

    #[test]
    fn test_past_the_end_is_empty() {
        assert_eq!(render(&letters(), 10, 4), "");
        assert_eq!(render(&[], 10, 1), "");
    }

    #[test]
    fn test_transform_called_once_per_visible_item() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let transform = |c: &char| {
            calls.set(calls.get() + 1);
            Fragment::text(c.to_string())
        };
        render_body(&letters(), 10, 2, &transform);
        assert_eq!(calls.get(), 10);
    }
}
