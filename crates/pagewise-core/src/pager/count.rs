//! Pure pagination math.

/// Number of pages needed for `item_count` items.
///
/// An empty collection has no pages at all.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1))
}

/// Start/end indices of a 1-based page, clamped to the collection.
///
/// Pages past the end give an empty window.
pub fn page_window(item_count: usize, page_size: usize, page: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(item_count);
    let end = start.saturating_add(page_size).min(item_count);
    (start, end)
}

/// Number of decimal digits needed to print `n`.
pub(crate) fn digit_width(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}
