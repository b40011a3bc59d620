//! List combinators shared by every listing output.

use super::Fragment;

/// Join `fragments` with `separator` between each pair.
pub fn format_list(fragments: impl IntoIterator<Item = Fragment>, separator: Fragment) -> Fragment {
    let mut parts = Vec::new();
    for (index, fragment) in fragments.into_iter().enumerate() {
        if index > 0 {
            parts.push(separator.clone());
        }
        parts.push(fragment);
    }
    Fragment::Concat(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list_separates_items() {
        let list = format_list(
            ["a", "b", "c"].into_iter().map(Fragment::text),
            Fragment::text("\n"),
        );
        assert_eq!(list.plain_text(), "a\nb\nc");
    }

    #[test]
    fn test_format_list_edge_cases() {
        assert!(format_list(Vec::<Fragment>::new(), Fragment::text(", ")).is_empty());
        let single = format_list(vec![Fragment::text("only")], Fragment::text(", "));
        assert_eq!(single.plain_text(), "only");
    }
}
