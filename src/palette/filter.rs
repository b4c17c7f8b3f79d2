//! Substring filtering over the tool index.
//!
//! Matching is deliberately plain case-insensitive substring containment
//! rather than fuzzy scoring: the item count is a few dozen at most and
//! predictable matching beats ranked matching at that scale. Ties keep
//! registration order.

use crate::palette::index::ToolEntry;

/// Filter the index by a query, returning indices into `items`.
///
/// The query is trimmed and lowercased, then matched as a substring of each
/// entry's `label + " " + keywords`. An empty (or all-whitespace) query
/// matches everything, preserving index order. Safe to call on every
/// keystroke.
#[must_use]
pub fn filter_indices(items: &[ToolEntry], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..items.len()).collect();
    }

    items
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.haystack().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<ToolEntry> {
        vec![
            ToolEntry::new("calc", "Calculator", "math arithmetic"),
            ToolEntry::new("uuid", "UUID v4", "generator id"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let items = sample_items();
        assert_eq!(filter_indices(&items, ""), vec![0, 1]);
        assert_eq!(filter_indices(&items, "   "), vec![0, 1]);
    }

    #[test]
    fn test_label_match() {
        let items = sample_items();
        assert_eq!(filter_indices(&items, "calc"), vec![0]);
    }

    #[test]
    fn test_keyword_match() {
        let items = sample_items();
        assert_eq!(filter_indices(&items, "generator"), vec![1]);
    }

    #[test]
    fn test_no_match() {
        let items = sample_items();
        assert!(filter_indices(&items, "zzz").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let items = sample_items();
        assert_eq!(filter_indices(&items, "CALC"), vec![0]);
        assert_eq!(filter_indices(&items, "Uuid"), vec![1]);
    }

    #[test]
    fn test_trimmed_query() {
        let items = sample_items();
        assert_eq!(filter_indices(&items, "  calc  "), vec![0]);
    }

    #[test]
    fn test_match_spans_label_and_keywords() {
        // The haystack is label + " " + keywords, so a query can cross the
        // boundary between them.
        let items = vec![ToolEntry::new("hash", "Hash", "sha-256 digest")];
        assert_eq!(filter_indices(&items, "hash sha"), vec![0]);
    }

    #[test]
    fn test_empty_index() {
        assert!(filter_indices(&[], "anything").is_empty());
        assert!(filter_indices(&[], "").is_empty());
    }

    #[test]
    fn test_every_result_contains_query() {
        let items = vec![
            ToolEntry::new("a", "Stopwatch", "timer lap"),
            ToolEntry::new("b", "Countdown", "timer alarm"),
            ToolEntry::new("c", "Notes", "scratchpad"),
        ];
        let matched = filter_indices(&items, "timer");
        assert_eq!(matched, vec![0, 1]);
        for idx in &matched {
            assert!(items[*idx].haystack().contains("timer"));
        }
        // Nothing outside the result set matches.
        for (idx, entry) in items.iter().enumerate() {
            if !matched.contains(&idx) {
                assert!(!entry.haystack().contains("timer"));
            }
        }
    }
}
