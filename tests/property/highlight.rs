//! Segmentation shape for arbitrary text.

use super::common::query_strategy;
use papershelf::highlight::ranges::RangeSet;
use papershelf::{highlight_query, parse_terms};
use proptest::prelude::*;

fn haystack_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{0,40}",
        "\\PC{0,24}",
        Just("İstanbul İİ Types".to_string()),
        Just("ΣΊΣΥΦΟΣ and Ꮎ".to_string()),
    ]
}

proptest! {
    #[test]
    fn prop_segments_rebuild_haystack(haystack in haystack_strategy(), query in query_strategy()) {
        let segments = highlight_query(&haystack, &query);
        let rebuilt: String = segments.iter().map(|s| s.text).collect();
        prop_assert_eq!(rebuilt, haystack);
    }

    #[test]
    fn prop_segments_alternate(haystack in haystack_strategy(), query in query_strategy()) {
        let segments = highlight_query(&haystack, &query);
        for pair in segments.windows(2) {
            prop_assert_ne!(pair[0].matched, pair[1].matched);
        }
        if segments.len() > 1 {
            prop_assert!(segments.iter().all(|s| !s.text.is_empty()));
        }
    }

    #[test]
    fn prop_every_term_occurrence_is_marked(haystack in "[a-z ]{0,40}", query in query_strategy()) {
        let segments = highlight_query(&haystack, &query);
        let mut marked = vec![false; haystack.len()];
        let mut offset = 0;
        for s in &segments {
            if s.matched {
                marked[offset..offset + s.text.len()].fill(true);
            }
            offset += s.text.len();
        }
        for term in parse_terms(&query) {
            for (start, _) in haystack.match_indices(term.as_str()) {
                prop_assert!(marked[start..start + term.len()].iter().all(|&m| m));
            }
        }
    }

    #[test]
    fn prop_range_set_canonical(
        ranges in prop::collection::vec((0usize..50, 0usize..8), 0..12),
    ) {
        let set: RangeSet = ranges.iter().map(|&(s, len)| s..s + len).collect();
        let out = set.ranges();
        prop_assert!(out.iter().all(|r| r.start < r.end));
        prop_assert!(out.windows(2).all(|w| w[0].end < w[1].start));
        for &(s, len) in &ranges {
            for p in s..s + len {
                prop_assert!(set.contains(p));
            }
        }
    }
}
