// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting for titles and author names.
//!
//! Purely cosmetic: nothing here feeds back into which papers are visible.
//!
//! ```text
//!   "Types and Programming Languages", ["types", "ram"]
//!
//!   per-term hits    [0,5)          [14,17)
//!   RangeSet         [0,5) [14,17)
//!   segments         "Types" | " and Prog" | "ram" | "ming Languages"
//!                     match    plain         match   plain
//! ```
//!
//! Matching runs on a lowercased copy of the haystack. Lowercasing can change
//! byte lengths (`'İ'` becomes two chars), so the fold keeps, for every
//! byte of the lowercased text, the original char it came from. Ranges are
//! mapped back through that table and always land on char boundaries of the
//! original string, which keeps its casing intact in the output.

pub mod ranges;

use crate::contracts::check_segments_cover;
use crate::filter::parse_terms;
use ranges::RangeSet;
use serde::Serialize;

/// A run of the haystack, either inside a match or between matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Lowercased text plus, per byte, the original char span it came from.
struct Folded {
    text: String,
    starts: Vec<usize>,
    ends: Vec<usize>,
}

fn fold(haystack: &str) -> Folded {
    let mut text = String::with_capacity(haystack.len());
    let mut starts = Vec::with_capacity(haystack.len());
    let mut ends = Vec::with_capacity(haystack.len());

    for (start, c) in haystack.char_indices() {
        let end = start + c.len_utf8();
        for lower in c.to_lowercase() {
            text.push(lower);
            for _ in 0..lower.len_utf8() {
                starts.push(start);
                ends.push(end);
            }
        }
    }

    Folded { text, starts, ends }
}

/// Byte ranges of `haystack` covered by any occurrence of any term.
///
/// Terms are expected lowercase (as produced by `parse_terms`). Every
/// occurrence counts, overlapping ones included.
pub fn match_ranges(haystack: &str, terms: &[String]) -> RangeSet {
    let mut set = RangeSet::new();
    if terms.iter().all(String::is_empty) {
        return set;
    }

    let folded = fold(haystack);
    for term in terms.iter().filter(|t| !t.is_empty()) {
        let mut pos = 0;
        while let Some(found) = folded.text[pos..].find(term.as_str()) {
            let start = pos + found;
            let end = start + term.len();
            set.insert(folded.starts[start]..folded.ends[end - 1]);

            // Step one char so overlapping occurrences are found too.
            let step = folded.text[start..].chars().next().map_or(1, char::len_utf8);
            pos = start + step;
        }
    }
    set
}

/// Partition `haystack` along `ranges` into gap-free segments.
pub fn segment<'a>(haystack: &'a str, ranges: &RangeSet) -> Vec<Segment<'a>> {
    if ranges.is_empty() {
        return vec![Segment {
            text: haystack,
            matched: false,
        }];
    }

    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;
    for range in ranges.ranges() {
        if cursor < range.start {
            segments.push(Segment {
                text: &haystack[cursor..range.start],
                matched: false,
            });
        }
        segments.push(Segment {
            text: &haystack[range.clone()],
            matched: true,
        });
        cursor = range.end;
    }
    if cursor < haystack.len() {
        segments.push(Segment {
            text: &haystack[cursor..],
            matched: false,
        });
    }

    check_segments_cover(haystack, &segments);
    segments
}

/// Highlight every occurrence of `terms` in `haystack`.
///
/// ```
/// use papershelf::highlight;
///
/// let terms = vec!["types".to_string()];
/// let parts = highlight("A Theory of Types", &terms);
/// let marked: Vec<_> = parts.iter().filter(|s| s.matched).map(|s| s.text).collect();
/// assert_eq!(marked, vec!["Types"]);
/// ```
pub fn highlight<'a>(haystack: &'a str, terms: &[String]) -> Vec<Segment<'a>> {
    segment(haystack, &match_ranges(haystack, terms))
}

/// [`highlight`] with a raw query string.
pub fn highlight_query<'a>(haystack: &'a str, query: &str) -> Vec<Segment<'a>> {
    highlight(haystack, &parse_terms(query))
}
