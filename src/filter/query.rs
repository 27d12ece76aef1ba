// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing shared by the text evaluators and the highlighter.

/// Lowercase one char at a time.
///
/// `str::to_lowercase` turns a word-final `Σ` into `ς`, while a lone
/// `char::to_lowercase` gives `σ`. The highlighter folds per char, so titles,
/// author names and query terms all go through here to stay comparable.
///
/// ```
/// use papershelf::fold_case;
///
/// assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
/// assert_eq!(fold_case("Wadler"), "wadler");
/// ```
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Split a query into lowercase terms on whitespace.
///
/// An empty or whitespace-only query yields no terms, which every evaluator
/// reads as "no constraint".
///
/// ```
/// use papershelf::parse_terms;
///
/// assert_eq!(parse_terms("  Types  PROGRAMMING "), vec!["types", "programming"]);
/// assert!(parse_terms(" \t ").is_empty());
/// ```
pub fn parse_terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(fold_case)
        .filter(|t| !t.is_empty())
        .collect()
}

/// AND of substring matches. `haystack` must already be folded with [`fold_case`].
#[inline]
pub fn contains_all(haystack: &str, terms: &[String]) -> bool {
    terms.iter().all(|term| haystack.contains(term.as_str()))
}
