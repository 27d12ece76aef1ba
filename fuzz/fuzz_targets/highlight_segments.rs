// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for match highlighting.
//!
//! Case folding changes byte lengths for a handful of characters, and every
//! byte offset has to be mapped back onto the original string. Arbitrary
//! Unicode is the fastest way to find a char boundary we got wrong.

#![no_main]

use libfuzzer_sys::fuzz_target;
use papershelf::highlight_query;

fuzz_target!(|input: (&str, &str)| {
    let (haystack, query) = input;
    let segments = highlight_query(haystack, query);

    // Property 1: segments rebuild the haystack exactly
    let rebuilt: String = segments.iter().map(|s| s.text).collect();
    assert_eq!(rebuilt, haystack);

    // Property 2: matched and unmatched runs alternate
    for pair in segments.windows(2) {
        assert_ne!(pair[0].matched, pair[1].matched, "adjacent runs share a state");
    }
});
