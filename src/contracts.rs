//! Runtime contracts for the filter engine.
//!
//! Debug-mode assertions for the invariants the rest of the crate relies on.
//! They are **zero-cost in release builds** (`debug_assert!`) and fire early in
//! tests when an algorithm drifts.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Invariant                                         |
//! |----------------------------|---------------------------------------------------|
//! | `check_id_set_canonical`   | explicit ids strictly ascending                   |
//! | `check_ranges_canonical`   | ranges non-empty, sorted, neither overlap nor touch |
//! | `check_segments_cover`     | segments concatenate back to the haystack         |
//! | `check_visible_subset`     | visible ⊆ every explicit dimension                |
//!
//! # Usage
//!
//! ```ignore
//! use papershelf::contracts::*;
//!
//! // In debug builds, this panics if the ids are out of order
//! check_id_set_canonical(&ids);
//! ```

use crate::filter::IdSet;
use crate::highlight::Segment;
use crate::types::PaperId;
use std::ops::Range;

// ============================================================================
// ID SET CONTRACTS
// ============================================================================

/// Check that explicit ids are strictly ascending (sorted, no duplicates).
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair out of order.
#[inline]
pub fn check_id_set_canonical(ids: &[PaperId]) {
    if cfg!(debug_assertions) {
        for (i, pair) in ids.windows(2).enumerate() {
            debug_assert!(
                pair[0] < pair[1],
                "Contract violation: IdSet.Canonical - ids[{}] {} >= ids[{}] {}",
                i,
                pair[0],
                i + 1,
                pair[1]
            );
        }
    }
}

/// Check that every member of `visible` is a member of each dimension.
#[inline]
pub fn check_visible_subset<'a, I>(visible: &IdSet, dimensions: I)
where
    I: IntoIterator<Item = &'a IdSet>,
{
    if cfg!(debug_assertions) {
        let Some(ids) = visible.ids() else {
            for dimension in dimensions {
                debug_assert!(
                    dimension.is_universal(),
                    "Contract violation: Visible.Subset - visible is Universal but a dimension is explicit"
                );
            }
            return;
        };
        for dimension in dimensions {
            for &id in ids {
                debug_assert!(
                    dimension.contains(id),
                    "Contract violation: Visible.Subset - visible id {} missing from a dimension",
                    id
                );
            }
        }
    }
}

// ============================================================================
// HIGHLIGHT CONTRACTS
// ============================================================================

/// Check that ranges are non-empty, ascending and separated by a gap.
#[inline]
pub fn check_ranges_canonical(ranges: &[Range<usize>]) {
    if cfg!(debug_assertions) {
        for (i, r) in ranges.iter().enumerate() {
            debug_assert!(
                r.start < r.end,
                "Contract violation: RangeSet.Canonical - ranges[{}] {:?} is empty",
                i,
                r
            );
        }
        for (i, pair) in ranges.windows(2).enumerate() {
            debug_assert!(
                pair[0].end < pair[1].start,
                "Contract violation: RangeSet.Canonical - ranges[{}] {:?} touches ranges[{}] {:?}",
                i,
                pair[0],
                i + 1,
                pair[1]
            );
        }
    }
}

/// Check that segments cover the haystack exactly, in order.
#[inline]
pub fn check_segments_cover(haystack: &str, segments: &[Segment<'_>]) {
    if cfg!(debug_assertions) {
        let total: usize = segments.iter().map(|s| s.text.len()).sum();
        debug_assert_eq!(
            total,
            haystack.len(),
            "Contract violation: Segments.Cover - segment lengths sum to {} for a {}-byte haystack",
            total,
            haystack.len()
        );
        let rebuilt: String = segments.iter().map(|s| s.text).collect();
        debug_assert!(
            rebuilt == haystack,
            "Contract violation: Segments.Cover - segments rebuild {:?}, expected {:?}",
            rebuilt,
            haystack
        );
    }
}
