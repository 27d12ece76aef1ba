// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sets of integers stored as sorted, disjoint half-open ranges.
//!
//! **Invariant**: for consecutive ranges `a`, `b`: `a.start < a.end < b.start`.
//! Ranges never touch: inserting `[2, 4)` next to `[4, 6)` yields `[2, 6)`.
//! Empty ranges are never stored.

use crate::contracts::check_ranges_canonical;
use std::ops::Range;

/// Canonical interval set over `usize`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<Range<usize>>,
}

impl RangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single point.
    pub fn insert_point(&mut self, at: usize) {
        self.insert(at..at.saturating_add(1));
    }

    /// Insert a range, coalescing with anything it overlaps or touches.
    pub fn insert(&mut self, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }

        // First stored range that ends at or after the new start: everything
        // before it is strictly left of `range` and untouched.
        let first = self.ranges.partition_point(|r| r.end < range.start);
        // First stored range that starts strictly after the new end.
        let last = self.ranges.partition_point(|r| r.start <= range.end);

        let mut merged = range;
        if first < last {
            merged.start = merged.start.min(self.ranges[first].start);
            merged.end = merged.end.max(self.ranges[last - 1].end);
        }
        self.ranges.splice(first..last, std::iter::once(merged));

        check_ranges_canonical(&self.ranges);
    }

    pub fn contains(&self, at: usize) -> bool {
        let i = self.ranges.partition_point(|r| r.end <= at);
        self.ranges.get(i).is_some_and(|r| r.start <= at)
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of disjoint ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }
}

impl Extend<Range<usize>> for RangeSet {
    fn extend<T: IntoIterator<Item = Range<usize>>>(&mut self, iter: T) {
        for range in iter {
            self.insert(range);
        }
    }
}

impl FromIterator<Range<usize>> for RangeSet {
    fn from_iter<T: IntoIterator<Item = Range<usize>>>(iter: T) -> Self {
        let mut set = RangeSet::new();
        set.extend(iter);
        set
    }
}
