// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy intersection sets: the currency every filter dimension pays in.
//!
//! A dimension with nothing to say (empty query, full year range) produces
//! `Universal`. A dimension that narrows produces `Explicit`, possibly empty.
//! Combining dimensions is intersection with `Universal` as the identity, so
//! folding any number of them in any order gives the same answer.
//!
//! ```text
//!   Universal ∩ X          = X
//!   Explicit(A) ∩ Explicit(B) = Explicit(A ∩ B)
//! ```
//!
//! **Invariant**: explicit ids are strictly ascending. Every constructor
//! canonicalizes, so derived `PartialEq` is set equality for explicit sets.
//! `Universal` and an explicit set listing every id are membership-equivalent
//! but not equal; compare through `contains` when that matters.
//!
//! Explicit ids live behind an `Arc<[PaperId]>`. Facets freeze a copy of the
//! live author result and session states are replaced wholesale on every
//! event, so clones need to be cheap.

use crate::contracts::check_id_set_canonical;
use crate::types::PaperId;
use std::sync::Arc;

/// Universal-or-explicit set of paper ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IdSet {
    /// No constraint. Contains every id.
    #[default]
    Universal,
    /// Exactly these ids (sorted, deduplicated).
    Explicit(Arc<[PaperId]>),
}

impl IdSet {
    /// The neutral element.
    #[inline]
    pub fn universal() -> Self {
        IdSet::Universal
    }

    /// An explicit set with no members.
    pub fn empty() -> Self {
        IdSet::Explicit(Arc::from(Vec::new()))
    }

    /// Wrap an explicit collection of ids. Order and duplicates don't matter.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = PaperId>,
    {
        let mut ids: Vec<PaperId> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        IdSet::from_sorted_unchecked(ids)
    }

    /// Wrap ids already in canonical order. Checked in debug builds.
    pub(crate) fn from_sorted_unchecked(ids: Vec<PaperId>) -> Self {
        check_id_set_canonical(&ids);
        IdSet::Explicit(Arc::from(ids))
    }

    #[inline]
    pub fn is_universal(&self) -> bool {
        matches!(self, IdSet::Universal)
    }

    /// Number of explicit members, `None` for `Universal`.
    pub fn len(&self) -> Option<usize> {
        match self {
            IdSet::Universal => None,
            IdSet::Explicit(ids) => Some(ids.len()),
        }
    }

    /// True only for an explicit set with no members.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Member count against a catalog of `total` papers.
    pub fn count_within(&self, total: usize) -> usize {
        self.len().unwrap_or(total)
    }

    /// Explicit members in ascending order, `None` for `Universal`.
    pub fn ids(&self) -> Option<&[PaperId]> {
        match self {
            IdSet::Universal => None,
            IdSet::Explicit(ids) => Some(ids),
        }
    }

    /// Membership test.
    #[inline]
    pub fn contains(&self, id: PaperId) -> bool {
        match self {
            IdSet::Universal => true,
            IdSet::Explicit(ids) => ids.binary_search(&id).is_ok(),
        }
    }

    /// Combine two sets by intersection. Inputs are left untouched.
    ///
    /// Walks the smaller explicit operand and probes the larger one, so the
    /// cost is `O(small · log large)`.
    pub fn intersect(&self, other: &IdSet) -> IdSet {
        match (self, other) {
            (IdSet::Universal, x) | (x, IdSet::Universal) => x.clone(),
            (IdSet::Explicit(a), IdSet::Explicit(b)) => {
                if Arc::ptr_eq(a, b) {
                    return self.clone();
                }
                let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
                let ids: Vec<PaperId> = small
                    .iter()
                    .copied()
                    .filter(|id| large.binary_search(id).is_ok())
                    .collect();
                IdSet::from_sorted_unchecked(ids)
            }
        }
    }

    /// Associative, commutative combination. Same as [`IdSet::intersect`].
    #[inline]
    pub fn append(a: &IdSet, b: &IdSet) -> IdSet {
        a.intersect(b)
    }

    /// Fold any number of sets, starting from `Universal`.
    pub fn intersect_all<'a, I>(sets: I) -> IdSet
    where
        I: IntoIterator<Item = &'a IdSet>,
    {
        sets.into_iter()
            .fold(IdSet::Universal, |acc, set| acc.intersect(set))
    }

    /// Union of explicit postings. Idempotent: an id present in several
    /// postings appears once.
    pub fn union_postings<'a, I>(postings: I) -> IdSet
    where
        I: IntoIterator<Item = &'a [PaperId]>,
    {
        let mut merged: Vec<PaperId> = Vec::new();
        for posting in postings {
            merged = merge_sorted(&merged, posting);
        }
        IdSet::from_sorted_unchecked(merged)
    }
}

impl FromIterator<PaperId> for IdSet {
    fn from_iter<T: IntoIterator<Item = PaperId>>(iter: T) -> Self {
        IdSet::from_ids(iter)
    }
}

/// Merge two ascending slices into one ascending vector without duplicates.
fn merge_sorted(a: &[PaperId], b: &[PaperId]) -> Vec<PaperId> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}
