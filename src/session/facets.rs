// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pinned author constraints.
//!
//! A facet freezes an author-filter result under a label so it keeps applying
//! after the search box moves on. Facets are AND'd with each other and with
//! the live filters; their order only matters for display (newest first).
//!
//! **Invariant**: labels are unique (exact, case-sensitive) and never blank.

use crate::catalog::Catalog;
use crate::filter::{evaluate_exact_author, IdSet};

/// A labelled, frozen author-filter result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facet {
    label: String,
    ids: IdSet,
}

impl Facet {
    /// `None` when the label is blank.
    pub fn new(label: impl Into<String>, ids: IdSet) -> Option<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return None;
        }
        Some(Self { label, ids })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn ids(&self) -> &IdSet {
        &self.ids
    }
}

/// Ordered, label-unique stack of facets. Newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetStack {
    facets: Vec<Facet>,
}

impl FacetStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.facets.iter().any(|f| f.label == label)
    }

    /// Push a facet unless its label is already pinned.
    ///
    /// Returns the new stack and whether anything was added.
    pub fn push(mut self, facet: Facet) -> (Self, bool) {
        if self.contains(&facet.label) {
            return (self, false);
        }
        self.facets.insert(0, facet);
        (self, true)
    }

    /// Pin the live author filter under its query text.
    pub fn commit(self, text: &str, result: &IdSet) -> (Self, bool) {
        match Facet::new(text, result.clone()) {
            Some(facet) => self.push(facet),
            None => (self, false),
        }
    }

    /// Pin exactly one author, taking the set from the index rather than from
    /// whatever the search box currently holds.
    pub fn commit_from_click(self, name: &str, catalog: &Catalog) -> (Self, bool) {
        if name.trim().is_empty() || self.contains(name) {
            return (self, false);
        }
        self.commit(name, &evaluate_exact_author(catalog, name))
    }

    /// Drop the facet with this exact label, if any.
    pub fn remove(mut self, label: &str) -> (Self, bool) {
        match self.facets.iter().position(|f| f.label == label) {
            Some(i) => {
                self.facets.remove(i);
                (self, true)
            }
            None => (self, false),
        }
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Facet> {
        self.facets.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.facets.iter().map(Facet::label)
    }

    /// Frozen sets, for the visibility fold.
    pub fn sets(&self) -> impl Iterator<Item = &IdSet> {
        self.facets.iter().map(Facet::ids)
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }
}
