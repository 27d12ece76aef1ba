// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-session filter inputs, their derived sets, and the visible set.
//!
//! **Invariant**: `visible == title ∩ author ∩ facets… ∩ years` after every
//! transition. Each `with_*` method re-evaluates only the dimension whose input
//! changed, then refolds all of them.

use super::facets::FacetStack;
use crate::catalog::Catalog;
use crate::contracts::check_visible_subset;
use crate::filter::{evaluate_author, evaluate_title, evaluate_years, IdSet};
use std::iter;
use tracing::debug;

/// Every filter input with its current result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    title_query: String,
    title: IdSet,
    author_query: String,
    author: IdSet,
    facets: FacetStack,
    year_range: (i32, i32),
    years: IdSet,
    visible: IdSet,
}

impl FilterState {
    /// No constraints: every dimension Universal, year range at the catalog's
    /// full span.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            title_query: String::new(),
            title: IdSet::Universal,
            author_query: String::new(),
            author: IdSet::Universal,
            facets: FacetStack::new(),
            year_range: catalog.years().full_range(),
            years: IdSet::Universal,
            visible: IdSet::Universal,
        }
    }

    pub fn with_title_query(mut self, catalog: &Catalog, text: String) -> Self {
        self.title = evaluate_title(catalog, &text);
        self.title_query = text;
        self.recompute()
    }

    pub fn with_author_query(mut self, catalog: &Catalog, text: String) -> Self {
        self.author = evaluate_author(catalog, &text);
        self.author_query = text;
        self.recompute()
    }

    /// Pin the live author filter as a facet and clear the search box.
    ///
    /// Nothing changes when the box is blank or its text is already pinned.
    pub fn commit_author_facet(mut self) -> Self {
        let (facets, added) = self.facets.commit(&self.author_query, &self.author);
        self.facets = facets;
        if !added {
            return self;
        }
        self.author_query.clear();
        self.author = IdSet::Universal;
        self.recompute()
    }

    /// Pin one author by name. The live author filter is left alone.
    pub fn facet_author(mut self, catalog: &Catalog, name: &str) -> Self {
        let (facets, added) = self.facets.commit_from_click(name, catalog);
        self.facets = facets;
        if added {
            self.recompute()
        } else {
            self
        }
    }

    pub fn remove_facet(mut self, label: &str) -> Self {
        let (facets, removed) = self.facets.remove(label);
        self.facets = facets;
        if removed {
            self.recompute()
        } else {
            self
        }
    }

    /// Set the half-open year range `[min, max)`.
    pub fn with_year_range(mut self, catalog: &Catalog, min: i32, max: i32) -> Self {
        self.years = evaluate_years(catalog, min, max);
        self.year_range = (min, max);
        self.recompute()
    }

    /// Refold every dimension into `visible`.
    pub fn recompute(mut self) -> Self {
        self.visible = IdSet::intersect_all(self.dimensions());
        check_visible_subset(&self.visible, self.dimensions());

        debug!(
            title = ?self.title.len(),
            author = ?self.author.len(),
            facets = self.facets.len(),
            years = ?self.years.len(),
            visible = ?self.visible.len(),
            "visibility recomputed"
        );
        self
    }

    /// `[title, author] ++ facets ++ [years]`, in fold order.
    fn dimensions(&self) -> impl Iterator<Item = &IdSet> {
        iter::once(&self.title)
            .chain(iter::once(&self.author))
            .chain(self.facets.sets())
            .chain(iter::once(&self.years))
    }

    pub fn title_query(&self) -> &str {
        &self.title_query
    }

    pub fn title(&self) -> &IdSet {
        &self.title
    }

    pub fn author_query(&self) -> &str {
        &self.author_query
    }

    pub fn author(&self) -> &IdSet {
        &self.author
    }

    pub fn facets(&self) -> &FacetStack {
        &self.facets
    }

    pub fn year_range(&self) -> (i32, i32) {
        self.year_range
    }

    pub fn years(&self) -> &IdSet {
        &self.years
    }

    pub fn visible(&self) -> &IdSet {
        &self.visible
    }
}
