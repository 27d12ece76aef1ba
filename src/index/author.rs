// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted author index: author name → posting set of paper ids.
//!
//! Built once at load time, read-only afterwards. Records store author names
//! directly, so the index is keyed by name rather than by the dataset's
//! author id. Two author ids that share a name collapse into one entry whose
//! posting is the union of both.
//!
//! # Invariants
//!
//! 1. **POSTING_SORTED**: every posting is strictly ascending (canonical `IdSet`
//!    form), so handing one out as an explicit set costs an `Arc` clone.
//! 2. **NAMES_UNIQUE**: one entry per distinct name, entries ordered by name.

use crate::contracts::check_id_set_canonical;
use crate::filter::{fold_case, IdSet};
use crate::types::{Paper, PaperId};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// One author and the papers they appear on.
#[derive(Debug, Clone)]
pub struct AuthorEntry {
    name: String,
    /// Lowercased name, matched against query terms.
    key: String,
    posting: Arc<[PaperId]>,
}

impl AuthorEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn posting(&self) -> &[PaperId] {
        &self.posting
    }

    /// The posting as an explicit set, sharing storage with the index.
    pub fn posting_set(&self) -> IdSet {
        IdSet::Explicit(Arc::clone(&self.posting))
    }
}

/// Name-keyed inverted index over a catalog's authors.
#[derive(Debug, Clone, Default)]
pub struct AuthorIndex {
    entries: Vec<AuthorEntry>,
    by_name: HashMap<String, usize>,
}

impl AuthorIndex {
    /// Build from `(name, posting)` pairs. Duplicate names are merged.
    pub fn from_postings<I, S>(postings: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<PaperId>)>,
        S: Into<String>,
    {
        let mut merged: BTreeMap<String, Vec<PaperId>> = BTreeMap::new();
        for (name, ids) in postings {
            merged.entry(name.into()).or_default().extend(ids);
        }

        let mut entries = Vec::with_capacity(merged.len());
        let mut by_name = HashMap::with_capacity(merged.len());

        for (name, mut ids) in merged {
            ids.sort_unstable();
            ids.dedup();
            check_id_set_canonical(&ids);
            by_name.insert(name.clone(), entries.len());
            entries.push(AuthorEntry {
                key: fold_case(&name),
                name,
                posting: Arc::from(ids),
            });
        }

        Self { entries, by_name }
    }

    /// Build directly from resolved records.
    pub fn from_papers(papers: &[Paper]) -> Self {
        Self::from_postings(papers.iter().flat_map(|paper| {
            paper
                .authors
                .iter()
                .map(move |name| (name.clone(), vec![paper.id]))
        }))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = &AuthorEntry> {
        self.entries.iter()
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&AuthorEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Posting for an exact name.
    pub fn posting(&self, name: &str) -> Option<&[PaperId]> {
        self.get(name).map(AuthorEntry::posting)
    }

    /// Authors whose lowercased name contains every term.
    pub fn matching<'a>(&'a self, terms: &'a [String]) -> impl Iterator<Item = &'a AuthorEntry> {
        self.entries
            .iter()
            .filter(move |entry| crate::filter::contains_all(&entry.key, terms))
    }
}
