// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One evaluator per filter dimension: `(query, catalog) → IdSet`.
//!
//! All of them are total and pure. "No constraint" is always `Universal`,
//! never an explicit set of every id, so an untouched dimension costs nothing
//! when visibility is folded.

use super::id_set::IdSet;
use super::query::{contains_all, parse_terms};
use crate::catalog::Catalog;
use crate::index::AuthorEntry;
#[cfg(feature = "parallel")]
use crate::types::PaperId;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Catalogs at least this large scan titles on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_SCAN_THRESHOLD: usize = 4096;

/// Title filter: every term must be a substring of the lowercased title.
pub fn evaluate_title(catalog: &Catalog, query: &str) -> IdSet {
    let terms = parse_terms(query);
    if terms.is_empty() {
        return IdSet::Universal;
    }

    let keys = catalog.title_keys();
    let papers = catalog.papers();

    #[cfg(feature = "parallel")]
    if papers.len() >= PARALLEL_SCAN_THRESHOLD {
        let ids: Vec<PaperId> = keys
            .par_iter()
            .zip(papers.par_iter())
            .filter(|(key, _)| contains_all(key, &terms))
            .map(|(_, paper)| paper.id)
            .collect();
        return IdSet::from_ids(ids);
    }

    keys.iter()
        .zip(papers)
        .filter(|(key, _)| contains_all(key, &terms))
        .map(|(_, paper)| paper.id)
        .collect()
}

/// Author filter: a paper matches when any one of its authors' names contains
/// every term. Postings of all matching authors are unioned.
pub fn evaluate_author(catalog: &Catalog, query: &str) -> IdSet {
    let terms = parse_terms(query);
    if terms.is_empty() {
        return IdSet::Universal;
    }

    IdSet::union_postings(catalog.authors().matching(&terms).map(AuthorEntry::posting))
}

/// Papers by exactly this author name. Unknown names give an empty set.
pub fn evaluate_exact_author(catalog: &Catalog, name: &str) -> IdSet {
    catalog
        .authors()
        .get(name)
        .map_or_else(IdSet::empty, AuthorEntry::posting_set)
}

/// Year filter over the half-open range `[min, max)`.
///
/// The catalog's full range `[yearMin, yearMax + 1)` is "no constraint" and
/// keeps papers without a year visible. Any other range drops them.
pub fn evaluate_years(catalog: &Catalog, min: i32, max: i32) -> IdSet {
    if (min, max) == catalog.years().full_range() {
        return IdSet::Universal;
    }

    catalog
        .papers()
        .iter()
        .filter(|paper| paper.year.is_some_and(|year| min <= year && year < max))
        .map(|paper| paper.id)
        .collect()
}
