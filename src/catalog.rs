// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The loaded corpus: papers in display order plus the side tables the
//! filters read.
//!
//! A `Catalog` is built once and never mutated. Sessions hold it behind an
//! `Arc`, so replacing the session state on every event never copies papers.

use crate::dataset::DatasetError;
use crate::filter::{fold_case, IdSet};
use crate::index::AuthorIndex;
use crate::types::{Paper, PaperId, YearBounds};
use std::collections::HashMap;

/// Immutable, fully resolved corpus.
#[derive(Debug, Clone)]
pub struct Catalog {
    papers: Vec<Paper>,
    /// `fold_case(&papers[i].title)`, computed once.
    title_keys: Vec<String>,
    authors: AuthorIndex,
    years: YearBounds,
    positions: HashMap<PaperId, usize>,
}

impl Catalog {
    /// Assemble a catalog from resolved parts.
    ///
    /// Rejects duplicate ids and years outside `years`.
    pub fn from_parts(
        papers: Vec<Paper>,
        authors: AuthorIndex,
        years: YearBounds,
    ) -> Result<Self, DatasetError> {
        let has_years = papers.iter().any(|p| p.year.is_some());
        if has_years && years.min > years.max {
            return Err(DatasetError::InvertedYearBounds {
                min: years.min,
                max: years.max,
            });
        }

        let mut positions = HashMap::with_capacity(papers.len());
        for (position, paper) in papers.iter().enumerate() {
            if positions.insert(paper.id, position).is_some() {
                return Err(DatasetError::DuplicatePaper {
                    id: paper.id,
                    title: paper.title.clone(),
                });
            }
            if let Some(year) = paper.year {
                if !years.contains(year) {
                    return Err(DatasetError::YearOutOfBounds {
                        id: paper.id,
                        year,
                        bounds: years,
                    });
                }
            }
        }

        let title_keys = papers.iter().map(|p| fold_case(&p.title)).collect();

        Ok(Self {
            papers,
            title_keys,
            authors,
            years,
            positions,
        })
    }

    /// Build a catalog from records alone, deriving the author index and the
    /// year bounds. A corpus without any year gets `[0, 0]`.
    pub fn from_papers(papers: Vec<Paper>) -> Result<Self, DatasetError> {
        let authors = AuthorIndex::from_papers(&papers);
        let mut years = papers.iter().filter_map(|p| p.year);
        let bounds = match years.next() {
            Some(first) => {
                let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
                YearBounds { min, max }
            }
            None => YearBounds { min: 0, max: 0 },
        };
        Self::from_parts(papers, authors, bounds)
    }

    /// Papers in display order.
    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    pub fn authors(&self) -> &AuthorIndex {
        &self.authors
    }

    pub fn years(&self) -> YearBounds {
        self.years
    }

    /// Lowercased titles, aligned with `papers()`.
    pub fn title_keys(&self) -> &[String] {
        &self.title_keys
    }

    pub fn paper(&self, id: PaperId) -> Option<&Paper> {
        self.positions.get(&id).map(|&i| &self.papers[i])
    }

    /// Papers in `set`, in display order.
    pub fn select<'a>(&'a self, set: &'a IdSet) -> impl Iterator<Item = &'a Paper> + 'a {
        self.papers.iter().filter(move |p| set.contains(p.id))
    }
}
