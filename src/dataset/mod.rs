// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The precomputed dataset blob and its resolution into a [`Catalog`].
//!
//! The blob is produced offline by a conversion step that interns every title,
//! author and link as a dense integer id. This module reads it back, resolves
//! every id against the lookup tables and throws the ids away, except each
//! paper's own title id, which becomes its `PaperId`.
//!
//! # Wire format
//!
//! ```json
//! {
//!   "titles":  ["A Theory of Types", "Types and Programming Languages"],
//!   "authors": {"0": "Pierce", "1": "Reynolds"},
//!   "links":   [],
//!   "authorsIndex": {"0": [0, 1], "1": [0]},
//!   "yearMin": 2002, "yearMax": 2002,
//!   "papers": [
//!     {"title": 0, "authors": [0, 1]},
//!     {"title": 1, "year": 2002, "authors": [0], "provenance": {"file": 0, "line": 1}}
//!   ]
//! }
//! ```
//!
//! Lookup tables are accepted either as dense arrays (index = id) or as
//! objects keyed by the id. Any id that doesn't resolve is a contract
//! violation and fails the whole load.

mod error;

pub use error::{DatasetError, TableKind};

use crate::catalog::Catalog;
use crate::index::AuthorIndex;
use crate::types::{Paper, PaperId, Provenance, YearBounds};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Id → value table, dense or sparse on the wire.
#[derive(Debug, Clone)]
pub enum LookupTable<T> {
    Dense(Vec<T>),
    Sparse(HashMap<u32, T>),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LookupTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Untagged buffering loses serde_json's string-to-integer key coercion,
        // so sparse keys come in as strings and are parsed here.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Dense(Vec<T>),
            Sparse(HashMap<String, T>),
        }

        match Repr::<T>::deserialize(deserializer)? {
            Repr::Dense(values) => Ok(LookupTable::Dense(values)),
            Repr::Sparse(values) => values
                .into_iter()
                .map(|(key, value)| {
                    key.parse::<u32>().map(|id| (id, value)).map_err(|_| {
                        D::Error::custom(format!("lookup key {:?} is not an integer id", key))
                    })
                })
                .collect::<Result<HashMap<_, _>, _>>()
                .map(LookupTable::Sparse),
        }
    }
}

impl<T> Default for LookupTable<T> {
    fn default() -> Self {
        LookupTable::Dense(Vec::new())
    }
}

impl<T> LookupTable<T> {
    pub fn get(&self, id: u32) -> Option<&T> {
        match self {
            LookupTable::Dense(values) => values.get(id as usize),
            LookupTable::Sparse(values) => values.get(&id),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LookupTable::Dense(values) => values.len(),
            LookupTable::Sparse(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(id, value)` pairs, in id order for dense tables.
    pub fn entries(&self) -> Box<dyn Iterator<Item = (u32, &T)> + '_> {
        match self {
            LookupTable::Dense(values) => Box::new(
                values
                    .iter()
                    .enumerate()
                    .map(|(id, value)| (id as u32, value)),
            ),
            LookupTable::Sparse(values) => Box::new(values.iter().map(|(&id, value)| (id, value))),
        }
    }
}

/// One interned paper record.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawPaper {
    pub title: u32,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub authors: Vec<u32>,
    #[serde(default)]
    pub references: Vec<u32>,
    #[serde(default)]
    pub citations: Vec<u32>,
    #[serde(default)]
    pub links: Vec<u32>,
    #[serde(default)]
    pub provenance: Option<Provenance>,
}

/// The dataset blob exactly as shipped.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub titles: LookupTable<String>,
    pub authors: LookupTable<String>,
    #[serde(default)]
    pub links: LookupTable<String>,
    /// Absent in older blobs; the index is then derived from the papers.
    #[serde(default)]
    pub authors_index: Option<LookupTable<Vec<u32>>>,
    pub year_min: i32,
    pub year_max: i32,
    pub papers: Vec<RawPaper>,
}

impl Dataset {
    /// Parse the JSON blob. Only checks shape; call [`Dataset::resolve`] next.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve every id and build the catalog.
    pub fn resolve(self) -> Result<Catalog, DatasetError> {
        let mut papers = Vec::with_capacity(self.papers.len());
        for (position, raw) in self.papers.iter().enumerate() {
            papers.push(self.resolve_paper(position, raw)?);
        }

        let authors = self.build_author_index(&papers)?;
        let bounds = YearBounds {
            min: self.year_min,
            max: self.year_max,
        };
        let catalog = Catalog::from_parts(papers, authors, bounds)?;

        info!(
            papers = catalog.len(),
            authors = catalog.authors().len(),
            year_min = bounds.min,
            year_max = bounds.max,
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn resolve_paper(&self, position: usize, raw: &RawPaper) -> Result<Paper, DatasetError> {
        let lookup = |table: &LookupTable<String>, kind: TableKind, id: u32| {
            table
                .get(id)
                .cloned()
                .ok_or(DatasetError::DanglingId {
                    position,
                    table: kind,
                    id,
                })
        };
        let lookup_all = |table: &LookupTable<String>, kind: TableKind, ids: &[u32]| {
            ids.iter()
                .map(|&id| lookup(table, kind, id))
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(Paper {
            id: PaperId(raw.title),
            title: lookup(&self.titles, TableKind::Title, raw.title)?,
            authors: lookup_all(&self.authors, TableKind::Author, &raw.authors)?,
            year: raw.year,
            references: lookup_all(&self.titles, TableKind::Title, &raw.references)?,
            citations: lookup_all(&self.titles, TableKind::Title, &raw.citations)?,
            links: lookup_all(&self.links, TableKind::Link, &raw.links)?,
            provenance: raw.provenance,
        })
    }

    /// Turn `authorsIndex` into a name-keyed index. Every author id must have a
    /// name and every listed title id must belong to a paper.
    fn build_author_index(&self, papers: &[Paper]) -> Result<AuthorIndex, DatasetError> {
        let Some(index) = &self.authors_index else {
            return Ok(AuthorIndex::from_papers(papers));
        };

        let known: HashSet<PaperId> = papers.iter().map(|p| p.id).collect();
        let mut postings = Vec::with_capacity(index.len());

        for (author_id, title_ids) in index.entries() {
            let name = self
                .authors
                .get(author_id)
                .ok_or(DatasetError::IndexUnknownAuthor { author_id })?;
            let mut ids = Vec::with_capacity(title_ids.len());
            for &title_id in title_ids {
                if !known.contains(&PaperId(title_id)) {
                    return Err(DatasetError::IndexUnknownPaper {
                        author: name.clone(),
                        title_id,
                    });
                }
                ids.push(PaperId(title_id));
            }
            postings.push((name.clone(), ids));
        }

        Ok(AuthorIndex::from_postings(postings))
    }
}

/// Parse and resolve a dataset blob in one step.
pub fn load_catalog(json: &str) -> Result<Catalog, DatasetError> {
    Dataset::from_json(json)?.resolve()
}
