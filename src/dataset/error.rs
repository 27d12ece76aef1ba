// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while turning a dataset blob into a catalog.
//!
//! All of them are fatal for the session: a catalog that failed to load has no
//! valid filter state to fall back to.

use crate::types::{PaperId, YearBounds};
use std::fmt;

/// Which id table a dangling reference pointed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Title,
    Author,
    Link,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Title => write!(f, "title"),
            TableKind::Author => write!(f, "author"),
            TableKind::Link => write!(f, "link"),
        }
    }
}

/// Error type for dataset parsing and contract violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// The blob is not valid JSON or doesn't have the expected shape.
    Malformed(String),
    /// `papers[position]` refers to an id missing from a lookup table.
    DanglingId {
        position: usize,
        table: TableKind,
        id: u32,
    },
    /// Two paper records share a title id.
    DuplicatePaper { id: PaperId, title: String },
    /// `authorsIndex` has an entry for an author id with no name.
    IndexUnknownAuthor { author_id: u32 },
    /// `authorsIndex` lists a title id that has no paper record.
    IndexUnknownPaper { author: String, title_id: u32 },
    /// `yearMin > yearMax` while some paper has a year.
    InvertedYearBounds { min: i32, max: i32 },
    /// A paper's year falls outside `[yearMin, yearMax]`.
    YearOutOfBounds {
        id: PaperId,
        year: i32,
        bounds: YearBounds,
    },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Malformed(msg) => write!(f, "malformed dataset: {}", msg),
            DatasetError::DanglingId { position, table, id } => {
                write!(
                    f,
                    "papers[{}] references unknown {} id {}",
                    position, table, id
                )
            }
            DatasetError::DuplicatePaper { id, title } => {
                write!(f, "duplicate paper {} ({:?})", id, title)
            }
            DatasetError::IndexUnknownAuthor { author_id } => {
                write!(f, "authorsIndex entry for unknown author id {}", author_id)
            }
            DatasetError::IndexUnknownPaper { author, title_id } => {
                write!(
                    f,
                    "authorsIndex lists title id {} for {:?} but no paper has it",
                    title_id, author
                )
            }
            DatasetError::InvertedYearBounds { min, max } => {
                write!(f, "yearMin {} > yearMax {}", min, max)
            }
            DatasetError::YearOutOfBounds { id, year, bounds } => {
                write!(
                    f,
                    "paper {} has year {} outside [{}, {}]",
                    id, year, bounds.min, bounds.max
                )
            }
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Malformed(e.to_string())
    }
}
