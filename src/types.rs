// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a catalog is made of.
//!
//! Everything here is fully resolved: the dataset's interned ids for authors,
//! references and links are gone by the time a `Paper` exists. The only id a
//! paper keeps is its own `PaperId`, which is the title id the dataset assigned
//! to it and therefore unique across the corpus.
//!
//! # Invariants
//!
//! - **Paper**: `id` is unique within a `Catalog` and never changes for the
//!   lifetime of a session.
//! - **YearBounds**: `min <= max`, and every paper year lies in `[min, max]`.
//!   The dataset loader rejects anything else.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe paper identifier.
///
/// Prevents accidentally passing a catalog position where an id is expected.
/// Positions index `Catalog::papers()`; ids are whatever the dataset assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PaperId(pub u32);

impl PaperId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for PaperId {
    fn from(id: u32) -> Self {
        PaperId(id)
    }
}

impl From<PaperId> for u32 {
    fn from(id: PaperId) -> Self {
        id.0
    }
}

impl fmt::Display for PaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// Where a paper was defined in the source collection.
///
/// `file` is the source file number assigned by the conversion step, `line` the
/// line the entry starts on. Used to build an "edit this entry" link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Provenance {
    pub file: u32,
    pub line: u32,
}

impl Provenance {
    /// Expand a link template with `{file}` and `{line}` placeholders.
    ///
    /// ```
    /// use papershelf::Provenance;
    ///
    /// let p = Provenance { file: 3, line: 120 };
    /// let url = p.edit_url("https://example.org/edit/papers-{file}.yaml#L{line}");
    /// assert_eq!(url, "https://example.org/edit/papers-3.yaml#L120");
    /// ```
    pub fn edit_url(&self, template: &str) -> String {
        template
            .replace("{file}", &self.file.to_string())
            .replace("{line}", &self.line.to_string())
    }
}

/// One catalog entry with every reference resolved to text.
///
/// `references` and `citations` are display strings, not links to other
/// records, so there are no cycles to worry about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    pub id: PaperId,
    pub title: String,
    /// Author names in the order the source lists them.
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub year: Option<i32>,
    /// Titles this paper references.
    #[serde(default)]
    pub references: Vec<String>,
    /// Titles of papers that reference this one.
    #[serde(default)]
    pub citations: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
    /// `None` for stub records synthesized for titles that are referenced but
    /// never defined.
    #[serde(default)]
    pub provenance: Option<Provenance>,
}

impl Paper {
    /// Stub records have no source location and exist only so that references
    /// always resolve.
    #[inline]
    pub fn is_stub(&self) -> bool {
        self.provenance.is_none()
    }
}

/// Closed range of publication years recorded in the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    /// The half-open range that means "no year constraint": `[min, max + 1)`.
    #[inline]
    pub fn full_range(&self) -> (i32, i32) {
        (self.min, self.max.saturating_add(1))
    }

    #[inline]
    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }
}
