// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::Catalog;
use crate::types::{Paper, PaperId, Provenance};

/// Create a paper with a source location.
///
/// The provenance line is `id * 10` in file 0, so tests can predict edit links.
pub fn make_paper(id: u32, title: &str, authors: &[&str], year: Option<i32>) -> Paper {
    Paper {
        id: PaperId(id),
        title: title.to_string(),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        year,
        references: vec![],
        citations: vec![],
        links: vec![],
        provenance: Some(Provenance {
            file: 0,
            line: id * 10,
        }),
    }
}

/// Create a stub: referenced somewhere, never defined.
pub fn make_stub(id: u32, title: &str) -> Paper {
    Paper {
        provenance: None,
        ..make_paper(id, title, &[], None)
    }
}

/// Three papers spanning 1989 to 2002.
///
/// | id | title                              | authors           | year |
/// |----|------------------------------------|-------------------|------|
/// | 1  | Types and Programming Languages    | Pierce            | 2002 |
/// | 2  | Why Functional Programming Matters | Hughes            | 1989 |
/// | 3  | A Theory of Types                  | Pierce, Reynolds  | none |
///
/// Paper 3 has no source location.
pub fn sample_papers() -> Vec<Paper> {
    let mut theory = make_paper(3, "A Theory of Types", &["Pierce", "Reynolds"], None);
    theory.provenance = None;
    vec![
        make_paper(1, "Types and Programming Languages", &["Pierce"], Some(2002)),
        make_paper(2, "Why Functional Programming Matters", &["Hughes"], Some(1989)),
        theory,
    ]
}

/// [`sample_papers`] as a catalog.
pub fn sample_catalog() -> Catalog {
    match Catalog::from_papers(sample_papers()) {
        Ok(catalog) => catalog,
        Err(e) => panic!("sample catalog is inconsistent: {e}"),
    }
}

/// The same three papers as a dataset blob, with a dense title table and an
/// explicit author index.
pub fn sample_dataset_json() -> &'static str {
    r#"{
        "titles": [
            "Unused",
            "Types and Programming Languages",
            "Why Functional Programming Matters",
            "A Theory of Types"
        ],
        "authors": ["Pierce", "Hughes", "Reynolds"],
        "links": ["https://example.org/tapl"],
        "authorsIndex": [[1, 3], [2], [3]],
        "yearMin": 1989,
        "yearMax": 2002,
        "papers": [
            {"title": 1, "year": 2002, "authors": [0], "references": [3], "links": [0],
             "provenance": {"file": 0, "line": 10}},
            {"title": 2, "year": 1989, "authors": [1],
             "provenance": {"file": 0, "line": 20}},
            {"title": 3, "authors": [0, 2], "citations": [1]}
        ]
    }"#
}
