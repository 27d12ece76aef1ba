// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for dataset loading.
//!
//! The blob comes over the network. Whatever arrives, loading must either
//! produce a consistent catalog or a `DatasetError`, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use papershelf::load_catalog;

fuzz_target!(|json: &str| {
    let Ok(catalog) = load_catalog(json) else {
        return;
    };

    // Every listed paper must be reachable by its id
    for paper in catalog.papers() {
        assert_eq!(catalog.paper(paper.id).map(|p| p.id), Some(paper.id));
        if let Some(year) = paper.year {
            assert!(catalog.years().contains(year));
        }
    }

    // Every author posting must point at loaded papers
    for entry in catalog.authors().iter() {
        for &id in entry.posting() {
            assert!(catalog.paper(id).is_some(), "posting lists unknown paper {}", id);
        }
    }
});
