// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Paper of the day.
//!
//! Everyone who opens the shelf on the same calendar day sees the same paper,
//! with no server involved: the pick is the CRC32 of the ISO date, modulo the
//! corpus size. Stubs are skipped since they have nothing to show.

use crate::catalog::Catalog;
use crate::types::Paper;
use chrono::NaiveDate;

/// Pick the paper for `date`. `None` only when the catalog has no defined
/// papers.
pub fn paper_of_the_day(catalog: &Catalog, date: NaiveDate) -> Option<&Paper> {
    let candidates: Vec<&Paper> = catalog.papers().iter().filter(|p| !p.is_stub()).collect();
    if candidates.is_empty() {
        return None;
    }
    let seed = crc32fast::hash(date.format("%Y-%m-%d").to_string().as_bytes());
    candidates.get(seed as usize % candidates.len()).copied()
}
