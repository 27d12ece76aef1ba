// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filter dimensions and the set algebra that combines them.
//!
//! ```text
//!   title query ──► evaluate_title ──┐
//!  author query ──► evaluate_author ─┤
//!        facets ──► (frozen IdSets) ─┼──► IdSet::intersect_all ──► visible
//!    year range ──► evaluate_years ──┘
//! ```

mod eval;
mod id_set;
mod query;

pub use eval::*;
pub use id_set::IdSet;
pub use query::{contains_all, fold_case, parse_terms};
