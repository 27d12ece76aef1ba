// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side filtering for a static catalog of research papers.
//!
//! The whole corpus ships as one JSON blob. This crate turns it into a
//! [`Catalog`], then answers "which papers are visible?" for a combination of
//! title search, author search, pinned author facets and a year range. No
//! server, no ranking: a paper is either in or out, and the display order is
//! the catalog order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  dataset/   │────▶│  catalog.rs  │────▶│   filter/    │
//! │ (JSON blob, │     │ (papers,     │     │ (IdSet,      │
//! │  resolve)   │     │  AuthorIndex)│     │  evaluators) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌─────────────────────────────────┐
//!                     │            session/             │
//!                     │  (Model, Msg, update, facets)   │
//!                     └─────────────────────────────────┘
//!                                    │
//!                                    ▼
//!                     ┌─────────────────────────────────┐
//!                     │  highlight/  ·  runtime/wasm.rs │
//!                     └─────────────────────────────────┘
//! ```
//!
//! Every filter dimension produces an [`IdSet`]. An empty query produces
//! `IdSet::Universal`, which costs nothing to intersect, so a page with no
//! filters never touches the paper list.
//!
//! # Usage
//!
//! ```
//! use papershelf::{load_catalog, update, Model, Msg};
//! use std::sync::Arc;
//!
//! let json = r#"{
//!     "titles": ["Why Functional Programming Matters"],
//!     "authors": ["Hughes"],
//!     "yearMin": 1989, "yearMax": 1989,
//!     "papers": [{"title": 0, "year": 1989, "authors": [0]}]
//! }"#;
//!
//! let model = Model::default();
//! let model = update(model, Msg::DatasetLoaded(load_catalog(json).map(Arc::new)));
//! let model = update(model, Msg::TitleQueryChanged("functional".into()));
//!
//! let session = model.session().unwrap();
//! assert_eq!(session.visible_count(), 1);
//! ```

// Module declarations
pub mod catalog;
pub mod contracts;
pub mod daily;
pub mod dataset;
pub mod filter;
pub mod highlight;
pub mod index;
pub mod session;
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
mod runtime;

// Re-exports for public API
pub use catalog::Catalog;
pub use daily::paper_of_the_day;
pub use dataset::{load_catalog, Dataset, DatasetError, TableKind};
pub use filter::{
    contains_all, evaluate_author, evaluate_exact_author, evaluate_title, evaluate_years,
    fold_case, parse_terms, IdSet,
};
pub use highlight::{highlight, highlight_query, Segment};
pub use index::{AuthorEntry, AuthorIndex};
pub use session::{
    update, Facet, FacetStack, FilterState, Model, Msg, RenderMode, Session, SessionOptions,
    FULL_RENDER_DELAY_MS,
};
pub use types::{Paper, PaperId, Provenance, YearBounds};
