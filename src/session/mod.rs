// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The session state machine.
//!
//! One value holds everything, and one function moves it forward:
//!
//! ```text
//!            DatasetLoaded(Ok)              TitleQueryChanged, AuthorQueryChanged,
//!  Loading ─────────────────────► Loaded ◄─ CommitAuthorFacet, FacetAuthor,
//!     │                                     RemoveFacet, YearRangeChanged, RenderAll
//!     │ DatasetLoaded(Err)
//!     ▼
//!  Failed   (terminal)
//! ```
//!
//! `update` consumes the old model and returns the new one. Events that make no
//! sense in the current state (filtering before the dataset arrives, a second
//! load) are logged and ignored. `Msg` is a closed enum and every match on it
//! is exhaustive, so a new event kind can't be silently dropped.
//!
//! Rendering starts with a bounded prefix of the visible papers. The host sends
//! `RenderAll` about [`FULL_RENDER_DELAY_MS`] after the load so the first paint
//! is fast; filtering is unaffected either way.

pub mod facets;
mod filters;

pub use facets::{Facet, FacetStack};
pub use filters::FilterState;

use crate::catalog::Catalog;
use crate::dataset::DatasetError;
use crate::filter::IdSet;
use crate::types::{Paper, PaperId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Delay the host should wait after loading before sending `Msg::RenderAll`.
pub const FULL_RENDER_DELAY_MS: u32 = 30;

/// Number of papers materialized before `RenderAll` arrives.
pub const DEFAULT_PREFIX_LIMIT: usize = 100;

/// Session configuration supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionOptions {
    /// Papers rendered before the switch to full rendering.
    pub prefix_limit: usize,
    /// Link template for "edit this entry", with `{file}` and `{line}`
    /// placeholders.
    pub edit_url_template: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prefix_limit: DEFAULT_PREFIX_LIMIT,
            edit_url_template: None,
        }
    }
}

/// How much of the visible set to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Prefix(usize),
    All,
}

/// Every user action and the one asynchronous completion.
#[derive(Debug, Clone)]
pub enum Msg {
    DatasetLoaded(Result<Arc<Catalog>, DatasetError>),
    TitleQueryChanged(String),
    AuthorQueryChanged(String),
    /// Enter in the author box.
    CommitAuthorFacet,
    /// Click on an author name.
    FacetAuthor(String),
    RemoveFacet(String),
    /// Half-open `[min, max)`.
    YearRangeChanged { min: i32, max: i32 },
    RenderAll,
}

impl Msg {
    pub fn kind(&self) -> &'static str {
        match self {
            Msg::DatasetLoaded(_) => "DatasetLoaded",
            Msg::TitleQueryChanged(_) => "TitleQueryChanged",
            Msg::AuthorQueryChanged(_) => "AuthorQueryChanged",
            Msg::CommitAuthorFacet => "CommitAuthorFacet",
            Msg::FacetAuthor(_) => "FacetAuthor",
            Msg::RemoveFacet(_) => "RemoveFacet",
            Msg::YearRangeChanged { .. } => "YearRangeChanged",
            Msg::RenderAll => "RenderAll",
        }
    }
}

/// A loaded catalog and the filters applied to it.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<Catalog>,
    filters: FilterState,
    render: RenderMode,
    options: SessionOptions,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>, options: SessionOptions) -> Self {
        Self {
            filters: FilterState::new(&catalog),
            render: RenderMode::Prefix(options.prefix_limit),
            catalog,
            options,
        }
    }

    /// Apply one event.
    pub fn apply(mut self, msg: Msg) -> Self {
        let catalog = Arc::clone(&self.catalog);
        self.filters = match msg {
            Msg::DatasetLoaded(_) => {
                warn!("dataset already loaded, ignoring DatasetLoaded");
                return self;
            }
            Msg::TitleQueryChanged(text) => self.filters.with_title_query(&catalog, text),
            Msg::AuthorQueryChanged(text) => self.filters.with_author_query(&catalog, text),
            Msg::CommitAuthorFacet => self.filters.commit_author_facet(),
            Msg::FacetAuthor(name) => self.filters.facet_author(&catalog, &name),
            Msg::RemoveFacet(label) => self.filters.remove_facet(&label),
            Msg::YearRangeChanged { min, max } => {
                self.filters.with_year_range(&catalog, min, max)
            }
            Msg::RenderAll => {
                self.render = RenderMode::All;
                return self;
            }
        };
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render
    }

    pub fn visible(&self) -> &IdSet {
        self.filters.visible()
    }

    pub fn is_visible(&self, id: PaperId) -> bool {
        self.filters.visible().contains(id)
    }

    /// Total visible papers. Zero is a normal answer.
    pub fn visible_count(&self) -> usize {
        self.filters.visible().count_within(self.catalog.len())
    }

    /// Visible papers in display order, cut to the render window.
    pub fn rendered(&self) -> impl Iterator<Item = &Paper> {
        let limit = match self.render {
            RenderMode::Prefix(n) => n,
            RenderMode::All => usize::MAX,
        };
        self.catalog.select(self.filters.visible()).take(limit)
    }

    /// "Edit this entry" link, when the paper has a source location and a
    /// template is configured.
    pub fn edit_url(&self, paper: &Paper) -> Option<String> {
        let template = self.options.edit_url_template.as_deref()?;
        paper.provenance.map(|p| p.edit_url(template))
    }
}

/// Whole-session state.
#[derive(Debug, Clone)]
pub enum Model {
    /// Waiting for the dataset. Only `DatasetLoaded` does anything here.
    Loading(SessionOptions),
    Loaded(Box<Session>),
    /// The dataset could not be loaded. Terminal.
    Failed(DatasetError),
}

impl Model {
    pub fn new(options: SessionOptions) -> Self {
        Model::Loading(options)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Model::Loaded(session) => Some(session),
            Model::Loading(_) | Model::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&DatasetError> {
        match self {
            Model::Failed(e) => Some(e),
            Model::Loading(_) | Model::Loaded(_) => None,
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::new(SessionOptions::default())
    }
}

/// Advance the model by one event.
pub fn update(model: Model, msg: Msg) -> Model {
    match model {
        Model::Loading(options) => match msg {
            Msg::DatasetLoaded(Ok(catalog)) => {
                info!(papers = catalog.len(), "session ready");
                Model::Loaded(Box::new(Session::new(catalog, options)))
            }
            Msg::DatasetLoaded(Err(e)) => {
                error!(error = %e, "dataset failed to load");
                Model::Failed(e)
            }
            other => {
                warn!(event = other.kind(), "ignoring event while loading");
                Model::Loading(options)
            }
        },
        Model::Loaded(session) => Model::Loaded(Box::new(session.apply(msg))),
        Model::Failed(e) => {
            warn!(event = msg.kind(), "ignoring event after failed load");
            Model::Failed(e)
        }
    }
}
