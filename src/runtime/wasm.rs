// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the paper shelf.
//!
//! This is the browser-facing API. The page creates one `PaperShelf`, feeds it
//! the dataset blob once it has been fetched, then forwards every input event.
//! After each event it asks for `rendered()` and redraws.
//!
//! ```js
//! const shelf = new PaperShelf({ prefixLimit: 100, editUrlTemplate: "…/{file}#L{line}" });
//! shelf.load(await (await fetch("papers.json")).text());
//! setTimeout(() => { shelf.renderAll(); redraw(); }, fullRenderDelayMs());
//!
//! titleInput.oninput = (e) => { shelf.setTitleQuery(e.target.value); redraw(); };
//! ```
//!
//! Errors cross the boundary as plain strings.

use crate::daily::paper_of_the_day;
use crate::dataset::load_catalog;
use crate::highlight::{highlight_query, Segment};
use crate::session::{update, Model, Msg, Session, SessionOptions, FULL_RENDER_DELAY_MS};
use crate::types::{Paper, PaperId};
use chrono::NaiveDate;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// One paper, ready to draw.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPaper<'a> {
    id: u32,
    title: Vec<Segment<'a>>,
    authors: Vec<JsAuthor<'a>>,
    year: Option<i32>,
    references: &'a [String],
    citations: &'a [String],
    links: &'a [String],
    edit_url: Option<String>,
}

/// An author name, segmented for the live author query.
#[derive(Serialize)]
struct JsAuthor<'a> {
    name: &'a str,
    segments: Vec<Segment<'a>>,
}

#[derive(Serialize)]
struct JsYearBounds {
    min: i32,
    max: i32,
    /// Current half-open selection.
    selected: (i32, i32),
}

impl<'a> JsPaper<'a> {
    fn new(paper: &'a Paper, session: &'a Session) -> Self {
        let filters = session.filters();
        Self {
            id: paper.id.get(),
            title: highlight_query(&paper.title, filters.title_query()),
            authors: paper
                .authors
                .iter()
                .map(|name| JsAuthor {
                    name,
                    segments: highlight_query(name, filters.author_query()),
                })
                .collect(),
            year: paper.year,
            references: &paper.references,
            citations: &paper.citations,
            links: &paper.links,
            edit_url: session.edit_url(paper),
        }
    }
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Milliseconds to wait after `load` before calling `renderAll`.
#[wasm_bindgen(js_name = fullRenderDelayMs)]
pub fn full_render_delay_ms() -> u32 {
    FULL_RENDER_DELAY_MS
}

/// One browsing session.
#[wasm_bindgen]
pub struct PaperShelf {
    model: Model,
}

impl PaperShelf {
    fn dispatch(&mut self, msg: Msg) {
        let model = std::mem::take(&mut self.model);
        self.model = update(model, msg);
    }
}

#[wasm_bindgen]
impl PaperShelf {
    /// `options` is optional; missing fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<PaperShelf, JsValue> {
        let options: SessionOptions = if options.is_undefined() || options.is_null() {
            SessionOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(js_err)?
        };
        Ok(PaperShelf {
            model: Model::new(options),
        })
    }

    /// Parse and resolve the dataset blob. On failure the shelf stays failed.
    #[wasm_bindgen]
    pub fn load(&mut self, json: &str) -> Result<(), JsValue> {
        let result = load_catalog(json).map(Arc::new);
        self.dispatch(Msg::DatasetLoaded(result));
        match self.model.error() {
            Some(e) => Err(js_err(e)),
            None => Ok(()),
        }
    }

    #[wasm_bindgen(js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.model.session().is_some()
    }

    /// Load error message, if the dataset failed.
    #[wasm_bindgen]
    pub fn error(&self) -> Option<String> {
        self.model.error().map(|e| e.to_string())
    }

    #[wasm_bindgen(js_name = setTitleQuery)]
    pub fn set_title_query(&mut self, text: String) {
        self.dispatch(Msg::TitleQueryChanged(text));
    }

    #[wasm_bindgen(js_name = setAuthorQuery)]
    pub fn set_author_query(&mut self, text: String) {
        self.dispatch(Msg::AuthorQueryChanged(text));
    }

    #[wasm_bindgen(js_name = commitAuthorFacet)]
    pub fn commit_author_facet(&mut self) {
        self.dispatch(Msg::CommitAuthorFacet);
    }

    #[wasm_bindgen(js_name = facetAuthor)]
    pub fn facet_author(&mut self, name: String) {
        self.dispatch(Msg::FacetAuthor(name));
    }

    #[wasm_bindgen(js_name = removeFacet)]
    pub fn remove_facet(&mut self, label: String) {
        self.dispatch(Msg::RemoveFacet(label));
    }

    /// Half-open `[min, max)`.
    #[wasm_bindgen(js_name = setYearRange)]
    pub fn set_year_range(&mut self, min: i32, max: i32) {
        self.dispatch(Msg::YearRangeChanged { min, max });
    }

    #[wasm_bindgen(js_name = renderAll)]
    pub fn render_all(&mut self) {
        self.dispatch(Msg::RenderAll);
    }

    #[wasm_bindgen(js_name = visibleCount)]
    pub fn visible_count(&self) -> usize {
        self.model.session().map_or(0, Session::visible_count)
    }

    #[wasm_bindgen(js_name = isVisible)]
    pub fn is_visible(&self, id: u32) -> bool {
        self.model
            .session()
            .is_some_and(|s| s.is_visible(PaperId(id)))
    }

    /// Papers to draw, in display order, with highlighted segments.
    #[wasm_bindgen]
    pub fn rendered(&self) -> Result<JsValue, JsValue> {
        let Some(session) = self.model.session() else {
            return to_value(&Vec::<JsPaper>::new()).map_err(js_err);
        };
        let papers: Vec<JsPaper> = session
            .rendered()
            .map(|paper| JsPaper::new(paper, session))
            .collect();
        to_value(&papers).map_err(js_err)
    }

    /// Facet labels, newest first.
    #[wasm_bindgen]
    pub fn facets(&self) -> Vec<String> {
        self.model.session().map_or_else(Vec::new, |s| {
            s.filters().facets().labels().map(str::to_string).collect()
        })
    }

    /// `{min, max, selected: [lo, hi]}`, or `undefined` before loading.
    #[wasm_bindgen(js_name = yearBounds)]
    pub fn year_bounds(&self) -> Result<JsValue, JsValue> {
        let Some(session) = self.model.session() else {
            return Ok(JsValue::UNDEFINED);
        };
        let bounds = session.catalog().years();
        to_value(&JsYearBounds {
            min: bounds.min,
            max: bounds.max,
            selected: session.filters().year_range(),
        })
        .map_err(js_err)
    }

    /// Segment arbitrary text against a query, for the page's own widgets.
    #[wasm_bindgen]
    pub fn highlight(&self, text: &str, query: &str) -> Result<JsValue, JsValue> {
        to_value(&highlight_query(text, query)).map_err(js_err)
    }

    /// Today's paper in the browser's local calendar.
    #[wasm_bindgen(js_name = paperOfTheDay)]
    pub fn paper_of_the_day(&self) -> Result<JsValue, JsValue> {
        let Some(session) = self.model.session() else {
            return Ok(JsValue::UNDEFINED);
        };
        let now = js_sys::Date::new_0();
        let date = NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
        .ok_or_else(|| JsValue::from_str("invalid local date"))?;

        match paper_of_the_day(session.catalog(), date) {
            Some(paper) => to_value(&JsPaper::new(paper, session)).map_err(js_err),
            None => Ok(JsValue::UNDEFINED),
        }
    }
}
