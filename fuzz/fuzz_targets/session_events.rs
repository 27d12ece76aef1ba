// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the session reducer.
//!
//! Replays arbitrary event sequences against a small fixed catalog and checks
//! that the visible set never escapes any filter dimension.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use papershelf::testing::sample_catalog;
use papershelf::{update, Model, Msg};
use std::sync::Arc;

#[derive(Arbitrary, Debug)]
enum Event {
    Title(String),
    Author(String),
    Commit,
    Facet(String),
    Remove(String),
    Years(i16, i16),
    RenderAll,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Title(text) => Msg::TitleQueryChanged(text),
            Event::Author(text) => Msg::AuthorQueryChanged(text),
            Event::Commit => Msg::CommitAuthorFacet,
            Event::Facet(name) => Msg::FacetAuthor(name),
            Event::Remove(label) => Msg::RemoveFacet(label),
            Event::Years(min, max) => Msg::YearRangeChanged {
                min: i32::from(min),
                max: i32::from(max),
            },
            Event::RenderAll => Msg::RenderAll,
        }
    }
}

fuzz_target!(|events: Vec<Event>| {
    let catalog = Arc::new(sample_catalog());
    let model = update(Model::default(), Msg::DatasetLoaded(Ok(catalog)));
    let model = events.into_iter().map(Msg::from).fold(model, update);

    let session = model.session().expect("loaded sessions never fail");
    let filters = session.filters();
    for paper in session.rendered() {
        assert!(filters.title().contains(paper.id));
        assert!(filters.author().contains(paper.id));
        assert!(filters.years().contains(paper.id));
        assert!(filters.facets().sets().all(|set| set.contains(paper.id)));
    }
});
