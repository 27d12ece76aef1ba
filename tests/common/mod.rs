//! Shared test utilities and fixtures.

#![allow(dead_code)]

use papershelf::{load_catalog, update, Catalog, Model, Msg, Paper, Session, SessionOptions};
use proptest::prelude::*;
use std::fs;
use std::sync::Arc;

// Re-export canonical test utilities from papershelf::testing
pub use papershelf::testing::{make_paper, make_stub, sample_catalog, sample_dataset_json};

// ============================================================================
// FIXTURES
// ============================================================================

/// Directory containing the JSON dataset fixtures.
pub const FIXTURES_DIR: &str = "data/fixtures";

/// Raw text of a fixture file.
pub fn fixture(name: &str) -> String {
    let path = format!("{}/{}", FIXTURES_DIR, name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {}", path, e))
}

/// Eight papers by five authors, 1972 to 2002, one undated stub.
pub fn shelf_catalog() -> Catalog {
    load_catalog(&fixture("shelf.json")).expect("shelf.json should load")
}

// ============================================================================
// SESSIONS
// ============================================================================

/// Feed `msgs` to a model that has just loaded `catalog`.
pub fn run(catalog: Catalog, msgs: impl IntoIterator<Item = Msg>) -> Model {
    let model = update(
        Model::new(SessionOptions::default()),
        Msg::DatasetLoaded(Ok(Arc::new(catalog))),
    );
    msgs.into_iter().fold(model, update)
}

/// The loaded session, panicking with the model state otherwise.
pub fn session(model: &Model) -> &Session {
    model
        .session()
        .unwrap_or_else(|| panic!("expected a loaded session, got {:?}", model))
}

/// Titles of visible papers in display order.
pub fn visible_titles(model: &Model) -> Vec<String> {
    let session = session(model);
    session
        .catalog()
        .select(session.visible())
        .map(|p| p.title.clone())
        .collect()
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small author pool so generated papers share names.
const AUTHOR_POOL: &[&str] = &[
    "Ada Lovelace",
    "Alan Turing",
    "Alonzo Church",
    "Barbara Liskov",
    "Edsger Dijkstra",
    "Grace Hopper",
    "Robin Milner",
    "Tony Hoare",
];

/// Lowercase words drawn from a small vocabulary so queries hit.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "types", "lambda", "calculus", "monads", "parsing", "proofs", "objects", "Types",
        "LAMBDA", "Über", "naïve",
    ])
    .prop_map(str::to_string)
}

pub fn title_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..5).prop_map(|w| w.join(" "))
}

/// Papers with distinct ids, random titles, authors and optional years.
pub fn papers_strategy() -> impl Strategy<Value = Vec<Paper>> {
    prop::collection::vec(
        (
            title_strategy(),
            prop::sample::subsequence(AUTHOR_POOL.to_vec(), 0..3),
            prop::option::of(1950i32..2025),
        ),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (title, authors, year))| make_paper(i as u32, &title, &authors, year))
            .collect()
    })
}

pub fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    papers_strategy().prop_map(|papers| {
        Catalog::from_papers(papers).expect("generated papers have distinct ids")
    })
}

/// A query as typed: words with irregular whitespace, sometimes blank.
pub fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        prop::collection::vec(word_strategy(), 1..3).prop_map(|w| w.join("  ")),
        "[a-z]{1,3}",
    ]
}

/// Author queries biased toward fragments of pool names.
pub fn author_query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(AUTHOR_POOL.to_vec()).prop_map(str::to_lowercase),
        prop::sample::select(vec!["a", "an", "ho", "church", "ada love", "TURING"])
            .prop_map(str::to_string),
    ]
}

pub fn author_pool() -> &'static [&'static str] {
    AUTHOR_POOL
}
