//! Bounded first render, then the full list.

use super::common::shelf_catalog;
use papershelf::{update, Model, Msg, RenderMode, SessionOptions, FULL_RENDER_DELAY_MS};
use std::sync::Arc;

fn loaded(prefix_limit: usize) -> Model {
    let options = SessionOptions {
        prefix_limit,
        edit_url_template: Some("https://example.org/papers-{file}.yaml#L{line}".into()),
    };
    update(
        Model::new(options),
        Msg::DatasetLoaded(Ok(Arc::new(shelf_catalog()))),
    )
}

#[test]
fn first_render_is_a_prefix() {
    let model = loaded(3);
    let session = model.session().unwrap();
    assert_eq!(session.render_mode(), RenderMode::Prefix(3));
    let titles: Vec<&str> = session.rendered().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Types and Programming Languages",
            "Why Functional Programming Matters",
            "Theorems for Free!",
        ]
    );
}

#[test]
fn render_all_materializes_everything() {
    let model = update(loaded(3), Msg::RenderAll);
    let session = model.session().unwrap();
    assert_eq!(session.rendered().count(), 8);
}

#[test]
fn prefix_applies_to_filtered_order() {
    let model = update(loaded(1), Msg::TitleQueryChanged("functional".into()));
    let session = model.session().unwrap();
    let titles: Vec<&str> = session.rendered().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Why Functional Programming Matters"]);
    assert_eq!(session.visible_count(), 3);
}

#[test]
fn edit_links_follow_provenance() {
    let model = loaded(10);
    let session = model.session().unwrap();
    let links: Vec<Option<String>> = session.rendered().map(|p| session.edit_url(p)).collect();
    assert_eq!(
        links[1].as_deref(),
        Some("https://example.org/papers-0.yaml#L9")
    );
    // the stub is last and has no source location
    assert_eq!(links[7], None);
}

#[test]
fn full_render_delay_is_short() {
    assert!(FULL_RENDER_DELAY_MS > 0 && FULL_RENDER_DELAY_MS < 100);
}
