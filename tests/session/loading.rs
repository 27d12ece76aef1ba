//! The Loading → Loaded / Failed transitions.

use super::common::{fixture, sample_catalog};
use papershelf::{load_catalog, update, DatasetError, Model, Msg, SessionOptions, TableKind};
use std::sync::Arc;

#[test]
fn filters_before_load_are_dropped() {
    let model = Model::new(SessionOptions::default());
    let model = update(model, Msg::TitleQueryChanged("types".into()));
    let model = update(model, Msg::DatasetLoaded(Ok(Arc::new(sample_catalog()))));

    let session = model.session().expect("loaded");
    assert_eq!(session.filters().title_query(), "");
    assert_eq!(session.visible_count(), 3);
}

#[test]
fn dangling_author_fails_the_load() {
    let result = load_catalog(&fixture("dangling_author.json")).map(Arc::new);
    let model = update(Model::default(), Msg::DatasetLoaded(result));
    assert_eq!(
        model.error(),
        Some(&DatasetError::DanglingId {
            position: 0,
            table: TableKind::Author,
            id: 4,
        })
    );
}

#[test]
fn failed_model_ignores_everything() {
    let model = update(
        Model::default(),
        Msg::DatasetLoaded(Err(DatasetError::Malformed("eof".into()))),
    );
    let model = update(model, Msg::RenderAll);
    let model = update(model, Msg::FacetAuthor("Pierce".into()));
    assert!(model.session().is_none());
    assert!(matches!(model, Model::Failed(DatasetError::Malformed(_))));
}
