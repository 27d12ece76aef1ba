//! Pinning, stacking and removing author facets.

use super::common::{run, session, shelf_catalog, visible_titles};
use papershelf::{update, Msg};

#[test]
fn commit_pins_live_result_and_clears_box() {
    let model = run(
        shelf_catalog(),
        [
            Msg::AuthorQueryChanged("backus".into()),
            Msg::CommitAuthorFacet,
        ],
    );
    let filters = session(&model).filters();
    assert_eq!(filters.author_query(), "");
    assert_eq!(filters.facets().labels().collect::<Vec<_>>(), vec!["backus"]);
    assert_eq!(
        visible_titles(&model),
        vec!["Can Programming Be Liberated from the von Neumann Style?"]
    );
}

#[test]
fn facets_and_with_each_other() {
    let model = run(
        shelf_catalog(),
        [Msg::FacetAuthor("Pierce".into()), Msg::FacetAuthor("Reynolds".into())],
    );
    assert_eq!(visible_titles(&model), vec!["A Theory of Types"]);
    assert_eq!(
        session(&model).filters().facets().labels().collect::<Vec<_>>(),
        vec!["Reynolds", "Pierce"]
    );
}

#[test]
fn facet_is_frozen_against_later_typing() {
    let model = run(
        shelf_catalog(),
        [
            Msg::AuthorQueryChanged("wadler".into()),
            Msg::CommitAuthorFacet,
            Msg::AuthorQueryChanged("hughes".into()),
        ],
    );
    // Wadler's papers AND Hughes's papers: disjoint
    assert_eq!(session(&model).visible_count(), 0);
}

#[test]
fn duplicate_facet_is_ignored() {
    let model = run(
        shelf_catalog(),
        [
            Msg::FacetAuthor("Wadler".into()),
            Msg::AuthorQueryChanged("Wadler".into()),
            Msg::CommitAuthorFacet,
        ],
    );
    let filters = session(&model).filters();
    assert_eq!(filters.facets().len(), 1);
    // the commit did nothing, so the box keeps its text
    assert_eq!(filters.author_query(), "Wadler");
}

#[test]
fn blank_commit_is_a_noop() {
    let model = run(shelf_catalog(), [Msg::CommitAuthorFacet]);
    assert!(session(&model).filters().facets().is_empty());
    assert!(session(&model).visible().is_universal());
}

#[test]
fn click_on_unknown_author_pins_empty_set() {
    let model = run(shelf_catalog(), [Msg::FacetAuthor("Knuth".into())]);
    assert_eq!(session(&model).visible_count(), 0);
}

#[test]
fn removing_facet_restores_visibility() {
    let model = run(
        shelf_catalog(),
        [
            Msg::FacetAuthor("Hughes".into()),
            Msg::RemoveFacet("Hughes".into()),
        ],
    );
    assert!(session(&model).filters().facets().is_empty());
    assert_eq!(session(&model).visible_count(), 8);
}

#[test]
fn removing_unknown_label_changes_nothing() {
    let model = run(
        shelf_catalog(),
        [
            Msg::FacetAuthor("Hughes".into()),
            Msg::RemoveFacet("hughes".into()),
        ],
    );
    assert_eq!(session(&model).filters().facets().len(), 1);
}

#[test]
fn wadler_then_hughes_then_remove_wadler() {
    let model = run(
        shelf_catalog(),
        [
            Msg::TitleQueryChanged("functional".into()),
            Msg::AuthorQueryChanged("Wadler".into()),
            Msg::CommitAuthorFacet,
            Msg::AuthorQueryChanged("Hughes".into()),
            Msg::CommitAuthorFacet,
        ],
    );
    // no paper has both authors
    assert_eq!(session(&model).visible_count(), 0);

    let model = update(model, Msg::RemoveFacet("Wadler".into()));
    let filters = session(&model).filters();
    assert_eq!(filters.facets().labels().collect::<Vec<_>>(), vec!["Hughes"]);
    assert_eq!(
        visible_titles(&model),
        vec!["Why Functional Programming Matters"]
    );
}
