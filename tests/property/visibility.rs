//! The visible set is always the fold of every dimension.

use super::common::{author_query_strategy, catalog_strategy, query_strategy, run, session};
use papershelf::{evaluate_author, evaluate_title, evaluate_years, IdSet, Msg};
use proptest::prelude::*;

fn msg_strategy() -> impl Strategy<Value = Msg> {
    prop_oneof![
        query_strategy().prop_map(Msg::TitleQueryChanged),
        author_query_strategy().prop_map(Msg::AuthorQueryChanged),
        Just(Msg::CommitAuthorFacet),
        prop::sample::select(super::common::author_pool().to_vec())
            .prop_map(|name| Msg::FacetAuthor(name.to_string())),
        author_query_strategy().prop_map(Msg::RemoveFacet),
        (1950i32..2030, 0i32..80).prop_map(|(min, w)| Msg::YearRangeChanged { min, max: min + w }),
        Just(Msg::RenderAll),
    ]
}

proptest! {
    #[test]
    fn prop_visible_is_fold_of_dimensions(
        catalog in catalog_strategy(),
        msgs in prop::collection::vec(msg_strategy(), 0..12),
    ) {
        let model = run(catalog, msgs);
        let session = session(&model);
        let catalog = session.catalog();
        let filters = session.filters();

        let (min, max) = filters.year_range();
        let title = evaluate_title(catalog, filters.title_query());
        let author = evaluate_author(catalog, filters.author_query());
        let years = evaluate_years(catalog, min, max);

        let mut expected = title.intersect(&author).intersect(&years);
        for set in filters.facets().sets() {
            expected = expected.intersect(set);
        }
        prop_assert_eq!(session.visible(), &expected);
    }

    #[test]
    fn prop_facet_labels_unique(
        catalog in catalog_strategy(),
        msgs in prop::collection::vec(msg_strategy(), 0..16),
    ) {
        let model = run(catalog, msgs);
        let labels: Vec<&str> = session(&model).filters().facets().labels().collect();
        let mut deduped = labels.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(labels.len(), deduped.len());
        prop_assert!(labels.iter().all(|l| !l.trim().is_empty()));
    }

    #[test]
    fn prop_visible_count_matches_rendered_all(
        catalog in catalog_strategy(),
        msgs in prop::collection::vec(msg_strategy(), 0..8),
    ) {
        let mut msgs = msgs;
        msgs.push(Msg::RenderAll);
        let model = run(catalog, msgs);
        let session = session(&model);
        prop_assert_eq!(session.rendered().count(), session.visible_count());
        if let IdSet::Explicit(ids) = session.visible() {
            prop_assert_eq!(ids.len(), session.visible_count());
        }
    }
}
