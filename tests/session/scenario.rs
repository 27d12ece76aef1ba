//! Typing into the filters, one event at a time.

use super::common::{run, session, shelf_catalog, visible_titles};
use papershelf::testing::{make_paper, sample_catalog};
use papershelf::{highlight_query, update, Catalog, IdSet, Msg, PaperId, Segment};

#[test]
fn empty_filters_show_the_whole_shelf() {
    let model = run(shelf_catalog(), []);
    assert_eq!(session(&model).visible_count(), 8);
    assert!(session(&model).visible().is_universal());
}

#[test]
fn title_terms_are_anded_in_any_order() {
    let model = run(
        shelf_catalog(),
        [Msg::TitleQueryChanged("programming functional".into())],
    );
    assert_eq!(
        visible_titles(&model),
        vec![
            "Why Functional Programming Matters",
            "Monads for Functional Programming",
            "The Essence of Functional Programming",
        ]
    );
}

#[test]
fn title_query_with_no_hits_is_empty_not_error() {
    let model = run(shelf_catalog(), [Msg::TitleQueryChanged("quantum".into())]);
    assert_eq!(session(&model).visible_count(), 0);
    assert_eq!(session(&model).rendered().count(), 0);
}

#[test]
fn clearing_a_query_restores_everything() {
    let model = run(
        shelf_catalog(),
        [
            Msg::TitleQueryChanged("monads".into()),
            Msg::TitleQueryChanged("  ".into()),
        ],
    );
    assert!(session(&model).visible().is_universal());
}

#[test]
fn author_terms_must_meet_in_one_name() {
    // "pierce" and "reynolds" co-author the stub but never share a name.
    let model = run(
        shelf_catalog(),
        [Msg::AuthorQueryChanged("pierce reynolds".into())],
    );
    assert_eq!(session(&model).visible_count(), 0);
}

#[test]
fn author_substring_unions_matching_names() {
    // "er" hits Pierce and Wadler
    let model = run(shelf_catalog(), [Msg::AuthorQueryChanged("er".into())]);
    assert_eq!(session(&model).visible_count(), 5);
}

#[test]
fn year_range_excludes_undated_papers() {
    let model = run(
        shelf_catalog(),
        [Msg::YearRangeChanged { min: 1989, max: 1993 }],
    );
    let titles = visible_titles(&model);
    assert_eq!(titles.len(), 4);
    assert!(!titles.contains(&"A Theory of Types".to_string()));
}

#[test]
fn returning_to_full_year_range_restores_undated() {
    let model = run(
        shelf_catalog(),
        [
            Msg::YearRangeChanged { min: 1989, max: 1993 },
            Msg::YearRangeChanged { min: 1972, max: 2003 },
        ],
    );
    assert!(session(&model).visible().is_universal());
    assert!(visible_titles(&model).contains(&"A Theory of Types".to_string()));
}

#[test]
fn every_dimension_combines() {
    let model = run(
        shelf_catalog(),
        [
            Msg::TitleQueryChanged("programming".into()),
            Msg::AuthorQueryChanged("wadler".into()),
            Msg::YearRangeChanged { min: 1990, max: 2003 },
        ],
    );
    assert_eq!(
        visible_titles(&model),
        vec![
            "Monads for Functional Programming",
            "The Essence of Functional Programming",
        ]
    );
}

#[test]
fn three_paper_shelf_title_then_years() {
    // 1: TAPL (Pierce, 2002), 2: WhyFP (Hughes, 1989), 3: A Theory of Types (undated)
    let model = run(sample_catalog(), [Msg::TitleQueryChanged("types".into())]);
    assert_eq!(
        session(&model).visible(),
        &IdSet::from_ids([PaperId(1), PaperId(3)])
    );

    let model = update(model, Msg::YearRangeChanged { min: 2000, max: 2021 });
    assert_eq!(session(&model).visible(), &IdSet::from_ids([PaperId(1)]));
}

#[test]
fn final_sigma_title_is_found_and_highlighted() {
    let catalog = match Catalog::from_papers(vec![make_paper(0, "ΟΔΟΣ", &[], Some(2000))]) {
        Ok(catalog) => catalog,
        Err(e) => panic!("catalog rejected: {e}"),
    };
    let model = run(catalog, [Msg::TitleQueryChanged("ΟΔΟΣ".into())]);
    let session = session(&model);
    assert_eq!(session.visible(), &IdSet::from_ids([PaperId(0)]));

    let paper = &session.catalog().papers()[0];
    assert_eq!(
        highlight_query(&paper.title, session.filters().title_query()),
        vec![Segment {
            text: "ΟΔΟΣ",
            matched: true
        }]
    );
}

#[test]
fn lowercase_query_finds_final_sigma_title() {
    let catalog = match Catalog::from_papers(vec![make_paper(0, "Η ΟΔΟΣ", &[], None)]) {
        Ok(catalog) => catalog,
        Err(e) => panic!("catalog rejected: {e}"),
    };
    let model = run(catalog, [Msg::TitleQueryChanged("οδοσ".into())]);
    assert_eq!(session(&model).visible_count(), 1);
}
