//! Evaluators agree with their brute-force definitions.

use super::common::{
    author_query_strategy, catalog_strategy, query_strategy,
};
use papershelf::{
    evaluate_author, evaluate_exact_author, evaluate_title, evaluate_years, fold_case,
    parse_terms, Catalog, IdSet,
};
use proptest::prelude::*;

/// Ids of papers satisfying `pred`, as an explicit set.
fn brute_force(catalog: &Catalog, pred: impl Fn(&papershelf::Paper) -> bool) -> IdSet {
    catalog.papers().iter().filter(|p| pred(p)).map(|p| p.id).collect()
}

proptest! {
    #[test]
    fn prop_title_is_and_of_substrings(catalog in catalog_strategy(), query in query_strategy()) {
        let terms = parse_terms(&query);
        let result = evaluate_title(&catalog, &query);
        if terms.is_empty() {
            prop_assert!(result.is_universal());
        } else {
            let expected = brute_force(&catalog, |p| {
                let title = fold_case(&p.title);
                terms.iter().all(|t| title.contains(t.as_str()))
            });
            prop_assert_eq!(result, expected);
        }
    }

    #[test]
    fn prop_author_terms_meet_in_one_name(
        catalog in catalog_strategy(),
        query in author_query_strategy(),
    ) {
        let terms = parse_terms(&query);
        let result = evaluate_author(&catalog, &query);
        if terms.is_empty() {
            prop_assert!(result.is_universal());
        } else {
            let expected = brute_force(&catalog, |p| {
                p.authors.iter().any(|name| {
                    let name = fold_case(name);
                    terms.iter().all(|t| name.contains(t.as_str()))
                })
            });
            prop_assert_eq!(result, expected);
        }
    }

    #[test]
    fn prop_exact_author_is_case_sensitive_membership(catalog in catalog_strategy()) {
        for entry in catalog.authors().iter() {
            let expected = brute_force(&catalog, |p| p.authors.iter().any(|a| a == entry.name()));
            prop_assert_eq!(evaluate_exact_author(&catalog, entry.name()), expected);
        }
        prop_assert!(evaluate_exact_author(&catalog, "Nobody At All").is_empty());
    }

    #[test]
    fn prop_years_filter_half_open(
        catalog in catalog_strategy(),
        min in 1940i32..2030,
        width in 0i32..40,
    ) {
        let max = min + width;
        let result = evaluate_years(&catalog, min, max);
        if (min, max) == catalog.years().full_range() {
            prop_assert!(result.is_universal());
        } else {
            let expected = brute_force(&catalog, |p| p.year.is_some_and(|y| min <= y && y < max));
            prop_assert_eq!(result, expected);
        }
    }

    #[test]
    fn prop_full_range_keeps_everything(catalog in catalog_strategy()) {
        let (min, max) = catalog.years().full_range();
        prop_assert!(evaluate_years(&catalog, min, max).is_universal());
    }
}
