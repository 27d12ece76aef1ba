//! Algebraic properties of `IdSet`.

use papershelf::{IdSet, PaperId};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn explicit_strategy() -> impl Strategy<Value = IdSet> {
    prop::collection::vec(0u32..64, 0..24).prop_map(|ids| ids.into_iter().map(PaperId).collect())
}

fn id_set_strategy() -> impl Strategy<Value = IdSet> {
    prop_oneof![
        1 => Just(IdSet::Universal),
        4 => explicit_strategy(),
    ]
}

fn members(set: &IdSet) -> Option<BTreeSet<u32>> {
    set.ids().map(|ids| ids.iter().map(|id| id.get()).collect())
}

proptest! {
    #[test]
    fn prop_universal_is_identity(a in id_set_strategy()) {
        prop_assert_eq!(IdSet::Universal.intersect(&a), a.clone());
        prop_assert_eq!(a.intersect(&IdSet::Universal), a);
    }

    #[test]
    fn prop_intersection_commutes(a in id_set_strategy(), b in id_set_strategy()) {
        prop_assert_eq!(a.intersect(&b), b.intersect(&a));
    }

    #[test]
    fn prop_intersection_associates(
        a in id_set_strategy(),
        b in id_set_strategy(),
        c in id_set_strategy(),
    ) {
        prop_assert_eq!(a.intersect(&b).intersect(&c), a.intersect(&b.intersect(&c)));
    }

    #[test]
    fn prop_intersection_idempotent(a in id_set_strategy()) {
        prop_assert_eq!(a.intersect(&a), a);
    }

    #[test]
    fn prop_intersection_matches_btreeset(a in explicit_strategy(), b in explicit_strategy()) {
        let expected: BTreeSet<u32> = members(&a)
            .unwrap()
            .intersection(&members(&b).unwrap())
            .copied()
            .collect();
        prop_assert_eq!(members(&a.intersect(&b)), Some(expected));
    }

    #[test]
    fn prop_explicit_ids_strictly_ascending(a in id_set_strategy(), b in id_set_strategy()) {
        if let Some(ids) = a.intersect(&b).ids() {
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn prop_fold_order_does_not_matter(sets in prop::collection::vec(id_set_strategy(), 0..6)) {
        let forward = IdSet::intersect_all(&sets);
        let backward = IdSet::intersect_all(sets.iter().rev());
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_union_postings_idempotent(ids in prop::collection::vec(0u32..32, 0..16)) {
        let posting: Vec<PaperId> = IdSet::from_ids(ids.into_iter().map(PaperId))
            .ids()
            .unwrap()
            .to_vec();
        let once = IdSet::union_postings([posting.as_slice()]);
        let twice = IdSet::union_postings([posting.as_slice(), posting.as_slice()]);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_contains_agrees_with_members(a in explicit_strategy(), id in 0u32..64) {
        let expected = members(&a).unwrap().contains(&id);
        prop_assert_eq!(a.contains(PaperId(id)), expected);
    }
}

#[test]
fn universal_and_empty_are_different() {
    assert!(IdSet::Universal.contains(PaperId(0)));
    assert!(!IdSet::empty().contains(PaperId(0)));
    assert_eq!(IdSet::Universal.intersect(&IdSet::empty()), IdSet::empty());
}
