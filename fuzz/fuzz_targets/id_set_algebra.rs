// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for lazy intersection sets.
//!
//! Builds sets from arbitrary id lists (Universal when the fuzzer says so) and
//! checks the laws the visibility fold depends on.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use papershelf::{IdSet, PaperId};

#[derive(Arbitrary, Debug)]
enum Input {
    Universal,
    Explicit(Vec<u16>),
}

impl Input {
    fn build(&self) -> IdSet {
        match self {
            Input::Universal => IdSet::Universal,
            Input::Explicit(ids) => ids.iter().map(|&id| PaperId(u32::from(id))).collect(),
        }
    }
}

fuzz_target!(|input: (Input, Input, Input)| {
    let (a, b, c) = (input.0.build(), input.1.build(), input.2.build());

    assert_eq!(a.intersect(&b), b.intersect(&a), "not commutative");
    assert_eq!(
        a.intersect(&b).intersect(&c),
        a.intersect(&b.intersect(&c)),
        "not associative"
    );
    assert_eq!(a.intersect(&IdSet::Universal), a, "Universal is not the identity");

    if let Some(ids) = a.intersect(&b).ids() {
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "explicit ids not canonical");
        assert!(ids.iter().all(|&id| a.contains(id) && b.contains(id)));
    }
});
