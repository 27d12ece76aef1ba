// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Precomputed lookups built once when a catalog loads.
//!
//! Only authors need one: title and year filters scan the corpus directly,
//! which is cheap at thousands of records.

mod author;

pub use author::*;
