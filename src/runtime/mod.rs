// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings for the browser.
//!
//! The page's JavaScript owns the DOM and the timers; everything it asks about
//! (what is visible, what to highlight, which paper is today's) goes through
//! the session reducer compiled to WASM.

#[cfg(feature = "wasm")]
pub mod wasm;
