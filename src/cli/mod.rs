// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the papershelf command-line interface.
//!
//! Three subcommands, all reading the same JSON blob the browser loads:
//! `inspect` summarizes it, `search` replays a filter session against it, and
//! `today` prints the paper of the day. Handy for checking a freshly converted
//! dataset before it ships.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "papershelf",
    about = "Browse and check a static research paper catalog",
    version
)]
pub struct Cli {
    /// Log more (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a dataset: counts, year span, sizes, checksum
    Inspect {
        /// Path to the dataset JSON
        dataset: PathBuf,
    },

    /// Filter a dataset the way the page does and print what stays visible
    Search {
        /// Path to the dataset JSON
        dataset: PathBuf,

        /// Title query: whitespace-separated substrings, all required
        #[arg(short, long, default_value = "")]
        title: String,

        /// Author query: every term must occur in one author name
        #[arg(short, long, default_value = "")]
        author: String,

        /// Pin an exact author name (repeatable)
        #[arg(short, long = "facet")]
        facets: Vec<String>,

        /// First year to keep (inclusive)
        #[arg(long)]
        from: Option<i32>,

        /// Last year to keep (inclusive)
        #[arg(long)]
        to: Option<i32>,

        /// Maximum number of papers to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Link template for "edit this entry", e.g. https://host/{file}#L{line}
        #[arg(long)]
        edit_url_template: Option<String>,
    },

    /// Print the paper of the day
    Today {
        /// Path to the dataset JSON
        dataset: PathBuf,

        /// Date to pick for, as YYYY-MM-DD (default: today, local time)
        #[arg(long)]
        date: Option<String>,
    },
}
