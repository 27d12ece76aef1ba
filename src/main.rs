// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use papershelf::{
    highlight_query, load_catalog, paper_of_the_day, update, Catalog, Model, Msg, Paper, Session,
    SessionOptions,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands};

/// Widest title that fits a result row next to the year column.
const TITLE_WIDTH: usize = 68;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Inspect { dataset } => run_inspect(&dataset),
        Commands::Search {
            dataset,
            title,
            author,
            facets,
            from,
            to,
            limit,
            edit_url_template,
        } => {
            let options = SessionOptions {
                prefix_limit: limit,
                edit_url_template,
            };
            let query = SearchArgs {
                title,
                author,
                facets,
                from,
                to,
            };
            run_search(&dataset, options, query)
        }
        Commands::Today { dataset, date } => run_today(&dataset, date.as_deref()),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

fn read_dataset(path: &Path) -> Result<(String, Catalog)> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let catalog =
        load_catalog(&json).with_context(|| format!("failed to load {}", path.display()))?;
    info!(path = %path.display(), papers = catalog.len(), "dataset loaded");
    Ok((json, catalog))
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn brotli_size(bytes: &[u8]) -> Result<usize> {
    let mut out = Vec::new();
    {
        let mut writer = brotli::CompressorWriter::new(&mut out, 4096, 11, 22);
        writer.write_all(bytes).context("brotli compression failed")?;
    }
    Ok(out.len())
}

fn run_inspect(path: &Path) -> Result<()> {
    let (json, catalog) = read_dataset(path)?;
    let papers = catalog.papers();
    let stubs = papers.iter().filter(|p| p.is_stub()).count();
    let yearless = papers.iter().filter(|p| p.year.is_none()).count();
    let links: usize = papers.iter().map(|p| p.links.len()).sum();
    let years = catalog.years();

    let raw = json.len();
    let compressed = brotli_size(json.as_bytes())?;
    let crc = crc32fast::hash(json.as_bytes());

    println!();
    banner(&format!("PAPERSHELF DATASET: {}", path.display()));
    println!();

    open_box("CORPUS");
    field("papers", &count(catalog.len()));
    field("defined", &(catalog.len() - stubs).to_string());
    field("stubs", &stubs.to_string());
    field("authors", &catalog.authors().len().to_string());
    field("links", &links.to_string());
    divider("YEARS");
    field("span", &format!("{} to {}", years.min, years.max));
    field("undated", &yearless.to_string());
    divider("WIRE");
    field("json", &format_size(raw));
    field(
        "brotli",
        &format!("{} {}", format_size(compressed), savings(raw, compressed)),
    );
    field("crc32", &format!("{:08x}", crc));
    close_box();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

struct SearchArgs {
    title: String,
    author: String,
    facets: Vec<String>,
    from: Option<i32>,
    to: Option<i32>,
}

impl SearchArgs {
    /// The events a user would produce to reach this filter state.
    fn messages(self, catalog: &Catalog) -> Vec<Msg> {
        let mut msgs: Vec<Msg> = self.facets.into_iter().map(Msg::FacetAuthor).collect();
        if !self.title.is_empty() {
            msgs.push(Msg::TitleQueryChanged(self.title));
        }
        if !self.author.is_empty() {
            msgs.push(Msg::AuthorQueryChanged(self.author));
        }
        if self.from.is_some() || self.to.is_some() {
            let (full_min, full_max) = catalog.years().full_range();
            let min = self.from.unwrap_or(full_min);
            let max = self.to.map_or(full_max, |y| y.saturating_add(1));
            msgs.push(Msg::YearRangeChanged { min, max });
        }
        msgs
    }
}

fn run_search(path: &Path, options: SessionOptions, args: SearchArgs) -> Result<()> {
    let (_, catalog) = read_dataset(path)?;
    if let (Some(from), Some(to)) = (args.from, args.to) {
        if from > to {
            bail!("--from {} is after --to {}", from, to);
        }
    }

    let msgs = args.messages(&catalog);
    let catalog = Arc::new(catalog);
    let model = update(Model::new(options), Msg::DatasetLoaded(Ok(catalog)));
    let model = msgs.into_iter().fold(model, update);
    let session = model
        .session()
        .context("session did not reach the loaded state")?;

    print_search(session);
    Ok(())
}

fn print_search(session: &Session) {
    let filters = session.filters();

    open_box("FILTERS");
    field("title", filters.title_query());
    field("author", filters.author_query());
    let chips: Vec<String> = filters.facets().labels().map(facet_chip).collect();
    field("facets", &chips.join(" "));
    let (lo, hi) = filters.year_range();
    field("years", &format!("[{}, {})", lo, hi));
    divider("RESULTS");

    for paper in session.rendered() {
        print_paper(session, paper);
    }

    let shown = session.rendered().count();
    let total = session.visible_count();
    divider("SUMMARY");
    field("visible", &format!("{} of {}", count(total), session.catalog().len()));
    if shown < total {
        field("shown", &format!("first {}", shown));
    }
    close_box();
}

fn print_paper(session: &Session, paper: &Paper) {
    let filters = session.filters();
    let title = truncate(&paper.title, TITLE_WIDTH);
    let mut line = format!(
        " {}  {}",
        year_label(paper.year),
        segments(&highlight_query(&title, filters.title_query()))
    );
    if paper.is_stub() {
        line.push(' ');
        line.push_str(&stub_badge());
    }
    row(&line);

    if !paper.authors.is_empty() {
        let authors: Vec<String> = paper
            .authors
            .iter()
            .map(|name| segments(&highlight_query(name, filters.author_query())))
            .collect();
        row(&format!("       {}", authors.join(", ")));
    }
    if let Some(url) = session.edit_url(paper) {
        row(&format!("       {}", paint(Role::Muted, &truncate(&url, TITLE_WIDTH))));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TODAY
// ═══════════════════════════════════════════════════════════════════════════

fn run_today(path: &Path, date: Option<&str>) -> Result<()> {
    let (_, catalog) = read_dataset(path)?;
    let date = match date {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("invalid date {:?}, expected YYYY-MM-DD", text))?,
        None => Local::now().date_naive(),
    };

    let Some(paper) = paper_of_the_day(&catalog, date) else {
        bail!("dataset has no defined papers to pick from");
    };

    open_box(&format!("PAPER OF THE DAY {}", date.format("%Y-%m-%d")));
    row(&format!(" {}  {}", year_label(paper.year), truncate(&paper.title, TITLE_WIDTH)));
    if !paper.authors.is_empty() {
        row(&format!("       {}", truncate(&paper.authors.join(", "), TITLE_WIDTH)));
    }
    for link in &paper.links {
        row(&format!("       {}", paint(Role::Link, &truncate(link, TITLE_WIDTH))));
    }
    close_box();
    Ok(())
}
