// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boxed terminal output for the papershelf CLI.
//!
//! Every report is a stack of boxes: a double-line [`banner`] for the dataset,
//! then [`open_box`] / [`divider`] / [`close_box`] around rows of [`field`]s
//! and paper lines. Colors are picked by [`Role`] rather than by hue, so the
//! dark and light palettes stay interchangeable.
//!
//! The palette comes from `PAPERSHELF_THEME` ("dark" or "light"), falling back
//! to the `COLORFGBG` background hint, then dark. `NO_COLOR` or a non-TTY
//! stdout turns color off; matches are then bracketed instead.

use papershelf::Segment;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Inner width of every box, borders excluded.
pub const BOX_WIDTH: usize = 80;

/// Width of the label column in [`field`].
const LABEL_WIDTH: usize = 18;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

/// What a piece of text is, which decides how it is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Single-line box borders.
    Border,
    /// Double-line banner borders.
    Frame,
    /// Section labels in box headers.
    Heading,
    /// Banner text.
    Banner,
    /// Publication years.
    Year,
    /// Highlighted query matches.
    Match,
    /// Pinned author facets and non-zero counts.
    Good,
    /// Zero counts and size regressions.
    Bad,
    /// Field labels, stubs, edit links.
    Muted,
    /// Paper links.
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Palette {
    /// OneDark
    Dark,
    /// One Light
    Light,
}

impl Palette {
    fn detect() -> Self {
        if let Ok(name) = std::env::var("PAPERSHELF_THEME") {
            match name.to_ascii_lowercase().as_str() {
                "light" | "l" => return Palette::Light,
                "dark" | "d" => return Palette::Dark,
                _ => {}
            }
        }
        // "fg;bg", background 7 or 9..=15 is a light terminal
        let light_bg = std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
            .is_some_and(|bg| bg >= 7 && bg != 8);
        if light_bg {
            Palette::Light
        } else {
            Palette::Dark
        }
    }

    fn current() -> Self {
        static PALETTE: OnceLock<Palette> = OnceLock::new();
        *PALETTE.get_or_init(Palette::detect)
    }

    fn rgb(self, role: Role) -> (u8, u8, u8) {
        use Role::*;
        match (self, role) {
            (Palette::Dark, Border | Muted) => (92, 99, 112),
            (Palette::Dark, Frame | Link) => (97, 175, 239),
            (Palette::Dark, Heading) => (86, 182, 194),
            (Palette::Dark, Banner) => (102, 217, 239),
            (Palette::Dark, Year) => (198, 120, 221),
            (Palette::Dark, Match) => (255, 215, 0),
            (Palette::Dark, Good) => (152, 195, 121),
            (Palette::Dark, Bad) => (224, 108, 117),
            (Palette::Light, Border | Muted) => (160, 161, 167),
            (Palette::Light, Frame | Link) => (64, 120, 242),
            (Palette::Light, Heading) => (1, 132, 188),
            (Palette::Light, Banner) => (1, 112, 158),
            (Palette::Light, Year) => (166, 38, 164),
            (Palette::Light, Match) => (152, 104, 1),
            (Palette::Light, Good) => (80, 161, 79),
            (Palette::Light, Bad) => (228, 86, 73),
        }
    }
}

/// True-color foreground escape.
fn fg((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn weight(role: Role) -> &'static str {
    match role {
        Role::Heading | Role::Banner | Role::Match | Role::Good | Role::Bad => BOLD,
        Role::Muted => DIM,
        _ => "",
    }
}

/// Colors go to terminals only, and never when `NO_COLOR` is set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// `text` in the color and weight of `role`, or unchanged without colors.
pub fn paint(role: Role, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let color = fg(Palette::current().rgb(role));
    format!("{}{}{}{}", weight(role), color, text, RESET)
}

/// Border glyphs, painted whenever colors are on.
fn border(role: Role, glyphs: &str) -> String {
    if use_colors() {
        format!("{}{}{}", fg(Palette::current().rgb(role)), glyphs, RESET)
    } else {
        glyphs.to_string()
    }
}

/// Printed width, skipping `ESC [ ... m` sequences.
pub fn visible_len(s: &str) -> usize {
    s.split('\x1b')
        .enumerate()
        .map(|(i, chunk)| {
            if i == 0 {
                chunk.chars().count()
            } else {
                chunk
                    .split_once('m')
                    .map_or(0, |(_, rest)| rest.chars().count())
            }
        })
        .sum()
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

/// `left` + `content` padded to the box width + `right`.
fn framed(left: &str, content: &str, right: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!("{}{}{}{}", left, content, " ".repeat(pad), right)
}

/// A horizontal rule with an optional label: `┌─ LABEL ────┐`.
fn rule(left: char, right: char, label: Option<&str>) -> String {
    let head = label.map_or_else(String::new, |l| format!("─ {} ", paint(Role::Heading, l)));
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&head)));
    format!(
        "{}{}{}",
        border(Role::Border, &left.to_string()),
        head,
        border(Role::Border, &format!("{}{}", fill, right))
    )
}

pub fn open_box(label: &str) {
    println!("{}", rule('┌', '┐', Some(label)));
}

pub fn divider(label: &str) {
    println!("{}", rule('├', '┤', Some(label)));
}

pub fn close_box() {
    println!("{}", rule('└', '┘', None));
}

/// One line inside the current box.
pub fn row(content: &str) {
    let side = border(Role::Border, "│");
    println!("{}", framed(&side, content, &side));
}

/// A label/value line inside the current box.
pub fn field(label: &str, value: &str) {
    let label = paint(Role::Muted, &pad_right(label, LABEL_WIDTH));
    row(&format!("  {}{}", label, value));
}

/// Double-line box with one centered line of text.
pub fn banner(text: &str) {
    let bar = "═".repeat(BOX_WIDTH);
    let text = paint(Role::Banner, text);
    let left = BOX_WIDTH.saturating_sub(visible_len(&text)) / 2;
    let side = border(Role::Frame, "║");

    println!("{}", border(Role::Frame, &format!("╔{}╗", bar)));
    println!("{}", framed(&side, &format!("{}{}", " ".repeat(left), text), &side));
    println!("{}", border(Role::Frame, &format!("╚{}╝", bar)));
}

// ═══════════════════════════════════════════════════════════════════════════
// PAPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Highlight segments; matched runs painted, or bracketed without colors.
pub fn segments(parts: &[Segment<'_>]) -> String {
    let colors = use_colors();
    parts
        .iter()
        .map(|s| match (s.matched, colors) {
            (false, _) => s.text.to_string(),
            (true, true) => paint(Role::Match, s.text),
            (true, false) => format!("[{}]", s.text),
        })
        .collect()
}

/// Four-wide year column; a dash for undated papers.
pub fn year_label(year: Option<i32>) -> String {
    match year {
        Some(y) => paint(Role::Year, &format!("{:>4}", y)),
        None => paint(Role::Muted, "   -"),
    }
}

pub fn stub_badge() -> String {
    paint(Role::Muted, "[stub]")
}

pub fn facet_chip(label: &str) -> String {
    paint(Role::Good, &format!("[{}]", label))
}

pub fn count(n: usize) -> String {
    let role = if n == 0 { Role::Bad } else { Role::Good };
    paint(role, &n.to_string())
}

// ═══════════════════════════════════════════════════════════════════════════
// SIZES
// ═══════════════════════════════════════════════════════════════════════════

/// Percentage saved by compression, colored by sign.
pub fn savings(raw: usize, compressed: usize) -> String {
    if raw == 0 {
        return paint(Role::Muted, "N/A");
    }
    let pct = (1.0 - compressed as f64 / raw as f64) * 100.0;
    match pct {
        p if p.abs() < 0.5 => paint(Role::Muted, "0%"),
        p if p > 0.0 => paint(Role::Good, &format!("-{:.0}%", p)),
        p => paint(Role::Bad, &format!("+{:.0}%", -p)),
    }
}

/// Pad with spaces to `width` printed columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b >= KB * KB {
        format!("{:.1} MB", b / (KB * KB))
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Cut to `max_chars` characters, ending in `…` when shortened.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    Cow::Owned(format!("{}…", kept))
}
