// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the suffix-trace CLI.
//!
//! Boxed sections, OneDark colors on dark terminals and One Light on light
//! ones. Theme detection tries `SUFFIX_TRACE_THEME` first, then `COLORFGBG`,
//! then defaults to dark. Colors are dropped entirely when stdout is not a TTY
//! or `NO_COLOR` is set, so piped output stays plain.

use std::io::{self, Write};
use std::sync::OnceLock;
use suffix_trace::{Comparison, SearchResult, SearchStep, SuffixArray, SuffixIndex};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Longest suffix shown in full before it gets an ellipsis.
const SUFFIX_PREVIEW: usize = 48;
const PATTERN_PREVIEW: usize = 16;

/// Step details sit this far inside the left border.
const DETAIL_INDENT: usize = 4;

pub const EMPTY_TEXT_PROMPT: &str = "enter a text to build the suffix array";
pub const EMPTY_PATTERN_PROMPT: &str = "enter a pattern to start the search";

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SUFFIX_TRACE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7 or 9-15 is a light palette entry
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Border color, or nothing when colors are off.
fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Visible length in characters, excluding ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `s` to at most `max` characters, marking the cut with `…`.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Write a content line: │ content          │
pub fn row<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let (b, r) = (border(), reset());
    writeln!(out, "{b}│{r}{content}{}{b}│{r}", " ".repeat(pad))
}

/// Write section header: ┌─ LABEL ──────────┐
pub fn section_top<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let (b, r) = (border(), reset());
    writeln!(out, "{b}┌{r}{label_part}{b}{}┐{r}", "─".repeat(remaining))
}

/// Write section divider: ├─ LABEL ──────────┤
pub fn section_mid<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let (b, r) = (border(), reset());
    writeln!(out, "{b}├{r}{label_part}{b}{}┤{r}", "─".repeat(remaining))
}

/// Write section footer: └──────────────────┘
pub fn section_bot<W: Write>(out: &mut W) -> io::Result<()> {
    let (b, r) = (border(), reset());
    writeln!(out, "{b}└{}┘{r}", "─".repeat(BOX_WIDTH))
}

// ═══════════════════════════════════════════════════════════════════════════
// SUFFIX ARRAY RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Quote a suffix for display, shortened to at most `max` characters.
fn quoted(suffix: &str, max: usize) -> String {
    format!("\"{}\"", truncate_chars(suffix, max))
}

fn cells(suffix_array: &SuffixArray, highlight: Option<usize>) -> Vec<String> {
    suffix_array
        .iter()
        .enumerate()
        .map(|(rank, offset)| {
            if Some(rank) == highlight {
                themed(GREEN, &[BOLD], &format!("({})", offset))
            } else {
                offset.to_string()
            }
        })
        .collect()
}

/// The array as `[5, 3, 1, 0, 4, 2]` with the cell at `highlight` (a rank)
/// marked, wrapped over as many rows as it takes.
fn write_cells<W: Write>(
    out: &mut W,
    suffix_array: &SuffixArray,
    highlight: Option<usize>,
) -> io::Result<()> {
    let cells = cells(suffix_array, highlight);
    let mut line = String::from("  [");
    for (i, cell) in cells.iter().enumerate() {
        let piece = if i + 1 == cells.len() {
            format!("{}]", cell)
        } else {
            format!("{}, ", cell)
        };
        if visible_len(&line) + visible_len(&piece) > BOX_WIDTH {
            row(out, line.trim_end())?;
            line = String::from("   ");
        }
        line.push_str(&piece);
    }
    if cells.is_empty() {
        line.push(']');
    }
    row(out, &line)
}

fn comparison_badge(comparison: Comparison) -> String {
    match comparison {
        Comparison::Less => themed(YELLOW, &[], comparison.label()),
        Comparison::Equal => themed(GREEN, &[BOLD], comparison.label()),
        Comparison::Greater => themed(BLUE, &[], comparison.label()),
    }
}

/// Header and detail line for one probe. `number` is 1-based.
///
/// The detail line always fits a row indented by `DETAIL_INDENT`: the suffix
/// preview gets whatever room the fixed text leaves.
pub fn format_step(number: usize, step: &SearchStep, pattern: &str) -> (String, String) {
    let header = format!(
        "step {}: interval [{}, {}], mid = {}",
        number, step.lo, step.hi, step.mid
    );

    let head = format!(
        "compare \"{}\" with pos {}: ",
        truncate_chars(pattern, PATTERN_PREVIEW),
        step.pos
    );
    let tail = format!(" → {}", comparison_badge(step.comparison));
    let fixed = visible_len(&head) + visible_len(&tail) + 2;
    let room = BOX_WIDTH
        .saturating_sub(DETAIL_INDENT + fixed)
        .clamp(1, SUFFIX_PREVIEW);

    let detail = format!("{}{}{}", head, quoted(&step.suffix, room), tail);
    (header, detail)
}

/// Write the text, its suffixes in both orders, and the array itself.
pub fn print_index<W: Write>(out: &mut W, index: &SuffixIndex<'_>) -> io::Result<()> {
    let dim = |s: &str| themed(GRAY, &[DIM], s);

    section_top(out, "TEXT")?;
    row(out, &format!("  {}", quoted(index.text().as_str(), SUFFIX_PREVIEW)))?;
    row(out, &format!("  {} characters", index.text().len()))?;

    section_mid(out, "SUFFIXES (TEXT ORDER)")?;
    for (offset, suffix) in index.suffixes() {
        row(
            out,
            &format!(
                "  {:>4}  {:<50} {}",
                offset,
                quoted(suffix, SUFFIX_PREVIEW),
                dim(&format!("pos = {}", offset))
            ),
        )?;
    }

    section_mid(out, "SUFFIXES (SORTED)")?;
    for ranked in index.sorted_suffixes() {
        row(
            out,
            &format!(
                "  {:>4}  {:<50} {}",
                ranked.rank,
                quoted(ranked.suffix, SUFFIX_PREVIEW),
                dim(&format!("pos = {}", ranked.offset))
            ),
        )?;
    }

    section_mid(out, "SUFFIX ARRAY")?;
    write_cells(out, index.suffix_array(), None)?;
    section_bot(out)
}

/// Write every probe of a search and the final verdict.
///
/// An empty pattern gets its steps but no verdict: the prompt takes the
/// verdict's place and no cell is highlighted.
pub fn print_trace<W: Write>(
    out: &mut W,
    index: &SuffixIndex<'_>,
    pattern: &str,
    result: &SearchResult,
) -> io::Result<()> {
    section_top(out, "SEARCH")?;
    row(out, &format!("  pattern {}", quoted(pattern, SUFFIX_PREVIEW)))?;

    section_mid(out, "STEPS")?;
    if result.steps.is_empty() {
        row(out, &format!("  {}", themed(GRAY, &[DIM], "no probes")))?;
    }
    for (i, step) in result.steps.iter().enumerate() {
        let (header, detail) = format_step(i + 1, step, pattern);
        row(out, &format!("  {}", themed(CYAN, &[], &header)))?;
        row(out, &format!("{}{}", " ".repeat(DETAIL_INDENT), detail))?;
    }

    if let Some(last) = result.last_step() {
        row(out, "")?;
        row(
            out,
            &format!(
                "  last step: suffix at pos {} is {} relative to the pattern",
                last.pos,
                comparison_badge(last.comparison)
            ),
        )?;
    }

    section_mid(out, "RESULT")?;
    if pattern.is_empty() {
        row(out, &format!("  {}", themed(GRAY, &[], EMPTY_PATTERN_PROMPT)))?;
        write_cells(out, index.suffix_array(), None)?;
        return section_bot(out);
    }

    let verdict = match result.matched_offset {
        Some(offset) => themed(
            GREEN,
            &[BOLD],
            &format!("✓ pattern found at position {} of the text", offset),
        ),
        None => themed(RED, &[BOLD], "✗ pattern not found in the text"),
    };
    row(out, &format!("  {}", verdict))?;
    write_cells(
        out,
        index.suffix_array(),
        result.matched_rank(index.suffix_array()),
    )?;
    section_bot(out)
}
