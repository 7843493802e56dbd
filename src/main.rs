// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, Read, Write};
use suffix_trace::{SearchOptions, SearchResult, SuffixArray, SuffixIndex};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, themed, BOLD, GRAY, RED};
use cli::{Cli, Commands, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuffixRow<'a> {
    rank: usize,
    offset: usize,
    suffix: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IndexReport<'a> {
    text: &'a str,
    suffix_array: &'a SuffixArray,
    suffixes: Vec<SuffixRow<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchReport<'a> {
    text: &'a str,
    pattern: &'a str,
    suffix_array: &'a SuffixArray,
    matched_rank: Option<usize>,
    #[serde(flatten)]
    result: &'a SearchResult,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(cli, &mut out) {
        eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for JSON. `RUST_LOG` overrides.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Build { text } => {
            let raw = read_input(&text, cli.no_trim)?;
            run_build(out, &raw, cli.format)
        }
        Commands::Search {
            text,
            pattern,
            empty_pattern,
        } => {
            let raw = read_input(&text, cli.no_trim)?;
            let pattern = if cli.no_trim {
                pattern
            } else {
                pattern.trim().to_string()
            };
            let options = SearchOptions {
                empty_pattern: empty_pattern.into(),
            };
            run_search(out, &raw, &pattern, &options, cli.format)
        }
    }
}

/// Read the text argument, or stdin when it is `-`.
fn read_input(arg: &str, no_trim: bool) -> Result<String> {
    let raw = if arg == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read text from stdin")?;
        buf
    } else {
        arg.to_string()
    };

    Ok(if no_trim {
        raw
    } else {
        raw.trim().to_string()
    })
}

fn run_build<W: Write>(out: &mut W, raw: &str, format: OutputFormat) -> Result<()> {
    let index = SuffixIndex::new(raw);
    info!(suffixes = index.len(), "index built");

    match format {
        OutputFormat::Json => write_json(out, &index_report(&index)),
        OutputFormat::Text => {
            if index.is_empty() {
                writeln!(out, "{}", themed(GRAY, &[], display::EMPTY_TEXT_PROMPT))?;
                return Ok(());
            }
            display::print_index(out, &index)?;
            Ok(())
        }
    }
}

fn run_search<W: Write>(
    out: &mut W,
    raw: &str,
    pattern: &str,
    options: &SearchOptions,
    format: OutputFormat,
) -> Result<()> {
    let index = SuffixIndex::new(raw);
    let result = index.search_with(pattern, options);
    debug!(found = result.found, steps = result.step_count(), "query done");

    match format {
        OutputFormat::Json => write_json(
            out,
            &SearchReport {
                text: raw,
                pattern,
                suffix_array: index.suffix_array(),
                matched_rank: result.matched_rank(index.suffix_array()),
                result: &result,
            },
        ),
        OutputFormat::Text => {
            if index.is_empty() {
                writeln!(out, "{}", themed(GRAY, &[], display::EMPTY_TEXT_PROMPT))?;
                return Ok(());
            }
            display::print_trace(out, &index, pattern, &result)?;
            Ok(())
        }
    }
}

fn index_report<'a>(index: &'a SuffixIndex<'a>) -> IndexReport<'a> {
    IndexReport {
        text: index.text().as_str(),
        suffix_array: index.suffix_array(),
        suffixes: index
            .sorted_suffixes()
            .map(|s| SuffixRow {
                rank: s.rank,
                offset: s.offset,
                suffix: s.suffix,
            })
            .collect(),
    }
}

#[cfg(feature = "serde_json")]
fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    writeln!(out, "{}", json)?;
    Ok(())
}

#[cfg(not(feature = "serde_json"))]
fn write_json<W: Write, T: Serialize>(_out: &mut W, _value: &T) -> Result<()> {
    anyhow::bail!("JSON output requires the `serde_json` feature")
}
