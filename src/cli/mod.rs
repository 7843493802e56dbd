// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the suffix-trace command-line interface.
//!
//! Two subcommands: `build` shows the suffix array of a text, and `search`
//! replays the binary search for a pattern probe by probe. Both print boxed
//! terminal output by default or JSON with `--format json`.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use suffix_trace::EmptyPatternPolicy;

#[derive(Parser)]
#[command(
    name = "suffix-trace",
    about = "Build a suffix array and trace binary-search lookups over it",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Keep leading and trailing whitespace in the text and pattern
    #[arg(long, global = true)]
    pub no_trim: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the suffix array of a text and list its suffixes
    Build {
        /// Text to index, or `-` to read it from stdin
        text: String,
    },

    /// Search a text for a pattern and print every binary-search step
    Search {
        /// Text to index, or `-` to read it from stdin
        text: String,

        /// Pattern to look up
        pattern: String,

        /// How to treat an empty pattern
        ///
        /// `probe` runs the search anyway and reports the first probe as a
        /// match. `reject` reports not found without probing.
        #[arg(long, value_enum, default_value = "probe")]
        empty_pattern: EmptyPatternArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmptyPatternArg {
    Probe,
    Reject,
}

impl From<EmptyPatternArg> for EmptyPatternPolicy {
    fn from(arg: EmptyPatternArg) -> Self {
        match arg {
            EmptyPatternArg::Probe => EmptyPatternPolicy::Probe,
            EmptyPatternArg::Reject => EmptyPatternPolicy::Reject,
        }
    }
}
