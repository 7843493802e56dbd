// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array construction and exact-match search with a full decision trace.
//!
//! Build the suffix array of a text once, then ask it whether a pattern
//! occurs. Every answer comes with the list of binary-search probes that
//! produced it, so the search can be replayed step by step.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌──────────────────┐
//! │  index/     │────▶│  search/       │────▶│  types.rs        │
//! │ (Text,      │     │ (compare,      │     │ (SearchResult,   │
//! │  build)     │     │  search)       │     │  SearchStep)     │
//! └─────────────┘     └────────────────┘     └──────────────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    verify/                           │
//! │  (InvariantError, verify_suffix_array, contracts)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Offsets
//!
//! Offsets, ranks and lengths are counted in characters (Unicode scalar
//! values), never bytes. `Text` owns the translation.
//!
//! # Usage
//!
//! ```
//! use suffix_trace::{build, search, Text};
//!
//! let text = Text::new("banana");
//! let sa = build(&text);
//! assert_eq!(sa.as_slice(), &[5, 3, 1, 0, 4, 2]);
//!
//! let result = search(&text, &sa, "ana");
//! assert!(result.found);
//! for step in &result.steps {
//!     println!("[{}, {}] mid={} {:?}", step.lo, step.hi, step.mid, step.comparison);
//! }
//! ```

pub mod index;
pub mod search;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use index::{build, RankedSuffix, SuffixArray, SuffixIndex, Text};
pub use search::{compare, search, search_with, EmptyPatternPolicy, SearchOptions};
pub use types::{Comparison, SearchResult, SearchStep};
pub use verify::{verify_suffix_array, InvariantError};
