// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types: what a query hands back to its caller.
//!
//! A search produces a `SearchResult`, which carries the verdict and the full
//! list of `SearchStep`s, one per binary-search probe, in the order they were
//! made. Both serialize to camelCase JSON for whatever renders them.

use crate::index::SuffixArray;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Outcome of comparing the probed suffix against the pattern.
///
/// Read it as "the suffix is ___ than the pattern". `Less` means the pattern
/// sorts after the probe, so the search continues to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Less,
    Equal,
    Greater,
}

impl Comparison {
    /// Stable lowercase label for display.
    pub fn label(self) -> &'static str {
        match self {
            Comparison::Less => "less",
            Comparison::Equal => "equal",
            Comparison::Greater => "greater",
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(comparison: Comparison) -> Self {
        match comparison {
            Comparison::Less => Ordering::Less,
            Comparison::Equal => Ordering::Equal,
            Comparison::Greater => Ordering::Greater,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One binary-search probe.
///
/// `lo` and `hi` are the interval *before* this probe narrowed it. `mid` is a
/// rank (index into the suffix array); `pos` is the text offset stored there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStep {
    pub lo: usize,
    pub hi: usize,
    pub mid: usize,
    pub pos: usize,
    pub comparison: Comparison,
    /// The full suffix at `pos`, materialized for display.
    pub suffix: String,
}

/// Verdict of one query plus every probe that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub found: bool,
    /// Text offset where the pattern was found; `None` when not found.
    pub matched_offset: Option<usize>,
    pub steps: Vec<SearchStep>,
}

impl SearchResult {
    pub(crate) fn found(offset: usize, steps: Vec<SearchStep>) -> Self {
        Self {
            found: true,
            matched_offset: Some(offset),
            steps,
        }
    }

    pub(crate) fn not_found(steps: Vec<SearchStep>) -> Self {
        Self {
            found: false,
            matched_offset: None,
            steps,
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn last_step(&self) -> Option<&SearchStep> {
        self.steps.last()
    }

    /// Rank of the matched offset in `suffix_array`, if there was a match.
    ///
    /// This is the `mid` of the final step, but computed from the array so it
    /// stays meaningful for results that were deserialized or filtered.
    pub fn matched_rank(&self, suffix_array: &SuffixArray) -> Option<usize> {
        self.matched_offset
            .and_then(|offset| suffix_array.rank_of(offset))
    }
}
