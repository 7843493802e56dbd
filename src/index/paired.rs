// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A text and its suffix array, kept together.
//!
//! The free functions take the text and the array separately and trust the
//! caller to pair them correctly. `SuffixIndex` removes that trust: it builds
//! the array from the text it owns a reference to, and hands out no way to
//! swap either half.

use super::suffix_array::{build, SuffixArray};
use super::text::Text;
use crate::search::{search_with, SearchOptions};
use crate::types::SearchResult;

/// One suffix in suffix-array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedSuffix<'a> {
    /// Position in the suffix array.
    pub rank: usize,
    /// Position in the text.
    pub offset: usize,
    pub suffix: &'a str,
}

/// An immutable (text, suffix array) pair.
#[derive(Debug, Clone)]
pub struct SuffixIndex<'a> {
    text: Text<'a>,
    suffix_array: SuffixArray,
}

impl<'a> SuffixIndex<'a> {
    /// Build the index for `raw`.
    pub fn new(raw: &'a str) -> Self {
        let text = Text::new(raw);
        let suffix_array = build(&text);
        Self { text, suffix_array }
    }

    pub fn text(&self) -> &Text<'a> {
        &self.text
    }

    pub fn suffix_array(&self) -> &SuffixArray {
        &self.suffix_array
    }

    pub fn len(&self) -> usize {
        self.suffix_array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffix_array.is_empty()
    }

    /// Every suffix in text order, with its starting offset.
    pub fn suffixes(&self) -> impl ExactSizeIterator<Item = (usize, &'a str)> + '_ {
        (0..self.text.len()).map(move |offset| (offset, self.text.suffix(offset)))
    }

    /// Every suffix in suffix-array order.
    pub fn sorted_suffixes(&self) -> impl ExactSizeIterator<Item = RankedSuffix<'a>> + '_ {
        self.suffix_array
            .iter()
            .enumerate()
            .map(move |(rank, offset)| RankedSuffix {
                rank,
                offset,
                suffix: self.text.suffix(offset),
            })
    }

    /// Search with the default options.
    pub fn search(&self, pattern: &str) -> SearchResult {
        self.search_with(pattern, &SearchOptions::default())
    }

    pub fn search_with(&self, pattern: &str, options: &SearchOptions) -> SearchResult {
        search_with(&self.text, &self.suffix_array, pattern, options)
    }
}
