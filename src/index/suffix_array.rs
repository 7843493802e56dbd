// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array construction by direct comparison sort.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_COMPLETE**: the array is a permutation of `[0, n)`
//! 2. **SUFFIX_ARRAY_SORTED**: `suffix(sa[i]) <= suffix(sa[i + 1])`
//! 3. **IMMUTABLE**: no `&mut` access once built; rebuild to change
//!
//! Suffixes are never copied for sorting. Each identifier is an offset, and
//! the comparator slices both suffixes out of the one shared text. That keeps
//! memory at O(n) while the sort does O(n log n) comparisons, each up to O(n)
//! characters long.

use super::text::Text;
use crate::verify::contracts::{check_suffix_array_complete, check_suffix_array_sorted};
use crate::verify::{verify_suffix_array, InvariantError};
use serde::Serialize;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Starting offsets of every suffix, in ascending lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuffixArray {
    offsets: Vec<usize>,
}

impl SuffixArray {
    /// Adopt offsets produced elsewhere, after checking they form a valid
    /// suffix array of `text`.
    pub fn from_offsets(text: &Text<'_>, offsets: Vec<usize>) -> Result<Self, InvariantError> {
        verify_suffix_array(text, &offsets)?;
        Ok(Self { offsets })
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }

    /// Offset stored at `rank`.
    pub fn get(&self, rank: usize) -> Option<usize> {
        self.offsets.get(rank).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.offsets.iter().copied()
    }

    /// Rank at which `offset` sits. Linear scan; only used for display.
    pub fn rank_of(&self, offset: usize) -> Option<usize> {
        self.offsets.iter().position(|&o| o == offset)
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.offsets
    }
}

impl AsRef<[usize]> for SuffixArray {
    fn as_ref(&self) -> &[usize] {
        &self.offsets
    }
}

impl<'s> IntoIterator for &'s SuffixArray {
    type Item = &'s usize;
    type IntoIter = std::slice::Iter<'s, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter()
    }
}

/// Build the suffix array of `text`.
///
/// Total: the empty text gives an empty array. Deterministic even with the
/// parallel sort, because suffixes at different offsets have different lengths
/// and so never compare equal.
pub fn build(text: &Text<'_>) -> SuffixArray {
    let mut offsets: Vec<usize> = (0..text.len()).collect();

    // INVARIANT: SUFFIX_ARRAY_SORTED
    // Plain `str` ordering is byte-wise, which for UTF-8 is the same as
    // ordering by Unicode scalar value, and a proper prefix sorts first.
    #[cfg(feature = "parallel")]
    {
        offsets.par_sort_by(|&a, &b| text.suffix(a).cmp(text.suffix(b)));
    }
    #[cfg(not(feature = "parallel"))]
    {
        offsets.sort_by(|&a, &b| text.suffix(a).cmp(text.suffix(b)));
    }

    check_suffix_array_complete(text, &offsets);
    check_suffix_array_sorted(text, &offsets);

    debug!(text_len = text.len(), "built suffix array");

    SuffixArray { offsets }
}
