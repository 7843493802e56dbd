// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the suffix array and the search trace.
//!
//! Debug-mode assertions only. They compile to nothing in release builds and
//! panic in debug builds the moment an invariant breaks, which is usually a
//! long way before the symptom would show up in a search result.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function              | Property                                  |
//! |--------------------------------|-------------------------------------------|
//! | `check_suffix_array_complete`  | array is a permutation of `[0, n)`        |
//! | `check_suffix_array_sorted`    | adjacent suffixes are non-decreasing      |
//! | `check_step_well_formed`       | `lo <= mid <= hi`, `pos == sa[mid]`       |

use super::types::{verify_complete, verify_sorted};
use crate::index::Text;
use crate::types::SearchStep;

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check that the suffix array is a permutation of `[0, text.len())`.
///
/// # Panics (debug builds only)
/// Panics on a length mismatch, an out-of-range offset or a duplicate.
#[inline]
pub fn check_suffix_array_complete(text: &Text<'_>, offsets: &[usize]) {
    if cfg!(debug_assertions) {
        if let Err(err) = verify_complete(text, offsets) {
            panic!("Contract violation: suffix array incomplete - {}", err);
        }
    }
}

/// Check that the suffix array is sorted lexicographically.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair violates the ordering.
#[inline]
pub fn check_suffix_array_sorted(text: &Text<'_>, offsets: &[usize]) {
    if cfg!(debug_assertions) {
        if let Err(err) = verify_sorted(text, offsets) {
            panic!("Contract violation: {}", err);
        }
    }
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check that a recorded probe is consistent with the array it probed.
#[inline]
pub fn check_step_well_formed(step: &SearchStep, offsets: &[usize]) {
    debug_assert!(
        step.lo <= step.mid && step.mid <= step.hi,
        "Contract violation: mid {} outside [{}, {}]",
        step.mid,
        step.lo,
        step.hi
    );
    debug_assert!(
        offsets.get(step.mid) == Some(&step.pos),
        "Contract violation: pos {} != suffix_array[{}]",
        step.pos,
        step.mid
    );
}
