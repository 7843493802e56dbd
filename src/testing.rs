//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides reference implementations that are obviously correct and
//! obviously slow, for checking the real ones against.

#![doc(hidden)]

use crate::index::{SuffixArray, Text};
use crate::search::compare;
use crate::types::{Comparison, SearchResult};

/// Suffix array by materializing every suffix as an owned `Vec<char>`.
///
/// O(n²) memory. Only for tests.
pub fn naive_suffix_array(text: &str) -> Vec<usize> {
    let chars: Vec<char> = text.chars().collect();
    let mut suffixes: Vec<(Vec<char>, usize)> = (0..chars.len())
        .map(|i| (chars[i..].to_vec(), i))
        .collect();
    suffixes.sort();
    suffixes.into_iter().map(|(_, i)| i).collect()
}

/// Character offsets where `pattern` occurs in `text`.
pub fn naive_occurrences(text: &str, pattern: &str) -> Vec<usize> {
    let chars: Vec<char> = text.chars().collect();
    let needle: Vec<char> = pattern.chars().collect();
    (0..chars.len())
        .filter(|&i| chars[i..].starts_with(&needle))
        .collect()
}

/// Check every structural property a trace must have.
///
/// Panics with a description of the first violation.
pub fn assert_trace_well_formed(
    text: &Text<'_>,
    suffix_array: &SuffixArray,
    pattern: &str,
    result: &SearchResult,
) {
    let offsets = suffix_array.as_slice();

    for (i, step) in result.steps.iter().enumerate() {
        assert!(
            step.lo <= step.mid && step.mid <= step.hi && step.hi < offsets.len(),
            "step {}: mid {} outside [{}, {}]",
            i,
            step.mid,
            step.lo,
            step.hi
        );
        assert_eq!(step.mid, (step.lo + step.hi) / 2, "step {}: wrong midpoint", i);
        assert_eq!(step.pos, offsets[step.mid], "step {}: pos != sa[mid]", i);
        assert_eq!(step.suffix, text.suffix(step.pos), "step {}: wrong suffix", i);
        assert_eq!(
            step.comparison,
            compare(text, step.pos, pattern),
            "step {}: recorded comparison disagrees with compare()",
            i
        );

        let is_last = i + 1 == result.steps.len();
        assert!(
            is_last || step.comparison != Comparison::Equal,
            "step {}: Equal probe did not end the search",
            i
        );

        if let Some(next) = result.steps.get(i + 1) {
            let expected = match step.comparison {
                Comparison::Less => (step.mid + 1, step.hi),
                Comparison::Greater => (step.lo, step.mid - 1),
                Comparison::Equal => unreachable!(),
            };
            assert_eq!((next.lo, next.hi), expected, "step {}: wrong narrowing", i + 1);
        }
    }

    match result.last_step() {
        Some(last) if result.found => {
            assert_eq!(last.comparison, Comparison::Equal);
            assert_eq!(result.matched_offset, Some(last.pos));
        }
        _ => {
            assert!(!result.found);
            assert_eq!(result.matched_offset, None);
        }
    }
}
