// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over the suffix array, recording every probe.
//!
//! Closed interval `[lo, hi]`, midpoint `(lo + hi) / 2`, stop at the first
//! probe that compares `Equal`. Because the search stops early it reports *an*
//! occurrence, not the leftmost or rightmost one in suffix-array order. The
//! trace is never truncated: a query on an `n`-suffix array records at most
//! `floor(log2(n)) + 1` steps.

use super::compare::compare;
use crate::index::{SuffixArray, Text};
use crate::types::{Comparison, SearchResult, SearchStep};
use crate::verify::contracts::check_step_well_formed;
use tracing::{debug, trace};

/// What to do with an empty pattern.
///
/// The prefix comparator says every suffix starts with the empty string, so
/// without a policy the very first probe would report a match at whatever
/// offset happens to sit in the middle of the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPatternPolicy {
    /// Run the search anyway: found at the first probe, one-step trace.
    #[default]
    Probe,
    /// Not found, empty trace.
    Reject,
}

/// Knobs for a single query.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub empty_pattern: EmptyPatternPolicy,
}

/// Search `suffix_array` (built from `text`) for `pattern` with default options.
///
/// `text` must be the text the array was built from. A mismatched pair gives
/// meaningless results but never panics.
///
/// # Example
///
/// ```
/// use suffix_trace::{build, search, Comparison, Text};
///
/// let text = Text::new("banana");
/// let sa = build(&text);
/// let result = search(&text, &sa, "na");
///
/// assert!(result.found);
/// assert_eq!(result.matched_offset, Some(4));
/// assert_eq!(result.steps[0].comparison, Comparison::Less);
/// ```
pub fn search(text: &Text<'_>, suffix_array: &SuffixArray, pattern: &str) -> SearchResult {
    search_with(text, suffix_array, pattern, &SearchOptions::default())
}

/// Search with explicit options.
pub fn search_with(
    text: &Text<'_>,
    suffix_array: &SuffixArray,
    pattern: &str,
    options: &SearchOptions,
) -> SearchResult {
    if pattern.is_empty() && options.empty_pattern == EmptyPatternPolicy::Reject {
        debug!("empty pattern rejected");
        return SearchResult::not_found(Vec::new());
    }

    let offsets = suffix_array.as_slice();
    let result = binary_search_traced(text, offsets, pattern);

    debug!(
        pattern_len = pattern.chars().count(),
        found = result.found,
        steps = result.steps.len(),
        "search finished"
    );

    result
}

fn binary_search_traced(text: &Text<'_>, offsets: &[usize], pattern: &str) -> SearchResult {
    let mut steps = Vec::new();

    if offsets.is_empty() {
        return SearchResult::not_found(steps);
    }

    let mut lo = 0usize;
    let mut hi = offsets.len() - 1;

    while lo <= hi {
        let mid = (lo + hi) / 2;
        let pos = offsets[mid];
        let comparison = compare(text, pos, pattern);

        let step = SearchStep {
            lo,
            hi,
            mid,
            pos,
            comparison,
            suffix: text.suffix(pos).to_string(),
        };
        check_step_well_formed(&step, offsets);
        trace!(
            lo = lo,
            hi = hi,
            mid = mid,
            pos = pos,
            comparison = comparison.label(),
            "probe"
        );
        steps.push(step);

        match comparison {
            Comparison::Equal => return SearchResult::found(pos, steps),
            Comparison::Less => lo = mid + 1,
            Comparison::Greater => {
                // hi would underflow; the interval is empty anyway
                if mid == 0 {
                    break;
                }
                hi = mid - 1;
            }
        }
    }

    SearchResult::not_found(steps)
}
