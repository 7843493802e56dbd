// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The prefix comparator that drives the binary search.
//!
//! The suffix at `pos` is cut down to at most `pattern`'s length and compared
//! with the pattern. Equal means the pattern occurs at `pos`; it says nothing
//! about the rest of the suffix. A suffix too short to hold the pattern can
//! only be `Equal` if it matches in full, so a suffix that is a proper prefix
//! of the pattern is `Less`.

use crate::index::Text;
use crate::types::Comparison;

/// Compare the suffix of `text` at `pos` against `pattern`, prefix-wise.
///
/// # Example
///
/// ```
/// use suffix_trace::{compare, Comparison, Text};
///
/// let text = Text::new("banana");
/// assert_eq!(compare(&text, 1, "an"), Comparison::Equal);
/// assert_eq!(compare(&text, 5, "an"), Comparison::Less);
/// assert_eq!(compare(&text, 0, "an"), Comparison::Greater);
/// ```
pub fn compare(text: &Text<'_>, pos: usize, pattern: &str) -> Comparison {
    let window_len = pattern.chars().count();
    let window = text.slice(pos, pos.saturating_add(window_len));
    window.cmp(pattern).into()
}
