//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use suffix_trace::{build, SuffixArray, Text};

// Re-export canonical test utilities from suffix_trace::testing
pub use suffix_trace::testing::{assert_trace_well_formed, naive_occurrences, naive_suffix_array};

// ============================================================================
// FIXTURES
// ============================================================================

/// Texts with known suffix arrays, checked by hand.
pub const KNOWN_ARRAYS: &[(&str, &[usize])] = &[
    ("", &[]),
    ("a", &[0]),
    ("banana", &[5, 3, 1, 0, 4, 2]),
    ("mississippi", &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]),
    ("abracadabra", &[10, 7, 0, 3, 5, 8, 1, 4, 6, 9, 2]),
    ("aaaa", &[3, 2, 1, 0]),
    ("dcba", &[3, 2, 1, 0]),
    ("abcd", &[0, 1, 2, 3]),
];

/// Build a text and its suffix array in one go.
pub fn build_pair(raw: &str) -> (Text<'_>, SuffixArray) {
    let text = Text::new(raw);
    let sa = build(&text);
    (text, sa)
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet so patterns actually hit.
pub fn small_alphabet_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,40}").unwrap()
}

pub fn small_alphabet_pattern() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{1,6}").unwrap()
}

/// Multi-byte characters mixed with ASCII.
pub fn unicode_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', 'é', 'ñ', 'ü', '日', '本', '🦀', ' ']),
        0..30,
    )
    .prop_map(|chars| chars.into_iter().collect())
}
