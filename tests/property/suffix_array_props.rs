//! Suffix array property tests.
//!
//! - Completeness: every offset appears exactly once
//! - Sortedness: adjacent suffixes are non-decreasing
//! - Agreement with a naive materialize-and-sort oracle
//! - Unicode: multi-byte characters get one offset each

use super::common::{naive_suffix_array, small_alphabet_text, unicode_text};
use proptest::prelude::*;
use suffix_trace::{build, verify_suffix_array, SuffixArray, Text};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the suffix array is a permutation of [0, n).
    #[test]
    fn prop_suffix_array_is_permutation(raw in small_alphabet_text()) {
        let text = Text::new(&raw);
        let sa = build(&text);

        let mut sorted = sa.clone().into_vec();
        sorted.sort_unstable();
        let expected: Vec<usize> = (0..text.len()).collect();
        prop_assert_eq!(sorted, expected);
    }

    /// Property: adjacent suffixes are in lexicographic order.
    #[test]
    fn prop_suffix_array_always_sorted(raw in small_alphabet_text()) {
        let text = Text::new(&raw);
        let sa = build(&text);

        for i in 1..sa.len() {
            let prev = text.suffix(sa.as_slice()[i - 1]);
            let curr = text.suffix(sa.as_slice()[i]);
            prop_assert!(prev <= curr, "not sorted at {}: {:?} > {:?}", i, prev, curr);
        }
    }

    /// Property: build agrees with the naive oracle.
    #[test]
    fn prop_matches_naive_oracle(raw in small_alphabet_text()) {
        let sa = build(&Text::new(&raw));
        prop_assert_eq!(sa.into_vec(), naive_suffix_array(&raw));
    }

    /// Property: build is deterministic.
    #[test]
    fn prop_build_idempotent(raw in small_alphabet_text()) {
        let text = Text::new(&raw);
        prop_assert_eq!(build(&text), build(&text));
    }

    /// Property: everything build produces passes checked construction.
    #[test]
    fn prop_build_output_verifies(raw in small_alphabet_text()) {
        let text = Text::new(&raw);
        let sa = build(&text);
        prop_assert_eq!(verify_suffix_array(&text, sa.as_slice()), Ok(()));
        prop_assert!(SuffixArray::from_offsets(&text, sa.into_vec()).is_ok());
    }

    /// Property: Unicode texts get one entry per character, in order.
    #[test]
    fn prop_unicode_one_entry_per_char(raw in unicode_text()) {
        let text = Text::new(&raw);
        let sa = build(&text);

        prop_assert_eq!(sa.len(), raw.chars().count());
        prop_assert_eq!(sa.into_vec(), naive_suffix_array(&raw));
    }

    /// Property: swapping two adjacent entries of a non-trivial array breaks it.
    #[test]
    fn prop_swapped_array_rejected(raw in "[abc]{2,30}", at in any::<prop::sample::Index>()) {
        let text = Text::new(&raw);
        let mut offsets = build(&text).into_vec();
        let i = at.index(offsets.len() - 1);
        offsets.swap(i, i + 1);
        prop_assert!(verify_suffix_array(&text, &offsets).is_err());
    }
}
