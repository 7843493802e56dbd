//! Suffix array construction against hand-checked fixtures.

use super::common::{build_pair, KNOWN_ARRAYS};
use suffix_trace::{build, verify_suffix_array, InvariantError, SuffixArray, SuffixIndex, Text};

#[test]
fn known_arrays_match() {
    for (raw, expected) in KNOWN_ARRAYS {
        let (_, sa) = build_pair(raw);
        assert_eq!(sa.as_slice(), *expected, "suffix array of {:?}", raw);
    }
}

#[test]
fn known_arrays_verify() {
    for (raw, expected) in KNOWN_ARRAYS {
        let text = Text::new(raw);
        assert_eq!(verify_suffix_array(&text, expected), Ok(()), "text {:?}", raw);
    }
}

#[test]
fn banana_sorted_suffixes_read_in_order() {
    let index = SuffixIndex::new("banana");
    let listing: Vec<(usize, &str)> = index
        .sorted_suffixes()
        .map(|s| (s.offset, s.suffix))
        .collect();
    assert_eq!(
        listing,
        vec![
            (5, "a"),
            (3, "ana"),
            (1, "anana"),
            (0, "banana"),
            (4, "na"),
            (2, "nana"),
        ]
    );
}

#[test]
fn uppercase_sorts_before_lowercase() {
    // Code point order: 'B' (66) < 'a' (97)
    let (_, sa) = build_pair("aB");
    assert_eq!(sa.as_slice(), &[1, 0]);
}

#[test]
fn whitespace_is_an_ordinary_character() {
    // ' ' (32) sorts before letters
    let (_, sa) = build_pair("a b");
    assert_eq!(sa.as_slice(), &[1, 0, 2]);
}

#[test]
fn multibyte_text_uses_character_offsets() {
    let raw = "año";
    let (text, sa) = build_pair(raw);
    assert_eq!(text.len(), 3);
    // "año" < "o" < "ño" ('ñ' is U+00F1, above ASCII)
    assert_eq!(sa.as_slice(), &[0, 2, 1]);
}

#[test]
fn emoji_counts_as_one_character() {
    let (text, sa) = build_pair("🦀a");
    assert_eq!(text.len(), 2);
    assert_eq!(sa.as_slice(), &[1, 0]);
}

#[test]
fn rebuilding_gives_an_independent_equal_array() {
    let text = Text::new("abracadabra");
    let first = build(&text);
    let second = build(&text);
    assert_eq!(first, second);
    assert_ne!(first.as_slice().as_ptr(), second.as_slice().as_ptr());
}

#[test]
fn from_offsets_rejects_foreign_array() {
    let banana = Text::new("banana");
    let other = build(&Text::new("abcdef"));
    let err = SuffixArray::from_offsets(&banana, other.into_vec()).unwrap_err();
    assert!(matches!(err, InvariantError::Unsorted { .. }));
}
