//! Repeated builds and queries give identical answers.

use super::common::KNOWN_ARRAYS;
use suffix_trace::{build, search, SuffixIndex, Text};

const PATTERNS: &[&str] = &["a", "an", "ana", "b", "iss", "ssi", "abra", "zzz", ""];

#[test]
fn repeated_queries_identical() {
    for (raw, _) in KNOWN_ARRAYS {
        let text = Text::new(raw);
        let sa = build(&text);
        for pattern in PATTERNS {
            let first = search(&text, &sa, pattern);
            let second = search(&text, &sa, pattern);
            assert_eq!(first, second, "text {:?}, pattern {:?}", raw, pattern);
        }
    }
}

#[test]
fn fresh_index_gives_same_trace() {
    for (raw, _) in KNOWN_ARRAYS {
        for pattern in PATTERNS {
            let a = SuffixIndex::new(raw).search(pattern);
            let b = SuffixIndex::new(raw).search(pattern);
            assert_eq!(a, b, "text {:?}, pattern {:?}", raw, pattern);
        }
    }
}

#[cfg(feature = "serde_json")]
#[test]
fn trace_survives_json() {
    let index = SuffixIndex::new("mississippi");
    let result = index.search("ssi");
    let json = serde_json::to_string(&result).unwrap();
    let back: suffix_trace::SearchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
    assert!(json.contains("\"matchedOffset\":5"));
}
