//! Traced binary search, probe by probe.

use super::common::{assert_trace_well_formed, build_pair};
use suffix_trace::{search, search_with, Comparison, EmptyPatternPolicy, SearchOptions};

/// (lo, hi, mid, pos, comparison) for each step.
fn probes(result: &suffix_trace::SearchResult) -> Vec<(usize, usize, usize, usize, Comparison)> {
    result
        .steps
        .iter()
        .map(|s| (s.lo, s.hi, s.mid, s.pos, s.comparison))
        .collect()
}

#[test]
fn banana_na_replays_exactly() {
    let (text, sa) = build_pair("banana");
    let result = search(&text, &sa, "na");

    assert!(result.found);
    assert_eq!(result.matched_offset, Some(4));
    assert_eq!(
        probes(&result),
        vec![
            (0, 5, 2, 1, Comparison::Less),
            (3, 5, 4, 4, Comparison::Equal),
        ]
    );
    assert_eq!(result.steps[0].suffix, "anana");
    assert_eq!(result.steps[1].suffix, "na");
}

#[test]
fn banana_ana_found_on_first_probe() {
    let (text, sa) = build_pair("banana");
    let result = search(&text, &sa, "ana");
    assert_eq!(result.matched_offset, Some(1));
    assert_eq!(probes(&result), vec![(0, 5, 2, 1, Comparison::Equal)]);
}

#[test]
fn banana_b_narrows_both_ways() {
    let (text, sa) = build_pair("banana");
    let result = search(&text, &sa, "b");
    assert_eq!(result.matched_offset, Some(0));
    assert_eq!(
        probes(&result),
        vec![
            (0, 5, 2, 1, Comparison::Less),
            (3, 5, 4, 4, Comparison::Greater),
            (3, 3, 3, 0, Comparison::Equal),
        ]
    );
}

#[test]
fn banana_xyz_not_found_within_bound() {
    let (text, sa) = build_pair("banana");
    let result = search(&text, &sa, "xyz");

    assert!(!result.found);
    assert_eq!(result.matched_offset, None);
    // ceil(log2(6)) + 1
    assert!(result.step_count() <= 4);
    assert_eq!(
        probes(&result),
        vec![
            (0, 5, 2, 1, Comparison::Less),
            (3, 5, 4, 4, Comparison::Less),
            (5, 5, 5, 2, Comparison::Less),
        ]
    );
}

#[test]
fn mississippi_ssi() {
    let (text, sa) = build_pair("mississippi");
    let result = search(&text, &sa, "ssi");
    assert_eq!(result.matched_offset, Some(5));
    let mids: Vec<usize> = result.steps.iter().map(|s| s.mid).collect();
    assert_eq!(mids, vec![5, 8, 9]);
    // "pi" is shorter than the pattern and still compares Less
    assert_eq!(result.steps[0].suffix, "pi");
    assert_eq!(result.steps[0].comparison, Comparison::Less);
}

#[test]
fn mississippi_issip_goes_left() {
    let (text, sa) = build_pair("mississippi");
    let result = search(&text, &sa, "issip");
    assert_eq!(result.matched_offset, Some(4));
    assert_eq!(
        probes(&result),
        vec![
            (0, 10, 5, 9, Comparison::Greater),
            (0, 4, 2, 4, Comparison::Equal),
        ]
    );
}

#[test]
fn suffix_shorter_than_pattern_never_matches() {
    // "a" at offset 5 is a prefix of "ab" but the text has no "ab"
    let (text, sa) = build_pair("banana");
    let result = search(&text, &sa, "ab");
    assert!(!result.found);
    assert_trace_well_formed(&text, &sa, "ab", &result);
}

#[test]
fn empty_text_has_empty_trace() {
    let (text, sa) = build_pair("");
    let result = search(&text, &sa, "x");
    assert!(!result.found);
    assert!(result.steps.is_empty());
}

#[test]
fn empty_pattern_default_matches_first_probe() {
    let (text, sa) = build_pair("banana");
    let result = search(&text, &sa, "");
    assert!(result.found);
    assert_eq!(probes(&result), vec![(0, 5, 2, 1, Comparison::Equal)]);
}

#[test]
fn empty_pattern_reject_policy() {
    let (text, sa) = build_pair("banana");
    let options = SearchOptions {
        empty_pattern: EmptyPatternPolicy::Reject,
    };
    let result = search_with(&text, &sa, "", &options);
    assert!(!result.found);
    assert!(result.steps.is_empty());
}

#[test]
fn matched_rank_points_at_highlighted_cell() {
    let (text, sa) = build_pair("banana");
    let result = search(&text, &sa, "nan");
    assert_eq!(result.matched_offset, Some(2));
    assert_eq!(result.matched_rank(&sa), Some(5));
    assert_eq!(result.last_step().map(|s| s.mid), Some(5));
}

#[test]
fn unicode_pattern() {
    let (text, sa) = build_pair("crème brûlée");
    let result = search(&text, &sa, "brû");
    assert!(result.found);
    assert_eq!(result.matched_offset, Some(6));
    assert_trace_well_formed(&text, &sa, "brû", &result);
}
