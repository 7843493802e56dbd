// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for build + traced search.
//!
//! Arbitrary text, arbitrary pattern. The index must be a valid suffix array,
//! the search must never panic, and the verdict must agree with a plain
//! substring scan.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use suffix_trace::testing::assert_trace_well_formed;
use suffix_trace::{build, search, verify_suffix_array, Text};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    pattern: String,
}

fuzz_target!(|input: Input| {
    // Construction is quadratic in the worst case; keep runs fast
    if input.text.len() > 512 || input.pattern.len() > 64 {
        return;
    }

    let text = Text::new(&input.text);
    let sa = build(&text);

    // INVARIANT 1: build output is a sorted permutation
    assert_eq!(verify_suffix_array(&text, sa.as_slice()), Ok(()));

    // INVARIANT 2: search never panics and its trace is consistent
    let result = search(&text, &sa, &input.pattern);
    assert_trace_well_formed(&text, &sa, &input.pattern, &result);

    // INVARIANT 3: found iff the pattern is a substring (non-empty patterns)
    if !input.pattern.is_empty() {
        assert_eq!(result.found, input.text.contains(input.pattern.as_str()));
    }
});
