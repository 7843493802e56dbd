// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked construction and runtime contracts.
//!
//! 1. **Checked construction** (`verify_suffix_array`) returns an
//!    `InvariantError` when offsets from outside `build` don't form a suffix
//!    array. Used by `SuffixArray::from_offsets`.
//!
//! 2. **Runtime contracts** that panic in debug builds when `build` or `search`
//!    break their own invariants. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
