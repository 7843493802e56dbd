// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: text in, sorted offsets out.
//!
//! - **Text**: the borrowed buffer plus its character offset table
//! - **Suffix array**: offsets sorted by the suffix they start
//! - **Paired**: both halves kept together so they can't drift apart

mod paired;
mod suffix_array;
mod text;

pub use paired::*;
pub use suffix_array::*;
pub use text::*;
