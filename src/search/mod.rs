// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: find a pattern and show the work.
//!
//! `compare` decides one probe. `search` strings the probes together into a
//! binary search and keeps the record of each one.

mod compare;
mod traced;

pub use compare::*;
pub use traced::*;
