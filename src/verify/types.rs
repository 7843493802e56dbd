// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked construction of suffix arrays from untrusted offsets.
//!
//! `build` always produces a valid array, so nothing here runs on the normal
//! path. These checks exist for arrays that come from somewhere else: a test
//! oracle, a hand-written fixture, a caller that sorted offsets itself. The
//! cost is O(n) for completeness plus one suffix comparison per adjacent pair.

use crate::index::Text;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// The array and the text disagree on how many suffixes exist.
    LengthMismatch { sa_len: usize, text_len: usize },
    /// An offset does not name a suffix of the text.
    OffsetOutOfBounds {
        position: usize,
        offset: usize,
        text_len: usize,
    },
    /// The same offset appears at two ranks.
    DuplicateOffset { offset: usize },
    /// `suffix(sa[position - 1]) > suffix(sa[position])`.
    Unsorted { position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::LengthMismatch { sa_len, text_len } => {
                write!(f, "suffix_array.len() {} != text.len() {}", sa_len, text_len)
            }
            InvariantError::OffsetOutOfBounds {
                position,
                offset,
                text_len,
            } => {
                write!(
                    f,
                    "suffix_array[{}] = {} >= text.len() {}",
                    position, offset, text_len
                )
            }
            InvariantError::DuplicateOffset { offset } => {
                write!(f, "offset {} appears more than once", offset)
            }
            InvariantError::Unsorted { position } => {
                write!(f, "suffix array not sorted at position {}", position)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check that `offsets` is a permutation of `[0, text.len())`.
pub fn verify_complete(text: &Text<'_>, offsets: &[usize]) -> Result<(), InvariantError> {
    let text_len = text.len();
    if offsets.len() != text_len {
        return Err(InvariantError::LengthMismatch {
            sa_len: offsets.len(),
            text_len,
        });
    }

    let mut seen = vec![false; text_len];
    for (position, &offset) in offsets.iter().enumerate() {
        match seen.get_mut(offset) {
            None => {
                return Err(InvariantError::OffsetOutOfBounds {
                    position,
                    offset,
                    text_len,
                })
            }
            Some(true) => return Err(InvariantError::DuplicateOffset { offset }),
            Some(slot) => *slot = true,
        }
    }

    Ok(())
}

/// Check that adjacent suffixes are in non-decreasing lexicographic order.
pub fn verify_sorted(text: &Text<'_>, offsets: &[usize]) -> Result<(), InvariantError> {
    match offsets
        .windows(2)
        .position(|pair| text.suffix(pair[0]) > text.suffix(pair[1]))
    {
        Some(i) => Err(InvariantError::Unsorted { position: i + 1 }),
        None => Ok(()),
    }
}

/// Full validation: completeness first, then ordering.
///
/// Completeness is checked first so that the ordering check never compares
/// suffixes at offsets that don't exist.
pub fn verify_suffix_array(text: &Text<'_>, offsets: &[usize]) -> Result<(), InvariantError> {
    verify_complete(text, offsets)?;
    verify_sorted(text, offsets)
}
