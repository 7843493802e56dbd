// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The text a suffix array is built over.
//!
//! Offsets everywhere in this crate are **character offsets** (Unicode scalar
//! values), not byte offsets. Rust strings are UTF-8, so slicing by character
//! needs a lookup table. `Text` computes it once and then hands out borrowed
//! suffixes in O(1). Nothing is ever copied: a suffix is a `&str` into the
//! caller's buffer.

/// A borrowed text with a precomputed character-to-byte offset table.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    raw: &'a str,
    /// char_to_byte[i] = byte index where character i starts.
    /// char_to_byte[char_count] = raw.len() (sentinel for end slicing)
    char_to_byte: Vec<usize>,
}

impl<'a> Text<'a> {
    pub fn new(raw: &'a str) -> Self {
        let mut char_to_byte: Vec<usize> = raw.char_indices().map(|(i, _)| i).collect();
        char_to_byte.push(raw.len());
        Self { raw, char_to_byte }
    }

    /// The underlying string.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.char_to_byte.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The suffix starting at character offset `offset`.
    ///
    /// Offsets at or past the end yield the empty string rather than panicking,
    /// so a text paired with the wrong suffix array degrades instead of crashing.
    pub fn suffix(&self, offset: usize) -> &'a str {
        let start = self
            .char_to_byte
            .get(offset)
            .copied()
            .unwrap_or(self.raw.len());
        &self.raw[start..]
    }

    /// Characters `[start, end)`, with both ends clamped to the text.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let from = self.byte_offset(start);
        let to = self.byte_offset(end).max(from);
        &self.raw[from..to]
    }

    /// Byte index of a character offset, clamped to the end of the text.
    pub(crate) fn byte_offset(&self, offset: usize) -> usize {
        self.char_to_byte
            .get(offset)
            .copied()
            .unwrap_or(self.raw.len())
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(raw: &'a str) -> Self {
        Self::new(raw)
    }
}

impl<'a> From<&'a String> for Text<'a> {
    fn from(raw: &'a String) -> Self {
        Self::new(raw.as_str())
    }
}
