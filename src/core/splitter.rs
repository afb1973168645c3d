//! UTF-8 safe windowed text splitting.
//!
//! Splits a corpus into overlapping windows bounded by a maximum
//! size. All sizes and offsets are measured in **characters**, and
//! every window boundary falls on a character boundary, so the
//! splitter never panics on emoji or other multi-byte sequences.
//!
//! Consecutive chunks always share exactly `overlap` characters:
//! each chunk after the first starts at `previous.end - overlap`.
//!
//! # Example
//!
//! ```
//! use condense::core::splitter::WindowSplitter;
//!
//! let splitter = WindowSplitter::new(10, 2).unwrap();
//! let chunks = splitter.split("AAAAABBBBBCCCCCDDDDD");
//!
//! assert_eq!(chunks.len(), 3);
//! assert_eq!(chunks[1].content, "BBCCCCCDDD");
//! ```

use crate::core::error::{CondenseError, Result};
use crate::core::types::Chunk;

/// Windowed text splitter.
///
/// With a non-zero boundary window the splitter pulls each
/// chunk's end back to the nearest paragraph break, line break or
/// whitespace within that many characters, so words are not cut
/// in half. The snapped end never exceeds the size bound.
#[derive(Debug, Clone)]
pub struct WindowSplitter {
    /// Maximum number of characters per chunk
    max_chunk_size: usize,

    /// Number of characters shared by consecutive chunks
    overlap: usize,

    /// How far back to look for a break (0 disables snapping)
    boundary_window: usize,
}

impl WindowSplitter {
    /// Create a new splitter with snapping disabled.
    ///
    /// # Arguments
    ///
    /// * `max_chunk_size` - Number of characters per chunk (must be
    ///   > 0)
    /// * `overlap` - Number of characters shared between chunks
    ///   (must be < `max_chunk_size`)
    ///
    /// # Errors
    ///
    /// Returns [`CondenseError::ConfigError`] if `max_chunk_size` is
    /// 0 or `overlap >= max_chunk_size`.
    pub fn new(max_chunk_size: usize, overlap: usize) -> Result<Self> {
        if max_chunk_size == 0 {
            return Err(CondenseError::ConfigError(
                "max_chunk_size must be > 0".to_string(),
            ));
        }
        if overlap >= max_chunk_size {
            return Err(CondenseError::ConfigError(format!(
                "overlap ({overlap}) must be < max_chunk_size ({max_chunk_size})"
            )));
        }

        Ok(Self {
            max_chunk_size,
            overlap,
            boundary_window: 0,
        })
    }

    /// Enable whitespace snapping within `window` characters.
    ///
    /// The window is capped at `max_chunk_size - 1`, so any value is
    /// accepted whatever the chunk size.
    pub fn with_boundary_window(mut self, window: usize) -> Self {
        self.boundary_window = window.min(self.max_chunk_size - 1);
        self
    }

    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    pub fn boundary_window(&self) -> usize {
        self.boundary_window
    }

    /// Split text into overlapping chunks.
    ///
    /// An empty corpus yields no chunks; a corpus no longer than
    /// `max_chunk_size` yields exactly one.
    pub fn split(&self, corpus: &str) -> Vec<Chunk> {
        self.windows(corpus).collect()
    }

    /// Lazily iterate over the chunks of `corpus`.
    ///
    /// The iterator is single-pass; call again to re-split.
    pub fn windows<'a>(&self, corpus: &'a str) -> Windows<'a> {
        Windows {
            text: corpus,
            // (byte offset, char) pairs keep every slice on a
            // character boundary
            chars: corpus.char_indices().collect(),
            max_chunk_size: self.max_chunk_size,
            overlap: self.overlap,
            boundary_window: self.boundary_window,
            cursor: 0,
            next_index: 0,
            done: false,
        }
    }
}

/// Split `corpus` with an ad-hoc splitter (no snapping)
pub fn split(corpus: &str, max_chunk_size: usize, overlap: usize) -> Result<Vec<Chunk>> {
    Ok(WindowSplitter::new(max_chunk_size, overlap)?.split(corpus))
}

/// Iterator over the chunks of one corpus
#[derive(Debug)]
pub struct Windows<'a> {
    text: &'a str,
    chars: Vec<(usize, char)>,
    max_chunk_size: usize,
    overlap: usize,
    boundary_window: usize,
    cursor: usize,
    next_index: usize,
    done: bool,
}

impl Windows<'_> {
    fn byte_offset(&self, char_idx: usize) -> usize {
        if char_idx < self.chars.len() {
            self.chars[char_idx].0
        } else {
            self.text.len()
        }
    }

    /// Pull `raw_end` back to a break, preferring paragraph breaks
    /// over line breaks over any whitespace.
    ///
    /// Candidates must stay above `cursor + overlap` so the next
    /// chunk still starts past the current one.
    fn snap_end(&self, raw_end: usize) -> usize {
        if self.boundary_window == 0 {
            return raw_end;
        }

        let floor = self.cursor + self.overlap + 1;
        let lower = raw_end.saturating_sub(self.boundary_window).max(floor);
        if lower > raw_end {
            return raw_end;
        }

        let chars = &self.chars;
        let paragraph = |p: usize| p >= 2 && chars[p - 1].1 == '\n' && chars[p - 2].1 == '\n';
        let line = |p: usize| chars[p - 1].1 == '\n';
        let space = |p: usize| chars[p - 1].1.is_whitespace() || chars[p].1.is_whitespace();

        let rules: [&dyn Fn(usize) -> bool; 3] = [&paragraph, &line, &space];
        for rule in rules {
            if let Some(p) = (lower..=raw_end).rev().find(|&p| rule(p)) {
                return p;
            }
        }

        raw_end
    }
}

impl Iterator for Windows<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let total = self.chars.len();
        if self.done || total == 0 {
            self.done = true;
            return None;
        }

        let raw_end = (self.cursor + self.max_chunk_size).min(total);
        // Only interior ends are snapped; the final chunk runs to the end
        let end = if raw_end < total {
            self.snap_end(raw_end)
        } else {
            raw_end
        };

        let byte_start = self.byte_offset(self.cursor);
        let byte_end = self.byte_offset(end);

        let chunk = Chunk {
            index: self.next_index,
            start: self.cursor,
            end,
            byte_start,
            byte_end,
            content: self.text[byte_start..byte_end].to_string(),
        };

        self.next_index += 1;
        if end >= total {
            self.done = true;
        } else {
            self.cursor = end - self.overlap;
        }

        Some(chunk)
    }
}
