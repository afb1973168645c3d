//! Core data types for the condense pipeline.
//!
//! This module defines the values that flow between stages:
//! source items, the aggregated corpus, chunks, per-chunk results
//! and the final output with its run statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single record yielded by a source provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceItem {
    /// Text content of the record
    pub text: String,

    /// Popularity score (higher ranks first)
    pub score: f64,

    /// Reposts and quotes of other records
    #[serde(default)]
    pub is_derivative: bool,
}

impl SourceItem {
    /// Create an original (non-derivative) item
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
            is_derivative: false,
        }
    }

    /// Create a derivative item (repost/quote)
    pub fn derivative(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
            is_derivative: true,
        }
    }
}

/// Aggregated text handed to the splitter.
///
/// Built once by the aggregator and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Corpus(String);

impl Corpus {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Corpus {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Corpus {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for Corpus {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bounded window of the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Sequential chunk number, starting at 0
    pub index: usize,

    /// Character offset where the chunk starts (inclusive)
    pub start: usize,

    /// Character offset where the chunk ends (exclusive)
    pub end: usize,

    /// Byte offset matching `start`
    pub byte_start: usize,

    /// Byte offset matching `end`
    pub byte_end: usize,

    /// The actual text content
    pub content: String,
}

impl Chunk {
    /// Number of characters in this chunk
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

/// Output of the transform for one chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkResult {
    /// Index of the chunk this result belongs to
    pub chunk_index: usize,

    /// Transformed text
    pub content: String,
}

/// Statistics from one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Items received from all sources
    pub items_received: usize,

    /// Items left after ranking
    pub items_kept: usize,

    /// Corpus length in characters
    pub corpus_chars: usize,

    /// Chunks produced by the splitter
    pub chunks: usize,

    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

/// Joined result of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalOutput {
    /// The joined per-chunk results
    pub text: String,

    pub stats: RunStats,
}
