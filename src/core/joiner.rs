//! Joins per-chunk results into the final output.

use crate::core::types::ChunkResult;

/// Default separator between chunk results
pub const DEFAULT_JOIN_SEPARATOR: &str = " ";

/// Merges ordered chunk results into one string
#[derive(Debug, Clone)]
pub struct ResultJoiner {
    separator: String,
}

impl Default for ResultJoiner {
    fn default() -> Self {
        Self::new(DEFAULT_JOIN_SEPARATOR)
    }
}

impl ResultJoiner {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Join results in chunk index order
    pub fn join(&self, results: &[ChunkResult]) -> String {
        join(results, &self.separator)
    }
}

/// Join `results` with `separator`, ordered by chunk index.
///
/// Empty input yields an empty string.
pub fn join(results: &[ChunkResult], separator: &str) -> String {
    let mut ordered: Vec<&ChunkResult> = results.iter().collect();
    ordered.sort_by_key(|result| result.chunk_index);

    ordered
        .iter()
        .map(|result| result.content.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
