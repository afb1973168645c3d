//! Source item ranking.
//!
//! Drops derivative items (reposts, quotes), orders the rest by
//! score and keeps the top N. Ties keep their input order so the
//! same input always ranks the same way.

use std::cmp::Ordering;

use crate::core::error::{CondenseError, Result};
use crate::core::types::SourceItem;

/// Filters and orders source items.
#[derive(Debug, Clone, Copy)]
pub struct ItemRanker {
    /// Maximum number of items to keep
    limit: usize,

    /// Drop items flagged as derivative
    exclude_derivative: bool,
}

impl ItemRanker {
    /// Create a new ranker.
    ///
    /// # Arguments
    ///
    /// * `limit` - Maximum number of items returned
    /// * `exclude_derivative` - Drop reposts and quotes before sorting
    pub fn new(limit: usize, exclude_derivative: bool) -> Self {
        Self {
            limit,
            exclude_derivative,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn exclude_derivative(&self) -> bool {
        self.exclude_derivative
    }

    /// Rank items by score, highest first.
    ///
    /// Every item is validated before anything is filtered, so a
    /// malformed record fails the whole call even if it would have
    /// been dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CondenseError::Validation`] naming the position of
    /// the first item whose score is NaN or infinite.
    pub fn rank(&self, items: Vec<SourceItem>) -> Result<Vec<SourceItem>> {
        validate_scores(&items)?;

        let received = items.len();
        let mut kept: Vec<SourceItem> = items
            .into_iter()
            .filter(|item| !(self.exclude_derivative && item.is_derivative))
            .collect();
        let filtered = received - kept.len();

        // Vec::sort_by is stable: equal scores keep input order.
        // Scores are finite here, and 0.0 and -0.0 compare equal.
        kept.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        kept.truncate(self.limit);

        tracing::debug!(
            "Ranked {} items: {} derivative dropped, {} kept (limit {})",
            received,
            filtered,
            kept.len(),
            self.limit
        );

        Ok(kept)
    }
}

/// Rank `items` with an ad-hoc ranker
pub fn rank(
    items: Vec<SourceItem>,
    exclude_derivative: bool,
    limit: usize,
) -> Result<Vec<SourceItem>> {
    ItemRanker::new(limit, exclude_derivative).rank(items)
}

fn validate_scores(items: &[SourceItem]) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        if !item.score.is_finite() {
            return Err(CondenseError::validation(
                index,
                format!("score must be a finite number, got {}", item.score),
            ));
        }
    }
    Ok(())
}
