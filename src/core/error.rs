//! Error types and error handling for the condense pipeline.
//!
//! This module defines the error types used throughout the
//! application. Every stage validates its inputs eagerly and
//! surfaces failures with enough context (record index, chunk
//! index, rule) for the caller to log or display.

use thiserror::Error;

/// Result type alias for condense operations
pub type Result<T> = std::result::Result<T, CondenseError>;

/// Main error type for the condense pipeline
#[derive(Error, Debug)]
pub enum CondenseError {
    /// A source record is malformed (missing or non-numeric score, ...)
    #[error("Invalid source item at position {index}: {rule}")]
    Validation { index: usize, rule: String },

    /// Splitter or pipeline parameters are out of range
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The external transform failed for one chunk
    #[error("Transform failed for chunk {chunk_index}: {message}")]
    Transform { chunk_index: usize, message: String },

    #[error("Source error: {0}")]
    SourceError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Failure reported by a transform provider.
///
/// Providers only know the text they were handed; the chunk
/// processor attaches the chunk index when converting this into
/// [`CondenseError::Transform`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransformError(pub String);

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Attach the index of the chunk that failed
    pub fn at_chunk(self, chunk_index: usize) -> CondenseError {
        CondenseError::Transform {
            chunk_index,
            message: self.0,
        }
    }
}

impl CondenseError {
    /// Shorthand for a validation failure on record `index`
    pub fn validation(index: usize, rule: impl Into<String>) -> Self {
        CondenseError::Validation {
            index,
            rule: rule.into(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a malformed-input error
    pub fn is_validation(&self) -> bool {
        matches!(self, CondenseError::Validation { .. })
    }

    /// Check if this is a parameter error
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CondenseError::ConfigError(_) | CondenseError::TomlError(_)
        )
    }

    /// Check if the external transform failed
    pub fn is_transform(&self) -> bool {
        matches!(self, CondenseError::Transform { .. })
    }

    /// Index of the chunk whose transform failed, if any
    pub fn chunk_index(&self) -> Option<usize> {
        match self {
            CondenseError::Transform { chunk_index, .. } => Some(*chunk_index),
            _ => None,
        }
    }
}
