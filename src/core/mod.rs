//! Core domain logic (I/O-free pipeline stages)
//!
//! This module contains the deterministic data transformations.
//! Nothing here performs network I/O or reads process-wide state
//! except `config`/`xdg`, which only the CLI adapter calls.
//!
//! # Architecture
//!
//! - **types**: Domain data structures
//! - **error**: Error types and Result alias
//! - **ranker**: Filter and order source items
//! - **aggregator**: Join fragments into a corpus
//! - **splitter**: Overlapping character windows
//! - **processor**: Ordered, bounded-concurrency chunk transforms
//! - **joiner**: Merge chunk results
//! - **pipeline**: End-to-end orchestration
//! - **prompt**: Output kinds and instruction templates
//! - **config**, **xdg**: Configuration loading (TOML + environment)

pub mod aggregator;
pub mod config;
pub mod error;
pub mod joiner;
pub mod pipeline;
pub mod processor;
pub mod prompt;
pub mod ranker;
pub mod splitter;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{CondenseError, Result, TransformError};
pub use pipeline::{Pipeline, PipelineOptions, SourceInput};
pub use processor::{transform_fn, ChunkProcessor, Transform};
