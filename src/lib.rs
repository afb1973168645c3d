//! Condense - rank, window and map-join text for generation calls
//!
//! Gathers text from heterogeneous sources (social posts, web
//! pages, video transcripts, comments), ranks and aggregates it,
//! splits it into bounded overlapping chunks, runs an external
//! transform over every chunk and joins the results.
//!
//! # Architecture
//!
//! The codebase is organized into a core and thin adapters:
//!
//! - **core**: Pipeline stages (protocol-agnostic, no I/O)
//!   - ranker, aggregator, splitter, processor, joiner
//!   - pipeline (orchestration), prompt, config, error, types
//!
//! - **sources**: File-backed source providers (depends on core)
//!
//! - **transform**: Transform providers (depends on core)
//!
//! - **cli**: clap adapter (depends on all of the above)
//!
//! # Key Features
//!
//! - UTF-8 safe chunking (character-based, never panics)
//! - Exact overlap between consecutive chunks
//! - Optional word-boundary snapping within a bounded window
//! - Bounded concurrent transforms, results always in chunk order
//! - Fail-fast: no partial output on transform failure

// Core domain logic
pub mod core;

// File-backed source providers
pub mod sources;

// Transform providers
pub mod transform;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{CondenseError, Result, TransformError};
pub use core::pipeline::{Pipeline, PipelineOptions, SourceInput};
pub use core::processor::Transform;
pub use core::types::*;
