// Shared helpers for integration tests

use condense::core::config::Config;
use condense::{Chunk, PipelineOptions};

/// Default config with small chunks so tests produce several windows
#[allow(dead_code)]
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.chunking.max_chunk_size = 40;
    config.chunking.overlap = 5;
    config.chunking.boundary_window = 10;
    config.processing.concurrency = 2;
    config
}

/// Pipeline options with the given window and no snapping
#[allow(dead_code)]
pub fn small_options(max_chunk_size: usize, overlap: usize) -> PipelineOptions {
    PipelineOptions {
        max_chunk_size,
        overlap,
        boundary_window: 0,
        ..PipelineOptions::default()
    }
}

/// Rebuild the corpus from chunks by dropping each repeated overlap
#[allow(dead_code)]
pub fn reconstruct(chunks: &[Chunk], overlap: usize) -> String {
    let mut out = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        let skip = if i == 0 { 0 } else { overlap };
        out.extend(chunk.content.chars().skip(skip));
    }
    out
}
