//! Split command - show how a text file is windowed

use crate::cli::output::{colors, preview};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::splitter::WindowSplitter;
use crate::sources::load_text;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Text file to split
    pub file: PathBuf,

    /// Override max chunk size (characters)
    #[arg(long)]
    pub max_chunk_size: Option<usize>,

    /// Override overlap (characters)
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Override the word-boundary window (0 disables)
    #[arg(long)]
    pub boundary_window: Option<usize>,

    /// Include full chunk text instead of a preview
    #[arg(long)]
    pub content: bool,
}

/// Chunk summary
#[derive(Debug, Serialize)]
pub struct ChunkItem {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub chars: usize,
    pub text: String,
}

/// Split response
#[derive(Debug, Serialize)]
pub struct SplitResponse {
    pub file: String,
    pub corpus_chars: usize,
    pub max_chunk_size: usize,
    pub overlap: usize,
    pub chunks: Vec<ChunkItem>,
}

/// Execute the split command
pub async fn execute(
    args: SplitArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let max_chunk_size = args.max_chunk_size.unwrap_or(config.chunking.max_chunk_size);
    let overlap = args.overlap.unwrap_or(config.chunking.overlap);
    let window = args
        .boundary_window
        .unwrap_or(config.chunking.boundary_window);

    let splitter = WindowSplitter::new(max_chunk_size, overlap)?.with_boundary_window(window);
    let text = load_text(&args.file)?;
    let chunks = splitter.split(&text);

    let response = SplitResponse {
        file: args.file.to_string_lossy().into_owned(),
        corpus_chars: text.chars().count(),
        max_chunk_size,
        overlap,
        chunks: chunks
            .into_iter()
            .map(|chunk| ChunkItem {
                index: chunk.index,
                start: chunk.start,
                end: chunk.end,
                chars: chunk.char_len(),
                text: if args.content {
                    chunk.content
                } else {
                    preview(&chunk.content, 60)
                },
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{}: {} chars -> {} chunk(s) (max {}, overlap {})\n",
                colors::path(&response.file),
                colors::count(response.corpus_chars),
                colors::count(response.chunks.len()),
                response.max_chunk_size,
                response.overlap
            );
            for chunk in &response.chunks {
                println!(
                    "{} {}..{} {}",
                    colors::position(chunk.index),
                    chunk.start,
                    chunk.end,
                    colors::muted(&format!("({} chars)", chunk.chars))
                );
                println!("    {}", colors::muted(&chunk.text));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
