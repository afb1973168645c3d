//! Pipeline orchestration.
//!
//! Coordinates the end-to-end workflow:
//! 1. Rank each item source (filter, sort, truncate)
//! 2. Aggregate all sources into one corpus
//! 3. Split the corpus into overlapping chunks
//! 4. Transform every chunk
//! 5. Join the per-chunk results
//!
//! Steps 1-3 are pure and validate eagerly, so malformed input or
//! bad parameters fail before any transform is called.

use std::sync::Arc;
use std::time::Instant;

use crate::core::aggregator::{SeparatorPolicy, SourceKind, SourceText, TextAggregator};
use crate::core::error::Result;
use crate::core::joiner::{ResultJoiner, DEFAULT_JOIN_SEPARATOR};
use crate::core::processor::{ChunkProcessor, Transform};
use crate::core::ranker::ItemRanker;
use crate::core::splitter::WindowSplitter;
use crate::core::types::{Chunk, Corpus, FinalOutput, RunStats, SourceItem};

/// Explicit parameters for every stage
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOptions {
    pub max_chunk_size: usize,
    pub overlap: usize,
    /// Whitespace snapping window (0 disables)
    pub boundary_window: usize,
    pub rank_limit: usize,
    pub exclude_derivative: bool,
    pub separator: SeparatorPolicy,
    pub join_separator: String,
    pub concurrency: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_chunk_size: 20_000,
            overlap: 2_000,
            boundary_window: 0,
            rank_limit: 80,
            exclude_derivative: true,
            separator: SeparatorPolicy::Paragraph,
            join_separator: DEFAULT_JOIN_SEPARATOR.to_string(),
            concurrency: 1,
        }
    }
}

/// One input to a pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum SourceInput {
    /// Scored records that go through the ranker
    Items {
        kind: SourceKind,
        items: Vec<SourceItem>,
    },

    /// Raw text used as-is (web page, transcript)
    Text { kind: SourceKind, text: String },
}

impl SourceInput {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceInput::Items { kind, .. } | SourceInput::Text { kind, .. } => *kind,
        }
    }
}

/// Corpus and chunks ready for transformation
#[derive(Debug, Clone)]
pub struct Prepared {
    pub corpus: Corpus,
    pub chunks: Vec<Chunk>,
    pub stats: RunStats,
}

/// Orchestrates the chunking-and-aggregation pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    ranker: ItemRanker,
    aggregator: TextAggregator,
    splitter: WindowSplitter,
    processor: ChunkProcessor,
    joiner: ResultJoiner,
}

impl Pipeline {
    /// Create a new pipeline
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the splitter or processor
    /// parameters are out of range.
    pub fn new(options: PipelineOptions) -> Result<Self> {
        let splitter = WindowSplitter::new(options.max_chunk_size, options.overlap)?
            .with_boundary_window(options.boundary_window);
        let processor = ChunkProcessor::new(options.concurrency)?;

        Ok(Self {
            ranker: ItemRanker::new(options.rank_limit, options.exclude_derivative),
            aggregator: TextAggregator::new(options.separator),
            splitter,
            processor,
            joiner: ResultJoiner::new(options.join_separator),
        })
    }

    pub fn splitter(&self) -> &WindowSplitter {
        &self.splitter
    }

    pub fn ranker(&self) -> &ItemRanker {
        &self.ranker
    }

    /// Rank, aggregate and split. No transform is called.
    ///
    /// Item sources are ranked independently; text sources are
    /// used verbatim. `items_received` counts each record of an
    /// item source and each text source once.
    pub fn prepare(&self, inputs: Vec<SourceInput>) -> Result<Prepared> {
        let start = Instant::now();

        let mut items_received = 0;
        let mut items_kept = 0;
        let mut sources = Vec::with_capacity(inputs.len());

        for input in inputs {
            match input {
                SourceInput::Items { kind, items } => {
                    items_received += items.len();
                    let ranked = self.ranker.rank(items)?;
                    items_kept += ranked.len();
                    tracing::info!("Ranked {} source: kept {} items", kind, ranked.len());
                    sources.push(SourceText::from_items(kind, ranked));
                }
                SourceInput::Text { kind, text } => {
                    items_received += 1;
                    items_kept += 1;
                    tracing::info!("Using {} source ({} bytes)", kind, text.len());
                    sources.push(SourceText::single(kind, text));
                }
            }
        }

        let corpus = self.aggregator.aggregate_sources(sources);
        let chunks = self.splitter.split(corpus.as_str());

        let stats = RunStats {
            items_received,
            items_kept,
            corpus_chars: corpus.char_len(),
            chunks: chunks.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Prepared corpus of {} chars in {} chunks (max {}, overlap {})",
            stats.corpus_chars,
            stats.chunks,
            self.splitter.max_chunk_size(),
            self.splitter.overlap()
        );

        Ok(Prepared {
            corpus,
            chunks,
            stats,
        })
    }

    /// Run every stage and return the joined output.
    ///
    /// Fails without output if any chunk's transform fails.
    pub async fn run(
        &self,
        inputs: Vec<SourceInput>,
        transform: Arc<dyn Transform>,
    ) -> Result<FinalOutput> {
        let start = Instant::now();

        let prepared = self.prepare(inputs)?;
        let results = self.processor.process(&prepared.chunks, transform).await?;
        let text = self.joiner.join(&results);

        let stats = RunStats {
            duration_ms: start.elapsed().as_millis() as u64,
            ..prepared.stats
        };

        tracing::info!(
            "Pipeline complete: {} chunks joined into {} chars in {}ms",
            stats.chunks,
            text.chars().count(),
            stats.duration_ms
        );

        Ok(FinalOutput { text, stats })
    }
}
