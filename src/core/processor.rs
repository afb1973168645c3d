//! Per-chunk transformation.
//!
//! Applies an externally supplied [`Transform`] to every chunk and
//! returns the results in chunk order. With a concurrency above one
//! the transforms run as tokio tasks bounded by a semaphore; each
//! task writes into the result slot of its chunk, so completion
//! order never leaks into the output.
//!
//! The first failure aborts the run: in-flight tasks are cancelled
//! and no partial results are returned. This layer never retries.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinHandle;

use crate::core::error::{CondenseError, Result, TransformError};
use crate::core::types::{Chunk, ChunkResult};

/// Text-to-text capability applied to each chunk.
///
/// Typically backed by a language-generation call. Retries, rate
/// limiting and authentication belong to the implementor.
#[async_trait]
pub trait Transform: Send + Sync {
    /// Transform one chunk of text
    async fn apply(&self, text: &str) -> std::result::Result<String, TransformError>;
}

/// Adapts a synchronous closure into a [`Transform`]
pub struct FnTransform<F>(F);

/// Wrap `f` as a transform
pub fn transform_fn<F>(f: F) -> FnTransform<F>
where
    F: Fn(&str) -> std::result::Result<String, TransformError> + Send + Sync,
{
    FnTransform(f)
}

#[async_trait]
impl<F> Transform for FnTransform<F>
where
    F: Fn(&str) -> std::result::Result<String, TransformError> + Send + Sync,
{
    async fn apply(&self, text: &str) -> std::result::Result<String, TransformError> {
        (self.0)(text)
    }
}

/// Runs a transform over an ordered chunk sequence
#[derive(Debug, Clone, Copy)]
pub struct ChunkProcessor {
    /// Maximum transforms in flight at once
    concurrency: usize,
}

impl ChunkProcessor {
    /// Create a processor running at most `concurrency` transforms
    /// at a time (1 = strictly sequential).
    ///
    /// # Errors
    ///
    /// Returns [`CondenseError::ConfigError`] if `concurrency` is 0.
    pub fn new(concurrency: usize) -> Result<Self> {
        if concurrency == 0 {
            return Err(CondenseError::ConfigError(
                "concurrency must be > 0".to_string(),
            ));
        }
        Ok(Self { concurrency })
    }

    /// Sequential processor
    pub fn sequential() -> Self {
        Self { concurrency: 1 }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Apply `transform` to every chunk, preserving chunk order.
    ///
    /// # Errors
    ///
    /// Returns [`CondenseError::Transform`] with the index of the
    /// first chunk observed to fail.
    pub async fn process(
        &self,
        chunks: &[Chunk],
        transform: Arc<dyn Transform>,
    ) -> Result<Vec<ChunkResult>> {
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!(
            "Processing {} chunks (concurrency {})",
            chunks.len(),
            self.concurrency
        );

        let results = if self.concurrency == 1 || chunks.len() == 1 {
            process_sequential(chunks, transform.as_ref()).await
        } else {
            process_concurrent(chunks, transform, self.concurrency).await
        };

        if let Err(e) = &results {
            tracing::warn!("Chunk processing aborted: {}", e);
        }

        results
    }
}

async fn process_sequential(chunks: &[Chunk], transform: &dyn Transform) -> Result<Vec<ChunkResult>> {
    let mut results = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        tracing::debug!("Transforming chunk {} ({} chars)", chunk.index, chunk.char_len());

        let content = transform
            .apply(&chunk.content)
            .await
            .map_err(|e| e.at_chunk(chunk.index))?;

        results.push(ChunkResult {
            chunk_index: chunk.index,
            content,
        });
    }

    Ok(results)
}

/// Aborts every task it holds when dropped, including when the
/// caller drops the `process` future mid-run.
struct AbortOnDrop(Vec<JoinHandle<()>>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

type Outcome = (usize, std::result::Result<String, TransformError>);

async fn process_concurrent(
    chunks: &[Chunk],
    transform: Arc<dyn Transform>,
    concurrency: usize,
) -> Result<Vec<ChunkResult>> {
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();

    let mut tasks = AbortOnDrop(Vec::with_capacity(chunks.len()));
    for (slot, chunk) in chunks.iter().enumerate() {
        let sem = Arc::clone(&semaphore);
        let transform = Arc::clone(&transform);
        let tx = tx.clone();
        let text = chunk.content.clone();
        let chunk_index = chunk.index;

        tasks.0.push(tokio::spawn(async move {
            let Ok(_permit) = sem.acquire_owned().await else {
                return;
            };
            tracing::debug!("Transforming chunk {}", chunk_index);
            let outcome = transform.apply(&text).await;
            let _ = tx.send((slot, outcome));
        }));
    }
    // Only the tasks hold senders now; recv() ends once all finish
    drop(tx);

    let mut slots: Vec<Option<String>> = vec![None; chunks.len()];
    while let Some((slot, outcome)) = rx.recv().await {
        match outcome {
            Ok(content) => slots[slot] = Some(content),
            Err(e) => return Err(e.at_chunk(chunks[slot].index)),
        }
    }

    // A slot left empty means its task panicked before reporting
    slots
        .into_iter()
        .zip(chunks)
        .map(|(content, chunk)| match content {
            Some(content) => Ok(ChunkResult {
                chunk_index: chunk.index,
                content,
            }),
            None => Err(TransformError::new("transform task ended without a result")
                .at_chunk(chunk.index)),
        })
        .collect()
}
