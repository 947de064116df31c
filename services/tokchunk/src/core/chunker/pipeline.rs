//! Chunking pipeline orchestration.
//!
//! Coordinates one chunking run:
//! 1. Validate window size and overlap
//! 2. Dispatch windowing across documents
//! 3. Flatten per-document results
//! 4. Collect statistics

use std::time::Instant;

use crate::core::chunker::dispatch::Dispatcher;
use crate::core::chunker::flatten::flatten;
use crate::core::chunker::window::WindowConfig;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::types::{ChunkStats, ChunkedCorpus, ExecutionMode};

/// Orchestrates the chunking pipeline
#[derive(Debug)]
pub struct ChunkingPipeline {
    window: WindowConfig,
    dispatcher: Dispatcher,
}

impl ChunkingPipeline {
    /// Create a new chunking pipeline
    ///
    /// # Arguments
    ///
    /// * `config` - Window and parallelism settings
    ///
    /// # Returns
    ///
    /// A new `ChunkingPipeline`, or `InvalidWindowConfiguration`
    /// if the window is invalid, or `ThreadPoolError` if a
    /// dedicated pool was requested and could not be built
    pub fn new(config: &Config) -> Result<Self> {
        let window = config.chunking.window()?;
        let dispatcher = Dispatcher::from_config(&config.parallel)?;

        Ok(Self { window, dispatcher })
    }

    /// Build a pipeline from an already validated window
    pub fn with_dispatcher(window: WindowConfig, dispatcher: Dispatcher) -> Self {
        Self { window, dispatcher }
    }

    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    pub fn mode(&self) -> ExecutionMode {
        self.dispatcher.mode()
    }

    /// Chunk a corpus and return the flattened output + stats
    ///
    /// # Arguments
    ///
    /// * `corpus` - Ordered documents; not modified
    ///
    /// # Returns
    ///
    /// A tuple of (chunked corpus, statistics)
    pub fn run<D, T>(&self, corpus: &[D]) -> (ChunkedCorpus<T>, ChunkStats)
    where
        D: AsRef<[T]> + Sync,
        T: Clone + Send + Sync,
    {
        let start = Instant::now();

        tracing::info!(
            "Chunking {} documents (size={}, overlap={}, mode={})",
            corpus.len(),
            self.window.size(),
            self.window.overlap(),
            self.dispatcher.mode()
        );

        let dispatched = self.dispatcher.dispatch(corpus, &self.window);
        let output = flatten(dispatched);

        let tokens_in = corpus.iter().map(|d| d.as_ref().len()).sum();
        let empty_documents = corpus.iter().filter(|d| d.as_ref().is_empty()).count();
        let tokens_out = output.chunks.iter().map(Vec::len).sum();
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Chunking complete: {} documents ({} empty), \
             {} chunks created in {}ms",
            corpus.len(),
            empty_documents,
            output.len(),
            duration_ms
        );

        let stats = ChunkStats {
            documents: corpus.len(),
            empty_documents,
            tokens_in,
            tokens_out,
            chunks_created: output.len(),
            mode: self.dispatcher.mode(),
            duration_ms,
        };

        (output, stats)
    }
}
