//! Per-document fan-out of the windower.
//!
//! Every document is windowed independently. In parallel mode the
//! documents are mapped with rayon's indexed parallel iterator,
//! whose `collect` writes each result into the slot matching its
//! input position, so output order never depends on which worker
//! finished first. Chunk counts are reduced sequentially after
//! all workers have joined; no counter is shared between workers.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::core::chunker::window::{window, WindowConfig};
use crate::core::config::ParallelConfig;
use crate::core::error::{Result, TokChunkError};
use crate::core::types::ExecutionMode;

/// Documents between progress log lines in sequential mode
const PROGRESS_INTERVAL: usize = 1000;

/// Per-document chunk lists plus their total count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched<T> {
    /// `per_document[h]` holds the chunks of document `h` (0-based)
    pub per_document: Vec<Vec<Vec<T>>>,

    /// Sum of the chunk counts of all documents
    pub total: usize,
}

/// Distributes windowing across the documents of a corpus
#[derive(Debug, Default)]
pub struct Dispatcher {
    mode: ExecutionMode,

    /// Dedicated pool; `None` runs on rayon's global pool
    pool: Option<ThreadPool>,
}

impl Dispatcher {
    /// Create a dispatcher using rayon's global pool in parallel mode.
    pub fn new(mode: ExecutionMode) -> Self {
        Self { mode, pool: None }
    }

    /// Create a parallel dispatcher with its own pool of `threads`
    /// workers. `0` lets rayon pick the worker count.
    ///
    /// # Errors
    ///
    /// Returns `ThreadPoolError` if the pool cannot be built.
    pub fn with_threads(threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("tokchunk-worker-{i}"))
            .build()
            .map_err(|e| TokChunkError::ThreadPoolError(e.to_string()))?;

        Ok(Self {
            mode: ExecutionMode::Parallel,
            pool: Some(pool),
        })
    }

    /// Create the dispatcher described by `config`.
    ///
    /// Disabled parallelism runs sequentially. A non-zero thread
    /// count gets a dedicated pool; otherwise rayon's global pool
    /// is used.
    pub fn from_config(config: &ParallelConfig) -> Result<Self> {
        match (config.mode(), config.threads) {
            (ExecutionMode::Parallel, threads) if threads > 0 => Self::with_threads(threads),
            (mode, _) => Ok(Self::new(mode)),
        }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Worker count that parallel dispatch will use
    pub fn worker_count(&self) -> usize {
        match (self.mode, &self.pool) {
            (ExecutionMode::Sequential, _) => 1,
            (ExecutionMode::Parallel, Some(pool)) => pool.current_num_threads(),
            (ExecutionMode::Parallel, None) => rayon::current_num_threads(),
        }
    }

    /// Window every document of `corpus`.
    ///
    /// The configuration was validated when the `WindowConfig` was
    /// built, so this cannot fail and never returns partial output.
    pub fn dispatch<D, T>(&self, corpus: &[D], config: &WindowConfig) -> Dispatched<T>
    where
        D: AsRef<[T]> + Sync,
        T: Clone + Send + Sync,
    {
        tracing::debug!(
            "Dispatching {} documents ({} mode, {} workers)",
            corpus.len(),
            self.mode,
            self.worker_count()
        );

        let per_document = match self.mode {
            ExecutionMode::Sequential => Self::run_sequential(corpus, config),
            ExecutionMode::Parallel => match &self.pool {
                Some(pool) => pool.install(|| Self::run_parallel(corpus, config)),
                None => Self::run_parallel(corpus, config),
            },
        };

        let total = per_document.iter().map(Vec::len).sum();

        Dispatched {
            per_document,
            total,
        }
    }

    fn run_sequential<D, T>(corpus: &[D], config: &WindowConfig) -> Vec<Vec<Vec<T>>>
    where
        D: AsRef<[T]>,
        T: Clone,
    {
        let mut per_document = Vec::with_capacity(corpus.len());

        for (idx, document) in corpus.iter().enumerate() {
            if idx % PROGRESS_INTERVAL == 0 && idx > 0 {
                tracing::debug!("Progress: {}/{} documents windowed", idx, corpus.len());
            }
            per_document.push(window(document.as_ref(), config));
        }

        per_document
    }

    fn run_parallel<D, T>(corpus: &[D], config: &WindowConfig) -> Vec<Vec<Vec<T>>>
    where
        D: AsRef<[T]> + Sync,
        T: Clone + Send + Sync,
    {
        corpus
            .par_iter()
            .map(|document| window(document.as_ref(), config))
            .collect()
    }
}
