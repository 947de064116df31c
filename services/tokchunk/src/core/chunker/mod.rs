//! Token chunking module.
//!
//! Turns a corpus of token sequences into a flat list of fixed
//! size, optionally overlapping chunks plus the 1-based index of
//! the document each chunk came from. Key pieces:
//!
//! - **window**: cuts one document into chunks
//! - **dispatch**: runs the windower over every document,
//!   sequentially or on a rayon pool
//! - **flatten**: merges per-document results in document order
//! - **pipeline**: ties the three together and collects stats
//!
//! # Ordering
//!
//! Output order is fixed by document position, never by worker
//! completion order, so sequential and parallel runs return
//! identical results.

pub mod dispatch;
pub mod flatten;
pub mod pipeline;
pub mod window;

pub use dispatch::{Dispatched, Dispatcher};
pub use flatten::flatten;
pub use pipeline::ChunkingPipeline;
pub use window::{window, WindowConfig};

use crate::core::error::Result;
use crate::core::types::{ChunkedCorpus, ExecutionMode};

/// Chunk every document of `corpus`.
///
/// `size` is the number of tokens per chunk and `overlap` the
/// number of tokens each chunk repeats from the previous one.
/// Work is spread over rayon's global pool. The corpus is not
/// modified; the returned value owns all chunks.
///
/// # Errors
///
/// Returns `InvalidWindowConfiguration` when `size < 1`,
/// `overlap < 0` or `overlap >= size`. The check runs before any
/// document is touched, including for an empty corpus.
///
/// # Example
///
/// ```
/// use tokchunk::{chunk_tokens, ChunkedCorpus};
///
/// let corpus: Vec<Vec<u32>> = vec![vec![1, 2, 3, 4, 5], vec![], vec![6, 7, 8]];
/// let out: ChunkedCorpus<u32> = chunk_tokens(&corpus, 2, 0).unwrap();
///
/// assert_eq!(out.chunks, vec![vec![1, 2], vec![3, 4], vec![5], vec![6, 7], vec![8]]);
/// assert_eq!(out.documents, vec![1, 1, 1, 3, 3]);
/// ```
pub fn chunk_tokens<D, T>(corpus: &[D], size: i64, overlap: i64) -> Result<ChunkedCorpus<T>>
where
    D: AsRef<[T]> + Sync,
    T: Clone + Send + Sync,
{
    chunk_tokens_with(corpus, size, overlap, ExecutionMode::Parallel)
}

/// [`chunk_tokens`] with an explicit execution mode.
pub fn chunk_tokens_with<D, T>(
    corpus: &[D],
    size: i64,
    overlap: i64,
    mode: ExecutionMode,
) -> Result<ChunkedCorpus<T>>
where
    D: AsRef<[T]> + Sync,
    T: Clone + Send + Sync,
{
    let config = WindowConfig::from_signed(size, overlap)?;
    let dispatched = Dispatcher::new(mode).dispatch(corpus, &config);
    Ok(flatten(dispatched))
}
