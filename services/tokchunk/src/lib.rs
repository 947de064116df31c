//! tokchunk - fixed-window chunking of tokenized corpora
//!
//! Splits every document of a tokenized corpus into fixed-size,
//! optionally overlapping chunks and records which document each
//! chunk came from. Documents are processed independently and in
//! parallel via rayon, while the output keeps a deterministic
//! order: document order first, chunk order second.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - chunker (windowing, dispatch, flattening, pipeline)
//!   - config, error, types, corpus files, xdg
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```
//! let corpus = vec![
//!     (1..=10).collect::<Vec<u32>>(),
//!     (5..=15).collect::<Vec<u32>>(),
//! ];
//!
//! let out: tokchunk::ChunkedCorpus<u32> = tokchunk::chunk_tokens(&corpus, 2, 0).unwrap();
//!
//! assert_eq!(out.len(), 11);
//! assert_eq!(out.documents, vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2]);
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::chunker::{chunk_tokens, chunk_tokens_with, ChunkingPipeline, WindowConfig};
pub use crate::core::config::Config;
pub use crate::core::error::{Result, TokChunkError};
pub use crate::core::types::*;
