//! Core domain logic
//!
//! This module contains everything that is independent of the
//! command-line adapter.
//!
//! # Architecture
//!
//! - **chunker**: Windowing, parallel dispatch and flattening
//! - **config**: Configuration loading (TOML + environment)
//! - **corpus**: JSON corpus input and chunked output files
//! - **error**: Error types and Result alias
//! - **types**: Output and statistics data structures
//! - **xdg**: XDG directory handling

pub mod chunker;
pub mod config;
pub mod corpus;
pub mod error;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use chunker::{chunk_tokens, ChunkingPipeline, WindowConfig};
pub use config::Config;
pub use error::{Result, TokChunkError};
