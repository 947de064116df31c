//! Core data types for tokchunk.
//!
//! This module defines the values exchanged between the chunking
//! core and its callers: the flattened chunk output with its
//! document index, run statistics, and the execution mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Token identifier used by the CLI and corpus files.
///
/// The chunking core is generic over the token type and never
/// inspects token values.
pub type TokenId = u32;

/// How the dispatcher schedules per-document work
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One document at a time on the calling thread
    Sequential,
    /// Data-parallel over documents on a rayon pool
    #[default]
    Parallel,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Sequential => write!(f, "sequential"),
            ExecutionMode::Parallel => write!(f, "parallel"),
        }
    }
}

/// Flattened chunks of a corpus with their source documents.
///
/// `chunks[i]` was cut from the document with 1-based index
/// `documents[i]`. Entries are ordered by document, then by
/// position within the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkedCorpus<T> {
    /// All chunks in document order
    pub chunks: Vec<Vec<T>>,

    /// 1-based source document of each chunk
    pub documents: Vec<usize>,
}

impl<T> ChunkedCorpus<T> {
    /// Number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Iterate `(document, chunk)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[T])> + '_ {
        self.documents
            .iter()
            .copied()
            .zip(self.chunks.iter().map(Vec::as_slice))
    }

    /// Maximal runs of chunks sharing a source document.
    ///
    /// Yields `(document, range)` where `range` indexes into
    /// `chunks`. Documents without chunks do not appear.
    pub fn document_ranges(&self) -> Vec<(usize, Range<usize>)> {
        let mut ranges: Vec<(usize, Range<usize>)> = Vec::new();

        for (i, &doc) in self.documents.iter().enumerate() {
            match ranges.last_mut() {
                Some((last, range)) if *last == doc => range.end = i + 1,
                _ => ranges.push((doc, i..i + 1)),
            }
        }

        ranges
    }

    /// Chunks produced by a 1-based document index.
    ///
    /// Returns an empty slice for documents that produced nothing
    /// or are out of range.
    pub fn chunks_for(&self, document: usize) -> &[Vec<T>] {
        let start = self.documents.partition_point(|&d| d < document);
        let end = self.documents.partition_point(|&d| d <= document);
        &self.chunks[start..end]
    }

    /// Split into the `(chunks, documents)` pair.
    pub fn into_parts(self) -> (Vec<Vec<T>>, Vec<usize>) {
        (self.chunks, self.documents)
    }
}

/// Statistics from a chunking run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkStats {
    /// Number of documents in the input corpus
    pub documents: usize,

    /// Documents that had no tokens
    pub empty_documents: usize,

    /// Total tokens read
    pub tokens_in: usize,

    /// Total tokens written across all chunks (overlap counted twice)
    pub tokens_out: usize,

    /// Total chunks created
    pub chunks_created: usize,

    /// Execution mode used by the dispatcher
    pub mode: ExecutionMode,

    /// Chunking duration in milliseconds
    pub duration_ms: u64,
}
