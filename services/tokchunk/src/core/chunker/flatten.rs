//! Merge of per-document chunk lists.
//!
//! Runs on the calling thread after dispatch has joined. The
//! linear walk over documents is what fixes the global output
//! order: document order first, chunk order within a document
//! second.

use crate::core::chunker::dispatch::Dispatched;
use crate::core::types::ChunkedCorpus;

/// Concatenate per-document chunks and record their sources.
///
/// Document `h` (0-based) is reported as `h + 1`. Documents with
/// no chunks leave no entries but keep their index reserved, so
/// the numbering of later documents is unchanged. Chunks are
/// moved, not copied; both outputs are allocated once using
/// `total`.
pub fn flatten<T>(dispatched: Dispatched<T>) -> ChunkedCorpus<T> {
    let Dispatched {
        per_document,
        total,
    } = dispatched;

    let mut chunks = Vec::with_capacity(total);
    let mut documents = Vec::with_capacity(total);

    for (h, doc_chunks) in per_document.into_iter().enumerate() {
        documents.extend(std::iter::repeat(h + 1).take(doc_chunks.len()));
        chunks.extend(doc_chunks);
    }

    debug_assert_eq!(chunks.len(), total);
    debug_assert_eq!(documents.len(), total);

    ChunkedCorpus { chunks, documents }
}
