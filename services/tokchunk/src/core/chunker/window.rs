//! Fixed-size token windowing.
//!
//! Cuts a single document into chunks of `size` tokens whose
//! start offsets advance by `step = size - overlap`. The last
//! chunk keeps whatever tokens remain and may be shorter than
//! `size`; it is never padded or dropped.
//!
//! # Example
//!
//! ```
//! use tokchunk::core::chunker::{window, WindowConfig};
//!
//! let config = WindowConfig::new(3, 2).unwrap();
//! let chunks = window(&[1u32, 2, 3, 4, 5], &config);
//!
//! assert_eq!(chunks.len(), 5);
//! assert_eq!(chunks[3], vec![4, 5]);
//! assert_eq!(chunks[4], vec![5]);
//! ```

use crate::core::error::{Result, TokChunkError};

/// Validated window size and overlap.
///
/// A `WindowConfig` can only be built through [`WindowConfig::new`]
/// or [`WindowConfig::from_signed`], so holding one guarantees
/// `size >= 1` and `overlap < size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Tokens per chunk
    size: usize,

    /// Tokens shared between consecutive chunks
    overlap: usize,
}

impl WindowConfig {
    /// Create a window configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindowConfiguration` if `size` is 0 or if
    /// `overlap >= size`.
    ///
    /// # Example
    ///
    /// ```
    /// use tokchunk::core::chunker::WindowConfig;
    ///
    /// let config = WindowConfig::new(512, 64).unwrap();
    /// assert_eq!(config.step(), 448);
    /// assert!(WindowConfig::new(10, 10).is_err());
    /// ```
    pub fn new(size: usize, overlap: usize) -> Result<Self> {
        if size == 0 {
            return Err(invalid(signed(size), signed(overlap), "size must be at least 1"));
        }

        if overlap >= size {
            return Err(invalid(
                signed(size),
                signed(overlap),
                "overlap must be less than size",
            ));
        }

        Ok(Self { size, overlap })
    }

    /// Create a window configuration from signed host values.
    ///
    /// Rejects negative inputs in addition to the checks done by
    /// [`WindowConfig::new`].
    pub fn from_signed(size: i64, overlap: i64) -> Result<Self> {
        if size < 1 {
            return Err(invalid(size, overlap, "size must be at least 1"));
        }

        if overlap < 0 {
            return Err(invalid(size, overlap, "overlap must not be negative"));
        }

        if overlap >= size {
            return Err(invalid(size, overlap, "overlap must be less than size"));
        }

        let size = usize::try_from(size)
            .map_err(|_| invalid(size, overlap, "size does not fit in usize"))?;
        let overlap = usize::try_from(overlap)
            .map_err(|_| invalid(signed(size), overlap, "overlap does not fit in usize"))?;

        Ok(Self { size, overlap })
    }

    /// Tokens per chunk
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tokens shared between consecutive chunks
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Distance between consecutive chunk start offsets (always >= 1)
    pub fn step(&self) -> usize {
        self.size - self.overlap
    }

    /// Number of chunks a document of `len` tokens produces.
    pub fn chunk_count(&self, len: usize) -> usize {
        len.div_ceil(self.step())
    }
}

/// Report an unsigned value in the signed error fields, saturating at `i64::MAX`
fn signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn invalid(size: i64, overlap: i64, reason: &'static str) -> TokChunkError {
    TokChunkError::InvalidWindowConfiguration {
        size,
        overlap,
        reason,
    }
}

/// Split one document into overlapping chunks.
///
/// Chunks start at offsets `0, step, 2 * step, ...` while the
/// offset is inside the document; the chunk at offset `o` covers
/// `[o, min(o + size, len))`. An empty document yields no chunks.
/// The document is only read.
pub fn window<T: Clone>(document: &[T], config: &WindowConfig) -> Vec<Vec<T>> {
    if document.is_empty() {
        return Vec::new();
    }

    let len = document.len();
    let step = config.step();
    let mut chunks = Vec::with_capacity(config.chunk_count(len));

    for start in (0..len).step_by(step) {
        let end = start + (len - start).min(config.size());
        chunks.push(document[start..end].to_vec());
    }

    chunks
}
