//! Corpus files.
//!
//! Reads tokenized corpora from JSON and writes chunked output
//! back as JSON. Two input shapes are accepted:
//!
//! ```json
//! [[1, 2, 3], [4, 5]]
//! ```
//!
//! ```json
//! [{"name": "speech_a", "tokens": [1, 2, 3]}, {"tokens": [4, 5]}]
//! ```
//!
//! Documents without a name are called `text1`, `text2`, ... by
//! their 1-based position.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TokChunkError};
use crate::core::types::{ChunkedCorpus, TokenId};

/// An ordered, named collection of token sequences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    names: Vec<String>,
    documents: Vec<Vec<TokenId>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    Plain(Vec<Vec<TokenId>>),
    Named(Vec<NamedDocument>),
}

#[derive(Deserialize)]
struct NamedDocument {
    #[serde(default)]
    name: Option<String>,
    tokens: Vec<TokenId>,
}

fn default_name(position: usize) -> String {
    format!("text{position}")
}

impl Corpus {
    /// Build a corpus with default document names
    pub fn new(documents: Vec<Vec<TokenId>>) -> Self {
        let names = (1..=documents.len()).map(default_name).collect();
        Self { names, documents }
    }

    /// Build a corpus from `(name, tokens)` pairs
    pub fn from_named(documents: Vec<(String, Vec<TokenId>)>) -> Self {
        let (names, documents) = documents.into_iter().unzip();
        Self { names, documents }
    }

    /// Read a corpus from a JSON file, or stdin when `path` is `-`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if path == Path::new("-") {
            return Self::from_reader(io::stdin().lock());
        }

        let file = File::open(path).map_err(|e| {
            TokChunkError::CorpusError(format!("Failed to open {}: {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Read a corpus from any JSON source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let parsed: CorpusFile = serde_json::from_reader(reader).map_err(|e| {
            TokChunkError::CorpusError(format!(
                "Expected an array of token arrays or of {{\"name\", \"tokens\"}} objects: {e}"
            ))
        })?;

        let corpus = match parsed {
            CorpusFile::Plain(documents) => Self::new(documents),
            CorpusFile::Named(documents) => Self::from_named(
                documents
                    .into_iter()
                    .enumerate()
                    .map(|(i, d)| (d.name.unwrap_or_else(|| default_name(i + 1)), d.tokens))
                    .collect(),
            ),
        };

        tracing::debug!("Loaded corpus with {} documents", corpus.len());
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn documents(&self) -> &[Vec<TokenId>] {
        &self.documents
    }

    /// Name for each chunk: `<document name>.<k>`, k 1-based
    /// within its document
    pub fn segment_names(&self, output: &ChunkedCorpus<TokenId>) -> Vec<String> {
        let mut names = Vec::with_capacity(output.len());

        for (doc, range) in output.document_ranges() {
            let base = self
                .names
                .get(doc - 1)
                .cloned()
                .unwrap_or_else(|| default_name(doc));
            names.extend((1..=range.len()).map(|k| format!("{base}.{k}")));
        }

        names
    }
}

/// Chunked corpus as written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkedDocument {
    /// Chunk tokens in output order
    pub chunks: Vec<Vec<TokenId>>,

    /// 1-based source document of each chunk
    pub documents: Vec<usize>,

    /// Segment name of each chunk
    pub names: Vec<String>,
}

impl ChunkedDocument {
    pub fn new(corpus: &Corpus, output: ChunkedCorpus<TokenId>) -> Self {
        let names = corpus.segment_names(&output);
        let (chunks, documents) = output.into_parts();
        Self {
            chunks,
            documents,
            names,
        }
    }

    /// Write as JSON to a file, or stdout when `path` is `None`
    pub fn write(&self, path: Option<&Path>, pretty: bool) -> Result<()> {
        match path {
            Some(path) => {
                let file = File::create(path)?;
                self.write_to(BufWriter::new(file), pretty)
            }
            None => self.write_to(io::stdout().lock(), pretty),
        }
    }

    pub fn write_to<W: Write>(&self, mut writer: W, pretty: bool) -> Result<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
