// Chunking invariants over synthetic corpora
//
// Each test sweeps a grid of window configurations and checks
// a property that must hold for every document.

use crate::common::{assert_valid_output, synthetic_corpus};
use tokchunk::core::chunker::{window, Dispatcher, WindowConfig};
use tokchunk::{chunk_tokens, chunk_tokens_with, ChunkedCorpus, ExecutionMode};

fn configs() -> Vec<WindowConfig> {
    let mut out = Vec::new();
    for size in 1..=9 {
        for overlap in 0..size {
            out.push(WindowConfig::new(size, overlap).unwrap());
        }
    }
    out
}

#[test]
fn test_chunk_count_is_ceil_len_over_step() {
    let corpus = synthetic_corpus(60);

    for config in configs() {
        for doc in &corpus {
            let chunks = window(doc, &config);
            let expected = if doc.is_empty() {
                0
            } else {
                (doc.len() + config.step() - 1) / config.step()
            };
            assert_eq!(
                chunks.len(),
                expected,
                "len={} size={} overlap={}",
                doc.len(),
                config.size(),
                config.overlap()
            );
        }
    }
}

#[test]
fn test_dropping_overlap_reconstructs_document() {
    let corpus = synthetic_corpus(60);

    for config in configs() {
        let step = config.step();

        for doc in &corpus {
            let chunks = window(doc, &config);
            if chunks.is_empty() {
                continue;
            }

            // Every chunk but the last contributes its first `step`
            // tokens; the last contributes everything it holds.
            let mut rebuilt: Vec<u32> = Vec::with_capacity(doc.len());
            let last = chunks.len() - 1;
            for chunk in &chunks[..last] {
                rebuilt.extend_from_slice(&chunk[..step.min(chunk.len())]);
            }
            rebuilt.extend_from_slice(&chunks[last]);

            let last_start = last * step;
            assert_eq!(&rebuilt[..last_start], &doc[..last_start]);
            assert_eq!(&rebuilt[last_start..], &doc[last_start..]);
        }
    }
}

#[test]
fn test_chunks_are_contiguous_subranges() {
    let corpus = synthetic_corpus(40);

    for config in configs() {
        for doc in &corpus {
            for (k, chunk) in window(doc, &config).iter().enumerate() {
                let start = k * config.step();
                let end = (start + config.size()).min(doc.len());
                assert_eq!(chunk.as_slice(), &doc[start..end]);
                assert!(!chunk.is_empty());
                assert!(chunk.len() <= config.size());
            }
        }
    }
}

#[test]
fn test_neighbours_share_overlap() {
    let corpus = synthetic_corpus(40);

    for config in configs() {
        let overlap = config.overlap();
        for doc in &corpus {
            let chunks = window(doc, &config);
            for pair in chunks.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                let shared = overlap.min(b.len());
                if a.len() == config.size() {
                    assert_eq!(&a[a.len() - overlap..][..shared], &b[..shared]);
                }
            }
        }
    }
}

#[test]
fn test_document_index_multiplicity() {
    let corpus = synthetic_corpus(200);

    for (size, overlap) in [(1, 0), (4, 0), (4, 3), (16, 5), (100, 99)] {
        let out: ChunkedCorpus<u32> = chunk_tokens(&corpus, size, overlap).unwrap();
        assert_valid_output(&corpus, &out);

        let config = WindowConfig::new(size as usize, overlap as usize).unwrap();
        for (h, doc) in corpus.iter().enumerate() {
            let count = out.documents.iter().filter(|&&d| d == h + 1).count();
            assert_eq!(count, config.chunk_count(doc.len()));
        }
    }
}

#[test]
fn test_runs_match_per_document_windowing() {
    let corpus = synthetic_corpus(120);
    let config = WindowConfig::new(6, 2).unwrap();
    let out: ChunkedCorpus<u32> = chunk_tokens(&corpus, 6, 2).unwrap();

    for (doc, range) in out.document_ranges() {
        assert_eq!(
            &out.chunks[range],
            window(&corpus[doc - 1], &config).as_slice()
        );
    }
}

#[test]
fn test_parallel_output_independent_of_worker_count() {
    let corpus = synthetic_corpus(1_000);
    let config = WindowConfig::new(8, 3).unwrap();

    let reference: ChunkedCorpus<u32> =
        chunk_tokens_with(&corpus, 8, 3, ExecutionMode::Sequential).unwrap();

    for threads in [1, 2, 3, 8] {
        let dispatcher = Dispatcher::with_threads(threads).unwrap();
        let dispatched = dispatcher.dispatch(&corpus, &config);
        assert_eq!(dispatched.total, reference.len());

        let out: ChunkedCorpus<u32> = tokchunk::core::chunker::flatten(dispatched);
        assert_eq!(out, reference, "threads={threads}");
    }
}
