// Concrete chunking scenarios
//
// Small corpora whose chunk output can be written out by hand.

use crate::common::{assert_valid_output, scenario_corpus};
use tokchunk::{chunk_tokens, chunk_tokens_with, ChunkedCorpus, ExecutionMode};

#[test]
fn test_size_two_no_overlap() {
    let corpus = scenario_corpus();
    let out: ChunkedCorpus<u32> = chunk_tokens(&corpus, 2, 0).unwrap();

    assert_valid_output(&corpus, &out);
    assert_eq!(out.len(), 11);
    assert_eq!(out.documents, vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2]);
    assert_eq!(
        out.chunks_for(1),
        &[vec![1, 2], vec![3, 4], vec![5, 6], vec![7, 8], vec![9, 10]]
    );
    assert_eq!(
        out.chunks_for(2),
        &[
            vec![5, 6],
            vec![7, 8],
            vec![9, 10],
            vec![11, 12],
            vec![13, 14],
            vec![15]
        ]
    );
}

#[test]
fn test_size_two_overlap_one() {
    let corpus = scenario_corpus();
    let out: ChunkedCorpus<u32> = chunk_tokens(&corpus, 2, 1).unwrap();

    assert_valid_output(&corpus, &out);

    // step = 1: one chunk per start offset, ceil(10 / 1) = 10
    let doc1 = out.chunks_for(1);
    assert_eq!(doc1.len(), 10);
    for (k, chunk) in doc1[..9].iter().enumerate() {
        let first = k as u32 + 1;
        assert_eq!(chunk, &vec![first, first + 1]);
    }
    assert_eq!(doc1[9], vec![10]);

    // Neighbours share exactly one token
    for pair in doc1[..9].windows(2) {
        assert_eq!(pair[0][1], pair[1][0]);
    }

    assert_eq!(out.chunks_for(2).len(), 11);
}

#[test]
fn test_empty_document_keeps_numbering() {
    let corpus: Vec<Vec<u32>> = vec![vec![1, 2, 3], vec![], vec![4, 5, 6]];
    let out: ChunkedCorpus<u32> = chunk_tokens(&corpus, 3, 0).unwrap();

    assert_valid_output(&corpus, &out);
    assert_eq!(out.chunks, vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(out.documents, vec![1, 3]);
    assert!(out.chunks_for(2).is_empty());
}

#[test]
fn test_size_three_overlap_two_truncates_tail() {
    let corpus: Vec<Vec<u32>> = vec![vec![1, 2, 3, 4, 5]];
    let out: ChunkedCorpus<u32> = chunk_tokens(&corpus, 3, 2).unwrap();

    assert_eq!(
        out.chunks,
        vec![
            vec![1, 2, 3],
            vec![2, 3, 4],
            vec![3, 4, 5],
            vec![4, 5],
            vec![5]
        ]
    );
    assert!(out.chunks.iter().skip(3).all(|c| c.len() < 3));
    assert_eq!(out.documents, vec![1; 5]);
}

#[test]
fn test_document_shorter_than_size() {
    let corpus: Vec<Vec<u32>> = vec![vec![9, 9], vec![1, 2, 3, 4, 5, 6, 7]];
    let out: ChunkedCorpus<u32> = chunk_tokens(&corpus, 5, 1).unwrap();

    assert_eq!(out.chunks_for(1), &[vec![9, 9]]);
    assert_eq!(out.chunks_for(2), &[vec![1, 2, 3, 4, 5], vec![5, 6, 7]]);
}

#[test]
fn test_all_documents_empty() {
    let corpus: Vec<Vec<u32>> = vec![vec![], vec![], vec![]];
    let out: ChunkedCorpus<u32> = chunk_tokens(&corpus, 4, 1).unwrap();

    assert!(out.is_empty());
    assert!(out.documents.is_empty());
}

#[test]
fn test_invalid_window_on_any_corpus() {
    let empty: Vec<Vec<u32>> = Vec::new();
    let corpus = scenario_corpus();

    for (size, overlap) in [(2, 2), (2, 3), (0, 0), (-4, 0), (3, -1)] {
        for docs in [&empty, &corpus] {
            let err = chunk_tokens::<_, u32>(docs, size, overlap).unwrap_err();
            assert!(
                err.is_invalid_window(),
                "size={size} overlap={overlap} should be rejected, got {err}"
            );
        }
    }
}

#[test]
fn test_sequential_equals_parallel_on_scenario() {
    let corpus = scenario_corpus();
    let seq: ChunkedCorpus<u32> =
        chunk_tokens_with(&corpus, 4, 1, ExecutionMode::Sequential).unwrap();
    let par: ChunkedCorpus<u32> =
        chunk_tokens_with(&corpus, 4, 1, ExecutionMode::Parallel).unwrap();

    assert_eq!(seq, par);
}

#[test]
fn test_corpus_is_not_modified() {
    let corpus = scenario_corpus();
    let before = corpus.clone();

    let _: ChunkedCorpus<u32> = chunk_tokens(&corpus, 3, 1).unwrap();

    assert_eq!(corpus, before);
}
