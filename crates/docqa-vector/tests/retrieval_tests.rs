use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use docqa_core::traits::Embedder;
use docqa_core::types::{Chunk, Vector};
use docqa_core::Error;
use docqa_vector::{cosine_similarity, search, Index, Retriever};

/// Returns a fixed vector per known text and counts batch calls.
struct TableEmbedder {
    table: HashMap<String, Vector>,
    calls: AtomicUsize,
}

impl TableEmbedder {
    fn new(entries: &[(&str, [f32; 2])]) -> Self {
        let table = entries.iter().map(|(t, v)| (t.to_string(), v.to_vec())).collect();
        Self { table, calls: AtomicUsize::new(0) }
    }
}

impl Embedder for TableEmbedder {
    fn dim(&self) -> usize { 2 }
    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vector>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        texts
            .iter()
            .map(|t| self.table.get(t).cloned().ok_or_else(|| anyhow::anyhow!("unknown text: {t}")))
            .collect()
    }
}

fn animals() -> TableEmbedder {
    TableEmbedder::new(&[
        ("cats are mammals", [1.0, 0.0]),
        ("dogs are mammals", [0.9, 0.1]),
        ("paris is a city", [0.0, 1.0]),
        ("animal", [1.0, 0.0]),
    ])
}

fn texts(results: &[docqa_core::types::RetrievalResult]) -> Vec<&str> {
    results.iter().map(|r| r.chunk.text.as_str()).collect()
}

#[test]
fn animal_query_ranks_cats_then_dogs() {
    let embedder = animals();
    let chunks = Chunk::sequence(["cats are mammals", "dogs are mammals", "paris is a city"]);
    let index = Index::build(chunks, &embedder).expect("build");
    assert_eq!(embedder.calls.load(Ordering::SeqCst), 1, "all chunks embedded in one batch");
    assert_eq!(index.chunks().len(), index.vectors().len());

    let query = embedder.embed_batch(&["animal".to_string()]).expect("embed").remove(0);
    let results = search(&query, &index, 2).expect("search");

    assert_eq!(texts(&results), vec!["cats are mammals", "dogs are mammals"]);
    assert!((results[0].score - 1.0).abs() < 1e-6);
    assert!(results[0].score > results[1].score);
}

#[test]
fn top_k_beyond_len_returns_everything_ranked() {
    let embedder = animals();
    let index = Index::build(Chunk::sequence(["paris is a city", "dogs are mammals", "cats are mammals"]), &embedder)
        .expect("build");
    let results = search(&[1.0, 0.0], &index, 10).expect("search");

    assert_eq!(texts(&results), vec!["cats are mammals", "dogs are mammals", "paris is a city"]);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn equal_scores_keep_earlier_position_first() {
    let chunks = vec![Chunk::new("late", 2), Chunk::new("early", 0), Chunk::new("middle", 1)];
    let vectors = vec![vec![2.0, 0.0], vec![1.0, 0.0], vec![3.0, 0.0]];
    let index = Index::from_parts(chunks, vectors, 2).expect("index");

    let results = search(&[1.0, 0.0], &index, 3).expect("search");
    assert_eq!(texts(&results), vec!["early", "middle", "late"]);
    let positions: Vec<usize> = results.iter().map(|r| r.chunk.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[test]
fn empty_index_is_not_indexed() {
    let err = search(&[1.0, 0.0], &Index::default(), 3).unwrap_err();
    assert!(matches!(err, Error::NotIndexed));
}

#[test]
fn building_from_no_chunks_is_empty_corpus() {
    let embedder = animals();
    let err = Index::build(Vec::new(), &embedder).unwrap_err();
    assert!(matches!(err, Error::EmptyCorpus));
    assert_eq!(embedder.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn embedder_failure_is_upstream() {
    let embedder = animals();
    let err = Index::build(Chunk::sequence(["not in table"]), &embedder).unwrap_err();
    match err {
        Error::Upstream(inner) => assert!(inner.to_string().contains("unknown text")),
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[test]
fn query_dimension_must_match() {
    let index = Index::from_parts(Chunk::sequence(["a"]), vec![vec![1.0, 0.0]], 2).expect("index");
    let err = search(&[1.0, 0.0, 0.0], &index, 1).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { expected: 2, actual: 3 }));
}

#[test]
fn zero_top_k_is_rejected() {
    let index = Index::from_parts(Chunk::sequence(["a"]), vec![vec![1.0, 0.0]], 2).expect("index");
    assert!(matches!(search(&[1.0, 0.0], &index, 0), Err(Error::InvalidConfig(_))));
}

#[test]
fn min_score_filters_weak_matches() {
    let embedder = animals();
    let index = Index::build(Chunk::sequence(["cats are mammals", "paris is a city"]), &embedder).expect("build");
    let results = Retriever::with_min_score(Some(0.5)).search(&[1.0, 0.0], &index, 5).expect("search");
    assert_eq!(texts(&results), vec!["cats are mammals"]);
}

#[test]
fn cosine_handles_zero_and_opposite_vectors() {
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
    assert!((cosine_similarity(&[1.0, 0.0], &[-3.0, 0.0]) + 1.0).abs() < 1e-6);
    assert!((cosine_similarity(&[3.0, 4.0], &[6.0, 8.0]) - 1.0).abs() < 1e-6);
}

#[test]
fn non_finite_vectors_score_zero_and_rank_last() {
    assert_eq!(cosine_similarity(&[f32::NAN, 1.0], &[1.0, 0.0]), 0.0);
    assert_eq!(cosine_similarity(&[f32::INFINITY, 0.0], &[1.0, 0.0]), 0.0);

    let chunks = Chunk::sequence(["broken", "good"]);
    let index = Index::from_parts(chunks, vec![vec![f32::NAN, 0.0], vec![1.0, 0.0]], 2).expect("index");
    let results = search(&[1.0, 0.0], &index, 2).expect("search");

    assert_eq!(texts(&results), vec!["good", "broken"]);
    assert!(results.iter().all(|r| (-1.0..=1.0).contains(&r.score)));
}
