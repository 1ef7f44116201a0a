use docqa_core::traits::Embedder;
use docqa_embed::{default_embedder, HashingEmbedder, MINILM_DIM};

fn cosine(a: &[f32], b: &[f32]) -> f32 { a.iter().zip(b).map(|(x, y)| x * y).sum() }

#[test]
fn fake_embedder_shapes_and_determinism() {
    // Force the hashing embedder to avoid loading a model
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");

    let embedder = default_embedder().expect("embedder");
    let texts = vec!["hello world".to_string(), "hello world".to_string()];
    let embs = embedder.embed_batch(&texts).expect("embed_batch");
    assert_eq!(embs.len(), 2);
    let v1 = &embs[0];
    let v2 = &embs[1];

    assert_eq!(v1.len(), MINILM_DIM);
    assert_eq!(embedder.dim(), MINILM_DIM);

    let norm: f32 = v1.iter().map(|x| x * x).sum::<f32>().sqrt();
    assert!((norm - 1.0).abs() <= 1e-3, "vector is L2-normalized (norm={norm})");

    for (a, b) in v1.iter().zip(v2.iter()) { assert!((a - b).abs() <= 1e-6); }
}

#[test]
fn shared_tokens_score_higher_than_disjoint_ones() {
    let embedder = HashingEmbedder::new(256);
    let cats = embedder.embed_text("cats are mammals");
    let dogs = embedder.embed_text("dogs are mammals");
    let paris = embedder.embed_text("paris city lights");
    assert!(cosine(&cats, &dogs) > cosine(&cats, &paris));
}

#[test]
fn empty_text_is_zero_vector() {
    let v = HashingEmbedder::new(8).embed_text("   ");
    assert_eq!(v, vec![0.0; 8]);
}

#[test]
fn batch_preserves_order() {
    let embedder = HashingEmbedder::new(64);
    let texts: Vec<String> = ["one", "two", "three"].iter().map(|s| s.to_string()).collect();
    let batch = embedder.embed_batch(&texts).expect("embed_batch");
    for (text, vector) in texts.iter().zip(&batch) {
        assert_eq!(vector, &embedder.embed_text(text));
    }
}
