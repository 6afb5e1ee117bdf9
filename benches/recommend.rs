use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indexmap::IndexMap;
use recipe_recommender::{
    vectorizer::analyzer::analyze, AnalyzerOptions, CorpusStore, DefaultTFIDFEngine, RawRecipe,
    Recommender, StoredField, TFIDFEngine, TfidfModel,
};

const PANTRY: &[&str] = &[
    "chicken", "rice", "egg", "flour", "milk", "sugar", "butter", "garlic", "onion", "tomato",
    "basil", "pepper", "salt", "beef", "pork", "tofu", "soy", "ginger", "lime", "cilantro",
    "potato", "carrot", "celery", "cheese", "cream", "lemon", "honey", "oats", "beans", "corn",
];

fn synthetic_store(size: usize) -> CorpusStore {
    let options = AnalyzerOptions::default();
    let docs: Vec<Vec<&str>> = (0..size)
        .map(|i| (0..6).map(|k| PANTRY[(i * 7 + k * 11 + i / 3) % PANTRY.len()]).collect())
        .collect();

    let mut doc_freq: IndexMap<String, u64> = IndexMap::new();
    for doc in &docs {
        let mut tokens = analyze(&doc.join(" "), &options);
        tokens.sort();
        tokens.dedup();
        for token in tokens {
            *doc_freq.entry(token).or_insert(0) += 1;
        }
    }
    let vocabulary = doc_freq.keys().enumerate().map(|(c, t)| (t.clone(), c)).collect();
    let idf = doc_freq
        .values()
        .map(|&df| DefaultTFIDFEngine::idf(size as u64, df))
        .collect();
    let model = TfidfModel::new(vocabulary, idf, options).unwrap();

    let vectors = docs.iter().map(|d| model.transform(&d.join(" "))).collect();
    let records = docs
        .iter()
        .enumerate()
        .map(|(i, d)| RawRecipe {
            name: format!("recipe {}", i),
            ingredients: StoredField::Parsed(d.iter().map(|s| s.to_string()).collect()),
            ingredients_raw: None,
            steps: StoredField::Parsed(vec!["cook".to_string()]),
            nutrition: StoredField::Parsed(vec![100.0; 7]),
        })
        .collect();
    CorpusStore::load(records, model, vectors).unwrap()
}

fn recommend_benchmark(c: &mut Criterion) {
    let recommender = Recommender::new(Arc::new(synthetic_store(20_000)));
    let query = ["chicken", "rice", "garlic"];

    c.bench_function("recommend_top5_20k", |b| {
        b.iter(|| recommender.recommend(black_box(&query[..]), 5).unwrap());
    });

    c.bench_function("score_20k", |b| {
        let vector = recommender.store().vectorize_query(&query[..]);
        b.iter(|| recommender.score(black_box(&vector)));
    });
}

criterion_group!(benches, recommend_benchmark);
criterion_main!(benches);
