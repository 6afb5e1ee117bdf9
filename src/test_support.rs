//! Small in-memory corpora for unit tests.

use indexmap::IndexMap;

use crate::{
    recipe::{RawRecipe, StoredField},
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        analyzer::{analyze, AnalyzerOptions},
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        TfidfModel,
    },
};

pub fn raw_recipe(name: &str, ingredients: &str, ingredients_raw: Option<&str>) -> RawRecipe {
    RawRecipe {
        name: name.to_string(),
        ingredients: StoredField::Literal(ingredients.to_string()),
        ingredients_raw: ingredients_raw.map(str::to_string),
        steps: StoredField::Literal("['prep', 'cook']".to_string()),
        nutrition: StoredField::Parsed(vec![100.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
    }
}

pub fn literal(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("'{}'", s)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Recipes named `recipe{i}`, a model fitted over their ingredient text and the aligned rows
pub fn corpus_parts(lists: &[&[&str]]) -> (Vec<RawRecipe>, TfidfModel, Vec<ZeroSpVec<f64>>) {
    let options = AnalyzerOptions::default();
    let docs: Vec<String> = lists.iter().map(|l| l.join(" ")).collect();

    let mut doc_freq: IndexMap<String, u64> = IndexMap::new();
    for doc in &docs {
        let mut tokens = analyze(doc, &options);
        tokens.sort();
        tokens.dedup();
        for token in tokens {
            *doc_freq.entry(token).or_insert(0) += 1;
        }
    }
    let vocabulary: IndexMap<String, usize> = doc_freq
        .keys()
        .enumerate()
        .map(|(col, token)| (token.clone(), col))
        .collect();
    let idf: Vec<f64> = doc_freq
        .values()
        .map(|&df| DefaultTFIDFEngine::idf(docs.len() as u64, df))
        .collect();
    let model = TfidfModel::new(vocabulary, idf, options).unwrap();

    let vectors = docs.iter().map(|doc| model.transform(doc)).collect();
    let records = lists
        .iter()
        .enumerate()
        .map(|(i, l)| raw_recipe(&format!("recipe{}", i), &literal(l), None))
        .collect();
    (records, model, vectors)
}
