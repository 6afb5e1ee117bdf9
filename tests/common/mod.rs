use indexmap::IndexMap;
use recipe_recommender::{
    vectorizer::analyzer::analyze, AnalyzerOptions, CorpusArtifact, DefaultTFIDFEngine, RawRecipe,
    StoredField, TFIDFEngine, TfidfModel,
};

pub fn recipe(name: &str, ingredients: &[&str]) -> RawRecipe {
    RawRecipe {
        name: name.to_string(),
        ingredients: StoredField::Parsed(ingredients.iter().map(|s| s.to_string()).collect()),
        ingredients_raw: None,
        steps: StoredField::Literal("['mix everything', 'bake 20 minutes']".to_string()),
        nutrition: StoredField::Literal("[250.0, 10.0, 4.0, 12.0, 20.0, 8.0, 9.0]".to_string()),
    }
}

/// Fit idf over the ingredient text of `recipes` and vectorize every row
pub fn artifact(recipes: Vec<RawRecipe>) -> CorpusArtifact {
    let options = AnalyzerOptions::default();
    let docs: Vec<String> = recipes
        .iter()
        .map(|r| match &r.ingredients {
            StoredField::Parsed(list) => list.join(" "),
            StoredField::Literal(text) => text.clone(),
        })
        .collect();

    let mut doc_freq: IndexMap<String, u64> = IndexMap::new();
    for doc in &docs {
        let mut tokens = analyze(doc, &options);
        tokens.sort();
        tokens.dedup();
        for token in tokens {
            *doc_freq.entry(token).or_insert(0) += 1;
        }
    }
    let vocabulary = doc_freq
        .keys()
        .enumerate()
        .map(|(col, token)| (token.clone(), col))
        .collect();
    let idf = doc_freq
        .values()
        .map(|&df| DefaultTFIDFEngine::idf(docs.len() as u64, df))
        .collect();
    let model = TfidfModel::new(vocabulary, idf, options).unwrap();
    let vectors = docs.iter().map(|d| model.transform(d)).collect();

    CorpusArtifact {
        records: recipes,
        model: model.into(),
        vectors,
    }
}

pub fn kitchen() -> Vec<RawRecipe> {
    vec![
        recipe("Chicken Fried Rice", &["chicken", "rice", "egg", "soy sauce"]),
        recipe("Pancakes", &["flour", "egg", "milk", "sugar"]),
        recipe("Stuffed Peppers", &["bell pepper", "rice", "ground beef", "tomato"]),
        recipe("Garden Salad", &["lettuce", "tomato", "cucumber"]),
        recipe("Chicken Curry", &["chicken", "curry powder", "coconut milk", "rice"]),
    ]
}
