/// This crate is an ingredient-based recipe recommendation engine over a precomputed TF-IDF corpus.
pub mod artifact;
pub mod config;
pub mod engine;
pub mod error;
pub mod query;
pub mod recipe;
pub mod store;
pub mod utils;
pub mod vectorizer;

#[cfg(test)]
mod test_support;

/// Similarity Engine
/// Ranks every corpus row by cosine similarity to a query ingredient list
/// and returns the best `top_n` recipes, skipping rows that fail validation.
///
/// It holds the corpus as `Arc<CorpusStore>`, so clones are cheap and
/// can be used from several threads at once.
pub use engine::Recommender;

/// A ranked recipe with its similarity score
pub use engine::Recommendation;

/// Result of a recommendation request.
/// Keeps "empty query" and "no matches" apart.
pub use engine::RecommendOutcome;

/// Percentage of query ingredients found verbatim in a recipe
pub use engine::ingredient_overlap;

/// Scored corpus rows
pub use engine::{HitEntry, Hits};

/// Corpus Store
/// Immutable recipe table, fitted model and aligned TF-IDF rows.
/// Rows that fail validation are quarantined at load time but keep their slot.
pub use store::{CorpusStore, SkippedRecord};

/// Recipe rows
/// `RawRecipe` is the stored form, `RecipeRecord` the validated one.
pub use recipe::{Nutrition, RawRecipe, RecipeRecord, StoredField};

/// Fitted Vectorization Model
/// Vocabulary, idf weights and analyzer options.
/// Transforms free text into an L2-normalized sparse TF-IDF vector.
///
/// # Serialization
/// Supported. Deserialization validates the model.
pub use vectorizer::TfidfModel;

/// Plain data form of `TfidfModel`, as stored in a corpus artifact
pub use vectorizer::serde::TfidfModelData;

/// Token Frequency structure
/// Counts of each token within one document.
pub use vectorizer::token::TokenFrequency;

/// Analyzer settings
pub use vectorizer::analyzer::{AnalyzerOptions, Norm};

/// TF-IDF Calculation Engine Trait
/// Defines tf, idf and vector construction.
/// `DefaultTFIDFEngine` uses smoothed idf.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Sparse vector
pub use utils::math::vector::ZeroSpVec;

/// Serialized corpus bundle and its loader
pub use artifact::{load_store, CorpusArtifact};

/// Runtime configuration
pub use config::{ArtifactFormat, RecommenderConfig};

/// Parse comma separated user input
pub use query::parse_ingredient_input;

/// Error types
pub use error::{
    ArtifactError, ConfigError, CorpusLoadError, RecommendError, RecordField,
    RecordMaterializationError,
};
