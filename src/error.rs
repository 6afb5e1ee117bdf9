use std::fmt;

use thiserror::Error;

/// Fatal failure while building the corpus store.
/// The process should not serve requests after one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorpusLoadError {
    #[error("Corpus is empty: {records} records, {vectors} vectors")]
    EmptyCorpus { records: usize, vectors: usize },

    #[error("Record/vector count mismatch: {records} records, {vectors} vectors")]
    CountMismatch { records: usize, vectors: usize },

    #[error("Vector row {row} has dimension {actual}, model expects {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Vector row {row} has a non-finite weight at column {column}")]
    NonFiniteWeight { row: usize, column: usize },

    #[error("Vector row {row} has a non-finite norm")]
    NonFiniteNorm { row: usize },

    #[error("Invalid vectorization model: {0}")]
    InvalidModel(String),
}

/// Stored field of a recipe row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Ingredients,
    IngredientsRaw,
    Steps,
    Nutrition,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordField::Ingredients => "ingredients",
            RecordField::IngredientsRaw => "ingredients_raw",
            RecordField::Steps => "steps",
            RecordField::Nutrition => "nutrition",
        };
        f.write_str(name)
    }
}

/// A single recipe row that cannot be turned into a recommendation.
/// Never fatal: the row is skipped and reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordMaterializationError {
    #[error("Malformed {field} field: {reason}")]
    MalformedLiteral { field: RecordField, reason: String },

    #[error("Recipe has no ingredients")]
    EmptyIngredients,

    #[error("Nutrition must have {expected} values, got {actual}")]
    NutritionArity { expected: usize, actual: usize },

    #[error("Nutrition value at position {position} is not finite")]
    NonFiniteNutrition { position: usize },

    #[error("Record index {index} out of range for corpus of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Caller-side misuse of the recommendation entry point
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("top_n must be at least 1, got {0}")]
    InvalidTopN(usize),
}

/// Failure while reading a corpus artifact from local disk
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CBOR error: {0}")]
    Cbor(#[from] serde_cbor::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Load(#[from] CorpusLoadError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
