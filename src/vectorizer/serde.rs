use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    error::CorpusLoadError,
    vectorizer::{analyzer::AnalyzerOptions, TfidfModel},
};

/// Plain data form of `TfidfModel`
/// This is what the model artifact stores.
/// It is checked by `TfidfModel::new` when converted back,
/// so a deserialized model always satisfies the model invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfModelData {
    /// token -> column
    #[serde(with = "indexmap::map::serde_seq")]
    pub vocabulary: IndexMap<String, usize>,
    /// IDF weight per column
    pub idf: Vec<f64>,
    #[serde(default)]
    pub options: AnalyzerOptions,
}

impl TryFrom<TfidfModelData> for TfidfModel {
    type Error = CorpusLoadError;

    fn try_from(data: TfidfModelData) -> Result<Self, Self::Error> {
        TfidfModel::new(data.vocabulary, data.idf, data.options)
    }
}

impl From<TfidfModel> for TfidfModelData {
    fn from(model: TfidfModel) -> Self {
        TfidfModelData {
            vocabulary: model.vocabulary,
            idf: model.idf,
            options: model.options,
        }
    }
}
