pub mod analyzer;
pub mod serde;
pub mod tfidf;
pub mod token;

use indexmap::IndexMap;
use ::serde::{Deserialize, Serialize};

use crate::{
    error::CorpusLoadError,
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        analyzer::{analyze, AnalyzerOptions},
        serde::TfidfModelData,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        token::TokenFrequency,
    },
};

/// Fitted TF-IDF model
/// The vocabulary and IDF weights are learned ahead of time and supplied as data;
/// this struct only applies them.
///
/// Invariants checked on construction and on deserialization:
/// - `idf` has one finite weight per column
/// - every vocabulary column is in range and used by exactly one token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TfidfModelData", into = "TfidfModelData")]
pub struct TfidfModel {
    /// token -> column
    vocabulary: IndexMap<String, usize>,
    /// IDF weight per column
    idf: Vec<f64>,
    /// analyzer settings fitted with the vocabulary
    options: AnalyzerOptions,
}

impl TfidfModel {
    /// Create a model from fitted parts
    ///
    /// # Arguments
    /// * `vocabulary` - token -> column
    /// * `idf` - IDF weight per column
    /// * `options` - analyzer settings
    pub fn new(
        vocabulary: IndexMap<String, usize>,
        idf: Vec<f64>,
        options: AnalyzerOptions,
    ) -> Result<Self, CorpusLoadError> {
        if vocabulary.is_empty() || idf.is_empty() {
            return Err(CorpusLoadError::InvalidModel("empty vocabulary".to_string()));
        }
        if vocabulary.len() != idf.len() {
            return Err(CorpusLoadError::InvalidModel(format!(
                "{} vocabulary terms but {} idf weights",
                vocabulary.len(),
                idf.len()
            )));
        }
        let mut seen = vec![false; idf.len()];
        for (token, &col) in vocabulary.iter() {
            match seen.get_mut(col) {
                None => {
                    return Err(CorpusLoadError::InvalidModel(format!(
                        "token {:?} maps to column {} outside dimension {}",
                        token,
                        col,
                        idf.len()
                    )))
                }
                Some(true) => {
                    return Err(CorpusLoadError::InvalidModel(format!(
                        "column {} is used by more than one token",
                        col
                    )))
                }
                Some(slot) => *slot = true,
            }
        }
        if let Some(pos) = idf.iter().position(|w| !w.is_finite()) {
            return Err(CorpusLoadError::InvalidModel(format!(
                "idf weight at column {} is not finite",
                pos
            )));
        }
        Ok(Self {
            vocabulary,
            idf,
            options,
        })
    }

    /// Vector dimension (vocabulary size)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn vocabulary(&self) -> &IndexMap<String, usize> {
        &self.vocabulary
    }

    #[inline]
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    #[inline]
    pub fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Count the analyzed tokens of a document
    pub fn token_frequency(&self, text: &str) -> TokenFrequency {
        let mut freq = TokenFrequency::new();
        freq.add_tokens(&analyze(text, &self.options));
        freq
    }

    /// Map a document into the fitted vector space with the default engine
    pub fn transform(&self, text: &str) -> ZeroSpVec<f64> {
        self.transform_with::<DefaultTFIDFEngine>(text)
    }

    /// Map a document into the fitted vector space
    /// Unknown tokens are silently dropped.
    pub fn transform_with<E>(&self, text: &str) -> ZeroSpVec<f64>
    where
        E: TFIDFEngine,
    {
        let freq = self.token_frequency(text);
        E::tf_idf_vec(&freq, &self.vocabulary, &self.idf, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(terms: &[(&str, usize)]) -> IndexMap<String, usize> {
        terms.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    #[test]
    fn rejects_size_mismatch_and_bad_columns() {
        let opts = AnalyzerOptions::default();
        assert!(TfidfModel::new(vocab(&[("egg", 0)]), vec![1.0, 1.0], opts.clone()).is_err());
        assert!(TfidfModel::new(vocab(&[("egg", 3)]), vec![1.0], opts.clone()).is_err());
        assert!(
            TfidfModel::new(vocab(&[("egg", 0), ("milk", 0)]), vec![1.0, 1.0], opts.clone())
                .is_err()
        );
        assert!(TfidfModel::new(vocab(&[("egg", 0)]), vec![f64::NAN], opts.clone()).is_err());
        assert!(TfidfModel::new(IndexMap::new(), vec![], opts).is_err());
    }

    #[test]
    fn transform_ignores_order_and_unknown_tokens() {
        let model = TfidfModel::new(
            vocab(&[("butter", 0), ("egg", 1), ("flour", 2)]),
            vec![1.5, 1.0, 1.2],
            AnalyzerOptions::default(),
        )
        .unwrap();

        let a = model.transform("egg flour saffron");
        let b = model.transform("Flour EGG");
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(a.get(0), None);
        assert!((a.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn accessors_expose_fitted_parts() {
        let options = AnalyzerOptions {
            sublinear_tf: true,
            ..AnalyzerOptions::default()
        };
        let model =
            TfidfModel::new(vocab(&[("egg", 1), ("flour", 0)]), vec![1.2, 1.0], options.clone())
                .unwrap();
        assert_eq!(model.dimension(), 2);
        assert_eq!(model.vocabulary().get("egg"), Some(&1));
        assert_eq!(model.idf(), &[1.2, 1.0]);
        assert_eq!(model.options(), &options);
    }

    #[test]
    fn transform_of_unknown_text_is_zero_vector() {
        let model =
            TfidfModel::new(vocab(&[("egg", 0)]), vec![1.0], AnalyzerOptions::default()).unwrap();
        let vec = model.transform("saffron truffle");
        assert_eq!(vec.nnz(), 0);
        assert_eq!(vec.len(), 1);
    }
}
