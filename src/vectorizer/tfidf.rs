use indexmap::IndexMap;

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        analyzer::{AnalyzerOptions, Norm},
        token::TokenFrequency,
    },
};

/// TF-IDF weighting engine.
/// Decides how raw token counts and document frequencies turn into weights.
/// The vocabulary and IDF values themselves are fitted elsewhere and handed in as data.
pub trait TFIDFEngine {
    /// Term frequency weight for a raw count
    fn tf(count: u32, options: &AnalyzerOptions) -> f64;

    /// IDF weight for a token seen in `doc_freq` of `doc_num` documents
    fn idf(doc_num: u64, doc_freq: u64) -> f64;

    /// Build a weighted sparse vector over the fitted vocabulary.
    /// Tokens missing from the vocabulary are dropped.
    ///
    /// # Arguments
    /// * `freq` - token counts of the document
    /// * `vocabulary` - token -> column
    /// * `idf` - fitted IDF per column
    /// * `options` - analyzer settings fitted with the model
    fn tf_idf_vec(
        freq: &TokenFrequency,
        vocabulary: &IndexMap<String, usize>,
        idf: &[f64],
        options: &AnalyzerOptions,
    ) -> ZeroSpVec<f64> {
        let mut entries: Vec<(usize, f64)> = freq
            .iter()
            .filter_map(|(token, count)| {
                vocabulary
                    .get(token)
                    .map(|&col| (col, Self::tf(count, options) * idf[col]))
            })
            .collect();
        entries.sort_by_key(|(col, _)| *col);
        let mut vec = ZeroSpVec::from_sorted_entries(idf.len(), entries);
        if options.norm == Norm::L2 {
            vec.normalize_l2();
        }
        vec
    }
}

/// Default engine.
/// Smoothed IDF `ln((1 + n) / (1 + df)) + 1`, raw or sublinear TF.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn tf(count: u32, options: &AnalyzerOptions) -> f64 {
        if count == 0 {
            return 0.0;
        }
        if options.sublinear_tf {
            1.0 + (count as f64).ln()
        } else {
            count as f64
        }
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}
