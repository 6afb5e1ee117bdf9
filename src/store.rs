use tracing::{info, warn};

use crate::{
    error::{CorpusLoadError, RecordMaterializationError},
    recipe::{RawRecipe, RecipeRecord},
    utils::math::vector::ZeroSpVec,
    vectorizer::TfidfModel,
};

/// A corpus row that was quarantined at load time
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// position in the corpus (and row of the vector matrix)
    pub index: usize,
    pub name: String,
    pub reason: RecordMaterializationError,
}

/// Corpus Store
/// Immutable recipe table plus its precomputed TF-IDF rows.
///
/// Every row is validated once in `load`. Rows that fail keep their slot,
/// so `records[i]` and `vectors[i]` always describe the same recipe,
/// but they are never materialized into recommendations.
///
/// There is no mutation after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    records: Vec<Result<RecipeRecord, SkippedRecord>>,
    vectors: Vec<ZeroSpVec<f64>>,
    model: TfidfModel,
    skipped: Vec<SkippedRecord>,
}

impl CorpusStore {
    /// Build the store from a recipe table, a fitted model and the aligned vector matrix
    ///
    /// # Arguments
    /// * `records` - recipe rows as stored
    /// * `model` - fitted vectorization model
    /// * `vectors` - one row per record, same order
    pub fn load(
        records: Vec<RawRecipe>,
        model: TfidfModel,
        vectors: Vec<ZeroSpVec<f64>>,
    ) -> Result<Self, CorpusLoadError> {
        if records.is_empty() || vectors.is_empty() {
            return Err(CorpusLoadError::EmptyCorpus {
                records: records.len(),
                vectors: vectors.len(),
            });
        }
        if records.len() != vectors.len() {
            return Err(CorpusLoadError::CountMismatch {
                records: records.len(),
                vectors: vectors.len(),
            });
        }
        let dimension = model.dimension();
        if let Some((row, vec)) = vectors.iter().enumerate().find(|(_, v)| v.len() != dimension) {
            return Err(CorpusLoadError::DimensionMismatch {
                row,
                expected: dimension,
                actual: vec.len(),
            });
        }
        for (row, vec) in vectors.iter().enumerate() {
            if let Some((column, _)) = vec.raw_iter().find(|(_, w)| !w.is_finite()) {
                return Err(CorpusLoadError::NonFiniteWeight { row, column });
            }
            if !vec.norm().is_finite() {
                return Err(CorpusLoadError::NonFiniteNorm { row });
            }
        }

        let mut skipped = Vec::new();
        let records: Vec<Result<RecipeRecord, SkippedRecord>> = records
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.validate().map_err(|reason| {
                    warn!(index, name = %raw.name, %reason, "skipping unreadable recipe");
                    let skip = SkippedRecord {
                        index,
                        name: raw.name.clone(),
                        reason,
                    };
                    skipped.push(skip.clone());
                    skip
                })
            })
            .collect();

        info!(
            records = records.len(),
            skipped = skipped.len(),
            dimension,
            "corpus store loaded"
        );

        Ok(Self {
            records,
            vectors,
            model,
            skipped,
        })
    }

    /// Vectorize query tokens in the corpus vector space.
    /// Tokens are joined with a single space; order does not matter.
    pub fn vectorize_query<T>(&self, tokens: &[T]) -> ZeroSpVec<f64>
    where
        T: AsRef<str>,
    {
        let text = tokens
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        self.model.transform(&text)
    }

    /// Number of corpus rows, including quarantined ones
    #[inline]
    pub fn vector_count(&self) -> usize {
        self.vectors.len()
    }

    /// Number of rows that can be recommended
    #[inline]
    pub fn valid_count(&self) -> usize {
        self.records.len() - self.skipped.len()
    }

    /// Validated record at a corpus position, `None` if out of range or quarantined
    #[inline]
    pub fn record_at(&self, index: usize) -> Option<&RecipeRecord> {
        self.records.get(index).and_then(|r| r.as_ref().ok())
    }

    /// Validated record at a corpus position, or why it cannot be used
    pub fn materialize(&self, index: usize) -> Result<&RecipeRecord, RecordMaterializationError> {
        match self.records.get(index) {
            Some(Ok(record)) => Ok(record),
            Some(Err(skip)) => Err(skip.reason.clone()),
            None => Err(RecordMaterializationError::OutOfRange {
                index,
                len: self.records.len(),
            }),
        }
    }

    /// Load-time diagnostics for quarantined rows
    #[inline]
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    /// Quarantine entry for a row, if it was skipped
    #[inline]
    pub fn skipped_at(&self, index: usize) -> Option<&SkippedRecord> {
        self.records.get(index).and_then(|r| r.as_ref().err())
    }

    #[inline]
    pub fn vectors(&self) -> &[ZeroSpVec<f64>] {
        &self.vectors
    }

    #[inline]
    pub fn model(&self) -> &TfidfModel {
        &self.model
    }
}
