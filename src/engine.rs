use std::{cmp::Ordering, collections::HashSet, fmt::Debug, sync::Arc};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    error::RecommendError,
    recipe::Nutrition,
    store::{CorpusStore, SkippedRecord},
    utils::math::vector::ZeroSpVec,
};

/// One scored corpus row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEntry {
    /// corpus position
    pub index: usize,
    /// cosine similarity to the query
    pub score: f64,
}

/// Scored corpus rows
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score.
    /// The sort is stable, so equal scores keep corpus order.
    pub fn sort_by_score(&mut self) -> &mut Self {
        let before = self.list.len();
        self.list.retain(|e| !e.score.is_nan());
        if self.list.len() != before {
            warn!(dropped = before - self.list.len(), "dropping NaN scores");
        }
        self.list
            .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        self
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            // one hit per line
            writeln!(f, "Hits [")?;
            for e in &self.list {
                writeln!(f, "    #{}: {:.6}", e.index, e.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|e| (e.index, e.score)))
                .finish()
        }
    }
}

/// A ranked recipe returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// 1-based position in the result list
    pub rank: usize,
    /// corpus position
    pub index: usize,
    pub name: String,
    pub ingredients: Vec<String>,
    pub similarity: f64,
    pub nutrition: Nutrition,
    pub steps: Vec<String>,
}

impl Recommendation {
    /// Share of the query ingredients literally present in this recipe, in percent
    pub fn overlap_with<S: AsRef<str>>(&self, query: &[S]) -> f64 {
        ingredient_overlap(query, self.ingredients.as_slice())
    }
}

/// Result of a recommendation request with the "why empty" distinction kept
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendOutcome {
    /// no usable query tokens were given
    EmptyQuery,
    /// the query was fine but no corpus row could be returned
    NoMatches { skipped: Vec<SkippedRecord> },
    Found {
        recommendations: Vec<Recommendation>,
        /// rows passed over while filling the result
        skipped: Vec<SkippedRecord>,
    },
}

impl RecommendOutcome {
    pub fn into_recommendations(self) -> Vec<Recommendation> {
        match self {
            RecommendOutcome::Found { recommendations, .. } => recommendations,
            _ => Vec::new(),
        }
    }
}

/// Percentage of query ingredients found verbatim in the recipe ingredients.
/// `100 * |query ∩ recipe| / |query|`, both sides deduplicated first.
/// An empty query gives 0.
///
/// Matching is exact; trim tokens before calling.
pub fn ingredient_overlap<S, T>(query: &[S], recipe: &[T]) -> f64
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let query_set: HashSet<&str> = query.iter().map(|s| s.as_ref()).collect();
    if query_set.is_empty() {
        return 0.0;
    }
    let recipe_set: HashSet<&str> = recipe.iter().map(|s| s.as_ref()).collect();
    let overlap = query_set.intersection(&recipe_set).count();
    overlap as f64 / query_set.len() as f64 * 100.0
}

/// Similarity Engine
/// Ranks the corpus against a query ingredient list.
/// Holds a shared handle to the store; cloning is cheap.
#[derive(Debug, Clone)]
pub struct Recommender {
    store: Arc<CorpusStore>,
}

impl Recommender {
    pub fn new(store: Arc<CorpusStore>) -> Self {
        Self { store }
    }

    #[inline]
    pub fn store(&self) -> &CorpusStore {
        &self.store
    }

    /// Cosine similarity of the query against every corpus row, in corpus order.
    /// A zero-norm side scores 0.
    pub fn score(&self, query: &ZeroSpVec<f64>) -> Hits {
        let list = self
            .store
            .vectors()
            .par_iter()
            .enumerate()
            .map(|(index, row)| HitEntry {
                index,
                score: query.cosine_similarity(row).clamp(-1.0, 1.0),
            })
            .collect();
        Hits::new(list)
    }

    /// Top `top_n` recipes for the query, best first.
    /// An empty query returns an empty list.
    ///
    /// # Arguments
    /// * `tokens` - query ingredients
    /// * `top_n` - maximum number of results, at least 1
    pub fn recommend<T: AsRef<str>>(
        &self,
        tokens: &[T],
        top_n: usize,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        self.recommend_detailed(tokens, top_n)
            .map(RecommendOutcome::into_recommendations)
    }

    /// Same as `recommend` but tells an empty query apart from an empty result
    /// and reports rows that had to be skipped.
    pub fn recommend_detailed<T: AsRef<str>>(
        &self,
        tokens: &[T],
        top_n: usize,
    ) -> Result<RecommendOutcome, RecommendError> {
        if top_n == 0 {
            return Err(RecommendError::InvalidTopN(top_n));
        }
        let tokens: Vec<&str> = tokens
            .iter()
            .map(|t| t.as_ref().trim())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() {
            return Ok(RecommendOutcome::EmptyQuery);
        }

        let query = self.store.vectorize_query(tokens.as_slice());
        debug!(tokens = tokens.len(), known_terms = query.nnz(), top_n, "ranking query");

        let mut hits = self.score(&query);
        hits.sort_by_score();

        let mut recommendations = Vec::with_capacity(top_n.min(hits.list.len()));
        let mut skipped = Vec::new();
        for hit in &hits.list {
            if recommendations.len() == top_n {
                break;
            }
            match self.store.materialize(hit.index) {
                Ok(record) => recommendations.push(Recommendation {
                    rank: recommendations.len() + 1,
                    index: hit.index,
                    name: record.name.clone(),
                    ingredients: record.ingredients.clone(),
                    similarity: hit.score,
                    nutrition: record.nutrition,
                    steps: record.steps.clone(),
                }),
                Err(reason) => {
                    warn!(index = hit.index, %reason, "could not process recipe");
                    let skip = self.store.skipped_at(hit.index).cloned().unwrap_or(SkippedRecord {
                        index: hit.index,
                        name: String::new(),
                        reason,
                    });
                    skipped.push(skip);
                }
            }
        }

        if recommendations.is_empty() {
            Ok(RecommendOutcome::NoMatches { skipped })
        } else {
            Ok(RecommendOutcome::Found {
                recommendations,
                skipped,
            })
        }
    }

    /// See [`ingredient_overlap`]
    #[inline]
    pub fn ingredient_overlap<S, T>(&self, query: &[S], recipe: &[T]) -> f64
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        ingredient_overlap(query, recipe)
    }
}
