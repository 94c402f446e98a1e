use gamerec_core::catalog::Catalog;
use gamerec_core::error::{Error, Result};
use gamerec_core::types::{Recommendation, DEFAULT_TOP_K};
use gamerec_features::{FeatureMatrix, QueryVector};

use crate::similarity::cosine_with_norms;

/// Scores every row, drops games under the rating threshold, sorts and caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranker {
    top_k: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K }
    }
}

struct Scored {
    position: usize,
    score: f32,
    rating: f32,
}

impl Ranker {
    pub fn new(top_k: usize) -> Self {
        Self { top_k }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Order is score descending, then rating descending, then catalog order.
    /// An empty result means nothing cleared `min_rating`; it is not an error.
    pub fn rank(
        &self,
        query: &QueryVector,
        matrix: &FeatureMatrix,
        catalog: &Catalog,
        min_rating: f32,
    ) -> Result<Vec<Recommendation>> {
        if query.len() != matrix.dim() {
            return Err(Error::DimensionMismatch { expected: matrix.dim(), actual: query.len() });
        }
        if matrix.len() != catalog.len() {
            return Err(Error::CatalogMismatch { rows: matrix.len(), items: catalog.len() });
        }

        let mut scored: Vec<Scored> = matrix
            .iter()
            .zip(catalog.iter())
            .enumerate()
            .map(|(position, ((row, norm), game))| Scored {
                position,
                score: cosine_with_norms(query.as_slice(), query.norm(), row, norm),
                rating: game.rating,
            })
            .filter(|s| s.rating >= min_rating)
            .collect();
        let survivors = scored.len();

        // stable: equal keys keep catalog order
        scored.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.rating.total_cmp(&a.rating))
        });
        scored.truncate(self.top_k);

        tracing::debug!(
            survivors,
            returned = scored.len(),
            min_rating,
            top_k = self.top_k,
            "ranked catalog"
        );

        Ok(scored
            .into_iter()
            .filter_map(|s| {
                catalog.get(s.position).map(|game| Recommendation {
                    position: s.position,
                    game: game.clone(),
                    score: s.score,
                })
            })
            .collect())
    }
}

/// Free-function form of [`Ranker::rank`].
pub fn rank(
    query: &QueryVector,
    matrix: &FeatureMatrix,
    catalog: &Catalog,
    min_rating: f32,
    top_k: usize,
) -> Result<Vec<Recommendation>> {
    Ranker::new(top_k).rank(query, matrix, catalog, min_rating)
}
