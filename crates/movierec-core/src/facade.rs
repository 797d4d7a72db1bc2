//! Request façade: display name → recommendations with titles.

use serde::{Deserialize, Serialize};

use crate::data::Dataset;
use crate::engine::{recommend, RecommendParams};
use crate::error::Result;
use crate::matrix::{ItemId, SimilarityMatrix, UserId};

/// A recommended item joined with its title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitledRecommendation {
    /// Recommended item id.
    pub item_id: ItemId,
    /// Display title from the catalog.
    pub title: String,
}

/// Borrowing view over a dataset and its aligned similarity matrix.
#[derive(Debug, Clone, Copy)]
pub struct Recommender<'a> {
    dataset: &'a Dataset,
    similarity: &'a SimilarityMatrix,
}

impl<'a> Recommender<'a> {
    /// Creates a façade. `similarity` must be aligned to `dataset.matrix`.
    #[must_use]
    pub fn new(dataset: &'a Dataset, similarity: &'a SimilarityMatrix) -> Self {
        Self {
            dataset,
            similarity,
        }
    }

    /// Recommends items for a user identified by display name.
    ///
    /// # Errors
    ///
    /// - `Error::UserNotFound` if the name is unknown.
    /// - Any engine error from [`recommend`].
    pub fn recommend_for_name(
        &self,
        name: &str,
        params: &RecommendParams,
    ) -> Result<Vec<TitledRecommendation>> {
        let user = self.dataset.names.resolve(name)?;
        tracing::debug!(name, user, "Resolved user name");
        self.recommend_for_user(user, params)
    }

    /// Recommends items for a user id.
    pub fn recommend_for_user(
        &self,
        user: UserId,
        params: &RecommendParams,
    ) -> Result<Vec<TitledRecommendation>> {
        let items = recommend(&self.dataset.matrix, self.similarity, user, params)?;
        Ok(self.attach_titles(&items))
    }

    /// Known display names, sorted.
    #[must_use]
    pub fn user_names(&self) -> Vec<&'a str> {
        self.dataset.names.names()
    }

    /// Inner join of item ids with the catalog; untitled items are skipped.
    fn attach_titles(&self, items: &[ItemId]) -> Vec<TitledRecommendation> {
        items
            .iter()
            .filter_map(|&item_id| {
                let title = self.dataset.catalog.title(item_id);
                if title.is_none() {
                    tracing::debug!(item_id, "Skipping recommended item without a title");
                }
                title.map(|title| TitledRecommendation {
                    item_id,
                    title: title.to_string(),
                })
            })
            .collect()
    }
}
