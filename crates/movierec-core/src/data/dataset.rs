//! Joined, pivoted dataset ready for recommendation.

use std::collections::HashMap;
use std::path::Path;

use super::catalog::ItemCatalog;
use super::pivot::pivot;
use super::records::{load_ratings, load_titles, RatingRecord};
use crate::error::{Error, Result};
use crate::matrix::{UserId, UserItemMatrix};

/// Display name → user id lookup.
///
/// When a name belongs to several ids, the first occurrence in the ratings
/// file wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameIndex {
    ids: HashMap<String, UserId>,
}

impl NameIndex {
    /// Builds the index from rating rows.
    #[must_use]
    pub fn from_records(records: &[RatingRecord]) -> Self {
        let mut ids = HashMap::new();
        for record in records {
            ids.entry(record.user_name.clone())
                .or_insert(record.user_id);
        }
        Self { ids }
    }

    /// Resolves a display name.
    ///
    /// # Errors
    ///
    /// Returns `Error::UserNotFound` if no user has that name.
    pub fn resolve(&self, name: &str) -> Result<UserId> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| Error::UserNotFound(name.to_string()))
    }

    /// Known names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ids.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of known names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no names are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Everything the engine and the façade need, built from the two CSV files.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Pivoted ratings.
    pub matrix: UserItemMatrix,
    /// Item titles.
    pub catalog: ItemCatalog,
    /// Display-name lookup.
    pub names: NameIndex,
}

impl Dataset {
    /// Joins ratings with the catalog and pivots them.
    ///
    /// Non-finite ratings are discarded, so a user whose only ratings are
    /// `NaN` is neither a matrix row nor a resolvable name. Ratings of items
    /// missing from the catalog are dropped (inner join) before pivoting.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyDataset` if no rating survives the join.
    pub fn build(ratings: Vec<RatingRecord>, catalog: ItemCatalog) -> Result<Self> {
        let loaded = ratings.len();
        let ratings: Vec<RatingRecord> = ratings
            .into_iter()
            .filter(|r| r.rating.is_finite())
            .collect();
        if ratings.len() < loaded {
            tracing::warn!(
                skipped = loaded - ratings.len(),
                "Skipped non-finite ratings"
            );
        }

        let total = ratings.len();
        let joined: Vec<RatingRecord> = ratings
            .into_iter()
            .filter(|r| catalog.contains(r.item_id))
            .collect();

        let dropped = total - joined.len();
        if dropped > 0 {
            tracing::warn!(
                dropped,
                kept = joined.len(),
                "Dropped ratings for items without a title"
            );
        }

        let matrix = pivot(&joined)?;
        let names = NameIndex::from_records(&joined);

        tracing::info!(
            users = matrix.user_count(),
            items = matrix.item_count(),
            names = names.len(),
            "Built dataset"
        );

        Ok(Self {
            matrix,
            catalog,
            names,
        })
    }

    /// Loads both files and builds the dataset.
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(ratings: P, titles: Q) -> Result<Self> {
        let ratings = load_ratings(ratings)?;
        let catalog = ItemCatalog::from_records(load_titles(titles)?);
        Self::build(ratings, catalog)
    }
}
