//! Dense rating and similarity matrices.
//!
//! Both matrices store their cells row-major in a flat `Vec<f32>`. Row
//! positions of the [`SimilarityMatrix`] correspond 1:1, in the same order,
//! to the rows of the [`UserItemMatrix`] it was computed from. Alignment is
//! positional, not key-based: reordering one without the other silently
//! pairs users with the wrong similarity rows.

use indexmap::IndexSet;

use crate::error::{Error, Result};

/// Identifier of a user (row key).
pub type UserId = u64;

/// Identifier of an item (column key).
pub type ItemId = u64;

/// Cell value meaning "not rated".
///
/// An explicit rating of `0` is indistinguishable from a missing rating.
pub const UNRATED: f32 = 0.0;

/// Returns true if a cell counts as already rated.
///
/// Only values above [`UNRATED`] count; `NaN` does not.
#[inline]
#[must_use]
pub fn is_seen(rating: f32) -> bool {
    rating > UNRATED
}

/// Dense users × items rating table.
#[derive(Debug, Clone, PartialEq)]
pub struct UserItemMatrix {
    users: IndexSet<UserId>,
    items: IndexSet<ItemId>,
    /// Row-major cells, `users.len() * items.len()` entries.
    ratings: Vec<f32>,
}

impl UserItemMatrix {
    /// Creates a matrix from row ids, column ids and row-major cells.
    ///
    /// # Errors
    ///
    /// - `Error::DuplicateId` if a user or item id appears twice.
    /// - `Error::DimensionMismatch` if `ratings.len() != users.len() * items.len()`.
    pub fn new(users: Vec<UserId>, items: Vec<ItemId>, ratings: Vec<f32>) -> Result<Self> {
        let user_count = users.len();
        let item_count = items.len();
        let users: IndexSet<UserId> = users.into_iter().collect();
        if users.len() != user_count {
            return Err(Error::DuplicateId("user ids must be unique".to_string()));
        }
        let items: IndexSet<ItemId> = items.into_iter().collect();
        if items.len() != item_count {
            return Err(Error::DuplicateId("item ids must be unique".to_string()));
        }

        let expected = user_count.saturating_mul(item_count);
        if ratings.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: ratings.len(),
            });
        }

        Ok(Self {
            users,
            items,
            ratings,
        })
    }

    /// Creates a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Same as [`UserItemMatrix::new`]; a ragged row is a `DimensionMismatch`.
    pub fn from_rows(users: Vec<UserId>, items: Vec<ItemId>, rows: &[Vec<f32>]) -> Result<Self> {
        if rows.len() != users.len() {
            return Err(Error::DimensionMismatch {
                expected: users.len(),
                actual: rows.len(),
            });
        }
        let mut ratings = Vec::with_capacity(users.len() * items.len());
        for row in rows {
            if row.len() != items.len() {
                return Err(Error::DimensionMismatch {
                    expected: items.len(),
                    actual: row.len(),
                });
            }
            ratings.extend_from_slice(row);
        }
        Self::new(users, items, ratings)
    }

    /// Number of users (rows).
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of items (columns).
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Row position of a user, if present.
    #[must_use]
    pub fn position_of(&self, user: UserId) -> Option<usize> {
        self.users.get_index_of(&user)
    }

    /// Returns true if the user is a row of this matrix.
    #[must_use]
    pub fn contains_user(&self, user: UserId) -> bool {
        self.users.contains(&user)
    }

    /// User ids in row order.
    pub fn user_ids(&self) -> impl ExactSizeIterator<Item = UserId> + '_ {
        self.users.iter().copied()
    }

    /// Item ids in column order.
    pub fn item_ids(&self) -> impl ExactSizeIterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    /// Item id at a column position.
    #[must_use]
    pub fn item_at(&self, column: usize) -> Option<ItemId> {
        self.items.get_index(column).copied()
    }

    /// Ratings of the user at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.user_count()`.
    #[must_use]
    pub fn row(&self, position: usize) -> &[f32] {
        let width = self.items.len();
        &self.ratings[position * width..(position + 1) * width]
    }

    /// Iterates over all rows in row order.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> + '_ {
        (0..self.users.len()).map(move |i| self.row(i))
    }

    /// Rating a user gave an item, `UNRATED` when either id is absent.
    #[must_use]
    pub fn rating(&self, user: UserId, item: ItemId) -> f32 {
        match (self.position_of(user), self.items.get_index_of(&item)) {
            (Some(row), Some(col)) => self.row(row)[col],
            _ => UNRATED,
        }
    }

    /// Items the user has already rated (cells above the sentinel).
    #[must_use]
    pub fn seen_items(&self, user: UserId) -> Vec<ItemId> {
        let Some(row) = self.position_of(user) else {
            return Vec::new();
        };
        self.row(row)
            .iter()
            .zip(self.items.iter())
            .filter(|(&rating, _)| is_seen(rating))
            .map(|(_, &item)| item)
            .collect()
    }
}

/// Square user × user similarity matrix, positionally aligned to a
/// [`UserItemMatrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    dimension: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Creates a similarity matrix from row-major scores.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if `scores.len() != dimension²`.
    pub fn new(dimension: usize, scores: Vec<f32>) -> Result<Self> {
        let expected = dimension.saturating_mul(dimension);
        if scores.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: scores.len(),
            });
        }
        Ok(Self { dimension, scores })
    }

    /// Creates a similarity matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if the rows do not form a square.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        let dimension = rows.len();
        let mut scores = Vec::with_capacity(dimension * dimension);
        for row in rows {
            if row.len() != dimension {
                return Err(Error::DimensionMismatch {
                    expected: dimension,
                    actual: row.len(),
                });
            }
            scores.extend_from_slice(row);
        }
        Self::new(dimension, scores)
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Similarities of the user at `position` to every user, in row order.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.dimension()`.
    #[must_use]
    pub fn row(&self, position: usize) -> &[f32] {
        &self.scores[position * self.dimension..(position + 1) * self.dimension]
    }

    /// Similarity between row positions `i` and `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        if i < self.dimension && j < self.dimension {
            Some(self.scores[i * self.dimension + j])
        } else {
            None
        }
    }
}
