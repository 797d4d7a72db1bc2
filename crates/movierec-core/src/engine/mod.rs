//! User-based collaborative filtering engine.
//!
//! [`recommend`] is a pure function over its inputs: it never mutates or
//! retains the matrices, so any number of calls may share them without
//! locking.
//!
//! # Example
//!
//! ```rust
//! use movierec_core::engine::{recommend, RecommendParams};
//! use movierec_core::{SimilarityMatrix, UserItemMatrix};
//!
//! let ratings = UserItemMatrix::from_rows(
//!     vec![1, 2, 3],
//!     vec![1, 2, 3, 4],
//!     &[
//!         vec![5.0, 0.0, 3.0, 0.0],
//!         vec![4.0, 0.0, 0.0, 2.0],
//!         vec![0.0, 5.0, 4.0, 0.0],
//!     ],
//! )
//! .unwrap();
//! let similarity = SimilarityMatrix::from_rows(&[
//!     vec![0.5, 0.1, 0.9],
//!     vec![0.1, 1.0, 0.2],
//!     vec![0.9, 0.2, 1.0],
//! ])
//! .unwrap();
//!
//! let items = recommend(&ratings, &similarity, 1, &RecommendParams::new(1, 2)).unwrap();
//! assert_eq!(items, vec![2, 4]);
//! ```

mod params;
pub mod ranking;
pub mod selection;


pub use params::{RecommendParams, SelfSimilarity};

use crate::error::{Error, Result};
use crate::matrix::{ItemId, SimilarityMatrix, UserId, UserItemMatrix};

/// Recommends up to `params.top_n` items the target user has not rated.
///
/// 1. Takes the target's row of `similarity` (located through its row
///    position in `matrix`).
/// 2. Keeps the `params.k` most similar users (partial selection; ties at
///    the boundary are broken arbitrarily).
/// 3. Averages their ratings per item, unrated cells counting as zero.
/// 4. Ranks items by descending mean (stable), drops items the target
///    rated above zero, truncates to `top_n`.
///
/// # Errors
///
/// - `Error::DimensionMismatch` if `similarity` is not `users × users`.
/// - `Error::UnknownUser` if `user` is not a row of `matrix`.
/// - `Error::InvalidParameter` if `k` is zero or exceeds the candidate count.
pub fn recommend(
    matrix: &UserItemMatrix,
    similarity: &SimilarityMatrix,
    user: UserId,
    params: &RecommendParams,
) -> Result<Vec<ItemId>> {
    if similarity.dimension() != matrix.user_count() {
        return Err(Error::DimensionMismatch {
            expected: matrix.user_count(),
            actual: similarity.dimension(),
        });
    }

    let position = matrix.position_of(user).ok_or(Error::UnknownUser(user))?;

    let exclude = match params.self_similarity {
        SelfSimilarity::Include => None,
        SelfSimilarity::Exclude => Some(position),
    };
    let candidates = matrix.user_count() - usize::from(exclude.is_some());
    params.validate(candidates)?;

    let neighbours = selection::top_k_positions(similarity.row(position), params.k, exclude);
    let scores = ranking::mean_scores(matrix, &neighbours);
    let ranked = ranking::rank_descending(&scores);
    let items = ranking::unseen_top_n(matrix, &ranked, matrix.row(position), params.top_n);

    tracing::debug!(
        user,
        k = params.k,
        top_n = params.top_n,
        neighbours = neighbours.len(),
        returned = items.len(),
        "Computed recommendations"
    );

    Ok(items)
}
