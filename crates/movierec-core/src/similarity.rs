//! Pairwise user similarity provider.
//!
//! Builds the [`SimilarityMatrix`] consumed by the recommendation engine from
//! the rows of a [`UserItemMatrix`]. Rows are processed in parallel; every
//! output row only reads the shared input, so no synchronisation is needed.

use rayon::prelude::*;

use crate::error::Result;
use crate::matrix::{SimilarityMatrix, UserItemMatrix};

/// Cosine similarity between two rating rows.
///
/// Zero vectors have similarity `0.0` with everything, themselves included.
///
/// # Panics
///
/// Panics if `a.len() != b.len()`.
#[inline]
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Row dimensions must match");

    let mut dot = 0.0_f32;
    let mut norm_a_sq = 0.0_f32;
    let mut norm_b_sq = 0.0_f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a_sq += x * x;
        norm_b_sq += y * y;
    }

    cosine_from_parts(dot, norm_a_sq.sqrt(), norm_b_sq.sqrt())
}

#[inline]
fn cosine_from_parts(dot: f32, norm_a: f32, norm_b: f32) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

#[inline]
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Computes the pairwise cosine similarity of every user row.
///
/// Entry `(i, j)` is the similarity between the users at row positions `i`
/// and `j` of `matrix`, so the result is positionally aligned to it. The
/// result is symmetric.
pub fn cosine_similarity_matrix(matrix: &UserItemMatrix) -> Result<SimilarityMatrix> {
    let n = matrix.user_count();
    let rows: Vec<&[f32]> = matrix.rows().collect();
    let norms: Vec<f32> = rows.par_iter().map(|row| dot(row, row).sqrt()).collect();

    let mut scores = vec![0.0_f32; n * n];
    if n > 0 {
        scores
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(i, out)| {
                for (j, cell) in out.iter_mut().enumerate() {
                    *cell = cosine_from_parts(dot(rows[i], rows[j]), norms[i], norms[j]);
                }
            });
    }

    tracing::debug!(users = n, "Computed cosine similarity matrix");
    SimilarityMatrix::new(n, scores)
}
