//! Top-k selection of the most similar users.

use std::cmp::Ordering;

use super::ranking::descending_nan_last;

/// Descending order on similarity; `NaN` never wins a slot over a number.
#[inline]
fn by_similarity_desc(similarities: &[f32], a: usize, b: usize) -> Ordering {
    descending_nan_last(similarities[a], similarities[b])
}

/// Returns the positions of the `k` largest similarities.
///
/// Uses a partial selection, so the returned positions are in no particular
/// order. When several users tie at the k-th boundary, which of them is kept
/// is unspecified. `exclude` removes one position (the target user) from the
/// candidate set before selection.
///
/// If `k` is at least the number of candidates, every candidate is returned.
#[must_use]
pub fn top_k_positions(similarities: &[f32], k: usize, exclude: Option<usize>) -> Vec<usize> {
    if k == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<usize> = (0..similarities.len())
        .filter(|&position| Some(position) != exclude)
        .collect();

    if k < candidates.len() {
        candidates.select_nth_unstable_by(k - 1, |&a, &b| by_similarity_desc(similarities, a, b));
        candidates.truncate(k);
    }

    candidates
}
