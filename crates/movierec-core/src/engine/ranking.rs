//! Preference aggregation and candidate ranking.

use std::cmp::Ordering;

use crate::matrix::{is_seen, ItemId, UserItemMatrix};

/// Descending order on scores with `NaN` ranked last.
#[inline]
pub(crate) fn descending_nan_last(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.total_cmp(&a),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Mean rating per item across the rows at `positions`.
///
/// Unrated cells count as `0.0`. Returns one score per column; all zeros
/// when `positions` is empty.
#[must_use]
pub fn mean_scores(matrix: &UserItemMatrix, positions: &[usize]) -> Vec<f32> {
    let mut sums = vec![0.0_f32; matrix.item_count()];
    if positions.is_empty() {
        return sums;
    }

    for &position in positions {
        for (sum, &rating) in sums.iter_mut().zip(matrix.row(position)) {
            *sum += rating;
        }
    }

    // Reason: k is bounded by the user count, far below f32's exact-integer range
    #[allow(clippy::cast_precision_loss)]
    let count = positions.len() as f32;
    for sum in &mut sums {
        *sum /= count;
    }
    sums
}

/// Column positions ordered by descending score.
///
/// The sort is stable: equal scores keep column order, so identical inputs
/// always rank identically. `NaN` scores go last.
#[must_use]
pub fn rank_descending(scores: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| descending_nan_last(scores[a], scores[b]));
    order
}

/// Walks `ranked` columns, skipping those rated in `seen_row`, and returns
/// at most `top_n` item ids.
#[must_use]
pub fn unseen_top_n(
    matrix: &UserItemMatrix,
    ranked: &[usize],
    seen_row: &[f32],
    top_n: usize,
) -> Vec<ItemId> {
    ranked
        .iter()
        .filter(|&&column| !is_seen(seen_row[column]))
        .filter_map(|&column| matrix.item_at(column))
        .take(top_n)
        .collect()
}
