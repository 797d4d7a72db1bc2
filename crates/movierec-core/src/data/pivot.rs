//! Ratings table → dense user-item matrix.

use std::collections::BTreeSet;

use indexmap::IndexSet;

use super::records::RatingRecord;
use crate::error::{Error, Result};
use crate::matrix::{ItemId, UserId, UserItemMatrix, UNRATED};

/// Pivots rating rows into a [`UserItemMatrix`].
///
/// Rows are the unique user ids in ascending order, columns the unique item
/// ids in ascending order. Repeated `(user, item)` pairs are averaged and
/// missing pairs hold [`UNRATED`]. Non-finite ratings (`NaN`, `inf`) are
/// skipped as if absent.
///
/// # Errors
///
/// Returns `Error::EmptyDataset` if no finite rating remains.
pub fn pivot(records: &[RatingRecord]) -> Result<UserItemMatrix> {
    let rated: Vec<&RatingRecord> = records.iter().filter(|r| r.rating.is_finite()).collect();
    let skipped = records.len() - rated.len();
    if skipped > 0 {
        tracing::warn!(skipped, "Skipped non-finite ratings");
    }
    if rated.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let users: IndexSet<UserId> = rated
        .iter()
        .map(|r| r.user_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let items: IndexSet<ItemId> = rated
        .iter()
        .map(|r| r.item_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let width = items.len();
    let cells = users.len() * width;
    let mut sums = vec![0.0_f64; cells];
    let mut counts = vec![0u32; cells];

    for record in &rated {
        // Both lookups succeed: the sets were built from these records
        let (Some(row), Some(col)) = (
            users.get_index_of(&record.user_id),
            items.get_index_of(&record.item_id),
        ) else {
            continue;
        };
        let cell = row * width + col;
        sums[cell] += f64::from(record.rating);
        counts[cell] += 1;
    }

    let ratings: Vec<f32> = sums
        .iter()
        .zip(&counts)
        .map(|(&sum, &count)| {
            if count == 0 {
                UNRATED
            } else {
                // Reason: mean of f32 ratings fits back into f32
                #[allow(clippy::cast_possible_truncation)]
                let mean = (sum / f64::from(count)) as f32;
                mean
            }
        })
        .collect();

    tracing::debug!(
        users = users.len(),
        items = width,
        ratings = rated.len(),
        "Pivoted ratings into user-item matrix"
    );

    UserItemMatrix::new(users.into_iter().collect(), items.into_iter().collect(), ratings)
}
