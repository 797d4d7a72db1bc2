//! Fuzz target for the neighbourhood recommender.
//!
//! Builds a small user-item matrix from arbitrary ratings and checks that
//! `recommend` either rejects the parameters or returns unseen, distinct items.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_recommend
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use movierec_core::data::pivot;
use movierec_core::{
    cosine_similarity_matrix, recommend, RatingRecord, RecommendParams, SelfSimilarity,
};

#[derive(Arbitrary, Debug)]
struct Rating {
    user: u8,
    item: u8,
    /// Scaled to 0.0..=5.0
    stars: u8,
}

#[derive(Arbitrary, Debug)]
struct RecommendInput {
    ratings: Vec<Rating>,
    user: u8,
    k: u8,
    top_n: u8,
    exclude_self: bool,
}

fuzz_target!(|input: RecommendInput| {
    // Bound the matrix size
    let records: Vec<RatingRecord> = input
        .ratings
        .iter()
        .take(512)
        .map(|r| RatingRecord {
            user_id: u64::from(r.user % 32),
            user_name: format!("user-{}", r.user % 32),
            item_id: u64::from(r.item % 64),
            rating: f32::from(r.stars % 6),
            timestamp: None,
        })
        .collect();

    let Ok(matrix) = pivot(&records) else {
        return;
    };
    let Ok(similarity) = cosine_similarity_matrix(&matrix) else {
        return;
    };

    let policy = if input.exclude_self {
        SelfSimilarity::Exclude
    } else {
        SelfSimilarity::Include
    };
    let params = RecommendParams::new(usize::from(input.k), usize::from(input.top_n))
        .with_self_similarity(policy);
    let user = u64::from(input.user % 32);

    if let Ok(items) = recommend(&matrix, &similarity, user, &params) {
        assert!(items.len() <= params.top_n);
        let seen = matrix.seen_items(user);
        for (i, item) in items.iter().enumerate() {
            assert!(!seen.contains(item), "recommended an already rated item");
            assert!(!items[..i].contains(item), "duplicate recommendation");
        }
    }
});
