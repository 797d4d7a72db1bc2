//! # movierec Core
//!
//! User-based collaborative filtering for movie ratings.
//!
//! For a target user, movierec finds the most similar users through a
//! precomputed similarity matrix, averages their ratings per movie, and
//! returns the best-scoring movies the target has not rated yet.
//!
//! ## Features
//!
//! - **Pure engine**: [`engine::recommend`] never mutates or retains its inputs
//! - **Partial top-k**: neighbour selection without a full sort
//! - **Cosine provider**: parallel pairwise similarity over rating rows
//! - **CSV loading**: ratings + titles, inner-joined and pivoted
//! - **Snapshots**: immutable model versions swapped atomically
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use movierec_core::{MovieRecConfig, SnapshotStore};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MovieRecConfig::load()?;
//!     let store = SnapshotStore::open(&config.data)?;
//!
//!     let snapshot = store.current();
//!     let recs = snapshot
//!         .recommender()
//!         .recommend_for_name("Kevin Hill", &config.engine)?;
//!     for rec in recs {
//!         println!("{} {}", rec.item_id, rec.title);
//!     }
//!     # Ok(())
//! }
//! ```
//!
//! ## Known limitation
//!
//! Unrated cells hold `0`, so an explicit zero rating counts as "unrated"
//! and unrated cells pull neighbourhood means down. This matches the rating
//! files the crate is built for.

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::float_cmp,
        clippy::uninlined_format_args,
        clippy::cast_precision_loss
    )
)]

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod facade;
#[cfg(test)]
mod facade_tests;
pub mod matrix;
pub mod similarity;
#[cfg(test)]
mod similarity_tests;
pub mod snapshot;

pub use config::{ConfigError, DataConfig, LoggingConfig, MovieRecConfig};
pub use data::{Dataset, ItemCatalog, NameIndex, RatingRecord, TitleRecord};
pub use engine::{recommend, RecommendParams, SelfSimilarity};
pub use error::{Error, Result};
pub use facade::{Recommender, TitledRecommendation};
pub use matrix::{is_seen, ItemId, SimilarityMatrix, UserId, UserItemMatrix, UNRATED};
pub use similarity::{cosine_similarity, cosine_similarity_matrix};
pub use snapshot::{ModelSnapshot, SnapshotStore};
