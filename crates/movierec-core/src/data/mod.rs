//! Data preparation: CSV loading, catalog join, pivot and name lookup.
//!
//! Produces the inputs of the recommendation engine. Nothing in here affects
//! ranking beyond which ratings make it into the matrix.

mod catalog;
mod dataset;
mod pivot;
mod records;

#[cfg(test)]
mod tests;

pub use catalog::ItemCatalog;
pub use dataset::{Dataset, NameIndex};
pub use pivot::pivot;
pub use records::{
    load_ratings, load_titles, read_ratings, read_titles, RatingRecord, TitleRecord,
};
