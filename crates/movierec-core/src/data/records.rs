//! CSV records and loaders for ratings and titles.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matrix::{ItemId, UserId};

/// One row of the ratings file.
///
/// The file has no header; columns are positional:
/// `User_ID, User_Names, Movie_ID, Rating, Timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// User id.
    pub user_id: UserId,
    /// Display name of the user.
    pub user_name: String,
    /// Rated item id.
    pub item_id: ItemId,
    /// Rating value.
    pub rating: f32,
    /// Unix timestamp of the rating, if recorded.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// One row of the titles file (header `item_id,title`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRecord {
    /// Item id.
    pub item_id: ItemId,
    /// Display title.
    pub title: String,
}

/// Reads headerless rating rows from any reader.
pub fn read_ratings<R: Read>(reader: R) -> Result<Vec<RatingRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Reads title rows (with header) from any reader.
pub fn read_titles<R: Read>(reader: R) -> Result<Vec<TitleRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Loads the ratings file.
pub fn load_ratings<P: AsRef<Path>>(path: P) -> Result<Vec<RatingRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let records = read_ratings(std::io::BufReader::new(file))?;
    tracing::info!(path = %path.display(), rows = records.len(), "Loaded ratings");
    Ok(records)
}

/// Loads the titles file.
pub fn load_titles<P: AsRef<Path>>(path: P) -> Result<Vec<TitleRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let records = read_titles(std::io::BufReader::new(file))?;
    tracing::info!(path = %path.display(), rows = records.len(), "Loaded titles");
    Ok(records)
}
