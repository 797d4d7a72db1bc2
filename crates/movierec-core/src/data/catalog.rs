//! Item metadata lookup.

use indexmap::IndexMap;

use super::records::TitleRecord;
use crate::matrix::ItemId;

/// Maps item ids to display titles.
///
/// Used only after ranking, to enrich results. Has no bearing on scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCatalog {
    titles: IndexMap<ItemId, String>,
}

impl ItemCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from title rows. The first title of a repeated id wins.
    #[must_use]
    pub fn from_records(records: Vec<TitleRecord>) -> Self {
        let mut catalog = Self::new();
        let mut duplicates = 0usize;
        for record in records {
            if !catalog.insert(record.item_id, record.title) {
                duplicates += 1;
            }
        }
        if duplicates > 0 {
            tracing::debug!(duplicates, "Ignored repeated item ids in title catalog");
        }
        catalog
    }

    /// Inserts a title. Returns false, leaving the catalog unchanged, if the
    /// id is already present.
    pub fn insert(&mut self, item: ItemId, title: impl Into<String>) -> bool {
        if self.titles.contains_key(&item) {
            return false;
        }
        self.titles.insert(item, title.into());
        true
    }

    /// Title of an item.
    #[must_use]
    pub fn title(&self, item: ItemId) -> Option<&str> {
        self.titles.get(&item).map(String::as_str)
    }

    /// Returns true if the item has a title.
    #[must_use]
    pub fn contains(&self, item: ItemId) -> bool {
        self.titles.contains_key(&item)
    }

    /// Number of catalogued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
