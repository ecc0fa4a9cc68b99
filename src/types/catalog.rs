use std::collections::HashMap;
use std::fmt;

use super::error::CatalogError;
use super::item::{Item, ItemId};

/// Immutable collection of items, indexed by id.
///
/// Items keep the order in which they were loaded. A catalog is read-only
/// after construction and is designed to live behind `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    by_id: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two records share an id.
    pub fn load(records: Vec<Item>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (idx, item) in records.iter().enumerate() {
            if by_id.insert(item.id, idx).is_some() {
                return Err(CatalogError::DuplicateId { id: item.id });
            }
        }
        tracing::info!(items = records.len(), "catalog loaded");
        Ok(Self {
            items: records,
            by_id,
        })
    }

    /// Parse a JSON array of item records and build a catalog from it.
    ///
    /// # Errors
    ///
    /// Returns [`GuessworkError`](crate::GuessworkError) on malformed JSON or
    /// duplicate ids.
    pub fn from_json_str(input: &str) -> Result<Self, crate::GuessworkError> {
        let records: Vec<Item> = serde_json::from_str(input)?;
        Ok(Self::load(records)?)
    }

    /// Read a JSON dataset file and build a catalog from it.
    ///
    /// # Errors
    ///
    /// Returns [`GuessworkError`](crate::GuessworkError) on I/O, JSON, or
    /// catalog failure.
    pub fn from_json_file(
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, crate::GuessworkError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json_str(&input)
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.by_id.get(&id).map(|&idx| &self.items[idx])
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// All item ids, in load order.
    #[must_use]
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Find an item by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        let wanted = normalize_name(name);
        if wanted.is_empty() {
            return None;
        }
        self.items
            .iter()
            .find(|item| normalize_name(&item.name) == wanted)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Lowercased, trimmed form of a name used for guess matching.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Catalog({} items)", self.items.len())
    }
}
