//! Exhibit catalog
//!
//! The ordered, fixed list of items the exhibit cycles through. Built once
//! at startup and never mutated afterwards.

use heapless::{String, Vec};

use crate::audio::SignatureId;
use crate::config::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum item name length
pub const MAX_LABEL_LEN: usize = 24;

/// Maximum image path length
pub const MAX_PATH_LEN: usize = 48;

/// Maximum items per catalog
pub const MAX_ITEMS: usize = 16;

/// Catalog table row, as written in firmware source or configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry<'a> {
    /// Display name
    pub name: &'a str,
    /// Image asset locator (e.g. a path on the board filesystem)
    pub image: &'a str,
    /// Call played when the item is shown
    pub signature: SignatureId,
}

/// A single exhibit item
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogItem {
    name: String<MAX_LABEL_LEN>,
    image: String<MAX_PATH_LEN>,
    signature: SignatureId,
}

impl CatalogItem {
    /// Build an item from a table row
    ///
    /// `index` is the row's position, reported back in errors.
    pub fn from_entry(index: usize, entry: &CatalogEntry<'_>) -> Result<Self, ConfigError> {
        let mut name = String::new();
        name
            .push_str(entry.name)
            .map_err(|_| ConfigError::LabelTooLong { index })?;

        let mut image = String::new();
        image
            .push_str(entry.image)
            .map_err(|_| ConfigError::PathTooLong { index })?;

        Ok(Self {
            name,
            image,
            signature: entry.signature,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn signature(&self) -> SignatureId {
        self.signature
    }
}

/// Ordered, non-empty list of exhibit items
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Catalog {
    items: Vec<CatalogItem, MAX_ITEMS>,
}

impl Catalog {
    /// Build a catalog from a table of entries
    ///
    /// An empty table is a fatal configuration error: the exhibit has
    /// nothing it could display.
    pub fn from_entries(entries: &[CatalogEntry<'_>]) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if entries.len() > MAX_ITEMS {
            return Err(ConfigError::TooManyItems);
        }

        let mut items = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            let item = CatalogItem::from_entry(index, entry)?;
            items.push(item).map_err(|_| ConfigError::TooManyItems)?;
        }

        debug!("catalog loaded: {} items", items.len());
        Ok(Self { items })
    }

    /// Get the item at a valid index
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn item_at(&self, index: usize) -> &CatalogItem {
        &self.items[index]
    }

    /// Get the item at `index`, if it exists
    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// Number of items (always at least one)
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index after `index`, wrapping from the last item to the first
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }
}
