use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::ProductId;

use super::errors::WishlistError;
use super::model::{NewWishlistItem, WishlistItem};

/// In-memory wishlist collection.
///
/// Items keep insertion order and ids are unique. The collection is only
/// reachable through these operations; readers get shared references.
#[derive(Debug, Clone, Default)]
pub struct WishlistStore {
    items: Vec<WishlistItem>,
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a collection from persisted items. The first occurrence of an id wins.
    pub fn from_items(items: impl IntoIterator<Item = WishlistItem>) -> Self {
        let mut store = Self::new();
        for item in items {
            if !store.contains(&item.id) {
                store.items.push(item);
            }
        }
        store
    }

    /// Appends the item stamped with `added_at` unless its id is already present.
    /// Returns whether the item was added. A known id is a no-op whatever the
    /// rest of the payload holds.
    pub fn add(
        &mut self,
        props: NewWishlistItem,
        added_at: DateTime<Utc>,
    ) -> Result<bool, WishlistError> {
        if props.id.is_blank() {
            return Err(WishlistError::IdEmpty);
        }
        if self.contains(&props.id) {
            return Ok(false);
        }
        self.items.push(WishlistItem::new(props, added_at)?);
        Ok(true)
    }

    pub fn remove(&mut self, id: &ProductId) -> Option<WishlistItem> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Empties the collection and returns how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }

    pub fn get(&self, id: &ProductId) -> Option<&WishlistItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }
}
