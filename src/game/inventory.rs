//=========================================================================
// Inventory
//=========================================================================
//
// Insertion-ordered item list, unique by item id.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use serde::{Deserialize, Serialize};

//=== InventoryItem =======================================================

/// An item the player can carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Image reference for the presentation layer.
    pub image: String,
    /// Ids of items this one can be combined with.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub combines_with: Vec<String>,
}

impl InventoryItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image: image.into(),
            combines_with: Vec::new(),
        }
    }

    pub fn with_combination(mut self, other_id: impl Into<String>) -> Self {
        self.combines_with.push(other_id.into());
        self
    }
}

//=== Inventory ===========================================================

/// Append-only (plus explicit removal) sequence of unique items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` unless an item with the same id is already held.
    ///
    /// Returns `true` if the item was added.
    pub fn add(&mut self, item: InventoryItem) -> bool {
        if self.contains(&item.id) {
            debug!("Item {:?} already in inventory, not added", item.id);
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes the item with `id`, returning it.
    pub fn remove(&mut self, id: &str) -> Option<InventoryItem> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Item following `current` in insertion order.
    ///
    /// `None` as input yields the first item; the last item yields `None`.
    pub fn next_after(&self, current: Option<&str>) -> Option<&InventoryItem> {
        match current {
            None => self.items.first(),
            Some(id) => {
                let pos = self.items.iter().position(|i| i.id == id)?;
                self.items.get(pos + 1)
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
