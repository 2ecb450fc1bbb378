use indexmap::IndexMap;
use thiserror::Error;

use crate::models::{Item, UpdateItem};

/// Failures raised by [`Inventory`]. The display text is what clients see.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Item ID Already Exist")]
    AlreadyExists(i64),
    #[error("Item ID Does Not Exist")]
    DoesNotExist(i64),
    #[error("Data Not Found")]
    NameNotFound,
}

/// The process-wide item mapping.
///
/// Entries keep insertion order, so name lookups resolve ties to the
/// earliest-created item. Removal shifts later entries down instead of
/// swapping, keeping that order stable.
#[derive(Debug, Default)]
pub struct Inventory {
    items: IndexMap<i64, Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i64) -> Result<&Item, InventoryError> {
        self.items.get(&id).ok_or(InventoryError::DoesNotExist(id))
    }

    pub fn find_by_name(&self, name: Option<&str>) -> Result<&Item, InventoryError> {
        let name = name.ok_or(InventoryError::NameNotFound)?;
        self.items
            .values()
            .find(|item| item.name == name)
            .ok_or(InventoryError::NameNotFound)
    }

    /// Stores `item` under a new `id`. An existing entry is never overwritten.
    pub fn insert(&mut self, id: i64, item: Item) -> Result<&Item, InventoryError> {
        match self.items.entry(id) {
            indexmap::map::Entry::Occupied(_) => Err(InventoryError::AlreadyExists(id)),
            indexmap::map::Entry::Vacant(slot) => Ok(slot.insert(item)),
        }
    }

    pub fn update(&mut self, id: i64, patch: &UpdateItem) -> Result<&Item, InventoryError> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or(InventoryError::DoesNotExist(id))?;
        patch.apply_to(item);
        Ok(item)
    }

    pub fn remove(&mut self, id: i64) -> Result<Item, InventoryError> {
        self.items
            .shift_remove(&id)
            .ok_or(InventoryError::DoesNotExist(id))
    }
}
