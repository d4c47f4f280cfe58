use super::backend::CollectionBackend;
use crate::error::{InventoryError, Result};
use crate::model::Item;
use std::sync::RwLock;

/// Guarded repository over a [`CollectionBackend`].
///
/// Writers hold the write lock across the whole load-modify-save cycle, so
/// two mutations can never interleave and lose an update. Readers share the
/// read lock and always see a fully saved image.
///
/// The lock also guards the highest id this store has seen or issued. It is
/// raised from every collection a writer loads, so an id freed by `delete`
/// is never handed out again while the store lives.
pub struct ItemStore<B: CollectionBackend> {
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    lock: RwLock<u64>,
}

impl<B: CollectionBackend> ItemStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            lock: RwLock::new(0),
        }
    }

    /// All items, ascending by id.
    pub fn snapshot(&self) -> Result<Vec<Item>> {
        let _guard = self.lock.read().map_err(|_| poisoned())?;
        let mut items = self.backend.load_items()?;
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    pub fn find(&self, id: u64) -> Result<Item> {
        let _guard = self.lock.read().map_err(|_| poisoned())?;
        self.backend
            .load_items()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(InventoryError::ItemNotFound(id))
    }

    /// Run `change` against the current collection and persist the result.
    ///
    /// Nothing is saved when `change` returns an error. The value produced
    /// by `change` is only returned once the save succeeded.
    pub fn modify<T, F>(&self, change: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Item>) -> Result<T>,
    {
        let mut high_water = self.lock.write().map_err(|_| poisoned())?;
        let mut items = self.load_for_write(&mut high_water)?;
        let outcome = change(&mut items)?;
        items.sort_by_key(|item| item.id);
        self.backend.save_items(&items)?;
        Ok(outcome)
    }

    /// Allocate a fresh id, add the item `build` makes for it and persist.
    ///
    /// The id is only consumed once the save succeeded.
    pub fn insert<F>(&self, build: F) -> Result<Item>
    where
        F: FnOnce(u64) -> Item,
    {
        let mut high_water = self.lock.write().map_err(|_| poisoned())?;
        let mut items = self.load_for_write(&mut high_water)?;
        let id = next_id(&items, *high_water)?;
        let item = build(id);
        items.push(item.clone());
        items.sort_by_key(|item| item.id);
        self.backend.save_items(&items)?;
        *high_water = id;
        Ok(item)
    }

    fn load_for_write(&self, high_water: &mut u64) -> Result<Vec<Item>> {
        let items = self.backend.load_items()?;
        if let Some(max) = items.iter().map(|item| item.id).max() {
            *high_water = (*high_water).max(max);
        }
        Ok(items)
    }
}

/// Next id above both the live items and `issued`, the highest id already
/// handed out (1 for a fresh, empty store).
pub fn next_id(items: &[Item], issued: u64) -> Result<u64> {
    items
        .iter()
        .map(|item| item.id)
        .fold(issued, u64::max)
        .checked_add(1)
        .ok_or_else(|| InventoryError::Store("item id space exhausted".to_string()))
}

fn poisoned() -> InventoryError {
    InventoryError::Store("item store lock poisoned".to_string())
}
