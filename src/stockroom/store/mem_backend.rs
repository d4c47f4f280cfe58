use super::backend::CollectionBackend;
use crate::error::{InventoryError, Result};
use crate::model::Item;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// In-memory collection backend for testing.
///
/// Behaves like the JSON backend from the store's point of view: every save
/// replaces the whole image, and a failed save leaves the old one in place.
#[derive(Default)]
pub struct MemBackend {
    items: Mutex<Vec<Item>>,
    simulate_write_error: AtomicBool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing image, e.g. one edited out-of-band.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
            simulate_write_error: AtomicBool::new(false),
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }
}

impl CollectionBackend for MemBackend {
    fn load_items(&self) -> Result<Vec<Item>> {
        let items = self
            .items
            .lock()
            .map_err(|_| InventoryError::Store("memory backend poisoned".to_string()))?;
        Ok(items.clone())
    }

    fn save_items(&self, new_items: &[Item]) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(InventoryError::Store("Simulated write error".to_string()));
        }
        let mut items = self
            .items
            .lock()
            .map_err(|_| InventoryError::Store("memory backend poisoned".to_string()))?;
        *items = new_items.to_vec();
        Ok(())
    }
}
