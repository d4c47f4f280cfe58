use crate::error::Result;
use crate::model::Item;

/// Abstract interface for raw collection I/O.
/// This trait handles the "how" of persistence (JSON file vs memory),
/// while [`ItemStore`](super::item_store::ItemStore) handles locking and the
/// read-modify-write cycle.
pub trait CollectionBackend: Send + Sync {
    /// Load the whole collection. A backend with nothing persisted yet
    /// returns an empty vector.
    fn load_items(&self) -> Result<Vec<Item>>;

    /// Replace the whole collection.
    /// MUST be atomic: on error the previously saved image stays readable.
    fn save_items(&self, items: &[Item]) -> Result<()>;
}

impl<B: CollectionBackend + ?Sized> CollectionBackend for Box<B> {
    fn load_items(&self) -> Result<Vec<Item>> {
        (**self).load_items()
    }

    fn save_items(&self, items: &[Item]) -> Result<()> {
        (**self).save_items(items)
    }
}
