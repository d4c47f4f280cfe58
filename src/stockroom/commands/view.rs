use crate::error::Result;
use crate::model::Item;
use crate::store::backend::CollectionBackend;
use crate::store::item_store::ItemStore;

pub fn run<B: CollectionBackend>(store: &ItemStore<B>, id: u64) -> Result<Item> {
    store.find(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InventoryError;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn missing_item_is_not_found() {
        let store = ItemStore::with_backend(MemBackend::new());
        assert!(matches!(
            run(&store, 42),
            Err(InventoryError::ItemNotFound(42))
        ));
    }
}
