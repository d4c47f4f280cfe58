use crate::error::Result;
use crate::model::Item;
use crate::store::backend::CollectionBackend;
use crate::store::item_store::ItemStore;

pub fn run<B: CollectionBackend>(store: &ItemStore<B>) -> Result<Vec<Item>> {
    store.snapshot()
}
