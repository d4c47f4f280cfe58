use super::discard_staged;
use crate::error::Result;
use crate::model::{Item, NewItem};
use crate::store::backend::CollectionBackend;
use crate::store::item_store::ItemStore;
use crate::store::photos::PhotoStore;

pub fn run<B: CollectionBackend>(
    store: &ItemStore<B>,
    photos: &PhotoStore,
    fields: NewItem,
    staged_photo: Option<String>,
) -> Result<Item> {
    let photo = staged_photo.clone();
    let result = store.insert(move |id| Item::new(id, fields, photo));

    match result {
        Ok(item) => {
            tracing::info!(id = item.id, name = %item.name, "Registered item");
            Ok(item)
        }
        Err(e) => {
            discard_staged(photos, staged_photo.as_deref());
            Err(e)
        }
    }
}
