use super::view;
use crate::error::{InventoryError, Result};
use crate::model::ItemView;
use crate::store::backend::CollectionBackend;
use crate::store::item_store::ItemStore;

/// Look an item up by id, optionally exposing its photo path.
pub fn run<B: CollectionBackend>(
    store: &ItemStore<B>,
    id: Option<u64>,
    include_photo: bool,
) -> Result<ItemView> {
    let id = id.ok_or_else(|| InventoryError::validation("id is required"))?;
    let item = view::run(store, id)?;
    Ok(ItemView::from_item(&item, include_photo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::fixture;
    use crate::commands::register;
    use crate::model::NewItem;

    #[test]
    fn photo_path_only_when_requested() {
        let f = fixture();
        let staged = f.photos.save(b"img", Some("png")).unwrap();
        let fields = NewItem::new(Some("Drill".into()), None).unwrap();
        let item = register::run(&f.store, &f.photos, fields, Some(staged)).unwrap();

        let with = run(&f.store, Some(item.id), true).unwrap();
        assert_eq!(with.photo.as_deref(), Some("/inventory/1/photo"));

        let without = run(&f.store, Some(item.id), false).unwrap();
        assert_eq!(without.photo, None);
        assert_eq!(without.name, "Drill");
    }

    #[test]
    fn missing_id_is_validation_error() {
        let f = fixture();
        assert!(matches!(
            run(&f.store, None, false),
            Err(InventoryError::Validation(_))
        ));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let f = fixture();
        assert!(matches!(
            run(&f.store, Some(8), true),
            Err(InventoryError::ItemNotFound(8))
        ));
    }
}
