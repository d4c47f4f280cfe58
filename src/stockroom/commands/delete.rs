use super::Removal;
use crate::error::{InventoryError, Result};
use crate::store::backend::CollectionBackend;
use crate::store::item_store::ItemStore;
use crate::store::photos::PhotoStore;

pub fn run<B: CollectionBackend>(
    store: &ItemStore<B>,
    photos: &PhotoStore,
    id: u64,
) -> Result<Removal> {
    let item = store.modify(|items| {
        let pos = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(InventoryError::ItemNotFound(id))?;
        Ok(items.remove(pos))
    })?;

    tracing::info!(id, name = %item.name, "Deleted item");
    let photo = item
        .photo
        .as_deref()
        .map(|name| photos.delete(name).log(name));

    Ok(Removal { item, photo })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::fixture;
    use crate::commands::{register, view};
    use crate::model::NewItem;
    use crate::store::photos::Cleanup;

    #[test]
    fn removes_record_and_photo() {
        let f = fixture();
        let staged = f.photos.save(b"img", Some("jpg")).unwrap();
        let fields = NewItem::new(Some("Drill".into()), None).unwrap();
        let item = register::run(&f.store, &f.photos, fields, Some(staged.clone())).unwrap();

        let removal = run(&f.store, &f.photos, item.id).unwrap();

        assert_eq!(removal.item.id, item.id);
        assert!(matches!(removal.photo, Some(Cleanup::Removed)));
        assert!(!f.photos.contains(&staged));
        assert!(matches!(
            view::run(&f.store, item.id),
            Err(InventoryError::ItemNotFound(_))
        ));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let f = fixture();
        assert!(matches!(
            run(&f.store, &f.photos, 3),
            Err(InventoryError::ItemNotFound(3))
        ));
    }

    #[test]
    fn failed_save_keeps_record_and_photo() {
        let f = fixture();
        let staged = f.photos.save(b"img", Some("jpg")).unwrap();
        let fields = NewItem::new(Some("Drill".into()), None).unwrap();
        let item = register::run(&f.store, &f.photos, fields, Some(staged.clone())).unwrap();
        f.store.backend.set_simulate_write_error(true);

        assert!(run(&f.store, &f.photos, item.id).is_err());

        assert!(f.photos.contains(&staged));
        assert!(view::run(&f.store, item.id).is_ok());
    }

    #[test]
    fn missing_photo_file_still_deletes() {
        let f = fixture();
        let fields = NewItem::new(Some("Drill".into()), None).unwrap();
        let item = register::run(&f.store, &f.photos, fields, Some("gone.png".into())).unwrap();

        let removal = run(&f.store, &f.photos, item.id).unwrap();
        assert!(matches!(removal.photo, Some(Cleanup::AlreadyGone)));
    }
}
