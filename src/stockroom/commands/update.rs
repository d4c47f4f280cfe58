use crate::error::{InventoryError, Result};
use crate::model::{Item, ItemChanges};
use crate::store::backend::CollectionBackend;
use crate::store::item_store::ItemStore;

pub fn run<B: CollectionBackend>(
    store: &ItemStore<B>,
    id: u64,
    changes: ItemChanges,
) -> Result<Item> {
    changes.validate()?;

    let item = store.modify(|items| {
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(InventoryError::ItemNotFound(id))?;
        changes.apply(item);
        Ok(item.clone())
    })?;

    tracing::info!(id, "Updated item");
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::fixture;
    use crate::commands::{register, view};
    use crate::model::NewItem;

    #[test]
    fn updates_only_the_name() {
        let f = fixture();
        let staged = f.photos.save(b"img", Some("png")).unwrap();
        let fields = NewItem::new(Some("Drill".into()), Some("cordless".into())).unwrap();
        let item = register::run(&f.store, &f.photos, fields, Some(staged.clone())).unwrap();

        let changes = ItemChanges {
            name: Some("Hammer drill".into()),
            description: None,
        };
        run(&f.store, item.id, changes).unwrap();

        let fetched = view::run(&f.store, item.id).unwrap();
        assert_eq!(fetched.name, "Hammer drill");
        assert_eq!(fetched.description, "cordless");
        assert_eq!(fetched.photo.as_deref(), Some(staged.as_str()));
    }

    #[test]
    fn updates_only_the_description() {
        let f = fixture();
        let fields = NewItem::new(Some("Saw".into()), None).unwrap();
        let item = register::run(&f.store, &f.photos, fields, None).unwrap();

        let changes = ItemChanges {
            name: None,
            description: Some("rusty".into()),
        };
        let updated = run(&f.store, item.id, changes).unwrap();

        assert_eq!(updated.name, "Saw");
        assert_eq!(updated.description, "rusty");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let f = fixture();
        let result = run(&f.store, 5, ItemChanges::default());
        assert!(matches!(result, Err(InventoryError::ItemNotFound(5))));
    }

    #[test]
    fn blank_name_is_rejected() {
        let f = fixture();
        let fields = NewItem::new(Some("Saw".into()), None).unwrap();
        let item = register::run(&f.store, &f.photos, fields, None).unwrap();

        let changes = ItemChanges {
            name: Some("".into()),
            description: None,
        };
        let result = run(&f.store, item.id, changes);

        assert!(matches!(result, Err(InventoryError::Validation(_))));
        assert_eq!(view::run(&f.store, item.id).unwrap().name, "Saw");
    }
}
