use super::{discard_staged, Photo, PhotoReplacement};
use crate::error::{InventoryError, Result};
use crate::store::backend::CollectionBackend;
use crate::store::item_store::ItemStore;
use crate::store::photos::PhotoStore;

/// Point item `id` at an already staged photo.
///
/// The staged file is discarded if the item does not exist or the save
/// fails. The previously referenced file is removed only after the save.
pub fn attach<B: CollectionBackend>(
    store: &ItemStore<B>,
    photos: &PhotoStore,
    id: u64,
    staged: String,
) -> Result<PhotoReplacement> {
    let new_name = staged.clone();
    let result = store.modify(move |items| {
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(InventoryError::ItemNotFound(id))?;
        let previous = item.photo.replace(new_name);
        Ok((item.clone(), previous))
    });

    let (item, previous) = match result {
        Ok(committed) => committed,
        Err(e) => {
            discard_staged(photos, Some(&staged));
            return Err(e);
        }
    };

    tracing::info!(id, photo = %staged, "Replaced item photo");
    let previous = previous
        .filter(|old| *old != staged)
        .map(|old| photos.delete(&old).log(&old));

    Ok(PhotoReplacement { item, previous })
}

/// Load the photo bytes of item `id`.
pub fn read<B: CollectionBackend>(
    store: &ItemStore<B>,
    photos: &PhotoStore,
    id: u64,
) -> Result<Photo> {
    let item = store.find(id)?;
    let filename = item.photo.ok_or(InventoryError::NoPhoto(id))?;
    let bytes = photos.read(&filename)?;
    Ok(Photo { filename, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::fixture;
    use crate::commands::{register, view};
    use crate::model::NewItem;
    use crate::store::photos::Cleanup;

    fn drill(f: &crate::commands::fixtures::Fixture, photo: Option<String>) -> u64 {
        let fields = NewItem::new(Some("Drill".into()), None).unwrap();
        register::run(&f.store, &f.photos, fields, photo).unwrap().id
    }

    #[test]
    fn replaces_and_removes_previous_photo() {
        let f = fixture();
        let old = f.photos.save(b"old", Some("png")).unwrap();
        let id = drill(&f, Some(old.clone()));

        let new = f.photos.save(b"new", Some("png")).unwrap();
        let replacement = attach(&f.store, &f.photos, id, new.clone()).unwrap();

        assert!(matches!(replacement.previous, Some(Cleanup::Removed)));
        assert!(!f.photos.contains(&old));
        assert_eq!(
            view::run(&f.store, id).unwrap().photo.as_deref(),
            Some(new.as_str())
        );
        assert_eq!(read(&f.store, &f.photos, id).unwrap().bytes, b"new");
    }

    #[test]
    fn first_photo_has_nothing_to_clean() {
        let f = fixture();
        let id = drill(&f, None);
        let new = f.photos.save(b"new", None).unwrap();

        let replacement = attach(&f.store, &f.photos, id, new).unwrap();
        assert!(replacement.previous.is_none());
    }

    #[test]
    fn unknown_item_leaves_no_orphan() {
        let f = fixture();
        let staged = f.photos.save(b"new", Some("png")).unwrap();

        let result = attach(&f.store, &f.photos, 99, staged.clone());

        assert!(matches!(result, Err(InventoryError::ItemNotFound(99))));
        assert!(!f.photos.contains(&staged));
        assert!(f.photos.list_files().unwrap().is_empty());
    }

    #[test]
    fn failed_save_keeps_old_photo() {
        let f = fixture();
        let old = f.photos.save(b"old", Some("png")).unwrap();
        let id = drill(&f, Some(old.clone()));
        f.store.backend.set_simulate_write_error(true);

        let new = f.photos.save(b"new", Some("png")).unwrap();
        assert!(attach(&f.store, &f.photos, id, new.clone()).is_err());

        assert!(f.photos.contains(&old));
        assert!(!f.photos.contains(&new));
        assert_eq!(
            view::run(&f.store, id).unwrap().photo.as_deref(),
            Some(old.as_str())
        );
    }

    #[test]
    fn missing_old_file_does_not_fail_replacement() {
        let f = fixture();
        let old = f.photos.save(b"old", Some("png")).unwrap();
        let id = drill(&f, Some(old.clone()));
        let _ = f.photos.delete(&old);

        let new = f.photos.save(b"new", Some("png")).unwrap();
        let replacement = attach(&f.store, &f.photos, id, new).unwrap();

        assert!(matches!(replacement.previous, Some(Cleanup::AlreadyGone)));
    }

    #[test]
    fn read_distinguishes_no_photo_from_missing_file() {
        let f = fixture();
        let bare = drill(&f, None);
        assert!(matches!(
            read(&f.store, &f.photos, bare),
            Err(InventoryError::NoPhoto(_))
        ));

        let staged = f.photos.save(b"img", Some("png")).unwrap();
        let with_photo = drill(&f, Some(staged.clone()));
        let _ = f.photos.delete(&staged);
        assert!(matches!(
            read(&f.store, &f.photos, with_photo),
            Err(InventoryError::PhotoMissing(_))
        ));

        assert!(matches!(
            read(&f.store, &f.photos, 77),
            Err(InventoryError::ItemNotFound(77))
        ));
    }
}
