use crate::error::Result;
use crate::store::backend::CollectionBackend;
use crate::store::item_store::ItemStore;
use crate::store::photos::{Cleanup, PhotoStore};
use crate::store::DoctorReport;
use std::collections::HashSet;
use std::time::Duration;

/// Files younger than this are never treated as orphans: they may be staged
/// uploads whose record is about to be saved.
pub const ORPHAN_GRACE: Duration = Duration::from_secs(60);

pub fn run<B: CollectionBackend>(store: &ItemStore<B>, photos: &PhotoStore) -> Result<DoctorReport> {
    run_with_grace(store, photos, ORPHAN_GRACE)
}

pub fn run_with_grace<B: CollectionBackend>(
    store: &ItemStore<B>,
    photos: &PhotoStore,
    grace: Duration,
) -> Result<DoctorReport> {
    let mut report = DoctorReport::default();

    // 1. Dangling references: the record names a file that is gone
    let (cleared, referenced) = store.modify(|items| {
        let mut cleared = 0;
        for item in items.iter_mut() {
            let missing = item
                .photo
                .as_deref()
                .is_some_and(|name| !photos.contains(name));
            if missing {
                tracing::warn!(id = item.id, photo = ?item.photo, "Clearing dangling photo reference");
                item.photo = None;
                cleared += 1;
            }
        }
        let referenced: HashSet<String> =
            items.iter().filter_map(|item| item.photo.clone()).collect();
        Ok((cleared, referenced))
    })?;
    report.cleared_dangling_refs = cleared;

    // 2. Orphans: files no record points at
    for name in photos.list_files()? {
        if name.starts_with('.') || referenced.contains(&name) {
            continue;
        }
        if photos.age(&name).is_some_and(|age| age < grace) {
            continue;
        }
        match photos.delete(&name).log(&name) {
            Cleanup::Failed(_) => report.failed_removals += 1,
            Cleanup::Removed | Cleanup::AlreadyGone => report.removed_orphans += 1,
        }
    }

    if !report.is_clean() {
        tracing::info!(
            cleared = report.cleared_dangling_refs,
            removed = report.removed_orphans,
            failed = report.failed_removals,
            "Doctor repaired inconsistencies"
        );
    }
    Ok(report)
}
