//! # Storage Layer
//!
//! Two stores live here, and they never know about each other:
//!
//! 1. **Items**: the authoritative collection of [`Item`](crate::model::Item)
//!    records, behind [`item_store::ItemStore`].
//! 2. **Photos**: uploaded bytes as flat files, behind [`photos::PhotoStore`].
//!
//! Keeping the two consistent (no dangling references, no orphan files) is
//! the job of the command layer, which always commits the item collection
//! first and only then cleans up photo files.
//!
//! ## Item Store
//!
//! [`item_store::ItemStore`] wraps a [`backend::CollectionBackend`] in an
//! `RwLock`. Every mutation is a full cycle:
//!
//! 1. take the write lock
//! 2. load the entire collection
//! 3. apply the change in memory
//! 4. save the entire collection
//!
//! If step 3 fails nothing is written; if step 4 fails the previous image
//! remains on disk.
//!
//! ## Backends
//!
//! - [`json_backend::JsonBackend`]: production backend. One pretty-printed JSON
//!   array, replaced atomically (write to tmp, then rename).
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O,
//!   with a switch to simulate failing writes.
//!
//! ## Storage Layout
//!
//! ```text
//! data/
//! ├── items.json                      # Item collection
//! └── photos/
//!     └── 20261019T101500123456-1a2b3c4d.jpg
//! ```

pub mod backend;
pub mod item_store;
pub mod json_backend;
pub mod mem_backend;
pub mod photos;

/// Report from the `doctor` operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    /// Photo references cleared because their file was missing.
    pub cleared_dangling_refs: usize,
    /// Files removed because no item referenced them.
    pub removed_orphans: usize,
    /// Orphan files that could not be removed.
    pub failed_removals: usize,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.cleared_dangling_refs == 0 && self.removed_orphans == 0 && self.failed_removals == 0
    }
}
