//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the
//! single entry point for all inventory operations, regardless of transport.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs**: id strings become `u64` (a non-numeric id is a
//!   validation error, never "not found"), optional form fields become
//!   validated [`NewItem`] values
//! - **Stages uploads** in the [`PhotoStore`] before the command runs
//! - **Dispatches** to the appropriate command function
//! - **Projects** results into [`ItemView`], so raw photo filenames never
//!   leave the process
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Transport concerns**: No status codes, headers, or multipart parsing
//!
//! ## Generic Over CollectionBackend
//!
//! `InventoryApi<B: CollectionBackend>` is generic over the storage backend:
//! - Production: `InventoryApi<JsonBackend>`
//! - Testing: `InventoryApi<MemBackend>`

use crate::commands::{self, Photo, PhotoUpload};
use crate::error::Result;
use crate::model::{parse_id, ItemChanges, ItemView, NewItem};
use crate::store::backend::CollectionBackend;
use crate::store::item_store::ItemStore;
use crate::store::photos::PhotoStore;
use crate::store::DoctorReport;

/// The main API facade for inventory operations.
///
/// All clients (HTTP, CLI) should interact through this API.
pub struct InventoryApi<B: CollectionBackend> {
    store: ItemStore<B>,
    photos: PhotoStore,
}

impl<B: CollectionBackend> InventoryApi<B> {
    pub fn new(backend: B, photos: PhotoStore) -> Self {
        Self {
            store: ItemStore::with_backend(backend),
            photos,
        }
    }

    pub fn photos(&self) -> &PhotoStore {
        &self.photos
    }

    pub fn register(
        &self,
        name: Option<String>,
        description: Option<String>,
        upload: Option<PhotoUpload>,
    ) -> Result<ItemView> {
        // Validate before staging so a rejected request never touches disk
        let fields = NewItem::new(name, description)?;
        let staged = upload
            .map(|upload| commands::stage(&self.photos, &upload))
            .transpose()?;
        let item = commands::register::run(&self.store, &self.photos, fields, staged)?;
        Ok(ItemView::from(&item))
    }

    pub fn get(&self, id: &str) -> Result<ItemView> {
        let item = commands::view::run(&self.store, parse_id(id)?)?;
        Ok(ItemView::from(&item))
    }

    pub fn list(&self) -> Result<Vec<ItemView>> {
        let items = commands::list::run(&self.store)?;
        Ok(items.iter().map(ItemView::from).collect())
    }

    pub fn update(&self, id: &str, changes: ItemChanges) -> Result<ItemView> {
        let item = commands::update::run(&self.store, parse_id(id)?, changes)?;
        Ok(ItemView::from(&item))
    }

    pub fn update_photo(&self, id: &str, upload: PhotoUpload) -> Result<ItemView> {
        let id = parse_id(id)?;
        let staged = commands::stage(&self.photos, &upload)?;
        let replacement = commands::photo::attach(&self.store, &self.photos, id, staged)?;
        Ok(ItemView::from(&replacement.item))
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        commands::delete::run(&self.store, &self.photos, parse_id(id)?)?;
        Ok(())
    }

    pub fn search(&self, id: Option<&str>, include_photo: bool) -> Result<ItemView> {
        let id = id.map(parse_id).transpose()?;
        commands::search::run(&self.store, id, include_photo)
    }

    pub fn photo(&self, id: &str) -> Result<Photo> {
        commands::photo::read(&self.store, &self.photos, parse_id(id)?)
    }

    pub fn doctor(&self) -> Result<DoctorReport> {
        commands::doctor::run(&self.store, &self.photos)
    }
}
