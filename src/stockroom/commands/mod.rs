//! # Command Layer
//!
//! One module per operation. Commands take the stores explicitly and return
//! plain Rust values; they know nothing about HTTP or terminals.
//!
//! Photo uploads are *staged* before a command runs: the bytes are already
//! in the [`PhotoStore`] and the command receives the generated filename.
//! A command that fails after staging discards the staged file, and a
//! command that succeeds removes any file it stopped referencing only after
//! the item collection has been saved.

use crate::error::Result;
use crate::model::Item;
use crate::store::photos::{Cleanup, PhotoStore};
use std::path::Path;

pub mod delete;
pub mod doctor;
pub mod list;
pub mod photo;
pub mod register;
pub mod search;
pub mod update;
pub mod view;

/// Raw upload as received by a transport, before staging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub bytes: Vec<u8>,
    pub extension: Option<String>,
}

impl PhotoUpload {
    /// Keep the extension of the client-side filename, if any.
    pub fn new(bytes: Vec<u8>, original_name: Option<&str>) -> Self {
        let extension = original_name
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .map(String::from);
        Self { bytes, extension }
    }
}

/// Result of `delete`: the removed record and what happened to its photo.
#[derive(Debug)]
pub struct Removal {
    pub item: Item,
    pub photo: Option<Cleanup>,
}

/// Result of `update_photo`: the repointed record and what happened to the
/// photo it used to reference.
#[derive(Debug)]
pub struct PhotoReplacement {
    pub item: Item,
    pub previous: Option<Cleanup>,
}

/// Photo bytes ready to be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub fn stage(photos: &PhotoStore, upload: &PhotoUpload) -> Result<String> {
    photos.save(&upload.bytes, upload.extension.as_deref())
}

/// Drop a staged file that no record ended up referencing.
pub(crate) fn discard_staged(photos: &PhotoStore, staged: Option<&str>) {
    if let Some(name) = staged {
        let _ = photos.delete(name).log(name);
    }
}
