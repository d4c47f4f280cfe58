use crate::api::InventoryApi;
use crate::http::SharedApi;
use crate::store::json_backend::JsonBackend;
use crate::store::photos::PhotoStore;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub data_file: PathBuf,
    pub photo_dir: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_file = temp_dir.path().join("items.json");
        let photo_dir = temp_dir.path().join("photos");
        Self {
            _temp_dir: temp_dir,
            data_file,
            photo_dir,
        }
    }

    pub fn photos(&self) -> PhotoStore {
        PhotoStore::new(&self.photo_dir)
    }

    /// An API over this environment's JSON file, ready for the HTTP router.
    pub fn shared_api(&self) -> SharedApi {
        let backend = Box::new(JsonBackend::new(&self.data_file));
        Arc::new(InventoryApi::new(backend, self.photos()))
    }
}
