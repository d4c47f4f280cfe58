use super::backend::CollectionBackend;
use crate::error::{InventoryError, Result};
use crate::model::Item;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Collection backend storing every item in one JSON array document.
pub struct JsonBackend {
    data_file: PathBuf,
}

impl JsonBackend {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    fn parent_dir(&self) -> &Path {
        match self.data_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(InventoryError::Io)?;
        }
        Ok(())
    }
}

impl CollectionBackend for JsonBackend {
    fn load_items(&self) -> Result<Vec<Item>> {
        let content = match fs::read_to_string(&self.data_file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(InventoryError::Store(format!(
                    "cannot read {}: {}",
                    self.data_file.display(),
                    e
                )))
            }
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let items: Vec<Item> =
            serde_json::from_str(&content).map_err(InventoryError::Serialization)?;
        Ok(items)
    }

    fn save_items(&self, items: &[Item]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(dir)?;

        let content = serde_json::to_string_pretty(items).map_err(InventoryError::Serialization)?;

        // Atomic write: tmp file in the same directory, then rename over
        let tmp_file = dir.join(format!(".items-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, content) {
            let _ = fs::remove_file(&tmp_file);
            return Err(InventoryError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(InventoryError::Io(e));
        }

        Ok(())
    }
}
