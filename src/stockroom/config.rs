//! # Configuration
//!
//! Stockroom configuration is loaded with [`confique`], layering environment
//! variables over an optional TOML file over compiled defaults. The CLI then
//! applies its own flags on top.
//!
//! ## Resolution Order
//!
//! 1. **CLI flags**: `--host`, `--port` (see `cli`).
//! 2. **Environment variables**: `STOCKROOM_DATA_FILE`, `STOCKROOM_PORT`, ...
//! 3. **Config file**: `stockroom.toml` in the working directory, or the file
//!    passed with `--config`.
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `data/items.json` | JSON document holding every item |
//! | `photo_dir` | `data/photos` | Directory for uploaded photos |
//! | `host` | `127.0.0.1` | Address the HTTP server binds to |
//! | `port` | `8000` | Port the HTTP server binds to |
//! | `max_upload_bytes` | `10485760` | Request body limit for uploads |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "stockroom.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// JSON document holding the item collection.
    #[config(env = "STOCKROOM_DATA_FILE", default = "data/items.json")]
    pub data_file: PathBuf,

    /// Directory for uploaded photos. Must not be shared with anything else.
    #[config(env = "STOCKROOM_PHOTO_DIR", default = "data/photos")]
    pub photo_dir: PathBuf,

    #[config(env = "STOCKROOM_HOST", default = "127.0.0.1")]
    pub host: String,

    #[config(env = "STOCKROOM_PORT", default = 8000)]
    pub port: u16,

    /// Largest accepted request body, in bytes.
    #[config(env = "STOCKROOM_MAX_UPLOAD_BYTES", default = 10485760)]
    pub max_upload_bytes: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/items.json"),
            photo_dir: PathBuf::from("data/photos"),
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl InventoryConfig {
    /// Load from env and `file`. A missing file is not an error.
    pub fn load(file: &Path) -> Result<Self, confique::Error> {
        InventoryConfig::builder().env().file(file).load()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The photo directory must not contain the data file: `doctor` would
    /// treat it as an orphan photo.
    pub fn check(&self) -> Result<(), String> {
        let data_dir = normalize(self.data_file.parent().unwrap_or(Path::new("")));
        if data_dir == normalize(&self.photo_dir) {
            return Err(format!(
                "photo_dir ({}) must not be the directory holding data_file",
                self.photo_dir.display()
            ));
        }
        Ok(())
    }
}

/// Lexical form without `.` components, so `./data/` and `data` compare equal.
fn normalize(path: &Path) -> PathBuf {
    let normal: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normal.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normal
    }
}
