use crate::error::{InventoryError, Result};
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use uuid::Uuid;

const MAX_NAME_ATTEMPTS: usize = 8;
const MAX_EXT_LEN: usize = 10;

/// Outcome of a best-effort photo removal.
///
/// Kept apart from [`Result`]: a cleanup that fails must never turn an
/// already committed mutation into an error.
#[derive(Debug)]
#[must_use]
pub enum Cleanup {
    Removed,
    AlreadyGone,
    Failed(io::Error),
}

impl Cleanup {
    /// Emit a warning for failed cleanups and hand the outcome back.
    pub fn log(self, filename: &str) -> Self {
        match &self {
            Cleanup::Failed(e) => {
                tracing::warn!(photo = filename, error = %e, "Failed to remove photo file");
            }
            Cleanup::AlreadyGone => {
                tracing::debug!(photo = filename, "Photo file already gone");
            }
            Cleanup::Removed => {
                tracing::debug!(photo = filename, "Removed photo file");
            }
        }
        self
    }
}

/// Flat directory of uploaded photos, addressed only by generated filename.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    root: PathBuf,
}

impl PhotoStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ensure_directory(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(InventoryError::Io)
    }

    /// Write `bytes` under a fresh name and return that name.
    ///
    /// Files are created with `create_new`, so an existing photo is never
    /// overwritten even if two uploads land in the same microsecond.
    pub fn save(&self, bytes: &[u8], extension: Option<&str>) -> Result<String> {
        self.ensure_directory()?;
        let ext = extension.and_then(sanitize_extension);

        for _ in 0..MAX_NAME_ATTEMPTS {
            let filename = generate_filename(ext.as_deref());
            let path = self.root.join(&filename);
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(InventoryError::Io(e)),
            };
            if let Err(e) = file.write_all(bytes).and_then(|_| file.sync_all()) {
                drop(file);
                let _ = fs::remove_file(&path);
                return Err(InventoryError::Io(e));
            }
            tracing::debug!(photo = %filename, bytes = bytes.len(), "Stored photo");
            return Ok(filename);
        }

        Err(InventoryError::Io(io::Error::new(
            ErrorKind::AlreadyExists,
            "could not allocate a unique photo filename",
        )))
    }

    pub fn delete(&self, filename: &str) -> Cleanup {
        let Some(path) = self.resolve(filename) else {
            return Cleanup::AlreadyGone;
        };
        match fs::remove_file(path) {
            Ok(()) => Cleanup::Removed,
            Err(e) if e.kind() == ErrorKind::NotFound => Cleanup::AlreadyGone,
            Err(e) => Cleanup::Failed(e),
        }
    }

    pub fn read(&self, filename: &str) -> Result<Vec<u8>> {
        let path = self
            .resolve(filename)
            .ok_or_else(|| InventoryError::PhotoMissing(filename.to_string()))?;
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(InventoryError::PhotoMissing(filename.to_string()))
            }
            Err(e) => Err(InventoryError::Io(e)),
        }
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.resolve(filename).is_some_and(|path| path.is_file())
    }

    /// Time since the file was last modified, if it exists.
    pub fn age(&self, filename: &str) -> Option<Duration> {
        let path = self.resolve(filename)?;
        let modified = fs::metadata(path).ok()?.modified().ok()?;
        Some(SystemTime::now().duration_since(modified).unwrap_or_default())
    }

    /// Names of the regular files in the photo directory.
    pub fn list_files(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(InventoryError::Io(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(InventoryError::Io)?;
            if !entry.file_type().map_err(InventoryError::Io)?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn resolve(&self, filename: &str) -> Option<PathBuf> {
        if filename.is_empty()
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains("..")
        {
            return None;
        }
        Some(self.root.join(filename))
    }
}

fn generate_filename(ext: Option<&str>) -> String {
    let stamp = Utc::now().format("%Y%m%dT%H%M%S%6f");
    let suffix = Uuid::new_v4().simple().to_string();
    match ext {
        Some(ext) => format!("{}-{}.{}", stamp, &suffix[..8], ext),
        None => format!("{}-{}", stamp, &suffix[..8]),
    }
}

fn sanitize_extension(raw: &str) -> Option<String> {
    let ext = raw.trim_start_matches('.');
    if ext.is_empty() || ext.len() > MAX_EXT_LEN || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Content type for a stored photo, guessed from its extension.
pub fn content_type(filename: &str) -> &'static str {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}
