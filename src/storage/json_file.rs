use crate::error::{BookError, BookResult};
use crate::storage::traits::Storage;
use crate::storage::BookSnapshot;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Snapshot storage in a single JSON file.
///
/// Saves write a sibling `.tmp` file first and then rename it over the
/// target, so a crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> BookResult<Option<BookSnapshot>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No snapshot file, starting empty");
                return Ok(None);
            }
            Err(e) => {
                return Err(BookError::StorageCorrupt(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        BookSnapshot::from_json(&text).map(Some)
    }

    fn save(&self, snapshot: &BookSnapshot) -> BookResult<()> {
        let json = snapshot.to_json()?;
        let write_err =
            |e: std::io::Error| BookError::StorageWrite(format!("{}: {}", self.path.display(), e));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;

        tracing::debug!(
            path = %self.path.display(),
            records = snapshot.records.len(),
            "Snapshot saved"
        );
        Ok(())
    }
}
