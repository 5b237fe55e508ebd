use crate::error::{BookError, BookResult};
use crate::storage::traits::Storage;
use crate::storage::BookSnapshot;
use std::sync::Mutex;

/// Non-durable storage that keeps the encoded snapshot in memory.
///
/// Snapshots still pass through JSON encoding so the round trip matches
/// what `JsonFileStorage` does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already encoded snapshot.
    pub fn with_contents(json: impl Into<String>) -> Self {
        Self {
            data: Mutex::new(Some(json.into())),
        }
    }

    /// The encoded snapshot from the last save, if any.
    pub fn contents(&self) -> Option<String> {
        self.data.lock().ok().and_then(|data| data.clone())
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> BookResult<Option<BookSnapshot>> {
        let data = self
            .data
            .lock()
            .map_err(|e| BookError::StorageCorrupt(format!("storage lock poisoned: {}", e)))?;

        data.as_deref().map(BookSnapshot::from_json).transpose()
    }

    fn save(&self, snapshot: &BookSnapshot) -> BookResult<()> {
        let json = snapshot.to_json()?;
        let mut data = self
            .data
            .lock()
            .map_err(|e| BookError::StorageWrite(format!("storage lock poisoned: {}", e)))?;
        *data = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_memory_storage_loads_none() {
        assert_eq!(MemoryStorage::new().load().unwrap(), None);
        assert_eq!(MemoryStorage::new().contents(), None);
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        let snapshot = BookSnapshot::new(Vec::new());
        storage.save(&snapshot).unwrap();
        assert_eq!(storage.load().unwrap(), Some(snapshot));
        assert!(storage.contents().unwrap().contains("\"version\": 1"));
    }

    #[test]
    fn test_memory_storage_with_corrupt_contents() {
        let storage = MemoryStorage::with_contents("{");
        assert!(matches!(
            storage.load().unwrap_err(),
            BookError::StorageCorrupt(_)
        ));
    }
}
