use contact_book::error::{BookError, BookResult};
use contact_book::storage::{BookSnapshot, Storage};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock storage for testing.
///
/// Keeps the last saved snapshot in memory, tracks method calls for
/// verification, and can be told to fail saves. Clones share state, so a
/// test can hand one clone to the book and inspect the other.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockStorage {
    snapshot: Arc<Mutex<Option<BookSnapshot>>>,
    fail_saves: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockStorage {
    /// Create a new empty MockStorage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockStorage preloaded with a snapshot.
    pub fn with_snapshot(snapshot: BookSnapshot) -> Self {
        let storage = Self::new();
        *storage.snapshot.lock().unwrap() = Some(snapshot);
        storage
    }

    /// Make every following save fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// The last successfully saved snapshot.
    pub fn saved(&self) -> Option<BookSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Storage for MockStorage {
    fn load(&self) -> BookResult<Option<BookSnapshot>> {
        self.track_call("load");
        Ok(self.snapshot.lock().unwrap().clone())
    }

    fn save(&self, snapshot: &BookSnapshot) -> BookResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(BookError::StorageWrite("simulated write failure".to_string()));
        }

        *self.snapshot.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }
}
