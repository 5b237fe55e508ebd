//! The address book: records keyed by name, persisted after every change.

use crate::book::chunks::RecordChunks;
use crate::domain::{normalize, Name, Phone};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::storage::{BookSnapshot, Storage};
use indexmap::IndexMap;

/// All contacts, keyed by name, in insertion order.
///
/// The book owns its records exclusively. Each key equals the name of the
/// record stored under it. Every mutating call saves a full snapshot once the
/// in-memory change succeeds. If that save fails, the change stays applied
/// in memory and the error is returned.
///
/// The book is not synchronized. Wrap it in a mutex to share it.
pub struct AddressBook {
    records: IndexMap<String, Record>,
    storage: Box<dyn Storage>,
}

impl AddressBook {
    /// Open the book, restoring whatever `storage` holds.
    ///
    /// Storage with no saved snapshot yields an empty book.
    ///
    /// # Errors
    ///
    /// Returns `BookError::StorageCorrupt` if the snapshot cannot be read or
    /// contains invalid fields.
    pub fn open(storage: Box<dyn Storage>) -> BookResult<Self> {
        let mut book = Self {
            records: IndexMap::new(),
            storage,
        };

        if let Some(snapshot) = book.storage.load()? {
            for record in snapshot.into_records()? {
                let key = record.name().as_str().to_string();
                book.records.insert(key, record);
            }
        }

        tracing::info!(records = book.records.len(), "Address book loaded");
        Ok(book)
    }

    /// Write the whole book to storage, replacing the previous snapshot.
    pub fn save(&self) -> BookResult<()> {
        let snapshot = BookSnapshot::from_records(self.records.values());
        self.storage.save(&snapshot)
    }

    /// Add a phone to `name`, creating the record if it does not exist.
    ///
    /// Adding a phone the record already lists changes nothing but still
    /// saves.
    ///
    /// # Errors
    ///
    /// - `BookError::InvalidFormat` if `name` is empty or `phone` is invalid
    /// - `BookError::StorageWrite` if the save fails
    pub fn add_record(&mut self, name: &str, phone: &str) -> BookResult<()> {
        let phone = Phone::new(phone)?;

        self.mutate(|records| {
            match records.get_mut(name) {
                Some(record) => {
                    record.add_phone(phone.as_str())?;
                }
                None => {
                    let record = Record::new(Name::new(name)?, phone);
                    records.insert(name.to_string(), record);
                }
            }
            tracing::debug!(name = %name, "Record added or extended");
            Ok(())
        })
    }

    /// Set the birthday of an existing record.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if `name` is not in the book
    /// - `BookError::InvalidFormat` if `birthday` is not `DD.MM.YYYY`
    /// - `BookError::StorageWrite` if the save fails
    pub fn set_birthday(&mut self, name: &str, birthday: &str) -> BookResult<()> {
        self.mutate(|records| {
            Self::record_mut(records, name)?.set_birthday(birthday)?;
            tracing::debug!(name = %name, "Birthday set");
            Ok(())
        })
    }

    /// Replace `old` with `new` in the record for `name`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if `name` or `old` is absent
    /// - `BookError::InvalidFormat` if either phone is invalid
    /// - `BookError::StorageWrite` if the save fails
    pub fn update_phone(&mut self, name: &str, old: &str, new: &str) -> BookResult<()> {
        self.mutate(|records| {
            Self::record_mut(records, name)?.update_phone(old, new)?;
            tracing::debug!(name = %name, "Phone updated");
            Ok(())
        })
    }

    /// Remove `phone` from the record for `name`.
    ///
    /// The record stays in the book even when its last phone is removed.
    ///
    /// # Errors
    ///
    /// - `BookError::NotFound` if `name` or `phone` is absent
    /// - `BookError::InvalidFormat` if `phone` is invalid
    /// - `BookError::StorageWrite` if the save fails
    pub fn delete_phone(&mut self, name: &str, phone: &str) -> BookResult<()> {
        self.mutate(|records| {
            Self::record_mut(records, name)?.delete_phone(phone)?;
            tracing::debug!(name = %name, "Phone deleted");
            Ok(())
        })
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Exact-key membership test.
    pub fn has_record(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// All records in book order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Iterate the book in groups of up to `size` records.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidArgument` if `size` is zero.
    pub fn iter_chunks(&self, size: usize) -> BookResult<RecordChunks<'_>> {
        if size == 0 {
            return Err(BookError::InvalidArgument(
                "chunk size must be at least 1".to_string(),
            ));
        }
        Ok(RecordChunks::new(self.records.values(), size))
    }

    /// Records whose name or any phone contains `query`, in book order.
    ///
    /// Matching ignores ASCII case and hyphens. An empty result is not an
    /// error here.
    pub fn find(&self, query: &str) -> Vec<&Record> {
        let query = normalize(query);
        let found: Vec<&Record> = self
            .records
            .values()
            .filter(|record| record.contains(&query))
            .collect();

        tracing::debug!(query = %query, result_count = found.len(), "Search completed");
        found
    }

    /// Apply `op` to the records, then save.
    ///
    /// `op` must validate before it changes anything, so an `Err` from it
    /// leaves the book untouched and skips the save.
    fn mutate<T>(
        &mut self,
        op: impl FnOnce(&mut IndexMap<String, Record>) -> BookResult<T>,
    ) -> BookResult<T> {
        let out = op(&mut self.records)?;
        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "Save failed; change kept in memory only");
            return Err(e);
        }
        Ok(out)
    }

    fn record_mut<'a>(
        records: &'a mut IndexMap<String, Record>,
        name: &str,
    ) -> BookResult<&'a mut Record> {
        records
            .get_mut(name)
            .ok_or_else(|| BookError::NotFound(format!("no contact named {}", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn empty_book() -> AddressBook {
        AddressBook::open(Box::new(MemoryStorage::new())).unwrap()
    }

    fn book_with(names: &[&str]) -> AddressBook {
        let mut book = empty_book();
        for (i, name) in names.iter().enumerate() {
            book.add_record(name, &format!("100-000-00-{:02}", i)).unwrap();
        }
        book
    }

    fn phones<'a>(book: &'a AddressBook, name: &str) -> Vec<&'a str> {
        book.get(name)
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect()
    }

    #[test]
    fn test_new_book_is_empty() {
        let book = empty_book();
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
        assert!(!book.has_record("john"));
    }

    #[test]
    fn test_add_record_then_extend() {
        let mut book = empty_book();
        book.add_record("john", "123-456-78-90").unwrap();
        book.add_record("john", "111-222-33-44").unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(phones(&book, "john"), vec!["123-456-78-90", "111-222-33-44"]);

        book.delete_phone("john", "123-456-78-90").unwrap();
        assert_eq!(phones(&book, "john"), vec!["111-222-33-44"]);
    }

    #[test]
    fn test_add_record_invalid_phone_adds_nothing() {
        let mut book = empty_book();
        let err = book.add_record("john", "12345").unwrap_err();
        assert!(matches!(err, BookError::InvalidFormat(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_record_empty_name_is_invalid() {
        let mut book = empty_book();
        let err = book.add_record("", "123-456-78-90").unwrap_err();
        assert!(matches!(err, BookError::InvalidFormat(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_has_record_is_exact() {
        let book = book_with(&["john"]);
        assert!(book.has_record("john"));
        assert!(!book.has_record("jo"));
        assert!(!book.has_record("John"));
    }

    #[test]
    fn test_set_birthday_unknown_name() {
        let mut book = empty_book();
        let err = book.set_birthday("ghost", "01.01.2000").unwrap_err();
        assert!(matches!(err, BookError::NotFound(_)));
    }

    #[test]
    fn test_set_birthday_invalid_date() {
        let mut book = book_with(&["john"]);
        let err = book.set_birthday("john", "2000-01-01").unwrap_err();
        assert!(matches!(err, BookError::InvalidFormat(_)));
        assert!(book.get("john").unwrap().birthday().is_none());
    }

    #[test]
    fn test_update_phone_through_book() {
        let mut book = book_with(&["john"]);
        book.update_phone("john", "100-000-00-00", "999-999-99-99")
            .unwrap();
        assert_eq!(phones(&book, "john"), vec!["999-999-99-99"]);

        let err = book
            .update_phone("ghost", "100-000-00-00", "999-999-99-99")
            .unwrap_err();
        assert!(matches!(err, BookError::NotFound(_)));
    }

    #[test]
    fn test_delete_last_phone_keeps_record() {
        let mut book = book_with(&["john"]);
        book.delete_phone("john", "100-000-00-00").unwrap();
        assert!(book.has_record("john"));
        assert!(phones(&book, "john").is_empty());
    }

    #[test]
    fn test_chunks_of_two_over_five() {
        let book = book_with(&["a1", "b2", "c3", "d4", "e5"]);
        let sizes: Vec<usize> = book.iter_chunks(2).unwrap().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);

        let names: Vec<&str> = book
            .iter_chunks(2)
            .unwrap()
            .flatten()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(names, vec!["a1", "b2", "c3", "d4", "e5"]);
    }

    #[test]
    fn test_chunks_larger_than_book() {
        let book = book_with(&["a1", "b2"]);
        let chunks: Vec<_> = book.iter_chunks(10).unwrap().collect();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 2);
    }

    #[test]
    fn test_chunks_of_empty_book() {
        let book = empty_book();
        assert_eq!(book.iter_chunks(3).unwrap().count(), 0);
    }

    #[test]
    fn test_chunks_zero_size_rejected() {
        let book = book_with(&["a1"]);
        assert!(matches!(
            book.iter_chunks(0),
            Err(BookError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_find_by_phone_fragment() {
        let mut book = empty_book();
        book.add_record("john", "123-456-78-90").unwrap();
        book.add_record("mary", "555-000-11-22").unwrap();

        let found = book.find("123");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name().as_str(), "john");
    }

    #[test]
    fn test_find_normalizes_query() {
        let mut book = empty_book();
        book.add_record("john", "123-456-78-90").unwrap();
        book.add_record("Johanna", "555-000-11-22").unwrap();

        assert_eq!(book.find("456-78").len(), 1);
        assert_eq!(book.find("JOH").len(), 2);
        assert!(book.find("zzz").is_empty());
    }

    #[test]
    fn test_find_on_empty_book() {
        assert!(empty_book().find("123").is_empty());
    }

    #[test]
    fn test_reopen_restores_records() {
        let mut book = empty_book();
        book.add_record("john", "123-456-78-90").unwrap();
        book.set_birthday("john", "05.11.1990").unwrap();
        let json = BookSnapshot::from_records(book.records())
            .to_json()
            .unwrap();

        let book = AddressBook::open(Box::new(MemoryStorage::with_contents(json))).unwrap();
        let john = book.get("john").unwrap();
        assert_eq!(john.birthday().unwrap().as_str(), "05.11.1990");
        assert_eq!(phones(&book, "john"), vec!["123-456-78-90"]);
    }

    #[test]
    fn test_open_merges_duplicate_names() {
        let storage = MemoryStorage::with_contents(
            r#"{"version": 1, "records": [
                {"name": "john", "phones": ["111-111-11-11"]},
                {"name": "mary", "phones": []},
                {"name": "john", "phones": ["222-222-22-22"]}
            ]}"#,
        );
        let book = AddressBook::open(Box::new(storage)).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(phones(&book, "john"), vec!["222-222-22-22"]);
    }

    #[test]
    fn test_open_corrupt_storage_fails() {
        let storage = MemoryStorage::with_contents("[1, 2, 3]");
        assert!(matches!(
            AddressBook::open(Box::new(storage)),
            Err(BookError::StorageCorrupt(_))
        ));
    }
}
