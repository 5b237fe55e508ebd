use crate::models::Record;
use indexmap::map::Values;

/// Lazy, fixed-size grouping of a book's records.
///
/// Yields groups of `size` records in book order; the last group may be
/// shorter. Created by `AddressBook::iter_chunks`; call it again to restart.
pub struct RecordChunks<'a> {
    values: Values<'a, String, Record>,
    size: usize,
}

impl<'a> RecordChunks<'a> {
    /// `size` must be non-zero; `AddressBook::iter_chunks` checks this.
    pub(crate) fn new(values: Values<'a, String, Record>, size: usize) -> Self {
        debug_assert!(size > 0);
        Self { values, size }
    }
}

impl<'a> Iterator for RecordChunks<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<&'a Record> = self.values.by_ref().take(self.size).collect();
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}
