use crate::error::BookResult;
use crate::storage::BookSnapshot;

/// Durable home of the address book.
///
/// Provides abstraction over where snapshots live, enabling different
/// implementations (JSON file, in-memory, test doubles that fail on demand).
/// Persistence is whole-book: every save replaces the previous snapshot.
pub trait Storage: Send + Sync {
    /// Read the last saved snapshot. `Ok(None)` means nothing was saved yet.
    fn load(&self) -> BookResult<Option<BookSnapshot>>;

    /// Replace the stored snapshot.
    fn save(&self, snapshot: &BookSnapshot) -> BookResult<()>;
}
