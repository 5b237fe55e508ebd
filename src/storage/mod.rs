//! Persistence layer.
//!
//! The address book talks to storage only through the `Storage` trait and
//! exchanges whole-book `BookSnapshot` values with it.

mod json_file;
mod memory;
mod snapshot;
mod traits;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use snapshot::{BookSnapshot, RecordSnapshot, SNAPSHOT_VERSION};
pub use traits::Storage;
