//! Address book storage engine.

mod address_book;
mod chunks;

pub use address_book::AddressBook;
pub use chunks::RecordChunks;
