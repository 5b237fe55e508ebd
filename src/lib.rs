//! Contact Book - a single-user address book with validated fields and
//! durable JSON snapshots.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: The contact `Record`
//! - **book**: `AddressBook` with search and chunked iteration
//! - **storage**: Snapshot schema and storage backends
//! - **commands**: Input parsing and command handlers
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::{AddressBook, RecordChunks};
pub use commands::{Command, CommandHandler, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
pub use storage::{BookSnapshot, JsonFileStorage, MemoryStorage, Storage};
