//! Versioned persistence schema for the address book.
//!
//! The on-disk shape is decoupled from the in-memory types: a snapshot is a
//! plain list of `{name, phones, birthday}` entries plus a schema version.
//! Every field is validated again when a snapshot is turned back into
//! records.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Schema version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A full copy of the book, in iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub version: u32,
    #[serde(default)]
    pub records: Vec<RecordSnapshot>,
}

/// One stored contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

impl BookSnapshot {
    /// Build a snapshot at the current schema version.
    pub fn new(records: Vec<RecordSnapshot>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            records,
        }
    }

    /// Build a snapshot from records in iteration order.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        Self::new(records.into_iter().map(RecordSnapshot::from).collect())
    }

    /// Decode a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `BookError::StorageCorrupt` if the text is not a snapshot or
    /// carries an unsupported version.
    pub fn from_json(text: &str) -> BookResult<Self> {
        let snapshot: BookSnapshot = serde_json::from_str(text)
            .map_err(|e| BookError::StorageCorrupt(format!("invalid snapshot: {}", e)))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(BookError::StorageCorrupt(format!(
                "unsupported snapshot version {} (expected {})",
                snapshot.version, SNAPSHOT_VERSION
            )));
        }

        Ok(snapshot)
    }

    /// Encode the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> BookResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BookError::StorageWrite(format!("failed to encode snapshot: {}", e)))
    }

    /// Validate every entry and turn the snapshot into records.
    ///
    /// # Errors
    ///
    /// Returns `BookError::StorageCorrupt` naming the first invalid entry.
    pub fn into_records(self) -> BookResult<Vec<Record>> {
        self.records
            .into_iter()
            .map(|entry| {
                let name = entry.name.clone();
                Record::try_from(entry).map_err(|e| {
                    BookError::StorageCorrupt(format!("record '{}': {}", name, e))
                })
            })
            .collect()
    }
}

impl From<&Record> for RecordSnapshot {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record
                .phones()
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            birthday: record.birthday().map(|b| b.as_str().to_string()),
        }
    }
}

impl TryFrom<RecordSnapshot> for Record {
    type Error = ValidationError;

    fn try_from(entry: RecordSnapshot) -> Result<Self, Self::Error> {
        let name = Name::new(entry.name)?;
        let phones = entry
            .phones
            .into_iter()
            .map(Phone::new)
            .collect::<Result<Vec<_>, _>>()?;
        let birthday = Birthday::parse_optional(entry.birthday.as_deref())?;
        Ok(Record::from_parts(name, phones, birthday))
    }
}
