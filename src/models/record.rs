//! Record model representing one contact in the address book.

use crate::domain::{normalize, Birthday, Field, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use std::fmt;

/// Width of the separator line printed under each rendered record.
const SEPARATOR_WIDTH: usize = 80;

/// A single contact: a name, an ordered list of unique phones, and an
/// optional birthday.
///
/// The name never changes after creation. The phone list keeps insertion
/// order and may become empty after the last phone is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record holding one phone.
    pub fn new(name: Name, phone: Phone) -> Self {
        Self {
            name,
            phones: vec![phone],
            birthday: None,
        }
    }

    /// Rebuild a record from stored parts.
    ///
    /// Repeated phones are collapsed to their first occurrence.
    pub fn from_parts(name: Name, phones: Vec<Phone>, birthday: Option<Birthday>) -> Self {
        let mut record = Self {
            name,
            phones: Vec::with_capacity(phones.len()),
            birthday,
        };
        for phone in phones {
            record.push_unique(phone);
        }
        record
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone unless an equal one is already listed.
    ///
    /// Returns `true` if the phone was appended. A duplicate is a no-op, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidFormat` if `raw` is not a valid phone.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<bool> {
        let phone = Phone::new(raw)?;
        Ok(self.push_unique(phone))
    }

    /// Remove the phone equal to `raw`.
    ///
    /// # Errors
    ///
    /// - `BookError::InvalidFormat` if `raw` is not a valid phone
    /// - `BookError::NotFound` if the phone is not listed
    pub fn delete_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = Phone::new(raw)?;
        let idx = self.position_of(&phone)?;
        self.phones.remove(idx);
        Ok(())
    }

    /// Replace the phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `BookError::InvalidFormat` if either value is not a valid phone
    /// - `BookError::NotFound` if `old` is not listed
    /// - `BookError::InvalidArgument` if `new` is already listed in another slot
    pub fn update_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let old = Phone::new(old)?;
        let new = Phone::new(new)?;
        let idx = self.position_of(&old)?;

        if old != new && self.phones.contains(&new) {
            return Err(BookError::InvalidArgument(format!(
                "{} already has phone {}",
                self.name, new
            )));
        }

        self.phones[idx] = new;
        Ok(())
    }

    /// Set or replace the birthday.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidFormat` if `raw` is not `DD.MM.YYYY`.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Days until the next birthday, counted from the local date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday, counted from `today`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().and_then(|bd| bd.days_until(today))
    }

    /// Whether `query` occurs in the name or in any phone, ignoring case
    /// and hyphens.
    pub fn contains(&self, query: &str) -> bool {
        let query = normalize(query);
        self.name.contains(&query) || self.phones.iter().any(|p| p.contains(&query))
    }

    fn position_of(&self, phone: &Phone) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| BookError::NotFound(format!("{} has no phone {}", self.name, phone)))
    }

    fn push_unique(&mut self, phone: Phone) -> bool {
        if self.phones.contains(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name : {}", self.name)?;
        if let Some(birthday) = &self.birthday {
            writeln!(f, "Birthday : {}", birthday)?;
            if let Some(days) = self.days_to_birthday() {
                writeln!(f, "Days to birthday : {}", days)?;
            }
        }
        writeln!(f, "Phone numbers : ")?;
        for (idx, phone) in self.phones.iter().enumerate() {
            writeln!(f, "\t[{}] {}", idx + 1, phone)?;
        }
        write!(f, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}
