//! Command handlers.
//!
//! Each handler translates a parsed `Command` into calls on the address
//! book and renders the outcome as a reply line. All user-facing wording
//! lives here.

use crate::book::AddressBook;
use crate::commands::parser::{parse, Command};
use crate::error::{BookError, BookResult};
use crate::models::Record;

/// Reply printed for any exit command.
pub const EXIT_REPLY: &str = "Good bye!";

/// Shortest name accepted when adding a contact.
const MIN_NAME_LEN: usize = 2;

/// Outcome of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub exit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }
}

/// Runs commands against an owned address book.
pub struct CommandHandler {
    book: AddressBook,
    page_size: usize,
}

impl CommandHandler {
    /// Create a handler. `page_size` is clamped to at least 1.
    pub fn new(book: AddressBook, page_size: usize) -> Self {
        Self {
            book,
            page_size: page_size.max(1),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and handle one line of input. Blank lines yield `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        match parse(line) {
            Ok(Some(command)) => Some(self.handle(command)),
            Ok(None) => None,
            Err(e) => Some(Reply::text(error_message(&e))),
        }
    }

    /// Handle a parsed command, converting any error into a reply.
    pub fn handle(&mut self, command: Command) -> Reply {
        if command.is_exit() {
            return Reply {
                text: EXIT_REPLY.to_string(),
                exit: true,
            };
        }

        match self.execute(command) {
            Ok(text) => Reply::text(text),
            Err(e) => {
                tracing::debug!(error = %e, "Command failed");
                Reply::text(error_message(&e))
            }
        }
    }

    fn execute(&mut self, command: Command) -> BookResult<String> {
        match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Exit => Ok(EXIT_REPLY.to_string()),
            Command::ShowAll => self.show_all(),
            Command::Add { name, phone } => {
                if name.chars().count() < MIN_NAME_LEN {
                    return Err(BookError::InvalidArgument(format!(
                        "name must be at least {} characters",
                        MIN_NAME_LEN
                    )));
                }
                self.book.add_record(&name, &phone)?;
                Ok(format!("Contact [{}] - [{}] added to the book!", name, phone))
            }
            Command::AddBirthday { name, date } => {
                self.book.set_birthday(&name, &date)?;
                Ok(format!("Birthday of [{}] saved!", name))
            }
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => {
                self.book.update_phone(&name, &old_phone, &new_phone)?;
                Ok(format!("Contact [{}] updated!", name))
            }
            Command::Phone { name } => self
                .book
                .get(&name)
                .map(Record::to_string)
                .ok_or_else(|| BookError::NotFound(format!("no contact named {}", name))),
            Command::Delete { name, phone } => {
                self.book.delete_phone(&name, &phone)?;
                Ok(format!("Phone [{}] deleted!", phone))
            }
            Command::Find { query } => {
                let found = self.book.find(&query);
                if found.is_empty() {
                    return Err(BookError::NoSearchResults(query));
                }
                Ok(render_records(&found))
            }
        }
    }

    fn show_all(&self) -> BookResult<String> {
        if self.book.is_empty() {
            return Ok("The book is empty! Add some contacts!".to_string());
        }

        let pages: Vec<String> = self
            .book
            .iter_chunks(self.page_size)?
            .enumerate()
            .map(|(idx, chunk)| format!("Page {}\n{}", idx + 1, render_records(&chunk)))
            .collect();
        Ok(pages.join("\n"))
    }
}

fn render_records(records: &[&Record]) -> String {
    records
        .iter()
        .map(|r| format!("{}\n", r))
        .collect::<Vec<_>>()
        .join("")
}

/// The single line shown to the user for an error.
pub fn error_message(err: &BookError) -> String {
    match err {
        BookError::InvalidFormat(e) => format!("Value is not valid: {}. Try again!", e),
        BookError::NotFound(what) => format!("Not found: {}.", what),
        BookError::NoSearchResults(query) => format!("Search for '{}' found nothing.", query),
        BookError::InvalidArgument(why) => format!("Command is not valid: {}. Try again!", why),
        BookError::StorageWrite(why) => {
            format!("Change applied but could not be saved: {}", why)
        }
        BookError::StorageCorrupt(why) => format!("Saved book could not be read: {}", why),
    }
}
