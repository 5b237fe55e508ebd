//! Turns one line of user input into a `Command`.

use crate::error::{BookError, BookResult};

/// A parsed user command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Exit,
    ShowAll,
    Add {
        name: String,
        phone: String,
    },
    AddBirthday {
        name: String,
        date: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    Delete {
        name: String,
        phone: String,
    },
    Find {
        query: String,
    },
}

impl Command {
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

/// Argument count expected by each command that takes arguments.
fn arity(word: &str) -> Option<usize> {
    match word {
        "add" | "add_birthday" | "del" => Some(2),
        "change" => Some(3),
        "phone" | "find" => Some(1),
        _ => None,
    }
}

/// Parse a line of input.
///
/// Input is lower-cased and runs of whitespace collapse to one space.
/// Returns `Ok(None)` for blank input.
///
/// # Errors
///
/// Returns `BookError::InvalidArgument` for unknown commands or a wrong
/// number of arguments.
pub fn parse(line: &str) -> BookResult<Option<Command>> {
    let lowered = line.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    if words.is_empty() {
        return Ok(None);
    }

    match words.join(" ").as_str() {
        "hello" => return Ok(Some(Command::Hello)),
        "show all" => return Ok(Some(Command::ShowAll)),
        "good bye" | "close" | "exit" => return Ok(Some(Command::Exit)),
        _ => {}
    }

    let command = match words.as_slice() {
        ["add", name, phone] => Command::Add {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ["add_birthday", name, date] => Command::AddBirthday {
            name: name.to_string(),
            date: date.to_string(),
        },
        ["change", name, old_phone, new_phone] => Command::Change {
            name: name.to_string(),
            old_phone: old_phone.to_string(),
            new_phone: new_phone.to_string(),
        },
        ["phone", name] => Command::Phone {
            name: name.to_string(),
        },
        ["del", name, phone] => Command::Delete {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ["find", query] => Command::Find {
            query: query.to_string(),
        },
        [word, args @ ..] => {
            return Err(match arity(word) {
                Some(expected) => BookError::InvalidArgument(format!(
                    "{} expects {} argument(s), got {}",
                    word,
                    expected,
                    args.len()
                )),
                None => BookError::InvalidArgument(format!("unknown command '{}'", word)),
            })
        }
        [] => return Ok(None),
    };

    Ok(Some(command))
}
