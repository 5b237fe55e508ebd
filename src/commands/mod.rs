//! Command layer: parsing user input and dispatching it to the book.

pub mod handlers;
pub mod parser;

pub use handlers::{error_message, CommandHandler, Reply, EXIT_REPLY};
pub use parser::{parse, Command};
