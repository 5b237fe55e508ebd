//! Contact Book - Main entry point
//!
//! Reads commands from stdin, one per line, and prints replies to stdout.
//! Logs go to stderr.

use anyhow::Result;
use contact_book::{AddressBook, CommandHandler, Config, JsonFileStorage};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const BANNER: &str = "\
--------------------------------------------------------------------------------
|                        PHONE BOOK BOT WELCOMES YOU!                          |
--------------------------------------------------------------------------------
| hello                                  greeting                              |
| add <name> <phone>                     add a contact or another phone        |
| add_birthday <name> <DD.MM.YYYY>       set a contact's birthday              |
| change <name> <old phone> <new phone>  replace a phone                       |
| phone <name>                           show one contact                      |
| del <name> <phone>                     delete a phone                        |
| find <text>                            search names and phones               |
| show all                               list every contact                    |
| good bye | close | exit                quit                                  |
|                                                                              |
| Phones use DDD-DDD-DD-DD.                                                    |
--------------------------------------------------------------------------------";

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL
    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(path = %config.storage_path.display(), "Opening address book");
    let storage = JsonFileStorage::new(config.storage_path.clone());
    let book = AddressBook::open(Box::new(storage)).map_err(|e| {
        error!("Failed to open address book: {}", e);
        e
    })?;

    let mut handler = CommandHandler::new(book, config.page_size);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", BANNER);
    loop {
        print!("-> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let Some(reply) = handler.handle_line(&line) else {
            continue;
        };
        println!("{}", reply.text);

        if reply.exit {
            break;
        }
    }

    info!("Contact book closed");
    Ok(())
}
