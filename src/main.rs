//! Address book assistant - main entry point
//!
//! Runs the interactive session: loads the saved book, reads commands from
//! stdin until `exit`/`close` (or end of input), and saves the book on the
//! way out.

use address_book::{dispatch, parse_input, CommandOutcome, Config};
use address_book::{BookStore, JsonFileStore};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, the session itself owns stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let store = JsonFileStore::new(config.book_path.clone());
    let mut book = match store.load() {
        Ok(book) => {
            info!("Loaded {} contacts from {}", book.len(), store.path().display());
            book
        }
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    println!("Welcome to the assistant bot!");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // end of input behaves like `exit`
        };
        let (command, args) = match parse_input(&line) {
            Some(parsed) => parsed,
            None => continue,
        };

        match dispatch(&command, &args, &mut book, config.birthday_window_days) {
            CommandOutcome::Reply(reply) => println!("{}", reply),
            CommandOutcome::Exit(farewell) => {
                println!("{}", farewell);
                break;
            }
        }
    }

    store.save(&book)?;
    info!("Saved {} contacts to {}", book.len(), store.path().display());
    Ok(())
}
