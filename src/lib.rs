//! Address Book - an interactive contact assistant with validated fields
//! and birthday reminders.
//!
//! The library holds the full core: validated value objects, the contact
//! record and the owning book, the upcoming-birthday scheduler, JSON
//! persistence, and the command layer the binary drives from stdin.
//!
//! # Architecture
//!
//! - **domain**: value objects (Name, PhoneNumber, Birthday) validated at construction
//! - **models**: the Record aggregate and the AddressBook collection
//! - **commands**: input tokenization and command handlers
//! - **storage**: save/load of the book behind the BookStore trait
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use commands::{dispatch, parse_input, CommandOutcome};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, BirthdayReminder, Record, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use storage::{BookStore, JsonFileStore};
