//! Data aggregates: contact records and the address book that owns them.

pub mod book;
pub mod record;

pub use book::{AddressBook, BirthdayReminder, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use record::Record;
