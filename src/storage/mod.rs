//! Persistence for the address book.
//!
//! The book is saved and restored as an opaque snapshot behind the
//! [`BookStore`] trait, enabling different implementations (JSON file,
//! in-memory for tests).

pub mod json_store;

pub use json_store::JsonFileStore;

use crate::error::StorageResult;
use crate::models::AddressBook;

/// Store for persisting the address book between sessions.
pub trait BookStore {
    /// Restore the previously saved book, or an empty one if nothing was
    /// saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the current state of the book.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
