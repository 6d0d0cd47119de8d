//! JSON file implementation of [`BookStore`].

use super::BookStore;
use crate::error::StorageResult;
use crate::models::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Persists the address book as pretty-printed JSON at a fixed path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> StorageResult<AddressBook> {
        if !self.path.exists() {
            info!("No book file at {}, starting empty", self.path.display());
            return Ok(AddressBook::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let book: AddressBook = serde_json::from_str(&contents)?;
        debug!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let contents = serde_json::to_string_pretty(book)?;
        fs::write(&self.path, contents)?;
        debug!(
            "Saved {} contacts to {}",
            book.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use std::env;

    /// Temp file that cleans up after itself.
    struct TempBookFile {
        path: PathBuf,
    }

    impl TempBookFile {
        fn new(tag: &str) -> Self {
            let path = env::temp_dir().join(format!(
                "address-book-test-{}-{}.json",
                tag,
                std::process::id()
            ));
            let _ = fs::remove_file(&path);
            Self { path }
        }
    }

    impl Drop for TempBookFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    #[test]
    fn test_load_missing_file_gives_empty_book() {
        let tmp = TempBookFile::new("missing");
        let store = JsonFileStore::new(&tmp.path);
        let book = store.load().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let tmp = TempBookFile::new("roundtrip");
        let store = JsonFileStore::new(&tmp.path);

        let mut book = AddressBook::new();
        let mut alice = Record::new("Alice").unwrap();
        alice.add_phone("0501234567").unwrap();
        alice.add_birthday("15.06.1990").unwrap();
        book.add_record(alice);

        store.save(&book).unwrap();
        let restored = store.load().unwrap();
        assert_eq!(restored, book);
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let tmp = TempBookFile::new("corrupt");
        fs::write(&tmp.path, "not json at all").unwrap();

        let store = JsonFileStore::new(&tmp.path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_load_rejects_invalid_stored_phone() {
        // Validation applies on deserialize too: a tampered file cannot
        // smuggle an invalid phone into the book.
        let tmp = TempBookFile::new("invalid-phone");
        fs::write(
            &tmp.path,
            r#"{"Alice":{"name":"Alice","phones":["12345"]}}"#,
        )
        .unwrap();

        let store = JsonFileStore::new(&tmp.path);
        assert!(store.load().is_err());
    }
}
