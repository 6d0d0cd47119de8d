//! The address book: the owning collection of all contact records.

use crate::domain::Birthday;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Default width of the upcoming-birthday window, in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// A mapping from contact name to [`Record`], one record per name.
///
/// The book owns its records exclusively; callers mutate them through
/// [`find_mut`](Self::find_mut) and must re-`find` after a deletion.
/// Iteration order is the map's key order (sorted by name), which is
/// deterministic and survives save/load cycles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

/// One entry of the upcoming-birthday report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReminder {
    /// The contact's name.
    pub name: String,

    /// The day to congratulate on: the birthday occurrence shifted off
    /// weekends onto the following Monday.
    pub congratulation_date: NaiveDate,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name.
    ///
    /// An existing record under the same name is overwritten; callers are
    /// expected to fetch-or-create before calling this.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no such record exists; the
    /// book is left unchanged in that case.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        self.records
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Iterate over all records in map order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collect the birthdays falling within `window_days` of `reference`.
    ///
    /// For each record with a birthday, the next occurrence on or after
    /// `reference` is computed (year rollover and the Feb 29 policy are
    /// handled by [`Birthday::next_occurrence`]). A record is included iff
    /// `0 <= occurrence - reference <= window_days`, counted in whole days
    /// before any weekend shift. The reported congratulation date is the
    /// occurrence rolled forward off Saturday/Sunday onto Monday.
    ///
    /// Records without a birthday are skipped, never an error. Entries
    /// follow the book's iteration order.
    pub fn upcoming_birthdays(
        &self,
        window_days: i64,
        reference: NaiveDate,
    ) -> Vec<BirthdayReminder> {
        let mut reminders = Vec::new();
        for record in self.records.values() {
            let birthday = match record.birthday() {
                Some(b) => b,
                None => continue,
            };
            let occurrence = birthday.next_occurrence(reference);
            let days_until = (occurrence - reference).num_days();
            if (0..=window_days).contains(&days_until) {
                reminders.push(BirthdayReminder {
                    name: record.name().as_str().to_string(),
                    congratulation_date: Birthday::congratulation_date(occurrence),
                });
            }
        }
        reminders
    }

    /// [`upcoming_birthdays`](Self::upcoming_birthdays) against the local
    /// calendar date.
    pub fn upcoming_birthdays_from_today(&self, window_days: i64) -> Vec<BirthdayReminder> {
        self.upcoming_birthdays(window_days, Local::now().date_naive())
    }
}

// Display support - one report line: "<name>: <DD.MM.YYYY>"
impl fmt::Display for BirthdayReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date.format("%d.%m.%Y"))
    }
}
