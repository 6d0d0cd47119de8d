//! Birthday value object and occurrence scheduling.

use super::errors::ValidationError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only accepted textual date pattern.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// This ensures that birthdays are validated at construction time. Input
/// must match `DD.MM.YYYY` and denote a real Gregorian calendar date; no
/// other formats are attempted. The decoded date is stored, not the
/// original string, and rendering reproduces the `DD.MM.YYYY` form.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the string does not match
    /// the pattern or names a non-existent date (e.g. `31.02.2024`).
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let date = date.into();
        match NaiveDate::parse_from_str(&date, DATE_FORMAT) {
            Ok(parsed) => Ok(Self(parsed)),
            Err(_) => Err(ValidationError::InvalidDate(date)),
        }
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next occurrence of this birthday on or after `reference`.
    ///
    /// Takes the month/day in the reference year; if that date has already
    /// passed, moves to the following year. A February 29 birthday in a
    /// non-leap candidate year is observed on March 1 of that year.
    pub fn next_occurrence(&self, reference: NaiveDate) -> NaiveDate {
        let candidate = Self::occurrence_in_year(self.0, reference.year());
        if candidate < reference {
            Self::occurrence_in_year(self.0, reference.year() + 1)
        } else {
            candidate
        }
    }

    /// Resolve the occurrence of `birth` in `year`, applying the leap-day policy.
    fn occurrence_in_year(birth: NaiveDate, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, birth.month(), birth.day()).unwrap_or_else(|| {
            // Feb 29 is the only month/day that can fail to exist in a year.
            NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year")
        })
    }

    /// Shift an occurrence off the weekend onto the following Monday.
    ///
    /// Saturday moves forward two days, Sunday one day; weekdays are
    /// returned unchanged. Congratulations always roll forward, never back.
    pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
        match occurrence.weekday() {
            Weekday::Sat => occurrence + Duration::days(2),
            Weekday::Sun => occurrence + Duration::days(1),
            _ => occurrence,
        }
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        assert_eq!(birthday.date(), date(1990, 6, 15));
    }

    #[test]
    fn test_birthday_round_trip() {
        for s in ["15.06.1990", "01.01.2000", "29.02.2024", "31.12.1999"] {
            let birthday = Birthday::new(s).unwrap();
            assert_eq!(birthday.to_string(), s);
        }
    }

    #[test]
    fn test_birthday_rejects_bad_format() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1990-06-15").is_err());
        assert!(Birthday::new("15/06/1990").is_err());
        assert!(Birthday::new("15.06.1990 extra").is_err());
        assert!(Birthday::new("June 15 1990").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_date() {
        assert!(Birthday::new("31.02.2024").is_err());
        assert!(Birthday::new("29.02.2023").is_err()); // not a leap year
        assert!(Birthday::new("00.01.2024").is_err());
        assert!(Birthday::new("32.01.2024").is_err());
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        let next = birthday.next_occurrence(date(2024, 6, 10));
        assert_eq!(next, date(2024, 6, 15));
    }

    #[test]
    fn test_next_occurrence_today_counts() {
        let birthday = Birthday::new("10.06.1990").unwrap();
        let next = birthday.next_occurrence(date(2024, 6, 10));
        assert_eq!(next, date(2024, 6, 10));
    }

    #[test]
    fn test_next_occurrence_already_passed_rolls_over() {
        let birthday = Birthday::new("08.06.1985").unwrap();
        let next = birthday.next_occurrence(date(2024, 6, 10));
        assert_eq!(next, date(2025, 6, 8));
    }

    #[test]
    fn test_leap_day_observed_on_march_first() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        // 2024 is a leap year, the real date exists
        assert_eq!(birthday.next_occurrence(date(2024, 1, 15)), date(2024, 2, 29));
        // past Feb in 2024 rolls into non-leap 2025
        assert_eq!(birthday.next_occurrence(date(2024, 6, 20)), date(2025, 3, 1));
    }

    #[test]
    fn test_congratulation_date_weekend_shift() {
        // 15.06.2024 is a Saturday
        assert_eq!(
            Birthday::congratulation_date(date(2024, 6, 15)),
            date(2024, 6, 17)
        );
        // 16.06.2024 is a Sunday
        assert_eq!(
            Birthday::congratulation_date(date(2024, 6, 16)),
            date(2024, 6, 17)
        );
        // 17.06.2024 is a Monday, unchanged
        assert_eq!(
            Birthday::congratulation_date(date(2024, 6, 17)),
            date(2024, 6, 17)
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"15.06.1990\"");
    }

    #[test]
    fn test_birthday_deserialization() {
        let birthday: Birthday = serde_json::from_str("\"15.06.1990\"").unwrap();
        assert_eq!(birthday.date(), date(1990, 6, 15));
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"1990-06-15\"");
        assert!(result.is_err());
    }
}
