//! Contact record aggregating one identity's validated fields.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// The name is fixed at creation; phones and birthday are mutated through
/// the methods below. Every string entering a record passes through a
/// domain value object, so a `Record` never holds invalid data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The stored phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The stored birthday, if any.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `number` and append it to the phone list.
    ///
    /// Duplicates are not rejected here; callers that want dedup should
    /// check [`find_phone`](Self::find_phone) first.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is invalid.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first stored phone exactly matching `number`.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Remove the first stored phone matching `number`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, number: &str) -> BookResult<()> {
        let position = self.phone_position(number)?;
        self.phones.remove(position);
        Ok(())
    }

    /// Replace `old` with `new`, keeping its position in the phone list.
    ///
    /// The new number is validated before any mutation, so a bad new
    /// number never loses the old one. The replacement happens in place
    /// rather than remove-then-append, which would reorder the list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` (wrapped) if `new` is
    /// invalid, or `BookError::PhoneNotFound` if `old` is not stored.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = PhoneNumber::new(new)?;
        let position = self.phone_position(old)?;
        self.phones[position] = replacement;
        Ok(())
    }

    /// Validate `date` and store it, overwriting any previous birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the date is invalid.
    pub fn add_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    fn phone_position(&self, number: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == number)
            .ok_or_else(|| BookError::PhoneNotFound(number.to_string()))
    }
}

// Display support - deterministic one-line summary
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
