//! Handlers for the interactive commands.
//!
//! Each handler consumes the tokenized argument vector and the book, and
//! returns the text to show the user. Arity problems surface as
//! [`CommandError::Usage`]; validation and lookup failures bubble up from
//! the core unchanged and are rendered by the dispatcher.

use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use tracing::debug;

/// `add <name> <phone>` - add a phone to an existing or new contact.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = match args {
        [name, phone] => (name, phone),
        _ => return Err(CommandError::Usage("add <name> <phone>")),
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        debug!("Added phone to existing contact {}", name);
        Ok(format!("Contact {} updated.", name))
    } else {
        let mut record = Record::new(name.as_str())?;
        record.add_phone(phone)?;
        book.add_record(record);
        debug!("Created contact {}", name);
        Ok(format!("Contact {} added.", name))
    }
}

/// `change <name> <old> <new>` - replace one of a contact's phones.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, old, new) = match args {
        [name, old, new] => (name, old, new),
        _ => return Err(CommandError::Usage("change <name> <old-phone> <new-phone>")),
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    record.edit_phone(old, new)?;
    Ok(format!("Phone number for {} changed.", name))
}

/// `phone <name>` - list a contact's phones.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = match args {
        [name] => name,
        _ => return Err(CommandError::Usage("phone <name>")),
    };

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    if record.phones().is_empty() {
        return Ok(format!("{} has no saved phone numbers.", name));
    }
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Ok(format!("Phones for {}: {}", name, phones))
}

/// `all` - render every record.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("The address book is empty.".to_string());
    }
    Ok(book
        .records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>` - set a contact's birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (name, date) = match args {
        [name, date] => (name, date),
        _ => return Err(CommandError::Usage("add-birthday <name> <DD.MM.YYYY>")),
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    record.add_birthday(date)?;
    Ok(format!("Birthday for {} added.", name))
}

/// `show-birthday <name>` - show a contact's stored birthday.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = match args {
        [name] => name,
        _ => return Err(CommandError::Usage("show-birthday <name>")),
    };

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.clone()))?;
    match record.birthday() {
        Some(birthday) => Ok(format!("Birthday of {}: {}", name, birthday)),
        None => Ok(format!("No birthday set for {}.", name)),
    }
}

/// `birthdays` - report birthdays coming up within the window.
pub fn birthdays(book: &AddressBook, window_days: i64) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays_from_today(window_days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(|reminder| reminder.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `delete <name>` - remove a contact entirely.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = match args {
        [name] => name,
        _ => return Err(CommandError::Usage("delete <name>")),
    };

    book.delete(name)?;
    Ok(format!("Contact {} deleted.", name))
}
