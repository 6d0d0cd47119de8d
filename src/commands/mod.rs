//! The line-oriented command layer.
//!
//! This module turns a raw input line into a command name plus argument
//! vector and dispatches it to the matching handler. The core never sees
//! the raw line; handlers receive `&[String]` only. A failed command
//! renders its error as a reply and the session continues.

pub mod handlers;

use crate::models::AddressBook;

/// What the dispatcher wants the session loop to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Print this reply and keep going.
    Reply(String),

    /// Print this farewell, save the book, and stop.
    Exit(String),
}

/// Tokenize an input line into a lowercased command and its arguments.
///
/// Returns `None` for blank lines. Arguments keep their original case;
/// only the command itself is lowercased.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

/// Route one parsed command to its handler.
///
/// Handler errors are rendered into user-facing replies here; nothing a
/// handler returns terminates the process.
pub fn dispatch(
    command: &str,
    args: &[String],
    book: &mut AddressBook,
    window_days: i64,
) -> CommandOutcome {
    let result = match command {
        "exit" | "close" => return CommandOutcome::Exit("Good bye!".to_string()),
        "hello" => Ok("How can I help you?".to_string()),
        "add" => handlers::add_contact(args, book),
        "change" => handlers::change_contact(args, book),
        "phone" => handlers::show_phone(args, book),
        "all" => handlers::show_all(book),
        "add-birthday" => handlers::add_birthday(args, book),
        "show-birthday" => handlers::show_birthday(args, book),
        "birthdays" => handlers::birthdays(book, window_days),
        "delete" => handlers::delete_contact(args, book),
        _ => Ok("Unknown command.".to_string()),
    };

    match result {
        Ok(reply) => CommandOutcome::Reply(reply),
        Err(err) => CommandOutcome::Reply(format!("Error: {}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_splits_and_lowercases_command() {
        let (command, args) = parse_input("  ADD Alice 0501234567 ").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["Alice", "0501234567"]);
    }

    #[test]
    fn test_parse_input_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \t ").is_none());
    }

    #[test]
    fn test_parse_input_keeps_argument_case() {
        let (_, args) = parse_input("add ALICE 0501234567").unwrap();
        assert_eq!(args[0], "ALICE");
    }

    #[test]
    fn test_dispatch_exit_variants() {
        let mut book = AddressBook::new();
        assert_eq!(
            dispatch("exit", &[], &mut book, 7),
            CommandOutcome::Exit("Good bye!".to_string())
        );
        assert_eq!(
            dispatch("close", &[], &mut book, 7),
            CommandOutcome::Exit("Good bye!".to_string())
        );
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let mut book = AddressBook::new();
        assert_eq!(
            dispatch("frobnicate", &[], &mut book, 7),
            CommandOutcome::Reply("Unknown command.".to_string())
        );
    }

    #[test]
    fn test_dispatch_renders_errors_as_replies() {
        let mut book = AddressBook::new();
        let outcome = dispatch("phone", &["Nobody".to_string()], &mut book, 7);
        match outcome {
            CommandOutcome::Reply(reply) => {
                assert_eq!(reply, "Error: Contact not found: Nobody")
            }
            other => panic!("Expected a reply, got: {:?}", other),
        }
    }
}
