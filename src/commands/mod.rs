//! Command parsing and dispatch.
//!
//! Every command handler is a pure function over the address book; the
//! dispatch table maps command names to handlers, and every handler
//! returns a [`CommandOutput`] carrying a semantic category instead of
//! terminal markup. Rendering lives in [`crate::render`].

pub mod handlers;

use crate::error::CommandResult;
use crate::models::AddressBook;
use chrono::NaiveDate;
use tracing::debug;

/// Semantic category of a command result, rendered by the terminal layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCategory {
    /// The command did what was asked
    Success,
    /// The command failed in a recoverable, user-facing way
    Error,
    /// Informational output (greetings, help, neutral notices)
    Info,
}

/// The uniform result of every command: a category plus plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Semantic category
    pub category: OutputCategory,
    /// Plain text, no ANSI markup
    pub text: String,
}

impl CommandOutput {
    /// A success-category output.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            category: OutputCategory::Success,
            text: text.into(),
        }
    }

    /// An error-category output.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            category: OutputCategory::Error,
            text: text.into(),
        }
    }

    /// An info-category output.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            category: OutputCategory::Info,
            text: text.into(),
        }
    }
}

/// Shared state a handler operates on.
pub struct Context<'a> {
    /// The address book being queried or mutated
    pub book: &'a mut AddressBook,
    /// Inclusive upcoming-birthday window in days
    pub window_days: i64,
    /// "Today" for birthday arithmetic, injected for testability
    pub today: NaiveDate,
}

/// A command handler: positional string arguments in, categorized output out.
pub type Handler = fn(&[String], &mut Context) -> CommandResult<CommandOutput>;

/// One dispatch table entry.
pub struct CommandSpec {
    /// Command name as typed by the user (already lowercased)
    pub name: &'static str,
    /// Argument shape for usage errors and the `info` listing
    pub usage: &'static str,
    /// One-line description for the `info` listing
    pub description: &'static str,
    /// The handler function
    pub handler: Handler,
}

/// The dispatch table. `close`/`exit` are loop control, not commands, and
/// are handled by the REPL before dispatch.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "add",
        usage: "add <name> <phone>",
        description: "adds a new contact with the name and phone number, or adds a phone number to an existing contact (e.g., add John 0991234567)",
        handler: handlers::add_contact,
    },
    CommandSpec {
        name: "change",
        usage: "change <name> <old phone> <new phone>",
        description: "changes the phone number of an existing contact (e.g., change John 0991234567 0997654321)",
        handler: handlers::change_contact,
    },
    CommandSpec {
        name: "phone",
        usage: "phone <name>",
        description: "shows the phone number(s) of the specified contact (e.g., phone John)",
        handler: handlers::show_phone,
    },
    CommandSpec {
        name: "all",
        usage: "all",
        description: "shows all contacts in your address book",
        handler: handlers::show_all,
    },
    CommandSpec {
        name: "add-birthday",
        usage: "add-birthday <name> <birthday>",
        description: "adds a birthday for the specified contact (e.g., add-birthday John 01.01.1990)",
        handler: handlers::add_birthday,
    },
    CommandSpec {
        name: "show-birthday",
        usage: "show-birthday <name>",
        description: "shows the birthday of the specified contact (e.g., show-birthday John)",
        handler: handlers::show_birthday,
    },
    CommandSpec {
        name: "birthdays",
        usage: "birthdays",
        description: "shows upcoming birthdays within the next week",
        handler: handlers::show_upcoming_birthdays,
    },
    CommandSpec {
        name: "hello",
        usage: "hello",
        description: "receive a greeting from the bot",
        handler: handlers::hello,
    },
    CommandSpec {
        name: "info",
        usage: "info",
        description: "displays the list of available commands",
        handler: handlers::show_info,
    },
];

/// Split an input line into a lowercased command and verbatim arguments.
///
/// Returns `None` for blank lines so the loop can re-prompt silently.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// Resolve a command against the dispatch table and run its handler.
///
/// Handler-level errors never escape: they come back as error-category
/// output, and an unknown command is an "Invalid command." error.
pub fn dispatch(command: &str, args: &[String], ctx: &mut Context) -> CommandOutput {
    let Some(spec) = COMMANDS.iter().find(|spec| spec.name == command) else {
        debug!(command, "unknown command");
        return CommandOutput::error("Invalid command.");
    };

    debug!(command, argc = args.len(), "dispatching");
    match (spec.handler)(args, ctx) {
        Ok(output) => output,
        Err(err) => CommandOutput::error(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressBook;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_parse_input_lowercases_command_only() {
        let (command, args) = parse_input("ADD John 0991234567").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["John", "0991234567"]);
    }

    #[test]
    fn test_parse_input_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   ").is_none());
    }

    #[test]
    fn test_parse_input_collapses_whitespace() {
        let (command, args) = parse_input("  phone   John  ").unwrap();
        assert_eq!(command, "phone");
        assert_eq!(args, vec!["John"]);
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let mut book = AddressBook::new();
        let mut ctx = Context {
            book: &mut book,
            window_days: 7,
            today: today(),
        };
        let output = dispatch("frobnicate", &[], &mut ctx);
        assert_eq!(output.category, OutputCategory::Error);
        assert_eq!(output.text, "Invalid command.");
    }

    #[test]
    fn test_dispatch_table_has_no_duplicate_names() {
        let mut names: Vec<&str> = COMMANDS.iter().map(|spec| spec.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }

    #[test]
    fn test_dispatch_converts_handler_errors_to_output() {
        let mut book = AddressBook::new();
        let mut ctx = Context {
            book: &mut book,
            window_days: 7,
            today: today(),
        };
        // Wrong argument count surfaces as an error-category usage message
        let output = dispatch("add", &["John".to_string()], &mut ctx);
        assert_eq!(output.category, OutputCategory::Error);
        assert!(output.text.contains("add <name> <phone>"));
    }
}
