//! Command handlers.
//!
//! Each handler is a pure function from positional arguments plus a
//! [`Context`] to a categorized [`CommandOutput`]. Domain errors surface
//! as [`CommandError`] and are converted to error output by the
//! dispatcher; nothing here prints or colors anything.

use super::{CommandOutput, Context, COMMANDS};
use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;

/// Exactly `count` arguments, or a usage error naming the command.
fn expect_args<'a>(
    args: &'a [String],
    count: usize,
    command: &'static str,
    usage: &'static str,
) -> CommandResult<&'a [String]> {
    if args.len() != count {
        return Err(CommandError::Usage { command, usage });
    }
    Ok(args)
}

/// `add <name> <phone>`: create the record if needed, then append the phone.
///
/// The phone is validated before the record is touched, so an invalid
/// phone never leaves behind an empty contact.
pub fn add_contact(args: &[String], ctx: &mut Context) -> CommandResult<CommandOutput> {
    let args = expect_args(args, 2, "add", "add <name> <phone>")?;
    let phone = PhoneNumber::new(args[1].clone())?;
    let name = &args[0];

    let message = match ctx.book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone);
            format!("Contact {} updated.", name)
        }
        None => {
            let mut record = Record::new(ContactName::new(name.clone())?);
            record.add_phone(phone);
            ctx.book.add_record(record);
            format!("Contact {} added to address book.", name)
        }
    };

    Ok(CommandOutput::success(message))
}

/// `change <name> <old phone> <new phone>`: swap a phone on an existing contact.
pub fn change_contact(args: &[String], ctx: &mut Context) -> CommandResult<CommandOutput> {
    let args = expect_args(args, 3, "change", "change <name> <old phone> <new phone>")?;
    let record = ctx
        .book
        .find_mut(&args[0])
        .ok_or_else(|| CommandError::NotFound(args[0].clone()))?;

    let message = record.edit_phone(&args[1], &args[2])?;
    Ok(CommandOutput::success(message))
}

/// `phone <name>`: list the contact's phones.
pub fn show_phone(args: &[String], ctx: &mut Context) -> CommandResult<CommandOutput> {
    let args = expect_args(args, 1, "phone", "phone <name>")?;
    let record = ctx
        .book
        .find(&args[0])
        .ok_or_else(|| CommandError::NotFound(args[0].clone()))?;

    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Ok(CommandOutput::success(format!(
        "Contact '{}' phones: {}",
        record.name(),
        phones
    )))
}

/// `all`: every record, one per line, in insertion order.
pub fn show_all(args: &[String], ctx: &mut Context) -> CommandResult<CommandOutput> {
    expect_args(args, 0, "all", "all")?;
    if ctx.book.is_empty() {
        return Ok(CommandOutput::error("No contacts available."));
    }

    let lines = ctx
        .book
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(CommandOutput::success(lines))
}

/// `add-birthday <name> <birthday>`: set (or overwrite) a contact's birthday.
pub fn add_birthday(args: &[String], ctx: &mut Context) -> CommandResult<CommandOutput> {
    let args = expect_args(args, 2, "add-birthday", "add-birthday <name> <birthday>")?;
    let birthday = Birthday::parse(&args[1])?;
    let record = ctx
        .book
        .find_mut(&args[0])
        .ok_or_else(|| CommandError::NotFound(args[0].clone()))?;

    let message = record.add_birthday(birthday);
    Ok(CommandOutput::success(message))
}

/// `show-birthday <name>`: show a contact's birthday, info message if unset.
pub fn show_birthday(args: &[String], ctx: &mut Context) -> CommandResult<CommandOutput> {
    let args = expect_args(args, 1, "show-birthday", "show-birthday <name>")?;
    let record = ctx
        .book
        .find(&args[0])
        .ok_or_else(|| CommandError::NotFound(args[0].clone()))?;

    match record.birthday() {
        Some(birthday) => Ok(CommandOutput::success(format!(
            "{} has Birthday on {}",
            record.name(),
            birthday
        ))),
        None => Ok(CommandOutput::info(format!(
            "{} has no birthday set",
            record.name()
        ))),
    }
}

/// `birthdays`: contacts to congratulate within the configured window.
pub fn show_upcoming_birthdays(args: &[String], ctx: &mut Context) -> CommandResult<CommandOutput> {
    expect_args(args, 0, "birthdays", "birthdays")?;
    if ctx.book.is_empty() {
        return Ok(CommandOutput::error("No contacts available."));
    }

    let upcoming = ctx.book.upcoming_birthdays(ctx.today, ctx.window_days);
    if upcoming.is_empty() {
        return Ok(CommandOutput::success("No birthdays soon."));
    }

    let lines = upcoming
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.date.format("%d.%m.%Y")))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(CommandOutput::success(lines))
}

/// `hello`: a greeting.
pub fn hello(args: &[String], _ctx: &mut Context) -> CommandResult<CommandOutput> {
    expect_args(args, 0, "hello", "hello")?;
    Ok(CommandOutput::info("How can I help you?"))
}

/// `info`: the command reference, built from the dispatch table itself.
pub fn show_info(args: &[String], _ctx: &mut Context) -> CommandResult<CommandOutput> {
    expect_args(args, 0, "info", "info")?;

    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|spec| format!("{}: {}", spec.usage, spec.description)),
    );
    lines.push("close or exit: exits the application".to_string());
    Ok(CommandOutput::info(lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OutputCategory;
    use crate::models::AddressBook;
    use chrono::NaiveDate;

    fn ctx(book: &mut AddressBook) -> Context<'_> {
        Context {
            book,
            window_days: 7,
            today: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        }
    }

    fn strings(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_creates_then_updates() {
        let mut book = AddressBook::new();
        let mut ctx = ctx(&mut book);

        let output = add_contact(&strings(&["John", "1111111111"]), &mut ctx).unwrap();
        assert_eq!(output.category, OutputCategory::Success);
        assert_eq!(output.text, "Contact John added to address book.");

        let output = add_contact(&strings(&["John", "2222222222"]), &mut ctx).unwrap();
        assert_eq!(output.text, "Contact John updated.");

        let record = ctx.book.find("John").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_add_invalid_phone_leaves_no_record() {
        let mut book = AddressBook::new();
        let mut ctx = ctx(&mut book);

        assert!(add_contact(&strings(&["John", "123"]), &mut ctx).is_err());
        assert!(ctx.book.is_empty());
    }

    #[test]
    fn test_change_requires_existing_contact() {
        let mut book = AddressBook::new();
        let mut ctx = ctx(&mut book);

        let err = change_contact(
            &strings(&["John", "1111111111", "2222222222"]),
            &mut ctx,
        )
        .unwrap_err();
        assert!(matches!(err, CommandError::NotFound(_)));
    }

    #[test]
    fn test_change_missing_phone_is_success_with_not_found_text() {
        let mut book = AddressBook::new();
        let mut ctx = ctx(&mut book);
        add_contact(&strings(&["John", "1111111111"]), &mut ctx).unwrap();

        let output = change_contact(
            &strings(&["John", "9999999999", "2222222222"]),
            &mut ctx,
        )
        .unwrap();
        assert_eq!(output.category, OutputCategory::Success);
        assert_eq!(output.text, "Phone 9999999999 not found");
    }

    #[test]
    fn test_show_phone_lists_all() {
        let mut book = AddressBook::new();
        let mut ctx = ctx(&mut book);
        add_contact(&strings(&["John", "1111111111"]), &mut ctx).unwrap();
        add_contact(&strings(&["John", "2222222222"]), &mut ctx).unwrap();

        let output = show_phone(&strings(&["John"]), &mut ctx).unwrap();
        assert_eq!(output.text, "Contact 'John' phones: 1111111111; 2222222222");
    }

    #[test]
    fn test_show_all_empty_book_is_error_category() {
        let mut book = AddressBook::new();
        let mut ctx = ctx(&mut book);
        let output = show_all(&[], &mut ctx).unwrap();
        assert_eq!(output.category, OutputCategory::Error);
        assert_eq!(output.text, "No contacts available.");
    }

    #[test]
    fn test_add_and_show_birthday() {
        let mut book = AddressBook::new();
        let mut ctx = ctx(&mut book);
        add_contact(&strings(&["John", "1111111111"]), &mut ctx).unwrap();

        let output = add_birthday(&strings(&["John", "12.06.1990"]), &mut ctx).unwrap();
        assert_eq!(output.text, "John's birthday on 12.06.1990 added");

        let output = show_birthday(&strings(&["John"]), &mut ctx).unwrap();
        assert_eq!(output.text, "John has Birthday on 12.06.1990");
    }

    #[test]
    fn test_show_birthday_unset_is_info() {
        let mut book = AddressBook::new();
        let mut ctx = ctx(&mut book);
        add_contact(&strings(&["John", "1111111111"]), &mut ctx).unwrap();

        let output = show_birthday(&strings(&["John"]), &mut ctx).unwrap();
        assert_eq!(output.category, OutputCategory::Info);
        assert_eq!(output.text, "John has no birthday set");
    }

    #[test]
    fn test_birthdays_empty_book_vs_none_upcoming() {
        let mut book = AddressBook::new();
        let mut ctx = ctx(&mut book);

        let output = show_upcoming_birthdays(&[], &mut ctx).unwrap();
        assert_eq!(output.category, OutputCategory::Error);
        assert_eq!(output.text, "No contacts available.");

        add_contact(&strings(&["John", "1111111111"]), &mut ctx).unwrap();
        let output = show_upcoming_birthdays(&[], &mut ctx).unwrap();
        assert_eq!(output.category, OutputCategory::Success);
        assert_eq!(output.text, "No birthdays soon.");
    }

    #[test]
    fn test_birthdays_renders_adjusted_dates() {
        let mut book = AddressBook::new();
        let mut ctx = ctx(&mut book);
        add_contact(&strings(&["John", "1111111111"]), &mut ctx).unwrap();
        // 15.06.2024 is a Saturday; congratulation shifts to Monday
        add_birthday(&strings(&["John", "15.06.1990"]), &mut ctx).unwrap();

        let output = show_upcoming_birthdays(&[], &mut ctx).unwrap();
        assert_eq!(output.text, "John: 17.06.2024");
    }

    #[test]
    fn test_info_lists_every_command() {
        let mut book = AddressBook::new();
        let mut ctx = ctx(&mut book);
        let output = show_info(&[], &mut ctx).unwrap();
        assert_eq!(output.category, OutputCategory::Info);
        for spec in COMMANDS {
            assert!(output.text.contains(spec.usage), "missing {}", spec.usage);
        }
        assert!(output.text.contains("close or exit"));
    }
}
