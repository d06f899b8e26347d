//! Command table and handlers
//!
//! Each command is a row in [`COMMANDS`]: its name, the arguments it takes
//! and the handler that runs it against the session's address book.
//! Handlers return a [`Reply`] or a [`CommandError`]; they never print.

use chrono::NaiveDate;
use serde_json::json;

use super::error::CommandError;
use crate::domain::{AddressBook, Birthday, Contact, DATE_FORMAT};

/// State shared by all commands for the lifetime of the process
#[derive(Debug)]
pub struct Session {
    pub book: AddressBook,
    /// Reference date for birthday queries
    pub today: NaiveDate,
}

impl Session {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            book: AddressBook::new(),
            today,
        }
    }
}

/// The result of a successful command
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Text shown in text mode
    pub message: String,
    /// Structured form shown in JSON mode
    pub data: Option<serde_json::Value>,
    /// Ends the session once printed
    pub exit: bool,
}

impl Reply {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            exit: false,
        }
    }

    pub fn with_data(message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            ..Self::text(message)
        }
    }

    pub fn exit(message: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::text(message)
        }
    }
}

type Handler = fn(&mut Session, &[String]) -> Result<Reply, CommandError>;

/// A command name, its arguments and what it does
pub struct CommandSpec {
    pub name: &'static str,
    pub args: &'static [&'static str],
    pub about: &'static str,
    handler: Handler,
}

impl CommandSpec {
    /// `add <name> <phone>`
    pub fn usage(&self) -> String {
        self.args
            .iter()
            .fold(self.name.to_string(), |usage, arg| format!("{} <{}>", usage, arg))
    }
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "hello",
        args: &[],
        about: "Greet the assistant",
        handler: hello,
    },
    CommandSpec {
        name: "add",
        args: &["name", "phone"],
        about: "Add a contact or append a phone to it",
        handler: add_contact,
    },
    CommandSpec {
        name: "change",
        args: &["name", "phone"],
        about: "Replace a contact's first phone",
        handler: change_contact,
    },
    CommandSpec {
        name: "phone",
        args: &["name"],
        about: "Show a contact",
        handler: show_contact,
    },
    CommandSpec {
        name: "all",
        args: &[],
        about: "Show all contacts",
        handler: show_all,
    },
    CommandSpec {
        name: "add-birthday",
        args: &["name", "DD.MM.YYYY"],
        about: "Set a contact's birthday",
        handler: add_birthday,
    },
    CommandSpec {
        name: "show-birthday",
        args: &["name"],
        about: "Show a contact's birthday",
        handler: show_birthday,
    },
    CommandSpec {
        name: "birthdays",
        args: &[],
        about: "List birthdays in the next week",
        handler: birthdays,
    },
    CommandSpec {
        name: "remove-phone",
        args: &["name", "phone"],
        about: "Remove a phone from a contact",
        handler: remove_phone,
    },
    CommandSpec {
        name: "delete",
        args: &["name"],
        about: "Delete a contact",
        handler: delete_contact,
    },
    CommandSpec {
        name: "help",
        args: &[],
        about: "List commands",
        handler: help,
    },
    CommandSpec {
        name: "close",
        args: &[],
        about: "Exit the assistant",
        handler: goodbye,
    },
    CommandSpec {
        name: "exit",
        args: &[],
        about: "Exit the assistant",
        handler: goodbye,
    },
];

/// Finds a command by name, ignoring case
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}

/// Splits a line into a command name and its arguments
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<String>)> {
    let mut tokens = line.split_ascii_whitespace();
    let command = tokens.next()?;
    Some((command, tokens.map(str::to_string).collect()))
}

/// Runs one command against the session
pub fn execute(
    session: &mut Session,
    command: &str,
    args: &[String],
) -> Result<Reply, CommandError> {
    let spec = lookup(command).ok_or(CommandError::UnknownCommand)?;
    if args.len() != spec.args.len() {
        return Err(CommandError::Arity { usage: spec.usage() });
    }
    (spec.handler)(session, args)
}

fn hello(_: &mut Session, _: &[String]) -> Result<Reply, CommandError> {
    Ok(Reply::text("How can I help you?"))
}

fn goodbye(_: &mut Session, _: &[String]) -> Result<Reply, CommandError> {
    Ok(Reply::exit("Good bye!"))
}

fn add_contact(session: &mut Session, args: &[String]) -> Result<Reply, CommandError> {
    let (name, phone) = (&args[0], &args[1]);

    if let Some(contact) = session.book.find_mut(name) {
        contact.add_phone(phone)?;
        return Ok(Reply::text("Contact updated."));
    }

    let mut contact = Contact::new(name.as_str())?;
    contact.add_phone(phone)?;
    session.book.add_record(contact);
    Ok(Reply::text("Contact added."))
}

fn change_contact(session: &mut Session, args: &[String]) -> Result<Reply, CommandError> {
    let (name, new_phone) = (&args[0], &args[1]);
    let contact = find_mut(&mut session.book, name)?;

    let old_phone = contact
        .phones()
        .first()
        .map(|p| p.as_str().to_string())
        .ok_or_else(|| {
            CommandError::Validation(format!("Contact '{}' has no phone numbers.", name))
        })?;

    if old_phone == *new_phone {
        return Ok(Reply::text("Phone number is already up to date."));
    }
    contact.edit_phone(&old_phone, new_phone)?;
    Ok(Reply::text("Contact updated."))
}

fn show_contact(session: &mut Session, args: &[String]) -> Result<Reply, CommandError> {
    let contact = find(&session.book, &args[0])?;
    Ok(Reply::with_data(contact.to_string(), json!(contact)))
}

fn show_all(session: &mut Session, _: &[String]) -> Result<Reply, CommandError> {
    let contacts: Vec<&Contact> = session.book.iter().collect();
    let message = if contacts.is_empty() {
        "No contacts found".to_string()
    } else {
        contacts
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    };
    Ok(Reply::with_data(message, json!(contacts)))
}

fn add_birthday(session: &mut Session, args: &[String]) -> Result<Reply, CommandError> {
    let name = &args[0];
    let birthday = Birthday::new(&args[1])?;

    match session.book.find_mut(name) {
        Some(contact) => contact.set_birthday(birthday),
        None => {
            let mut contact = Contact::new(name.as_str())?;
            contact.set_birthday(birthday);
            session.book.add_record(contact);
        }
    }
    Ok(Reply::text("Birthday added."))
}

fn show_birthday(session: &mut Session, args: &[String]) -> Result<Reply, CommandError> {
    let contact = find(&session.book, &args[0])?;
    let message = match contact.birthday() {
        Some(birthday) => format!("{}: {}", contact.name(), birthday),
        None => "No birthday information".to_string(),
    };
    Ok(Reply::with_data(
        message,
        json!({ "name": contact.name(), "birthday": contact.birthday() }),
    ))
}

fn birthdays(session: &mut Session, _: &[String]) -> Result<Reply, CommandError> {
    let upcoming = session.book.upcoming_birthdays(session.today);
    let message = if upcoming.is_empty() {
        "No birthdays in the next week.".to_string()
    } else {
        upcoming
            .iter()
            .map(|u| format!("{}: {}", u.name, u.congratulation_date.format(DATE_FORMAT)))
            .collect::<Vec<_>>()
            .join("\n")
    };
    Ok(Reply::with_data(message, json!(upcoming)))
}

fn remove_phone(session: &mut Session, args: &[String]) -> Result<Reply, CommandError> {
    let (name, phone) = (&args[0], &args[1]);
    let contact = find_mut(&mut session.book, name)?;
    if contact.remove_phone(phone) == 0 {
        return Err(CommandError::PhoneNotFound(phone.clone()));
    }
    Ok(Reply::text("Phone removed."))
}

fn delete_contact(session: &mut Session, args: &[String]) -> Result<Reply, CommandError> {
    let name = &args[0];
    session
        .book
        .delete(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;
    Ok(Reply::text("Contact deleted."))
}

fn help(_: &mut Session, _: &[String]) -> Result<Reply, CommandError> {
    let usages: Vec<String> = COMMANDS.iter().map(CommandSpec::usage).collect();
    let width = usages.iter().map(String::len).max().unwrap_or(0);
    let lines: Vec<String> = COMMANDS
        .iter()
        .zip(&usages)
        .map(|(spec, usage)| {
            format!("{:<width$}  {}", usage, spec.about, width = width)
        })
        .collect();
    Ok(Reply::with_data(lines.join("\n"), json!(usages)))
}

fn find<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Contact, CommandError> {
    book.find(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}

fn find_mut<'a>(
    book: &'a mut AddressBook,
    name: &str,
) -> Result<&'a mut Contact, CommandError> {
    book.find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.to_string()))
}
