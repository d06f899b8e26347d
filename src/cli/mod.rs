//! # Command-Line Interface
//!
//! An interactive loop over the contact book.
//!
//! ## Commands
//!
//! | Command | Arguments | Purpose |
//! |---------|-----------|---------|
//! | `hello` | | Greeting |
//! | `add` | `<name> <phone>` | Add a contact or append a phone |
//! | `change` | `<name> <phone>` | Replace the first phone |
//! | `phone` | `<name>` | Show a contact |
//! | `all` | | Show every contact |
//! | `add-birthday` | `<name> <DD.MM.YYYY>` | Set a birthday |
//! | `show-birthday` | `<name>` | Show a birthday |
//! | `birthdays` | | Birthdays in the next week |
//! | `remove-phone` | `<name> <phone>` | Remove a phone |
//! | `delete` | `<name>` | Delete a contact |
//! | `help` | | List commands |
//! | `close`, `exit` | | Leave |
//!
//! Command names are case-insensitive.
//!
//! ## Output Formats
//!
//! `--format text` (default) prints plain replies; `--format json` prints
//! one JSON value per reply.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the loop.

mod app;
mod output;
mod error;
mod commands;
mod repl;

pub use app::{Cli, run};
pub use output::{Output, OutputFormat};
pub use error::CommandError;
pub use commands::{execute, lookup, parse_input, CommandSpec, Reply, Session, COMMANDS};
