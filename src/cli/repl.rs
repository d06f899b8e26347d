//! Interactive command loop
//!
//! Reads one line at a time, runs it and prints the reply. A failed
//! command is reported and the loop carries on; only `close`/`exit` or the
//! end of input stop it.

use std::io::BufRead;

use anyhow::{Context, Result};

use super::commands::{self, Session};
use super::output::Output;

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Runs commands from `input` until exit or end of input
pub fn run<R: BufRead>(mut input: R, session: &mut Session, output: &Output) -> Result<()> {
    if !output.is_json() {
        output.success(WELCOME);
    }

    let mut buf = Vec::new();
    loop {
        output.prompt(PROMPT).context("Failed to write prompt")?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).context("Failed to read command")? == 0 {
            output.verbose("End of input");
            break;
        }
        // Invalid UTF-8 is replaced with U+FFFD
        let line = String::from_utf8_lossy(&buf);

        let Some((command, args)) = commands::parse_input(&line) else {
            continue;
        };
        output.verbose_ctx(command, &format!("args: {:?}", args));

        match commands::execute(session, command, &args) {
            Ok(reply) => {
                output.reply(&reply);
                if reply.exit {
                    break;
                }
            }
            Err(err) => {
                output.verbose_ctx(command, &format!("failed: {:?}", err));
                output.error(&err.to_string());
            }
        }
    }

    output.verbose_ctx("session", &format!("{} contacts at exit", session.book.len()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    use crate::cli::OutputFormat;

    fn session() -> Session {
        Session::new(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
    }

    #[test]
    fn invalid_utf8_line_does_not_end_session() {
        let mut session = session();
        let output = Output::new(OutputFormat::Json, false);
        let input = Cursor::new(b"add Al\xffce 1234567890\nadd Bob 1111111111\n".to_vec());

        run(input, &mut session, &output).unwrap();

        assert!(session.book.find("Al\u{FFFD}ce").is_some());
        assert!(session.book.find("Bob").is_some());
    }

    #[test]
    fn exit_stops_before_remaining_lines() {
        let mut session = session();
        let output = Output::new(OutputFormat::Json, false);
        let input = Cursor::new(b"exit\nadd Bob 1111111111\n".to_vec());

        run(input, &mut session, &output).unwrap();

        assert!(session.book.is_empty());
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let mut session = session();
        let output = Output::new(OutputFormat::Json, false);
        let input = Cursor::new(b"add Bob 1111111111\r\n".to_vec());

        run(input, &mut session, &output).unwrap();

        assert_eq!(session.book.find("Bob").unwrap().phones().len(), 1);
    }
}
