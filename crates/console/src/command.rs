//! Parsing of console input lines.
//!
//! ```text
//! set <field> [value...]   edit a form field (no value empties it)
//! create | update | retrieve | like | delete | search
//! clear                    empty the form and the status
//! show                     print the form
//! html                     print the last search result as HTML
//! help | ?
//! quit | exit
//! ```

use storefront_client::Operation;
use storefront_core::{FormError, FormField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: FormField, value: String },
    Run(Operation),
    Clear,
    Show,
    Html,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Usage: set <field> [value]")]
    MissingField,

    #[error(transparent)]
    Form(#[from] FormError),
}

pub const HELP: &str = "\
Commands:
  set <field> [value]  edit a field: id, name, category, available, like,
                       color, size, create_date, last_modify_date
  create | update | retrieve | like | delete | search
  clear                empty the form and the status
  show                 print the form
  html                 print the last search result as HTML
  help | ?             print this text
  quit | exit";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let command = match word {
        "" => return Ok(None),
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                return Err(CommandError::MissingField);
            }
            Command::Set {
                field: field.parse()?,
                value: value.to_string(),
            }
        }
        "clear" => Command::Clear,
        "show" => Command::Show,
        "html" => Command::Html,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => other
            .parse::<Operation>()
            .map(Command::Run)
            .map_err(|_| CommandError::Unknown(other.to_string()))?,
    };

    Ok(Some(command))
}
