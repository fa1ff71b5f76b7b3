//! Parsing of shell command lines.

use thiserror::Error;
use vet_tracker_core::models::{Field, UnknownField};

/// Command parse errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Field(#[from] UnknownField),

    #[error("Unknown export format: {0} (expected json or csv)")]
    Format(String),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a draft field; an empty value clears it
    Set { field: Field, value: String },
    /// Draw the form
    Show,
    /// Draw the patient list
    List,
    /// Select a patient for editing
    Edit { id: String },
    /// Leave edit mode
    Cancel,
    /// Validate and save the draft
    Submit,
    /// Delete a patient
    Delete { id: String },
    /// Print the patient list as JSON or CSV
    Export(ExportFormat),
    Help,
    Quit,
}

/// Help text listing every command.
pub const HELP: &str = r#"Commands:
  set <field> <value>   Fill a form field (pet, owner, email, date, symptoms)
  show                  Show the form
  submit                Add the patient, or save changes while editing
  list                  List patients
  edit <id>             Load a patient into the form
  cancel                Stop editing and clear the form
  delete <id>           Delete a patient
  export <json|csv>     Print the patient list
  help                  Show this help
  quit                  Exit"#;

/// Parse one input line.
pub fn parse_command(line: &str) -> CommandResult<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name.to_lowercase().as_str() {
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                return Err(CommandError::MissingArgument("field"));
            }
            Ok(Command::Set {
                field: field.parse()?,
                value: value.to_string(),
            })
        }
        "show" | "form" => Ok(Command::Show),
        "list" | "ls" => Ok(Command::List),
        "edit" => Ok(Command::Edit {
            id: required(rest, "id")?,
        }),
        "cancel" => Ok(Command::Cancel),
        "submit" | "save" => Ok(Command::Submit),
        "delete" | "rm" => Ok(Command::Delete {
            id: required(rest, "id")?,
        }),
        "export" => match rest.to_lowercase().as_str() {
            "json" => Ok(Command::Export(ExportFormat::Json)),
            "csv" => Ok(Command::Export(ExportFormat::Csv)),
            "" => Err(CommandError::MissingArgument("format")),
            other => Err(CommandError::Format(other.to_string())),
        },
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn required(arg: &str, name: &'static str) -> CommandResult<String> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument(name))
    } else {
        Ok(arg.to_string())
    }
}
