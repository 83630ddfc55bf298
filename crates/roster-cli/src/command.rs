//! Commands accepted by the interactive browser.

use std::num::NonZeroUsize;
use std::str::FromStr;

use roster_model::{Field, FieldUpdate, ModelError, RecordDraft, parse_salary};
use thiserror::Error;

/// Help text printed by the `help` command.
pub const HELP: &str = "\
commands:
  search [text]                         filter by full name (no text clears)
  sort <name|dob|position|salary>       cycle: ascending, descending, off
  page <n> | next | prev | first | last move between pages
  size <n>                              rows per page
  add <name> | <YYYY-MM-DD> | <position> [| <salary>]
  rm <row>                              remove the record at row number
  edit <row>                            start editing a record
  set <name|dob|position|salary> <value>  change a field of the record being edited
  save                                  finish editing
  show                                  redraw the table
  help                                  this text
  quit                                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    /// Raw column name; validated by the browser.
    Sort(String),
    /// One-based page number.
    Page(usize),
    Next,
    Previous,
    First,
    Last,
    Size(NonZeroUsize),
    Add(RecordDraft),
    /// One-based row number on screen.
    Remove(usize),
    Edit(usize),
    Set(FieldUpdate),
    Save,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`; type `help` for a list")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("expected a positive number, got `{0}`")]
    InvalidNumber(String),
    #[error("usage: add <name> | <YYYY-MM-DD> | <position> [| <salary>]")]
    AddFormat,
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "search" | "find" | "/" => Ok(Command::Search(rest.to_string())),
            "sort" => {
                require(rest, "sort", "a column name")?;
                Ok(Command::Sort(rest.to_string()))
            }
            "page" | "p" => Ok(Command::Page(positive(require(
                rest,
                "page",
                "a page number",
            )?)?)),
            "next" | "n" => Ok(Command::Next),
            "prev" | "previous" => Ok(Command::Previous),
            "first" => Ok(Command::First),
            "last" => Ok(Command::Last),
            "size" => {
                let value = positive(require(rest, "size", "a page size")?)?;
                NonZeroUsize::new(value)
                    .map(Command::Size)
                    .ok_or_else(|| CommandError::InvalidNumber(rest.to_string()))
            }
            "add" => parse_add(rest),
            "rm" | "remove" | "delete" => Ok(Command::Remove(positive(require(
                rest,
                "rm",
                "a row number",
            )?)?)),
            "edit" => Ok(Command::Edit(positive(require(
                rest,
                "edit",
                "a row number",
            )?)?)),
            "set" => parse_set(rest),
            "save" | "done" => Ok(Command::Save),
            "show" | "ls" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn require<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

fn positive(value: &str) -> Result<usize, CommandError> {
    match value.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(CommandError::InvalidNumber(value.to_string())),
    }
}

fn parse_add(rest: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
    let (name, dob, position, salary) = match parts.as_slice() {
        [name, dob, position] => (*name, *dob, *position, None),
        [name, dob, position, salary] => (*name, *dob, *position, Some(*salary)),
        _ => return Err(CommandError::AddFormat),
    };
    let mut draft = RecordDraft {
        full_name: name.to_string(),
        date_of_birth: dob.to_string(),
        position: position.parse()?,
        ..RecordDraft::default()
    };
    if let Some(salary) = salary {
        draft.salary = parse_salary(salary)?;
    }
    Ok(Command::Add(draft))
}

fn parse_set(rest: &str) -> Result<Command, CommandError> {
    let (field, value) = rest
        .split_once(char::is_whitespace)
        .ok_or(CommandError::MissingArgument {
            command: "set",
            expected: "a field and a value",
        })?;
    let field: Field = field.parse()?;
    Ok(Command::Set(FieldUpdate::parse(field, value.trim())?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::Position;

    #[test]
    fn navigation() {
        assert_eq!("next".parse::<Command>(), Ok(Command::Next));
        assert_eq!("  PAGE 3 ".parse::<Command>(), Ok(Command::Page(3)));
        assert_eq!(
            "page 0".parse::<Command>(),
            Err(CommandError::InvalidNumber("0".to_string()))
        );
        assert_eq!(
            "size".parse::<Command>(),
            Err(CommandError::MissingArgument {
                command: "size",
                expected: "a page size",
            })
        );
    }

    #[test]
    fn search_keeps_inner_spaces() {
        assert_eq!(
            "search  Nguyễn An ".parse::<Command>(),
            Ok(Command::Search("Nguyễn An".to_string()))
        );
        assert_eq!("search".parse::<Command>(), Ok(Command::Search(String::new())));
    }

    #[test]
    fn add_with_and_without_salary() {
        let Ok(Command::Add(draft)) = "add Lê Lan | 1999-09-09 | backend | 2100".parse::<Command>() else {
            panic!("expected add");
        };
        assert_eq!(draft.full_name, "Lê Lan");
        assert_eq!(draft.position, Position::Backend);
        assert_eq!(draft.salary, 2100);

        let Ok(Command::Add(draft)) = "add Lê Lan | 1999-09-09 | Hr".parse::<Command>() else {
            panic!("expected add");
        };
        assert_eq!(draft.salary, roster_model::DEFAULT_SALARY);

        assert_eq!(
            "add Lê Lan".parse::<Command>(),
            Err(CommandError::AddFormat)
        );
        assert!(matches!(
            "add A | 2000-01-01 | Designer".parse::<Command>(),
            Err(CommandError::Model(ModelError::InvalidPosition(_)))
        ));
    }

    #[test]
    fn set_is_typed() {
        assert_eq!(
            "set salary 4200".parse::<Command>(),
            Ok(Command::Set(FieldUpdate::Salary(4200)))
        );
        assert_eq!(
            "set name Hoàng Huy".parse::<Command>(),
            Ok(Command::Set(FieldUpdate::FullName("Hoàng Huy".to_string())))
        );
        assert!(matches!(
            "set salary many".parse::<Command>(),
            Err(CommandError::Model(ModelError::InvalidSalary(_)))
        ));
        assert!(matches!(
            "set salary".parse::<Command>(),
            Err(CommandError::MissingArgument { .. })
        ));
    }

    #[test]
    fn unknown_and_empty() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
