use std::str::FromStr;

use crate::domain::filter::Filter;
use crate::domain::todo::TodoId;
use crate::error::{Result, TodoError};

pub const USAGE: &str = "\
commands:
  add <text>        add a new todo
  toggle <id>       flip completion
  remove <id>       delete a todo (alias: rm)
  list [filter]     show todos (all, active, completed)
  filter <filter>   change the default list filter
  clear             remove completed todos
  stats             show counts
  help              show this text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(TodoId),
    Remove(TodoId),
    List(Option<Filter>),
    SetFilter(Filter),
    ClearCompleted,
    Stats,
    Help,
}

impl Command {
    /// Parses one script line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (keyword, rest) = match s.split_once(char::is_whitespace) {
            Some((k, r)) => (k, r.trim()),
            None => (s, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "add" => {
                if rest.is_empty() {
                    return Err(TodoError::InvalidInput("task text is empty".into()));
                }
                Ok(Command::Add(rest.to_string()))
            }
            "toggle" => parse_id(keyword, rest).map(Command::Toggle),
            "remove" | "rm" => parse_id(keyword, rest).map(Command::Remove),
            "list" => {
                if rest.is_empty() {
                    Ok(Command::List(None))
                } else {
                    rest.parse().map(|f| Command::List(Some(f)))
                }
            }
            "filter" => {
                if rest.is_empty() {
                    return Err(TodoError::InvalidCommand("filter needs a value".into()));
                }
                rest.parse().map(Command::SetFilter)
            }
            "clear" => no_args(keyword, rest, Command::ClearCompleted),
            "stats" => no_args(keyword, rest, Command::Stats),
            "help" => Ok(Command::Help),
            "" => Err(TodoError::InvalidCommand("empty command".into())),
            other => Err(TodoError::InvalidCommand(format!("unknown command '{other}'"))),
        }
    }
}

fn parse_id(keyword: &str, raw: &str) -> Result<TodoId> {
    if raw.is_empty() {
        return Err(TodoError::InvalidCommand(format!("{keyword} needs an id")));
    }
    let invalid = || TodoError::InvalidCommand(format!("'{raw}' is not a valid id"));
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse().map_err(|_| invalid())
}

fn no_args(keyword: &str, rest: &str, cmd: Command) -> Result<Command> {
    if rest.is_empty() {
        Ok(cmd)
    } else {
        Err(TodoError::InvalidCommand(format!(
            "{keyword} takes no arguments"
        )))
    }
}
