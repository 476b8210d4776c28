use std::io::Write;

use anyhow::Result;

use crate::app::Outcome;
use crate::command::USAGE;
use crate::domain::todo::Todo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

pub fn write_outcome(out: &mut impl Write, outcome: &Outcome, format: Format) -> Result<()> {
    match (outcome, format) {
        (Outcome::Listed { todos, .. }, Format::Json) => {
            for todo in todos {
                writeln!(out, "{}", serde_json::to_string(todo)?)?;
            }
        }
        (Outcome::Listed { filter, todos }, Format::Text) => {
            if todos.is_empty() {
                writeln!(out, "(no {filter} todos)")?;
            }
            for todo in todos {
                writeln!(out, "{}", todo_line(todo))?;
            }
        }
        (Outcome::Added(todo) | Outcome::Removed(todo), Format::Json) => {
            writeln!(out, "{}", serde_json::to_string(todo)?)?;
        }
        (Outcome::Added(todo), Format::Text) => writeln!(out, "added {}", todo_line(todo))?,
        (Outcome::Removed(todo), Format::Text) => writeln!(out, "removed {}", todo_line(todo))?,
        (Outcome::Toggled { id, done }, Format::Json) => {
            writeln!(out, "{}", serde_json::json!({ "id": id, "done": done }))?;
        }
        (Outcome::Toggled { id, done }, Format::Text) => {
            let state = if *done { "completed" } else { "active" };
            writeln!(out, "#{id} is now {state}")?;
        }
        (Outcome::FilterChanged(filter), Format::Json) => {
            writeln!(out, "{}", serde_json::json!({ "filter": filter }))?;
        }
        (Outcome::FilterChanged(filter), Format::Text) => writeln!(out, "filter: {filter}")?,
        (Outcome::Cleared(n), Format::Json) => {
            writeln!(out, "{}", serde_json::json!({ "cleared": n }))?;
        }
        (Outcome::Cleared(n), Format::Text) => writeln!(out, "cleared {n} completed")?,
        (Outcome::Stats(stats), Format::Json) => {
            writeln!(out, "{}", serde_json::to_string(stats)?)?;
        }
        (Outcome::Stats(stats), Format::Text) => writeln!(
            out,
            "Open: {} / Done: {} / All: {}",
            stats.active, stats.completed, stats.total
        )?,
        (Outcome::Help, Format::Json) => {
            writeln!(out, "{}", serde_json::json!({ "usage": USAGE }))?;
        }
        (Outcome::Help, Format::Text) => writeln!(out, "{USAGE}")?,
    }
    Ok(())
}

fn todo_line(todo: &Todo) -> String {
    let symbol = if todo.done { "✔" } else { "•" };
    format!("{symbol} {:>3} {}", todo.id, todo.task)
}
