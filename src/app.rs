use crate::command::Command;
use crate::domain::filter::Filter;
use crate::domain::todo::{Stats, Todo, TodoId};
use crate::error::Result;
use crate::repo::TodoRepository;

/// What a command produced, for the caller to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Todo),
    Toggled { id: TodoId, done: bool },
    Removed(Todo),
    Listed { filter: Filter, todos: Vec<Todo> },
    FilterChanged(Filter),
    Cleared(usize),
    Stats(Stats),
    Help,
}

pub struct App<R: TodoRepository> {
    repo: R,
    pub filter: Filter,
}

impl<R: TodoRepository> App<R> {
    pub fn new(repo: R, filter: Filter) -> Self {
        Self { repo, filter }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn visible(&self) -> Vec<Todo> {
        self.repo.list(self.filter)
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        log::trace!("applying {command:?}");
        match command {
            Command::Add(task) => self.add_todo(task).map(Outcome::Added),
            Command::Toggle(id) => self
                .toggle(id)
                .map(|done| Outcome::Toggled { id, done }),
            Command::Remove(id) => self.remove(id).map(Outcome::Removed),
            Command::List(filter) => {
                let filter = filter.unwrap_or(self.filter);
                Ok(Outcome::Listed {
                    filter,
                    todos: self.repo.list(filter),
                })
            }
            Command::SetFilter(filter) => {
                self.set_filter(filter);
                Ok(Outcome::FilterChanged(filter))
            }
            Command::ClearCompleted => Ok(Outcome::Cleared(self.clear_completed())),
            Command::Stats => Ok(Outcome::Stats(self.repo.stats())),
            Command::Help => Ok(Outcome::Help),
        }
    }

    pub fn add_todo(&mut self, task: String) -> Result<Todo> {
        let todo = self.repo.add(task)?;
        log::info!("added todo {}", todo.id);
        Ok(todo)
    }

    pub fn toggle(&mut self, id: TodoId) -> Result<bool> {
        let done = self.repo.toggle(id).inspect_err(|err| {
            log::debug!("toggle failed: {err}");
        })?;
        log::info!("todo {id} done={done}");
        Ok(done)
    }

    pub fn remove(&mut self, id: TodoId) -> Result<Todo> {
        let removed = self.repo.remove(id).inspect_err(|err| {
            log::debug!("remove failed: {err}");
        })?;
        log::info!("removed todo {id}");
        Ok(removed)
    }

    pub fn set_filter(&mut self, filter: Filter) {
        log::debug!("filter {} -> {}", self.filter, filter);
        self.filter = filter;
    }

    pub fn clear_completed(&mut self) -> usize {
        let removed = self.repo.clear_completed();
        if removed > 0 {
            log::info!("cleared {removed} completed todos");
        }
        removed
    }
}
