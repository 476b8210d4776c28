use crate::domain::filter::Filter;
use crate::domain::todo::{Stats, Todo, TodoId};
use crate::error::Result;

pub mod memory;

/// Ordered store of todos. Readers get owned copies; every mutation goes
/// through `&mut self`.
pub trait TodoRepository {
    fn all(&self) -> Vec<Todo>;
    fn get(&self, id: TodoId) -> Option<Todo>;
    fn add(&mut self, task: String) -> Result<Todo>;
    /// Flips `done` and returns the new value.
    fn toggle(&mut self, id: TodoId) -> Result<bool>;
    fn remove(&mut self, id: TodoId) -> Result<Todo>;
    fn clear_completed(&mut self) -> usize;

    fn list(&self, filter: Filter) -> Vec<Todo> {
        self.all().into_iter().filter(|t| filter.matches(t)).collect()
    }

    fn stats(&self) -> Stats {
        Stats::of(&self.all())
    }
}
