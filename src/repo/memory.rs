use super::TodoRepository;
use crate::domain::filter::Filter;
use crate::domain::todo::{Todo, TodoId};
use crate::error::{Result, TodoError};

/// Insertion-ordered store. Ids come from a counter that only moves forward,
/// so a removed id is never handed out again.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepo {
    items: Vec<Todo>,
    last_id: TodoId,
}

impl InMemoryTodoRepo {
    pub fn with_seed<I, S>(seed: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut repo = Self::default();
        for task in seed {
            repo.add(task.into())?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: TodoId) -> Result<usize> {
        self.items
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))
    }
}

impl TodoRepository for InMemoryTodoRepo {
    fn all(&self) -> Vec<Todo> {
        self.items.clone()
    }

    fn get(&self, id: TodoId) -> Option<Todo> {
        self.items.iter().find(|t| t.id == id).cloned()
    }

    fn add(&mut self, task: String) -> Result<Todo> {
        let task = task.trim();
        if task.is_empty() {
            return Err(TodoError::InvalidInput("task text is empty".into()));
        }

        self.last_id += 1;
        let todo = Todo::new(self.last_id, task);
        log::debug!("added todo {} ({:?})", todo.id, todo.task);
        self.items.push(todo.clone());
        Ok(todo)
    }

    fn toggle(&mut self, id: TodoId) -> Result<bool> {
        let pos = self.position(id)?;
        let todo = &mut self.items[pos];
        todo.done = !todo.done;
        log::debug!("toggled todo {id} -> done={}", todo.done);
        Ok(todo.done)
    }

    fn remove(&mut self, id: TodoId) -> Result<Todo> {
        let pos = self.position(id)?;
        let removed = self.items.remove(pos);
        log::debug!("removed todo {id}");
        Ok(removed)
    }

    fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|t| !t.done);
        let removed = before - self.items.len();
        log::debug!("cleared {removed} completed todos");
        removed
    }

    fn list(&self, filter: Filter) -> Vec<Todo> {
        self.items
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }
}
