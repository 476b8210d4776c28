use serde::{Deserialize, Serialize};

pub type TodoId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub task: String,
    pub done: bool,
}

impl Todo {
    pub fn new(id: TodoId, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
            done: false,
        }
    }
}

/// Completion counts over the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Stats {
    pub fn of<'a>(todos: impl IntoIterator<Item = &'a Todo>) -> Self {
        todos.into_iter().fold(Self::default(), |mut acc, t| {
            acc.total += 1;
            if t.done {
                acc.completed += 1;
            } else {
                acc.active += 1;
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_todo_starts_open() {
        let todo = Todo::new(7, "buy milk");
        assert_eq!(todo.id, 7);
        assert_eq!(todo.task, "buy milk");
        assert!(!todo.done);
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let todo = Todo::new(1, "buy milk");
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "task": "buy milk", "done": false })
        );
    }

    #[test]
    fn stats_count_both_sides() {
        let mut done = Todo::new(2, "walk dog");
        done.done = true;
        let todos = vec![Todo::new(1, "buy milk"), done];

        let stats = Stats::of(&todos);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.completed, 1);
    }
}
