use thiserror::Error;

use crate::domain::todo::TodoId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("todo {0} not found")]
    NotFound(TodoId),

    #[error("invalid filter '{0}' (expected all, active or completed)")]
    InvalidFilter(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
