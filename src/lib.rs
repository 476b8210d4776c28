pub mod app;
pub mod command;
pub mod domain;
pub mod error;
pub mod render;
pub mod repo;
