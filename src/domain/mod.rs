pub mod filter;
pub mod todo;
