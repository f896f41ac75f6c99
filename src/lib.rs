pub mod board;
pub mod engine;
pub mod error;
