// src/core/mod.rs
pub mod engine;
pub mod grid;
pub mod scanner;
pub mod types;
pub mod validator;
