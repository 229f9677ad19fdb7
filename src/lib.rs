// src/lib.rs

pub mod core;
pub mod error;

pub use crate::core::engine::WordFinder;
pub use crate::core::grid::Grid;
pub use crate::core::types::{FoundWord, OccurrenceCount, MAX_RESULTS};
pub use crate::error::InvalidMatrixError;
