//! Error types for the word finder.
//!
//! The only fallible operation in the crate is grid construction; a search
//! over a valid [`Grid`](crate::core::grid::Grid) always returns a (possibly
//! empty) result.

use thiserror::Error;

/// Raised when a proposed character matrix is not a well-formed rectangle.
///
/// Fatal to the construction call that produced it; there is no retry or
/// recovery path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMatrixError {
    /// The matrix contains no rows at all.
    #[error("matrix has no rows")]
    NoRows,

    /// The first row is empty, so the matrix has zero columns.
    #[error("matrix rows must contain at least one character")]
    EmptyRow,

    /// A row's character count differs from the first row's.
    #[error("row {row} has {actual} characters, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, InvalidMatrixError>;
