// src/core/validator.rs
use crate::error::{InvalidMatrixError, Result};

/// Validation policy for a proposed character matrix.
///
/// Kept separate from grid construction so an alternate policy (for example
/// one that pads jagged rows) can be substituted without touching the
/// scanner or the ranking engine. A pure check with no side effects.
pub trait MatrixValidator {
    fn validate(&self, rows: &[&str]) -> Result<()>;
}

/// The default policy: at least one row, at least one column, and every row
/// exactly as wide as the first.
///
/// Widths are compared in characters, not bytes, so multi-byte rows are
/// judged by what the scanner will actually see.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangularValidator;

impl MatrixValidator for RectangularValidator {
    fn validate(&self, rows: &[&str]) -> Result<()> {
        let first = rows.first().ok_or(InvalidMatrixError::NoRows)?;
        let expected = first.chars().count();
        if expected == 0 {
            return Err(InvalidMatrixError::EmptyRow);
        }

        for (row, line) in rows.iter().enumerate().skip(1) {
            let actual = line.chars().count();
            if actual != expected {
                return Err(InvalidMatrixError::RowLengthMismatch {
                    row,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }
}
