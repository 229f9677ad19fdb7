// src/core/grid.rs
use crate::core::validator::{MatrixValidator, RectangularValidator};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// An immutable rectangular character matrix.
///
/// Built once from a sequence of equal-length rows and never mutated
/// afterwards, so it can be shared read-only across any number of
/// concurrent scans. Rows are stored as fixed-width char vectors for O(1)
/// row access; a column is derived on demand by reading one character from
/// every row at a fixed index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    cols: usize,
}

impl Grid {
    /// Builds a grid from the given rows using the default rectangular
    /// validation policy.
    pub fn build<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        Self::build_with(rows, &RectangularValidator)
    }

    /// Builds a grid with a caller-supplied validation policy. The policy
    /// runs first; on failure its error propagates and nothing is
    /// constructed.
    pub fn build_with<S: AsRef<str>>(rows: &[S], validator: &dyn MatrixValidator) -> Result<Self> {
        let lines: Vec<&str> = rows.iter().map(AsRef::as_ref).collect();
        validator.validate(&lines)?;

        let cells: Vec<Vec<char>> = lines.iter().map(|line| line.chars().collect()).collect();
        let cols = cells.first().map_or(0, Vec::len);
        Ok(Self { cells, cols })
    }

    /// Number of rows (R).
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (C).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// A single row, left to right. O(1).
    pub fn row(&self, r: usize) -> &[char] {
        &self.cells[r]
    }

    /// A single column, top to bottom, materialized on demand. O(R).
    pub fn column(&self, c: usize) -> Vec<char> {
        self.cells.iter().map(|row| row[c]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidMatrixError;

    #[test]
    fn build_reports_input_dimensions() {
        let grid = Grid::build(&["abcd", "efgh", "ijkl"]).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
    }

    #[test]
    fn build_propagates_validation_failure() {
        let err = Grid::build(&["abc", "defg"]).unwrap_err();
        assert!(matches!(err, InvalidMatrixError::RowLengthMismatch { .. }));

        let rows: [&str; 0] = [];
        assert_eq!(Grid::build(&rows), Err(InvalidMatrixError::NoRows));
    }

    #[test]
    fn row_and_column_access() {
        let grid = Grid::build(&["abc", "def"]).unwrap();
        assert_eq!(grid.row(1), &['d', 'e', 'f']);
        assert_eq!(grid.column(2), vec!['c', 'f']);
    }

    #[test]
    fn custom_validation_policy_is_honored() {
        // A policy that accepts anything, including jagged rows.
        struct Permissive;
        impl MatrixValidator for Permissive {
            fn validate(&self, _rows: &[&str]) -> crate::error::Result<()> {
                Ok(())
            }
        }
        let grid = Grid::build_with(&["abc", "de"], &Permissive).unwrap();
        assert_eq!(grid.rows(), 2);
    }
}
