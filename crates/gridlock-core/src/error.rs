//! Input validation errors.

/// Errors produced when constructing a [`Grid`](crate::Grid) from untrusted
/// input.
///
/// These cover structural malformation only; a structurally well-formed grid
/// whose givens violate a Sudoku constraint is a legitimate (unsolvable)
/// input, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A raw cell value was outside the range 0-9.
    #[display("invalid cell value {value} at ({row}, {col})")]
    InvalidCellValue {
        /// Row of the offending cell (0-8).
        row: u8,
        /// Column of the offending cell (0-8).
        col: u8,
        /// The rejected value.
        value: u8,
    },
    /// A puzzle string contained a character other than a digit, `_`, `.`,
    /// or whitespace.
    #[display("invalid cell character {c:?}")]
    InvalidCellChar {
        /// The rejected character.
        c: char,
    },
    /// A puzzle string did not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    InvalidCellCount {
        /// Number of cells found.
        count: usize,
    },
}
