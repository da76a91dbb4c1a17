//! The 9×9 board and its validity queries.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use tinyvec::ArrayVec;

use crate::{Digit, DigitSet, GridError, House, Position};

/// A 9×9 Sudoku board.
///
/// Each cell holds either a digit or nothing. The type is cheap to clone;
/// search strategies clone once per recursive branch, so sibling branches
/// never observe each other's tentative assignments.
///
/// Grids parse from and render to a compact text notation: nine rows of
/// digits with `_` (or `.` or `0`) for empty cells, all whitespace ignored.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::empty();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// // 5 is already in row 0, column 0, and box 0.
/// assert!(!grid.is_legal_placement(Position::new(0, 8), Digit::D5));
/// assert!(!grid.is_legal_placement(Position::new(8, 0), Digit::D5));
/// assert!(!grid.is_legal_placement(Position::new(2, 2), Digit::D5));
/// assert!(grid.is_legal_placement(Position::new(8, 8), Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a grid from raw cell values, `0` meaning "empty".
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCellValue`] if any entry is outside 0-9.
    pub fn from_values(values: &[[u8; 9]; 9]) -> Result<Self, GridError> {
        let mut grid = Self::empty();
        for pos in Position::ALL {
            let value = values[usize::from(pos.row())][usize::from(pos.col())];
            if value == 0 {
                continue;
            }
            let digit =
                Digit::try_from_value(value).ok_or(GridError::InvalidCellValue {
                    row: pos.row(),
                    col: pos.col(),
                    value,
                })?;
            grid.set(pos, Some(digit));
        }
        Ok(grid)
    }

    /// Returns the raw cell values, `0` meaning "empty".
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        let mut values = [[0; 9]; 9];
        for pos in Position::ALL {
            if let Some(digit) = self[pos] {
                values[usize::from(pos.row())][usize::from(pos.col())] = digit.value();
            }
        }
        values
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index() as usize]
    }

    /// Sets or clears the cell at `pos`.
    pub fn set(&mut self, pos: Position, cell: Option<Digit>) {
        self.cells[pos.index() as usize] = cell;
    }

    /// Returns `true` if placing `digit` at `pos` violates no constraint,
    /// i.e. the digit appears nowhere else in `pos`'s row, column, or box.
    ///
    /// The current value of `pos` itself is never consulted, so the query is
    /// meaningful whether or not the cell is currently assigned. Cost is one
    /// scan of each of the three houses.
    #[must_use]
    pub fn is_legal_placement(&self, pos: Position, digit: Digit) -> bool {
        House::of(pos).into_iter().all(|house| {
            house
                .positions()
                .into_iter()
                .all(|p| p == pos || self.get(p) != Some(digit))
        })
    }

    /// Returns `true` if no digit occurs more than once in any row, column,
    /// or box. Empty cells never conflict with each other.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        House::ALL.into_iter().all(|house| self.house_is_valid(house))
    }

    /// Returns `true` if the grid is valid and every cell is assigned.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Option::is_some) && self.is_valid()
    }

    /// Returns the unassigned cells in row-major order: row 0 left to right,
    /// then row 1, and so on.
    ///
    /// This is the variable order search strategies consume. The list is
    /// bounded by the board size and lives on the stack.
    #[must_use]
    pub fn empty_positions(&self) -> ArrayVec<[Position; 81]> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_none())
            .collect()
    }

    fn house_is_valid(&self, house: House) -> bool {
        let mut seen = DigitSet::new();
        house.positions().into_iter().all(|pos| match self.get(pos) {
            Some(digit) => seen.insert(digit),
            None => true,
        })
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[usize::from(pos.index())]
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut grid = Self::empty();
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let cell = match c {
                '_' | '.' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = c as u8 - b'0';
                    Digit::try_from_value(value)
                }
                _ => return Err(GridError::InvalidCellChar { c }),
            };
            if count < 81 {
                grid.cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridError::InvalidCellCount { count });
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    write!(f, " ")?;
                }
                match self[Position::new(row, col)] {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
