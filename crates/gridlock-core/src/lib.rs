//! Core data structures for the Gridlock Sudoku solver.
//!
//! This crate provides the grid model the search strategies in
//! `gridlock-solver` operate on: strong types for digits and cell
//! coordinates, bitset-backed sets of digits and positions, the 27
//! constraint houses, and the board itself with its validity queries.
//!
//! # Overview
//!
//! - [`Digit`] - a digit 1-9; invalid digits are unrepresentable.
//! - [`Position`] - a `(row, col)` cell coordinate with the row-major cell
//!   index as its canonical encoding.
//! - [`DigitSet`] / [`PositionSet`] - compact sets used by validity checks
//!   and conflict reporting.
//! - [`House`] - a row, column, or 3×3 box; every constraint of the puzzle
//!   is "no digit twice in one house".
//! - [`Grid`] - the 9×9 board: cell access, placement legality,
//!   whole-board validity, and the row-major list of unassigned cells.
//! - [`GridError`] - rejection of malformed raw input.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Digit, Grid, Position};
//!
//! let grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! assert!(grid.is_valid());
//! assert!(!grid.is_solved());
//! // Row 0 already holds a 5, so another 5 cannot join it.
//! assert!(!grid.is_legal_placement(Position::new(0, 2), Digit::D5));
//! assert_eq!(grid.empty_positions().len(), 51);
//! # Ok::<(), gridlock_core::GridError>(())
//! ```

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    error::GridError,
    grid::Grid,
    house::House,
    position::Position,
    position_set::{PositionSet, PositionSetIter},
};

mod digit;
mod digit_set;
mod error;
mod grid;
mod house;
mod position;
mod position_set;
