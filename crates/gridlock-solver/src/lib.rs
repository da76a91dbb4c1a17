//! Constraint search for the Gridlock Sudoku solver.
//!
//! The crate turns a partially filled [`Grid`](gridlock_core::Grid) into a
//! complete assignment, or establishes that the search space is exhausted.
//! Two depth-first strategies share the same variable order (unassigned
//! cells, row-major) and candidate order (digits ascending):
//!
//! - [`Strategy::Backtracking`] - chronological search; on failure, control
//!   returns to the immediately preceding cell.
//! - [`Strategy::Backjumping`] - conflict-directed search; every rejected
//!   placement is explained by the set of assigned cells that caused it
//!   ([`find_conflicts`]), and ancestors not named in that set are jumped
//!   over without retrying their alternatives.
//!
//! The [`Solver`] facade picks the variable list and runs a strategy to a
//! terminal [`SearchOutcome`].
//!
//! # Examples
//!
//! ```
//! use gridlock_core::Grid;
//! use gridlock_solver::{Solver, Strategy};
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
//! let outcome = Solver::new(Strategy::Backjumping).solve(&grid);
//! assert!(outcome.is_solved());
//! # Ok::<(), gridlock_core::GridError>(())
//! ```

pub use self::{
    conflict::find_conflicts, outcome::SearchOutcome, solver::Solver, strategy::Strategy,
};

mod backjumping;
mod backtracking;
mod conflict;
mod outcome;
mod solver;
mod strategy;
