//! The solver facade.

use gridlock_core::{Grid, PositionSet};

use crate::{SearchOutcome, Strategy};

/// Solves Sudoku grids with a fixed [`Strategy`].
///
/// The facade computes the row-major list of unassigned cells once per call
/// and delegates the search to the strategy. Grids whose givens already
/// violate a house constraint are rejected up front as exhausted, so the
/// search itself only ever runs on internally consistent boards.
///
/// # Examples
///
/// ```
/// use gridlock_core::Grid;
/// use gridlock_solver::{Solver, Strategy};
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let solver = Solver::new(Strategy::Backjumping);
/// let outcome = solver.solve(&grid);
///
/// let solution = outcome.solution().expect("the puzzle is solvable");
/// assert!(solution.is_solved());
/// # Ok::<(), gridlock_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    strategy: Strategy,
}

impl Solver {
    /// Creates a solver using `strategy`.
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Returns the configured strategy.
    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Searches for a complete assignment of `grid`.
    ///
    /// Returns [`SearchOutcome::Solved`] with the completed grid, or
    /// [`SearchOutcome::Exhausted`] once every branch has been explored.
    /// When the givens themselves already conflict, exhaustion is reported
    /// immediately with zero steps.
    #[must_use]
    pub fn solve(&self, grid: &Grid) -> SearchOutcome {
        if !grid.is_valid() {
            return SearchOutcome::Exhausted {
                steps: 0,
                conflicts: PositionSet::EMPTY,
            };
        }
        let variables = grid.empty_positions();
        self.strategy.search(grid, &variables)
    }
}
