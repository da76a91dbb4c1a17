//! Strategy selection.

use gridlock_core::{Grid, Position};

use crate::{SearchOutcome, backjumping, backtracking};

/// A search strategy.
///
/// The set is closed: each variant names one complete depth-first search
/// over the same variable order and candidate order, differing only in how
/// failures propagate back up the tree.
///
/// # Examples
///
/// ```
/// use gridlock_solver::Strategy;
///
/// assert_eq!(Strategy::Backjumping.to_string(), "backjumping");
/// assert!(Strategy::Backtracking.is_backtracking());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Strategy {
    /// Chronological backtracking: failure retries the immediately
    /// preceding cell.
    #[display("backtracking")]
    Backtracking,
    /// Conflict-directed backjumping: failure jumps to the nearest cell
    /// implicated in the conflict, skipping ancestors that had no part in
    /// it.
    #[display("backjumping")]
    Backjumping,
}

impl Strategy {
    /// Runs this strategy over `grid`, assigning `variables` in order.
    ///
    /// `variables` must name unassigned cells of `grid`, each at most once.
    /// The usual entry point is [`Solver::solve`](crate::Solver::solve),
    /// which computes the row-major list itself.
    #[must_use]
    pub fn search(self, grid: &Grid, variables: &[Position]) -> SearchOutcome {
        match self {
            Self::Backtracking => backtracking::search(grid, variables),
            Self::Backjumping => backjumping::search(grid, variables),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Strategy::Backtracking.to_string(), "backtracking");
        assert_eq!(Strategy::Backjumping.to_string(), "backjumping");
    }

    #[test]
    fn test_dispatch_reaches_both_searches() {
        // An empty variable list short-circuits to the terminal check in
        // either implementation.
        let grid: Grid = "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            345 286 179
        "
        .parse()
        .unwrap();

        for strategy in [Strategy::Backtracking, Strategy::Backjumping] {
            let outcome = strategy.search(&grid, &[]);
            assert!(outcome.is_solved(), "{strategy} failed on a solved grid");
            assert_eq!(outcome.steps(), 1);
        }
    }
}
