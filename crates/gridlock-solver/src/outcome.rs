//! Terminal search results.

use gridlock_core::{Grid, PositionSet};

/// The terminal outcome of a search.
///
/// `steps` counts every digit trial examined during the search, plus one for
/// each time a fully assigned grid passed the terminal check. It is a
/// diagnostic for comparing strategies, not part of the correctness
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SearchOutcome {
    /// Every cell was assigned a digit without violating a constraint.
    Solved {
        /// The completed grid.
        grid: Grid,
        /// Digit trials examined.
        steps: usize,
    },
    /// Every branch of the search tree was explored without success.
    ///
    /// This is a legitimate result for an unsolvable puzzle, not an error.
    Exhausted {
        /// Digit trials examined.
        steps: usize,
        /// Residual conflict set: the assigned cells implicated in the
        /// final failure. Always empty for
        /// [`Strategy::Backtracking`](crate::Strategy::Backtracking);
        /// callers may ignore it.
        conflicts: PositionSet,
    },
}

impl SearchOutcome {
    /// Returns the completed grid, if the search succeeded.
    #[must_use]
    pub fn solution(&self) -> Option<&Grid> {
        match self {
            Self::Solved { grid, .. } => Some(grid),
            Self::Exhausted { .. } => None,
        }
    }

    /// Returns the number of digit trials examined.
    #[must_use]
    pub const fn steps(&self) -> usize {
        match self {
            Self::Solved { steps, .. } | Self::Exhausted { steps, .. } => *steps,
        }
    }
}
