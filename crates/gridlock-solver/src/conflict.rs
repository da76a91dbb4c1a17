//! Conflict detection for rejected placements.

use gridlock_core::{Digit, Grid, House, Position, PositionSet};

/// Explains why `digit` cannot be placed at `pos`: the set of cells holding
/// `digit` somewhere in `pos`'s row, column, or box, plus `pos` itself.
///
/// The caller is expected to have already established that the placement is
/// illegal ([`Grid::is_legal_placement`] returned `false`); on a legal
/// placement the result degenerates to `{pos}`.
///
/// The queried position is always a member of the result. That membership is
/// what the backjumping decision rule keys on: a cell absent from a deeper
/// conflict set had no part in that failure and can be jumped over without
/// retrying its remaining candidates.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, Grid, Position};
/// use gridlock_solver::find_conflicts;
///
/// let mut grid = Grid::empty();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
///
/// let conflicts = find_conflicts(&grid, Position::new(0, 4), Digit::D5);
/// assert!(conflicts.contains(Position::new(0, 0)));
/// assert!(conflicts.contains(Position::new(0, 4)));
/// assert_eq!(conflicts.len(), 2);
/// ```
#[must_use]
pub fn find_conflicts(grid: &Grid, pos: Position, digit: Digit) -> PositionSet {
    let mut conflicts = PositionSet::new();
    for house in House::of(pos) {
        for p in house.positions() {
            if grid[p] == Some(digit) {
                conflicts.insert(p);
            }
        }
    }
    conflicts.insert(pos);
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_position_always_included() {
        let grid = Grid::empty();
        for pos in [Position::new(0, 0), Position::new(4, 7), Position::new(8, 8)] {
            for digit in Digit::ALL {
                let conflicts = find_conflicts(&grid, pos, digit);
                assert!(conflicts.contains(pos));
                assert_eq!(conflicts.len(), 1);
            }
        }
    }

    #[test]
    fn test_collects_same_digit_across_all_houses() {
        let mut grid = Grid::empty();
        let pos = Position::new(4, 4);
        grid.set(Position::new(4, 0), Some(Digit::D6)); // same row
        grid.set(Position::new(0, 4), Some(Digit::D6)); // same column
        grid.set(Position::new(3, 3), Some(Digit::D6)); // same box
        grid.set(Position::new(8, 8), Some(Digit::D6)); // unrelated
        grid.set(Position::new(4, 8), Some(Digit::D2)); // other digit

        let conflicts = find_conflicts(&grid, pos, Digit::D6);
        let expected = PositionSet::from_iter([
            Position::new(4, 0),
            Position::new(0, 4),
            Position::new(3, 3),
            pos,
        ]);
        assert_eq!(conflicts, expected);
    }

    #[test]
    fn test_ignores_cells_with_other_digits() {
        let mut grid = Grid::empty();
        let pos = Position::new(2, 2);
        grid.set(Position::new(2, 5), Some(Digit::D1));
        grid.set(Position::new(7, 2), Some(Digit::D9));

        let conflicts = find_conflicts(&grid, pos, Digit::D4);
        assert_eq!(conflicts, PositionSet::from_iter([pos]));
    }
}
