//! Chronological backtracking search.

use gridlock_core::{Digit, Grid, Position, PositionSet};

use crate::SearchOutcome;

/// Depth-first search trying digits 1-9 ascending at each unassigned cell.
///
/// On failure, control always returns to the immediately preceding cell,
/// which then moves on to its next candidate.
pub(crate) fn search(grid: &Grid, variables: &[Position]) -> SearchOutcome {
    let mut steps = 0;
    let mut grid = grid.clone();
    match assign_next(&mut grid, variables, &mut steps) {
        Some(solution) => SearchOutcome::Solved {
            grid: solution,
            steps,
        },
        None => SearchOutcome::Exhausted {
            steps,
            conflicts: PositionSet::EMPTY,
        },
    }
}

/// Tries every candidate for the first variable, recursing over the rest.
///
/// Each recursive call receives its own clone of the grid, so sibling
/// branches never observe each other's tentative assignments.
fn assign_next(grid: &mut Grid, variables: &[Position], steps: &mut usize) -> Option<Grid> {
    let Some((&pos, rest)) = variables.split_first() else {
        *steps += 1;
        // Reachable only through placements that passed the legality check,
        // so a validation failure here is a bug in the check itself.
        assert!(
            grid.is_solved(),
            "all cells assigned but the grid failed validation"
        );
        return Some(grid.clone());
    };

    for digit in Digit::ALL {
        *steps += 1;
        if grid.is_legal_placement(pos, digit) {
            grid.set(pos, Some(digit));
            let mut branch = grid.clone();
            if let Some(solution) = assign_next(&mut branch, rest, steps) {
                return Some(solution);
            }
            grid.set(pos, None);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_missing_cell() {
        let mut grid: Grid = "
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
        let pos = Position::new(0, 0);
        grid.set(pos, None);

        let outcome = search(&grid, &[pos]);
        let SearchOutcome::Solved { grid: solution, steps } = outcome else {
            panic!("expected a solution");
        };
        assert_eq!(solution[pos], Some(Digit::D5));
        // Trials 1-5 at the cell plus the terminal check.
        assert_eq!(steps, 6);
    }

    #[test]
    fn test_exhausts_cell_with_no_candidates() {
        // Row 0 blocks 1-8 and column 0 blocks 9, so (0, 0) has no
        // candidate at all.
        let grid: Grid = "
            _12 345 678
            9__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();

        let outcome = search(&grid, &[Position::new(0, 0)]);
        let SearchOutcome::Exhausted { steps, conflicts } = outcome else {
            panic!("expected exhaustion");
        };
        assert_eq!(steps, 9);
        assert!(conflicts.is_empty());
    }
}
