//! Conflict-directed backjumping search.

use gridlock_core::{Digit, Grid, Position, PositionSet};

use crate::{SearchOutcome, find_conflicts};

/// Depth-first search that, on failure, jumps directly back to a cell
/// implicated in the conflict instead of retrying every ancestor in turn.
pub(crate) fn search(grid: &Grid, variables: &[Position]) -> SearchOutcome {
    let mut steps = 0;
    let mut grid = grid.clone();
    match assign_next(&mut grid, variables, &mut steps) {
        Ok(solution) => SearchOutcome::Solved {
            grid: solution,
            steps,
        },
        Err(conflicts) => SearchOutcome::Exhausted { steps, conflicts },
    }
}

/// Tries every candidate for the first variable, recursing over the rest.
///
/// `Err` carries the conflict set explaining the exhaustion: the union, over
/// every digit tried here, of the assigned cells that caused that trial to
/// fail, minus this cell itself. An ancestor receiving a set it is not a
/// member of knows its own assignment was irrelevant to the failure and
/// passes the set further up unchanged.
fn assign_next(
    grid: &mut Grid,
    variables: &[Position],
    steps: &mut usize,
) -> Result<Grid, PositionSet> {
    let Some((&pos, rest)) = variables.split_first() else {
        *steps += 1;
        // Reachable only through placements that passed the legality check,
        // so a validation failure here is a bug in the check itself.
        assert!(
            grid.is_solved(),
            "all cells assigned but the grid failed validation"
        );
        return Ok(grid.clone());
    };

    let mut accumulated = PositionSet::new();
    for digit in Digit::ALL {
        *steps += 1;
        let conflicts = if grid.is_legal_placement(pos, digit) {
            grid.set(pos, Some(digit));
            let mut branch = grid.clone();
            match assign_next(&mut branch, rest, steps) {
                // Success erases conflict history for every ancestor.
                Ok(solution) => return Ok(solution),
                Err(conflicts) => conflicts,
            }
        } else {
            find_conflicts(grid, pos, digit)
        };

        if !conflicts.contains(pos) {
            // This cell had no part in the failure: abandon its remaining
            // candidates and hand the blame set upward unchanged.
            return Err(conflicts);
        }

        let mut blame = conflicts;
        blame.remove(pos);
        accumulated |= blame;
        grid.set(pos, None);
    }

    Err(accumulated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_rejections_accumulate_blame() {
        // Row 0 blocks 1-8 and column 0 blocks 9, so every candidate at
        // (0, 0) is rejected without recursion.
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
        // The blame is every given that rejected a candidate, and never the
        // exhausted cell itself.
        let expected: PositionSet = (1..9)
            .map(|col| Position::new(0, col))
            .chain([Position::new(1, 0)])
            .collect();
        assert_eq!(conflicts, expected);
    }

    #[test]
    fn test_jump_skips_unimplicated_ancestor() {
        // Variables: (8, 8) first, then (0, 0). The givens leave no
        // candidate at (0, 0), and (8, 8) shares no house with any of the
        // cells that reject those candidates, so the failure at (0, 0)
        // never implicates (8, 8): its first successful assignment is
        // followed by a single deeper exhaustion and an immediate jump
        // past its remaining candidates.
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
        let variables = [Position::new(8, 8), Position::new(0, 0)];

        let outcome = search(&grid, &variables);
        let SearchOutcome::Exhausted { steps, conflicts } = outcome else {
            panic!("expected exhaustion");
        };
        // One trial at (8, 8) and nine at (0, 0); without the jump, all
        // nine candidates at (8, 8) would recurse for 9 + 81 trials.
        assert_eq!(steps, 10);
        assert!(!conflicts.contains(Position::new(8, 8)));
        assert!(conflicts.contains(Position::new(1, 0)));
    }
}
