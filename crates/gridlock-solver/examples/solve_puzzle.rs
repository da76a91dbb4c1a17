//! Example demonstrating the two search strategies.
//!
//! # Usage
//!
//! Solve the built-in classic puzzle with backjumping:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --strategy backjumping
//! ```
//!
//! Solve a custom puzzle (81 cells, `_`/`.`/`0` for empty, whitespace
//! ignored):
//!
//! ```sh
//! cargo run --example solve_puzzle -- --puzzle "$(cat my_puzzle.txt)"
//! ```
//!
//! Run both strategies and compare their step counts:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --compare
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use gridlock_core::Grid;
use gridlock_solver::{SearchOutcome, Solver, Strategy};

const CLASSIC: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    Backtracking,
    Backjumping,
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Backtracking => Strategy::Backtracking,
            StrategyKind::Backjumping => Strategy::Backjumping,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Search strategy to run.
    #[arg(long, value_name = "STRATEGY", default_value = "backjumping")]
    strategy: StrategyKind,

    /// Puzzle string: 81 cells, digits for givens, `_`/`.`/`0` for empty,
    /// whitespace ignored. Defaults to a classic puzzle.
    #[arg(long, value_name = "PUZZLE")]
    puzzle: Option<String>,

    /// Run both strategies and report their step counts.
    #[arg(long)]
    compare: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = args.puzzle.as_deref().unwrap_or(CLASSIC);
    let grid: Grid = match source.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("invalid puzzle: {err}");
            process::exit(2);
        }
    };

    println!("puzzle:\n{grid}");

    if args.compare {
        for strategy in [Strategy::Backtracking, Strategy::Backjumping] {
            run(strategy, &grid);
        }
    } else {
        run(args.strategy.into(), &grid);
    }
}

fn run(strategy: Strategy, grid: &Grid) {
    log::info!("running {strategy}");
    match Solver::new(strategy).solve(grid) {
        SearchOutcome::Solved { grid, steps } => {
            println!("{strategy}: solved in {steps} steps\n{grid}");
        }
        SearchOutcome::Exhausted { steps, conflicts } => {
            println!("{strategy}: exhausted after {steps} steps");
            if !conflicts.is_empty() {
                let cells = conflicts
                    .iter()
                    .map(|pos| pos.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("residual conflicts: {cells}");
            }
        }
    }
}
