// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]

#[macro_use]
extern crate log;

pub mod config;
pub mod data;
pub mod fs;
pub mod level;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod vec2d;

use std::error::Error;

use crate::config::Method;
use crate::level::Level;
use crate::solver::SolverOk;

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    /// Finds a solution with the lowest number of moves, see `solver::solve`.
    fn solve(&self, method: Method, print_status: bool) -> SolverOk;
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use separator::Separatable;

    use crate::config::Method::{self, MoveOptimal, MoveOptimalDeadEnds};

    use super::*;

    #[test]
    fn test_levels() {
        const SLOW_IN_DEBUG: i32 = 1;
        const OK: i32 = 0;

        #[cfg(debug_assertions)]
        const MAX_DIFFICULTY: i32 = 0;

        #[cfg(not(debug_assertions))]
        const MAX_DIFFICULTY: i32 = 1;

        // expected moves and pushes, same for both methods
        let levels = [
            ("00-solved.txt", Some((0, 0)), OK),
            ("01-simplest.txt", Some((1, 1)), OK),
            ("02-one-way.txt", Some((3, 3)), OK),
            ("03-long-way.txt", Some((5, 1)), OK),
            ("04-two-blocks.txt", Some((15, 6)), OK),
            ("05-walk-around.txt", Some((6, 2)), OK),
            ("06-three-blocks.txt", Some((22, 9)), SLOW_IN_DEBUG),
            ("no-solution-corner.txt", None, OK),
            ("no-solution-alcove.txt", None, OK),
        ];

        for &(level_name, expected, difficulty) in levels.iter() {
            if difficulty > MAX_DIFFICULTY {
                continue;
            }
            let plain = test_level(MoveOptimal, level_name, expected);
            let pruned = test_level(MoveOptimalDeadEnds, level_name, expected);
            assert!(pruned.stats.total_unique_visited() <= plain.stats.total_unique_visited());
        }
    }

    // separate fn to get stack traces with correct line numbers
    fn test_level(method: Method, level_name: &str, expected: Option<(usize, usize)>) -> SolverOk {
        let level_path = format!("levels/{}", level_name);

        println!("Solving {} using {}", level_path, method);
        let started = Instant::now();

        let level = level_path.load_level().unwrap();
        let solution = level.solve(method, false);

        // innacurate, only useful to quickly see which levels are difficult
        println!(
            "Solved {} using {} in approximately {} ms",
            level_path,
            method,
            (started.elapsed().as_millis() as u64).separated_string(),
        );
        println!("{:?}", solution);

        let counts = solution
            .moves
            .as_ref()
            .map(|moves| (moves.move_cnt(), moves.push_cnt()));
        assert_eq!(counts, expected, "{} using {}", level_path, method);

        if let Some(ref moves) = solution.moves {
            let states = level.replay(moves).unwrap();
            assert!(states.last().unwrap().is_solved(&level.map));
        }

        let stats = &solution.stats;
        assert!(
            stats.total_created() >= stats.total_unique_visited() + stats.total_reached_duplicates()
        );
        solution
    }
}
