use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use maze_solver::solvers::Algorithm;

#[derive(Parser, Debug)]
#[command(name = "maze-solver")]
#[command(about = "Grid maze solver with multiple search strategies")]
pub struct Args {
    /// Text maze to load (`#` wall, `.` open, `S` start, `E` exit)
    #[arg(value_name = "MAZE")]
    pub maze: PathBuf,

    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Disable colored maze output
    #[arg(long)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve the maze with a single algorithm and draw the result
    Solve {
        /// Search algorithm to use
        #[arg(value_enum)]
        algorithm: Option<Algorithm>,

        /// Integer selector, taken modulo 4 (0 dfs, 1 bfs, 2 dijkstra, 3 astar)
        #[arg(short, long, conflicts_with = "algorithm", allow_negative_numbers = true)]
        selector: Option<i32>,
    },

    /// Run every algorithm on the same maze and compare them
    Benchmark,
}

impl Command {
    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            Self::Solve {
                algorithm,
                selector,
            } => Some(
                algorithm
                    .or(selector.map(Algorithm::from_selector))
                    .unwrap_or_default(),
            ),
            Self::Benchmark => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_and_name_resolve_to_an_algorithm() {
        let args = Args::parse_from(["maze-solver", "maze.txt", "solve", "a-star"]);
        assert_eq!(args.command.algorithm(), Some(Algorithm::AStar));

        let args = Args::parse_from(["maze-solver", "maze.txt", "solve", "--selector", "-2"]);
        assert_eq!(args.command.algorithm(), Some(Algorithm::Dijkstra));

        let args = Args::parse_from(["maze-solver", "maze.txt", "solve"]);
        assert_eq!(args.command.algorithm(), Some(Algorithm::DFS));

        let args = Args::parse_from(["maze-solver", "-v", "debug", "maze.txt", "benchmark"]);
        assert_eq!(args.verbosity, LevelFilter::Debug);
        assert_eq!(args.command.algorithm(), None);
    }

    #[test]
    fn name_and_selector_conflict() {
        let result = Args::try_parse_from(["maze-solver", "m", "solve", "bfs", "--selector", "1"]);
        assert!(result.is_err());
    }
}
