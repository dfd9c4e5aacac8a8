use std::time::Instant;

use crate::{algorithms::pathfinding::PathResult, maze::Grid};

use super::{
    algorithm::Algorithm,
    outcome::{Missing, SolveOutcome},
};

/// runs one search strategy against a grid, marking visited and on-solution cells in place.
///
/// the solver never clears search state; callers reset the grid between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solver {
    algorithm: Algorithm,
}

impl Solver {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn solve(&self, grid: &mut Grid) -> SolveOutcome {
        let Some(start) = grid.start() else {
            log::debug!("no start cell, nothing to search");
            return SolveOutcome::NotConfigured(Missing::Start);
        };
        let Some(goal) = grid.exit() else {
            log::debug!("no exit cell, nothing to search");
            return SolveOutcome::NotConfigured(Missing::Exit);
        };

        if grid.is_dirty() {
            log::warn!("grid still carries state from a previous search, results may be wrong");
        }

        log::debug!(
            "{}: {} -> {} over {} cells",
            self.algorithm,
            grid[start].position(),
            grid[goal].position(),
            grid.len()
        );

        let planning_start = Instant::now();
        let path = self.algorithm.implementation().find_path(grid, start, goal);
        let planning_time = planning_start.elapsed();
        let visited = grid.visited_count();

        match path {
            Some(path) => {
                log::debug!(
                    "{}: {} cells on path, {} visited in {:?}",
                    self.algorithm,
                    path.len(),
                    visited,
                    planning_time
                );
                SolveOutcome::Solved(PathResult::new(path, visited, planning_time))
            }
            None => {
                log::debug!("{}: exit unreachable after {} cells", self.algorithm, visited);
                SolveOutcome::Unreachable { visited }
            }
        }
    }
}
