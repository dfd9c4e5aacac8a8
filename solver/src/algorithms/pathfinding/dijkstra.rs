use crate::maze::{CellId, Grid};

use super::{frontier::best_first, traits::PathfindingAlgorithm};

/// uniform-cost search; with unit edges it agrees with BFS on path length
pub struct Dijkstra;

impl PathfindingAlgorithm for Dijkstra {
    fn find_path(&self, grid: &mut Grid, start: CellId, goal: CellId) -> Option<Vec<CellId>> {
        best_first(grid, start, goal, |_| 0)
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
