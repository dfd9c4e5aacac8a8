use std::time::Duration;

use crate::maze::{CellId, Grid};

pub trait PathfindingAlgorithm {
    /// searches from `start` to `goal`, marking cells visited along the way.
    /// on success the returned path runs from start to goal and each of its cells is
    /// marked on-solution; on failure no cell is marked on-solution.
    fn find_path(&self, grid: &mut Grid, start: CellId, goal: CellId) -> Option<Vec<CellId>>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub path: Vec<CellId>,
    pub visited: usize,
    pub planning_time: Duration,
}

impl PathResult {
    pub fn new(path: Vec<CellId>, visited: usize, planning_time: Duration) -> Self {
        Self {
            path,
            visited,
            planning_time,
        }
    }

    /// moves between cells, one less than the path length
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
