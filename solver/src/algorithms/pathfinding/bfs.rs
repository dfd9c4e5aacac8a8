use std::collections::{HashMap, VecDeque};

use crate::maze::{CellId, Grid};

use super::{frontier::reconstruct_path, traits::PathfindingAlgorithm};

/// breadth-first search, shortest in edge count.
///
/// duplicates in the queue are tolerated and skipped once their cell is visited.
/// neighbors are enqueued in Top, Left, Bottom, Right order.
#[allow(clippy::upper_case_acronyms)]
pub struct BFS;

impl PathfindingAlgorithm for BFS {
    fn find_path(&self, grid: &mut Grid, start: CellId, goal: CellId) -> Option<Vec<CellId>> {
        let mut queue = VecDeque::new();
        let mut came_from: HashMap<CellId, CellId> = HashMap::new();

        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if grid[current].is_visited() {
                continue;
            }

            grid.visit(current);

            if current == goal {
                break;
            }

            let neighbors: Vec<CellId> = grid[current].neighbors().map(|(id, _)| id).collect();

            for neighbor in neighbors {
                if !grid[neighbor].is_visited() && !came_from.contains_key(&neighbor) {
                    came_from.insert(neighbor, current);
                    queue.push_back(neighbor);
                }
            }
        }

        let path = reconstruct_path(&came_from, start, goal)?;
        grid.mark_solution(&path);
        Some(path)
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}
