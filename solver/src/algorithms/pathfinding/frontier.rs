use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::maze::{CellId, Grid, Position};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    priority: u128,
    sequence: usize,
    cell: CellId,
}

// min-heap on priority, equal priorities pop in insertion order
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// priority-ordered search shared by uniform-cost and A*.
///
/// stepping onto a cell costs `1 + heuristic(position)`, so heuristic penalties accumulate
/// along a route and the recorded cost is also the frontier priority. there is no
/// decrease-key: a relaxation pushes a fresh entry and stale ones are dropped when popped
/// because their cell is already visited.
pub(super) fn best_first<H>(
    grid: &mut Grid,
    start: CellId,
    goal: CellId,
    heuristic: H,
) -> Option<Vec<CellId>>
where
    H: Fn(Position) -> u128,
{
    let mut heap = BinaryHeap::new();
    let mut costs: HashMap<CellId, u128> = HashMap::new();
    let mut came_from: HashMap<CellId, CellId> = HashMap::new();
    let mut sequence = 0;

    costs.insert(start, 0);
    heap.push(State {
        priority: 0,
        sequence,
        cell: start,
    });

    while let Some(State { cell, .. }) = heap.pop() {
        if grid[cell].is_visited() {
            continue;
        }

        grid.visit(cell);

        if cell == goal {
            log::trace!("goal popped with {} entries left in the frontier", heap.len());
            break;
        }

        let cost = costs[&cell];
        let neighbors: Vec<CellId> = grid[cell].neighbors().map(|(id, _)| id).collect();

        for neighbor in neighbors {
            let new_cost = cost
                .saturating_add(1)
                .saturating_add(heuristic(grid[neighbor].position()));
            let current_cost = costs.get(&neighbor).copied().unwrap_or(u128::MAX);

            if new_cost < current_cost {
                costs.insert(neighbor, new_cost);
                came_from.insert(neighbor, cell);
                sequence += 1;
                heap.push(State {
                    priority: new_cost,
                    sequence,
                    cell: neighbor,
                });
            }
        }
    }

    let path = reconstruct_path(&came_from, start, goal)?;
    grid.mark_solution(&path);
    Some(path)
}

/// walks predecessors back from `goal`; `None` when the chain breaks before `start`
pub(super) fn reconstruct_path(
    came_from: &HashMap<CellId, CellId>,
    start: CellId,
    goal: CellId,
) -> Option<Vec<CellId>> {
    let mut path = vec![goal];
    let mut current = goal;

    while current != start {
        current = *came_from.get(&current)?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}
