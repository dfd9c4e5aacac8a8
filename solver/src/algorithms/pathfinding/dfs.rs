use crate::maze::{CellId, Direction, Grid};

use super::traits::PathfindingAlgorithm;

/// neighbor priority; decides which route is reported when several exist
const SEARCH_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Top,
    Direction::Left,
    Direction::Bottom,
];

struct Frame {
    cell: CellId,
    next: usize,
}

/// depth-first search on an explicit stack.
///
/// the stack holds exactly the chain from start to the cell being expanded, so when the
/// goal is entered the stack contents are the path and get marked on-solution.
#[allow(clippy::upper_case_acronyms)]
pub struct DFS;

impl PathfindingAlgorithm for DFS {
    fn find_path(&self, grid: &mut Grid, start: CellId, goal: CellId) -> Option<Vec<CellId>> {
        if grid[start].is_visited() {
            return None;
        }

        grid.visit(start);
        let mut stack = vec![Frame {
            cell: start,
            next: 0,
        }];

        if start == goal {
            grid.mark_solution(&[start]);
            return Some(vec![start]);
        }

        while let Some(frame) = stack.last_mut() {
            let Some(&direction) = SEARCH_ORDER.get(frame.next) else {
                log::trace!("dead end at {}", grid[frame.cell].position());
                stack.pop();
                continue;
            };
            frame.next += 1;

            let Some(neighbor) = grid[frame.cell].neighbor(direction) else {
                continue;
            };

            if grid[neighbor].is_visited() {
                continue;
            }

            grid.visit(neighbor);
            stack.push(Frame {
                cell: neighbor,
                next: 0,
            });

            if neighbor == goal {
                let path: Vec<CellId> = stack.iter().map(|frame| frame.cell).collect();
                grid.mark_solution(&path);
                return Some(path);
            }
        }

        None
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Position;

    fn positions(grid: &Grid, path: &[CellId]) -> Vec<(i32, i32)> {
        path.iter()
            .map(|&id| grid[id].position())
            .map(|Position { x, y }| (x, y))
            .collect()
    }

    #[test]
    fn prefers_right_then_top() {
        let mut grid = Grid::from_ascii(
            "
...
.SE
...
",
        )
        .unwrap();
        let (start, goal) = (grid.start().unwrap(), grid.exit().unwrap());

        let path = DFS.find_path(&mut grid, start, goal).unwrap();
        assert_eq!(positions(&grid, &path), [(1, 1), (2, 1)]);
        assert_eq!(grid.visited_count(), 2);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let mut grid = Grid::from_ascii(
            "
S..
#.#
E.#
",
        )
        .unwrap();
        let (start, goal) = (grid.start().unwrap(), grid.exit().unwrap());

        let path = DFS.find_path(&mut grid, start, goal).unwrap();
        assert_eq!(
            positions(&grid, &path),
            [(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)]
        );
        // (2, 0) was explored first and abandoned
        let dead_end = grid.cell_at(Position::new(2, 0)).unwrap();
        assert!(grid[dead_end].is_visited());
        assert!(!grid[dead_end].is_on_solution());
    }

    #[test]
    fn entering_a_visited_start_fails() {
        let mut grid = Grid::from_ascii("S.E").unwrap();
        let (start, goal) = (grid.start().unwrap(), grid.exit().unwrap());
        grid.visit(start);

        assert_eq!(DFS.find_path(&mut grid, start, goal), None);
        assert!(grid.solution().is_empty());
    }

    #[test]
    fn start_on_goal() {
        let mut grid = Grid::from_ascii("S.").unwrap();
        let start = grid.start().unwrap();

        assert_eq!(DFS.find_path(&mut grid, start, start), Some(vec![start]));
        assert!(grid[start].is_on_solution());
    }
}
