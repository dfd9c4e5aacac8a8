use crate::maze::{CellId, Grid};

use super::{frontier::best_first, traits::PathfindingAlgorithm};

/// A* guided by the squared euclidean distance to the goal.
///
/// each step is charged `1 + dx² + dy²` measured from the cell being entered, and that
/// running total is both the recorded cost and the frontier priority. the penalty
/// overestimates the remaining cost and keeps adding up along a route, so the reported
/// path can be longer than the shortest one.
pub struct AStar;

impl PathfindingAlgorithm for AStar {
    fn find_path(&self, grid: &mut Grid, start: CellId, goal: CellId) -> Option<Vec<CellId>> {
        let target = grid[goal].position();
        best_first(grid, start, goal, |position| position.squared_distance(target))
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::pathfinding::BFS;
    use crate::maze::{Direction, Position};

    const DETOUR: &str = "
S#....
....#.
.####.
.....E
";

    #[test]
    fn open_field_is_solved_optimally() {
        let mut grid = Grid::from_ascii(
            "
S......
.......
......E
",
        )
        .unwrap();
        let (start, goal) = (grid.start().unwrap(), grid.exit().unwrap());

        let path = AStar.find_path(&mut grid, start, goal).unwrap();
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn accumulated_penalties_take_a_detour() {
        let mut grid = Grid::from_ascii(DETOUR).unwrap();
        let (start, goal) = (grid.start().unwrap(), grid.exit().unwrap());
        let astar = AStar.find_path(&mut grid, start, goal).unwrap();

        grid.reset();
        let shortest = BFS.find_path(&mut grid, start, goal).unwrap();

        assert_eq!(shortest.len(), 9);
        assert_eq!(astar.len(), 11);
        assert!(astar.len() > shortest.len());
    }

    #[test]
    fn far_apart_cells_do_not_overflow() {
        let mut grid = Grid::new();
        let start = grid.add_cell(Position::new(i32::MIN, i32::MIN)).unwrap();
        let middle = grid.add_cell(Position::new(0, 0)).unwrap();
        let goal = grid.add_cell(Position::new(i32::MAX, i32::MAX)).unwrap();
        grid.link(start, Direction::Right, middle);
        grid.link(middle, Direction::Right, goal);

        let path = AStar.find_path(&mut grid, start, goal).unwrap();
        assert_eq!(path, [start, middle, goal]);
    }
}
