use std::collections::HashMap;
use std::ops::Index;

use super::{
    cell::{Cell, CellId},
    position::{Direction, Position},
};

/// arena of cells plus the designated start; exits are flagged on the cells themselves
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: Vec<Cell>,
    by_position: HashMap<Position, CellId>,
    start: Option<CellId>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// parses a text maze: `#` wall, `.` or space open, `S` start, `E` exit.
    /// `x` is the column and `y` the row; cells are added in row-major order.
    pub fn from_ascii(text: &str) -> eyre::Result<Self> {
        let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        if rows.is_empty() {
            eyre::bail!("empty maze");
        }

        let width = rows[0].chars().count();
        let mut grid = Self::new();
        let mut exits = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let row_width = row.chars().count();
            if row_width != width {
                eyre::bail!(
                    "row {} has width {}, expected {}",
                    y,
                    row_width,
                    width
                );
            }

            for (x, symbol) in row.chars().enumerate() {
                let position = Position::new(i32::try_from(x)?, i32::try_from(y)?);
                match symbol {
                    '#' => continue,
                    '.' | ' ' => {
                        grid.add_cell(position)?;
                    }
                    'S' => {
                        let id = grid.add_cell(position)?;
                        if let Some(previous) = grid.start {
                            eyre::bail!(
                                "second start at {}, first one at {}",
                                position,
                                grid[previous].position()
                            );
                        }
                        grid.start = Some(id);
                    }
                    'E' => exits.push(grid.add_cell(position)?),
                    other => eyre::bail!("unexpected symbol {:?} at {}", other, position),
                }
            }
        }

        for exit in exits {
            grid.set_exit(exit, true);
        }

        // every open cell links to its open right and bottom neighbours; `link` mirrors the rest
        for index in 0..grid.cells.len() {
            let id = CellId(index);
            let position = grid.cells[index].position();
            for direction in [Direction::Right, Direction::Bottom] {
                if let Some(&neighbor) = grid.by_position.get(&position.offset(direction)) {
                    grid.link(id, direction, neighbor);
                }
            }
        }

        log::trace!(
            "parsed {} open cells from a {}x{} maze",
            grid.len(),
            width,
            rows.len()
        );

        Ok(grid)
    }

    pub fn add_cell(&mut self, position: Position) -> eyre::Result<CellId> {
        if self.by_position.contains_key(&position) {
            eyre::bail!("cell at {} already exists", position);
        }

        let id = CellId(self.cells.len());
        self.cells.push(Cell::new(position));
        self.by_position.insert(position, id);
        Ok(id)
    }

    /// links `a` towards `direction` to `b` and `b` back to `a`
    pub fn link(&mut self, a: CellId, direction: Direction, b: CellId) {
        self.set_neighbor(a, direction, Some(b));
        self.set_neighbor(b, direction.opposite(), Some(a));
    }

    /// one-directional; nothing keeps the reverse relation consistent
    pub fn set_neighbor(&mut self, cell: CellId, direction: Direction, neighbor: Option<CellId>) {
        self.cells[cell.0].set_neighbor(direction, neighbor);
    }

    pub fn set_start(&mut self, start: Option<CellId>) {
        self.start = start;
    }

    pub fn set_exit(&mut self, cell: CellId, is_exit: bool) {
        self.cells[cell.0].set_exit(is_exit);
    }

    pub fn start(&self) -> Option<CellId> {
        self.start
    }

    /// first exit in iteration order
    pub fn exit(&self) -> Option<CellId> {
        self.cells().find(|(_, cell)| cell.is_exit()).map(|(id, _)| id)
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    pub fn cell_at(&self, position: Position) -> Option<CellId> {
        self.by_position.get(&position).copied()
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (CellId(index), cell))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// smallest and largest corner covering every cell
    pub fn bounds(&self) -> Option<(Position, Position)> {
        let mut positions = self.cells.iter().map(Cell::position);
        let first = positions.next()?;

        Some(positions.fold((first, first), |(min, max), p| {
            (
                Position::new(min.x.min(p.x), min.y.min(p.y)),
                Position::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    /// clears every search flag; callers run this between searches on one grid
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    pub fn is_dirty(&self) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.is_visited() || cell.is_on_solution())
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_visited()).count()
    }

    /// on-solution cells in iteration order, not path order
    pub fn solution(&self) -> Vec<CellId> {
        self.cells()
            .filter(|(_, cell)| cell.is_on_solution())
            .map(|(id, _)| id)
            .collect()
    }

    pub(crate) fn visit(&mut self, id: CellId) {
        self.cells[id.0].visited = true;
    }

    pub(crate) fn mark_solution(&mut self, path: &[CellId]) {
        for &id in path {
            self.cells[id.0].on_solution = true;
        }
    }
}

impl Index<CellId> for Grid {
    type Output = Cell;

    fn index(&self, id: CellId) -> &Cell {
        self.cell(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cells_links_and_markers() {
        let grid = Grid::from_ascii(
            "
S.#
..E
",
        )
        .unwrap();

        assert_eq!(grid.len(), 5);
        let start = grid.start().unwrap();
        assert_eq!(grid[start].position(), Position::new(0, 0));

        let exit = grid.exit().unwrap();
        assert_eq!(grid[exit].position(), Position::new(2, 1));

        let top_right = grid.cell_at(Position::new(1, 0)).unwrap();
        assert_eq!(grid[start].neighbor(Direction::Right), Some(top_right));
        assert_eq!(grid[top_right].neighbor(Direction::Left), Some(start));
        assert_eq!(grid[top_right].neighbor(Direction::Right), None);

        let below = grid.cell_at(Position::new(1, 1)).unwrap();
        assert_eq!(grid[top_right].neighbor(Direction::Bottom), Some(below));
        assert_eq!(grid[below].neighbor(Direction::Right), Some(exit));
        assert_eq!(grid[exit].neighbor(Direction::Top), None);
    }

    #[test]
    fn neighbors_iterate_in_canonical_order() {
        let grid = Grid::from_ascii(
            "
#.#
.S.
#.#
",
        )
        .unwrap();

        let start = grid.start().unwrap();
        let directions: Vec<Direction> = grid[start].neighbors().map(|(_, d)| d).collect();
        assert_eq!(directions, Direction::ALL);
    }

    #[test]
    fn first_exit_in_row_major_order_wins() {
        let grid = Grid::from_ascii(
            "
S.E
E..
",
        )
        .unwrap();

        let exit = grid.exit().unwrap();
        assert_eq!(grid[exit].position(), Position::new(2, 0));
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(Grid::from_ascii("").is_err());
        assert!(Grid::from_ascii("\n\n").is_err());
        assert!(Grid::from_ascii("S..\n..").is_err());
        assert!(Grid::from_ascii("S.S").is_err());
        assert!(Grid::from_ascii("S.x").is_err());
    }

    #[test]
    fn missing_markers_are_not_parse_errors() {
        let grid = Grid::from_ascii("...").unwrap();
        assert_eq!(grid.start(), None);
        assert_eq!(grid.exit(), None);
    }

    #[test]
    fn duplicate_positions_are_rejected() {
        let mut grid = Grid::new();
        grid.add_cell(Position::new(1, 1)).unwrap();
        assert!(grid.add_cell(Position::new(1, 1)).is_err());
    }

    #[test]
    fn set_neighbor_is_one_directional() {
        let mut grid = Grid::new();
        let a = grid.add_cell(Position::new(0, 0)).unwrap();
        let b = grid.add_cell(Position::new(1, 0)).unwrap();

        grid.set_neighbor(a, Direction::Right, Some(b));
        assert_eq!(grid[a].neighbor(Direction::Right), Some(b));
        assert_eq!(grid[b].neighbor(Direction::Left), None);
    }

    #[test]
    fn bounds_cover_negative_positions() {
        let mut grid = Grid::new();
        assert_eq!(grid.bounds(), None);

        grid.add_cell(Position::new(-2, 1)).unwrap();
        grid.add_cell(Position::new(3, -4)).unwrap();
        assert_eq!(
            grid.bounds(),
            Some((Position::new(-2, -4), Position::new(3, 1)))
        );
    }

    #[test]
    fn reset_clears_search_state() {
        let mut grid = Grid::from_ascii("S.E").unwrap();
        assert!(!grid.is_dirty());

        let start = grid.start().unwrap();
        grid.visit(start);
        grid.mark_solution(&[start]);
        assert!(grid.is_dirty());
        assert_eq!(grid.visited_count(), 1);
        assert_eq!(grid.solution(), vec![start]);

        grid.reset();
        assert!(!grid.is_dirty());
        assert!(grid.solution().is_empty());
    }
}
