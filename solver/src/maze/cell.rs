use std::fmt;

use super::position::{Direction, Position};

/// stable index of a cell inside the grid that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub(crate) usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    neighbors: [Option<CellId>; 4],
    is_exit: bool,
    pub(crate) visited: bool,
    pub(crate) on_solution: bool,
}

impl Cell {
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            neighbors: [None; 4],
            is_exit: false,
            visited: false,
            on_solution: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn neighbor(&self, direction: Direction) -> Option<CellId> {
        self.neighbors[direction.index()]
    }

    /// present neighbors in `Direction::ALL` order
    pub fn neighbors(&self) -> impl Iterator<Item = (CellId, Direction)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.neighbor(direction).map(|id| (id, direction)))
    }

    pub fn is_exit(&self) -> bool {
        self.is_exit
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_on_solution(&self) -> bool {
        self.on_solution
    }

    pub(crate) fn set_neighbor(&mut self, direction: Direction, neighbor: Option<CellId>) {
        self.neighbors[direction.index()] = neighbor;
    }

    pub(crate) fn set_exit(&mut self, is_exit: bool) {
        self.is_exit = is_exit;
    }

    pub(crate) fn reset(&mut self) {
        self.visited = false;
        self.on_solution = false;
    }
}
