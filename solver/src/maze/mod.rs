mod cell;
mod grid;
mod position;

pub use cell::{Cell, CellId};
pub use grid::Grid;
pub use position::{Direction, Position};
