//! Grid maze path search with four interchangeable strategies.
//!
//! A [`maze::Grid`] owns its cells in an arena; a [`solvers::Solver`] runs depth-first,
//! breadth-first, uniform-cost or A* search on it and leaves visited and on-solution
//! flags on the cells for the caller to render or inspect.

pub mod algorithms;
pub mod maze;
pub mod render;
pub mod solvers;
