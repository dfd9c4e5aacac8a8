mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod frontier;
pub mod traits;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use dijkstra::Dijkstra;
pub use traits::{PathResult, PathfindingAlgorithm};
