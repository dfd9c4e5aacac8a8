use std::fmt;

use clap::ValueEnum;

use crate::algorithms::pathfinding::{AStar, BFS, DFS, Dijkstra, PathfindingAlgorithm};

/// the four interchangeable search strategies, in selector order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    /// Depth-First Search (right, top, left, bottom)
    #[default]
    #[value(name = "dfs")]
    #[allow(clippy::upper_case_acronyms)]
    DFS,

    /// Breadth-First Search
    #[value(name = "bfs")]
    #[allow(clippy::upper_case_acronyms)]
    BFS,

    /// Uniform-cost (Dijkstra) search
    Dijkstra,

    /// A* with squared euclidean distance heuristic
    #[value(name = "astar", alias = "a-star")]
    AStar,
}

impl Algorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::DFS, Self::BFS, Self::Dijkstra, Self::AStar].into_iter()
    }

    /// maps an integer selector modulo 4; negative selectors wrap around
    pub fn from_selector(selector: i32) -> Self {
        match selector.rem_euclid(4) {
            0 => Self::DFS,
            1 => Self::BFS,
            2 => Self::Dijkstra,
            _ => Self::AStar,
        }
    }

    pub fn selector(self) -> i32 {
        match self {
            Self::DFS => 0,
            Self::BFS => 1,
            Self::Dijkstra => 2,
            Self::AStar => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        self.implementation().name()
    }

    pub(crate) fn implementation(self) -> &'static dyn PathfindingAlgorithm {
        match self {
            Self::DFS => &DFS,
            Self::BFS => &BFS,
            Self::Dijkstra => &Dijkstra,
            Self::AStar => &AStar,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
