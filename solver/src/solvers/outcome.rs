use std::fmt;

use crate::algorithms::pathfinding::PathResult;

/// what a solve could not find before searching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Start,
    Exit,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Exit => f.write_str("exit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// a path was found and marked on the grid
    Solved(PathResult),
    /// the search ran but never reached the exit
    Unreachable { visited: usize },
    /// no search was attempted and the grid is untouched
    NotConfigured(Missing),
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    pub fn path(&self) -> Option<&PathResult> {
        match self {
            Self::Solved(result) => Some(result),
            _ => None,
        }
    }

    pub fn into_result(self) -> eyre::Result<PathResult> {
        match self {
            Self::Solved(result) => Ok(result),
            Self::Unreachable { visited } => {
                eyre::bail!("no path found after visiting {} cells", visited)
            }
            Self::NotConfigured(missing) => eyre::bail!("maze has no {}", missing),
        }
    }
}
