mod algorithm;
mod engine;
mod outcome;

pub use algorithm::Algorithm;
pub use engine::Solver;
pub use outcome::{Missing, SolveOutcome};
