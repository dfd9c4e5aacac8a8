mod cli;
mod logging;

use std::path::Path;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::{debug, info};

use cli::{Args, Command};
use logging::Logger;
use maze_solver::{
    algorithms::pathfinding::PathResult,
    maze::Grid,
    render::render,
    solvers::{Algorithm, SolveOutcome, Solver},
};

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    if args.plain {
        colored::control::set_override(false);
    }

    let mut grid = load_maze(&args.maze)?;

    match args.command.algorithm() {
        Some(algorithm) => run_solver(&mut grid, algorithm),
        None => run_benchmark(&mut grid),
    }
}

fn load_maze(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read maze {}", path.display()))?;
    let grid =
        Grid::from_ascii(&text).wrap_err_with(|| format!("invalid maze {}", path.display()))?;

    if let Some((min, max)) = grid.bounds() {
        debug!("loaded {} cells spanning {} to {}", grid.len(), min, max);
    }

    Ok(grid)
}

fn run_solver(grid: &mut Grid, algorithm: Algorithm) -> Result<()> {
    info!("solving with {}", algorithm.name());

    let result = Solver::new(algorithm).solve(grid).into_result()?;

    print!("{}", render(grid));
    print_result(&result);
    Ok(())
}

fn run_benchmark(grid: &mut Grid) -> Result<()> {
    info!("benchmarking all algorithms");

    let mut completed_results = Vec::new();

    for (i, algorithm) in Algorithm::all().enumerate() {
        info!("testing {}", algorithm.name());

        if i > 0 {
            debug!("resetting maze");
            grid.reset();
        }

        match Solver::new(algorithm).solve(grid) {
            SolveOutcome::Solved(result) => {
                print_result(&result);
                completed_results.push((algorithm.name(), result));
            }
            outcome => {
                if let Err(e) = outcome.into_result() {
                    log::error!("{} failed: {}", algorithm.name(), e);
                }
            }
        }
    }

    print_benchmark_summary(&completed_results);
    Ok(())
}

// ========== Utilities ==========

fn print_result(result: &PathResult) {
    info!(
        "finished in {} steps, {} cells visited",
        result.steps(),
        result.visited
    );
    debug!("planning: {:?}", result.planning_time);
}

fn print_benchmark_summary(results: &[(&str, PathResult)]) {
    info!("\nbenchmark results:");
    info!(
        "{:<20} {:>8}  {:>8}  {:>12}",
        "algorithm", "steps", "visited", "plan"
    );
    info!("{:-<52}", "");

    for (name, result) in results {
        info!(
            "{:<20} {:>8}  {:>8}  {:>12?}",
            name,
            result.steps(),
            result.visited,
            result.planning_time,
        );
    }

    if let Some((name, result)) = results.iter().min_by_key(|(_, r)| r.steps()) {
        info!("\nbest: {} ({} steps)", name, result.steps());
    }

    if let Some((name, result)) = results.iter().min_by_key(|(_, r)| r.visited) {
        info!("leanest: {} ({} cells visited)", name, result.visited);
    }

    if let Some((name, result)) = results.iter().min_by_key(|(_, r)| r.planning_time) {
        info!("fastest: {} ({:?})", name, result.planning_time);
    }
}
