use colored::Colorize;

use crate::maze::{Grid, Position};

/// draws the bounding box of the grid; positions without a cell are walls.
///
/// `S` start, `E` exit, `*` on-solution, `o` visited, `.` untouched, `#` wall
pub fn render(grid: &Grid) -> String {
    let Some((min, max)) = grid.bounds() else {
        return String::new();
    };

    let start = grid.start();
    let mut out = String::new();

    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let symbol = match grid.cell_at(Position::new(x, y)) {
                None => "#".dimmed(),
                Some(id) if Some(id) == start => "S".green().bold(),
                Some(id) if grid[id].is_exit() => "E".red().bold(),
                Some(id) if grid[id].is_on_solution() => "*".yellow().bold(),
                Some(id) if grid[id].is_visited() => "o".blue(),
                Some(_) => ".".normal(),
            };
            out.push_str(&symbol.to_string());
        }
        out.push('\n');
    }

    out
}
