use mazewalk_core::Position;
use mazewalk_game::Maze;

use crate::Theme;

/// Draws the maze as text, one line per row.
///
/// Each position shows the first that applies: the walker, the start, a trail
/// cell, a backtracked cell, and finally the plain cell.
#[must_use]
pub fn render(maze: &Maze, theme: &Theme) -> String {
    let mut out = String::new();
    for (row, cells) in maze.grid().rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            let pos = Position::new(row, col);
            let glyph = if maze.is_live(pos) {
                theme.live
            } else if maze.is_start(pos) {
                theme.start
            } else if maze.was_visited(pos) {
                theme.trail
            } else if maze.was_backtracked(pos) {
                theme.backtracked
            } else {
                theme.cell(cell)
            };
            out.push_str(glyph);
        }
        out.push('\n');
    }
    out
}
