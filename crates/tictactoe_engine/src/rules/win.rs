//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark};
use tracing::instrument;

/// Three board indices forming a winning line.
pub type Line = [usize; 3];

/// All winning lines: rows, then columns, then diagonals.
///
/// The order is significant: when several lines are complete at once the
/// first one listed here is reported.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Finds the first complete line on the board.
///
/// Returns the owning mark together with the line, or `None` if no line
/// holds three equal marks.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    let cells = board.cells();
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match cells[a] {
            Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}
