//! Draw detection logic for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::winning_line;
    use super::*;
    use crate::Mark;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winning_line(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut cells = [Cell::Empty; 9];
        cells[4] = Cell::Occupied(Mark::X);
        assert!(!is_full(&Board::from_cells(cells)));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        use Mark::{O, X};
        let board = Board::from_cells([X, O, X, O, X, X, O, X, O].map(Cell::from));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Mark::{O, X};
        let board = Board::from_cells([X, X, X, O, O, X, O, X, O].map(Cell::from));
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
