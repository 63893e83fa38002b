//! Pure engine operations.
//!
//! Every function here takes values and returns values. Turn flipping and
//! score bookkeeping across a game live in [`GameSession`](crate::GameSession).

use crate::rules::{is_full, winning_line};
use crate::{Board, CELL_COUNT, EngineError, GameStatus, Mark, MoveRejection, Position, Score};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Mark that opens every game.
pub const FIRST_MARK: Mark = Mark::X;

/// Returns an empty board and the mark to move first.
#[instrument]
pub fn new_board() -> (Board, Mark) {
    (Board::new(), FIRST_MARK)
}

/// Derives the status of `board`.
///
/// Lines are checked in table order, so the earliest complete line is the
/// one reported.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((mark, line)) = winning_line(board) {
        return GameStatus::Won { mark, line };
    }

    if is_full(board) {
        return GameStatus::Draw;
    }

    GameStatus::InProgress
}

/// Places `turn`'s mark at `index`, returning the new board.
///
/// The input board is not modified and the turn is not flipped.
///
/// # Errors
///
/// [`EngineError::InvalidMove`] when `index` is off the board, the game is
/// already over, or the cell is occupied.
#[instrument]
pub fn apply_move(board: &Board, turn: Mark, index: usize) -> Result<Board, EngineError> {
    // Check position bounds
    if index >= CELL_COUNT {
        return Err(EngineError::invalid_move(index, MoveRejection::OutOfBounds));
    }

    // Check if game is over
    if evaluate(board).is_terminal() {
        return Err(EngineError::invalid_move(index, MoveRejection::GameOver));
    }

    // Check if cell is empty
    if !board.is_empty(index) {
        return Err(EngineError::invalid_move(index, MoveRejection::Occupied));
    }

    Ok(board.with_mark(index, turn))
}

/// Picks a uniformly random empty cell.
///
/// This is the whole computer opponent: no lookahead and no heuristics.
/// Returns `None` when the board has no empty cell.
#[instrument(skip(rng))]
pub fn pick_computer_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let candidates = Position::valid_moves(board);
    let choice = candidates.choose(rng).copied();
    debug!(?choice, candidates = candidates.len(), "Computer picked a cell");
    choice.map(Position::to_index)
}

/// Adds a finished game's outcome to `score`.
///
/// # Errors
///
/// [`EngineError::InvalidOutcome`] when `status` is `InProgress`.
#[instrument]
pub fn record_outcome(score: Score, status: &GameStatus) -> Result<Score, EngineError> {
    match status {
        GameStatus::Won { mark, .. } => Ok(score.with_win(*mark)),
        GameStatus::Draw => Ok(score.with_draw()),
        GameStatus::InProgress => Err(EngineError::InvalidOutcome),
    }
}
