//! Engine contract violations.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum MoveRejection {
    /// Index is outside `0..9`.
    #[display("index is outside the board")]
    OutOfBounds,
    /// Cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// Game has already been won or drawn.
    #[display("game is already over")]
    GameOver,
    /// The mark to move does not belong to the caller.
    #[display("it is not this player's turn")]
    NotYourTurn,
}

/// Error returned by engine operations.
///
/// Both variants mean the caller broke the engine's contract; the
/// presentation layer is expected to prevent them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A move was refused.
    #[display("Invalid move at index {index}: {reason}")]
    InvalidMove {
        /// The requested index.
        index: usize,
        /// Why it was refused.
        reason: MoveRejection,
    },
    /// An outcome was recorded for a game still in progress.
    #[display("Cannot record an outcome while the game is in progress")]
    InvalidOutcome,
}

impl EngineError {
    /// Builds an `InvalidMove` error.
    pub fn invalid_move(index: usize, reason: MoveRejection) -> Self {
        Self::InvalidMove { index, reason }
    }

    /// Returns the rejection reason for `InvalidMove` errors.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            EngineError::InvalidMove { reason, .. } => Some(*reason),
            EngineError::InvalidOutcome => None,
        }
    }
}
