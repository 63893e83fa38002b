//! Derived game status.

use crate::rules::Line;
use crate::Mark;
use serde::{Deserialize, Serialize};

/// Status of a game, derived from its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with `mark` completing `line`.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line, for highlighting.
        line: Line,
    },
    /// All cells filled with no complete line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { mark, .. } => write!(f, "{} wins", mark),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
