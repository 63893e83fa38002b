//! First-class move records.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// An accepted move: `mark` placed at board index `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// The board index (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }

    /// Returns the named position of this move.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(pos) => write!(f, "{} -> {}", self.mark, pos.label()),
            None => write!(f, "{} -> #{}", self.mark, self.index),
        }
    }
}
