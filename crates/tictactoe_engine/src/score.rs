//! Session score.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// Wins per mark and draws across a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Draws recorded.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total completed games.
    pub fn games_played(&self) -> u32 {
        self.x_wins
            .saturating_add(self.o_wins)
            .saturating_add(self.draws)
    }

    pub(crate) fn with_win(mut self, mark: Mark) -> Self {
        match mark {
            Mark::X => self.x_wins = self.x_wins.saturating_add(1),
            Mark::O => self.o_wins = self.o_wins.saturating_add(1),
        }
        self
    }

    pub(crate) fn with_draw(mut self) -> Self {
        self.draws = self.draws.saturating_add(1);
        self
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {} | O {} | Draw {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_mark() {
        let score = Score::new().with_win(Mark::O).with_draw().with_win(Mark::O);
        assert_eq!(score.wins(Mark::O), 2);
        assert_eq!(score.wins(Mark::X), 0);
        assert_eq!(score.games_played(), 3);
        assert_eq!(score.to_string(), "X 0 | O 2 | Draw 1");
    }

    #[test]
    fn test_counters_saturate() {
        let full = Score {
            x_wins: u32::MAX,
            o_wins: u32::MAX,
            draws: u32::MAX,
        };
        let score = full.with_win(Mark::X).with_win(Mark::O).with_draw();
        assert_eq!(score, full);
        assert_eq!(score.games_played(), u32::MAX);
    }
}
