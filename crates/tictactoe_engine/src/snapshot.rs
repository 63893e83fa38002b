//! Immutable views handed to the presentation layer.

use crate::rules::Line;
use crate::session::{COMPUTER_MARK, HUMAN_MARK};
use crate::{Board, GameStatus, Mark, Mode, Score};
use serde::{Deserialize, Serialize};

/// Everything a front end needs to render one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current board.
    pub board: Board,
    /// Mark to move next.
    pub turn: Mark,
    /// Active mode.
    pub mode: Mode,
    /// Status derived from the board.
    pub status: GameStatus,
    /// Session score.
    pub score: Score,
    /// Session generation this snapshot was taken at.
    pub generation: u64,
}

impl Snapshot {
    /// Whether a human click on an empty cell would be accepted.
    pub fn accepts_clicks(&self) -> bool {
        !self.status.is_terminal() && !self.computer_to_move()
    }

    /// Whether the computer is due to play.
    pub fn computer_to_move(&self) -> bool {
        self.mode == Mode::SinglePlayer
            && self.turn == COMPUTER_MARK
            && !self.status.is_terminal()
    }

    /// Winning line to highlight, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.status.winning_line()
    }

    /// Display name for the player holding `mark` in this mode.
    pub fn player_name(&self, mark: Mark) -> &'static str {
        match (self.mode, mark) {
            (Mode::SinglePlayer, m) if m == HUMAN_MARK => "Player X",
            (Mode::SinglePlayer, _) => "Computer (O)",
            (Mode::LocalMultiplayer, Mark::X) => "Player X",
            (Mode::LocalMultiplayer, Mark::O) => "Player O",
        }
    }

    /// One-line status message.
    pub fn headline(&self) -> String {
        match self.status {
            GameStatus::Draw => "Draw!".to_string(),
            GameStatus::Won { mark, .. } => format!("{} wins!", self.player_name(mark)),
            GameStatus::InProgress if self.computer_to_move() => "Computer's turn".to_string(),
            GameStatus::InProgress => format!("Player {}'s turn", self.turn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameSession;

    #[test]
    fn test_headlines_single_player() {
        let mut session = GameSession::new(Mode::SinglePlayer);
        assert_eq!(session.snapshot().headline(), "Player X's turn");

        let snap = session.play(4).expect("valid move");
        assert_eq!(snap.headline(), "Computer's turn");
        assert!(!snap.accepts_clicks());
    }

    #[test]
    fn test_headlines_multiplayer() {
        let mut session = GameSession::new(Mode::LocalMultiplayer);
        let snap = session.play(4).expect("valid move");
        assert_eq!(snap.headline(), "Player O's turn");
        assert!(snap.accepts_clicks());
    }

    #[test]
    fn test_headline_for_computer_win() {
        let session = GameSession::replay(Mode::SinglePlayer, &[0, 2, 3, 4, 8, 6]).expect("valid");
        let snap = session.snapshot();
        assert_eq!(snap.headline(), "Computer (O) wins!");
        assert_eq!(snap.winning_line(), Some([2, 4, 6]));
        assert!(!snap.accepts_clicks());
        assert!(!snap.computer_to_move());
    }

    #[test]
    fn test_headline_for_draw() {
        let session =
            GameSession::replay(Mode::LocalMultiplayer, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("valid");
        assert_eq!(session.snapshot().headline(), "Draw!");
    }
}
