//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked in debug builds and tested on their own.

use crate::{Cell, FIRST_MARK, GameSession};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: no cell is played twice.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut seen = [false; 9];
        session.history().iter().all(|mov| {
            let fresh = mov.index < seen.len() && !seen[mov.index];
            if fresh {
                seen[mov.index] = true;
            }
            fresh
        })
    }

    fn description() -> &'static str {
        "Cells once marked are never overwritten"
    }
}

/// Invariant: marks alternate X, O, X, ... and the turn follows the history.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mov)| {
                let expected = if i % 2 == 0 {
                    FIRST_MARK
                } else {
                    FIRST_MARK.opponent()
                };
                mov.mark == expected
            });

        let expected_turn = if history.len() % 2 == 0 {
            FIRST_MARK
        } else {
            FIRST_MARK.opponent()
        };

        alternates && session.turn() == expected_turn
    }

    fn description() -> &'static str {
        "Marks alternate and the turn matches the move count"
    }
}

/// Invariant: the board holds exactly the marks in the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        board.occupied_count() == session.history().len()
            && session
                .history()
                .iter()
                .all(|mov| board.get(mov.index) == Some(Cell::Occupied(mov.mark)))
    }

    fn description() -> &'static str {
        "Board matches the move history"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = GameSession::new(Mode::LocalMultiplayer);
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut session = GameSession::new(Mode::LocalMultiplayer);
        for index in [4, 0, 8] {
            session.play(index).expect("valid move");
        }
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_corrupted_history() {
        let mut session = GameSession::new(Mode::LocalMultiplayer);
        session.play(4).expect("valid move");
        // Replay the same cell without touching the board
        session.history.push(crate::Move::new(crate::Mark::X, 4));

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 3);
    }
}
