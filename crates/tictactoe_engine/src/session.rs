//! Session state machine.
//!
//! A [`GameSession`] is the single state tuple owned by the presentation
//! layer: board, turn, mode and score, plus the move history. Every user
//! intent maps to one method here and each method returns a fresh
//! [`Snapshot`].

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::{
    Board, EngineError, FIRST_MARK, GameStatus, Mark, Mode, Move, MoveRejection, Score, Snapshot,
    apply_move, evaluate, pick_computer_move, record_outcome,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Mark played by the human in single-player mode.
pub const HUMAN_MARK: Mark = Mark::X;

/// Mark played by the computer in single-player mode.
pub const COMPUTER_MARK: Mark = Mark::O;

/// One session of consecutive games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) mode: Mode,
    pub(crate) score: Score,
    pub(crate) history: Vec<Move>,
    /// Bumped on every state change; stale scheduled work compares against it.
    pub(crate) generation: u64,
}

impl GameSession {
    /// Starts a session with an empty board and zero score.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            turn: FIRST_MARK,
            mode,
            score: Score::new(),
            history: Vec::new(),
            generation: 0,
        }
    }

    /// Replays board indices from a fresh session, ignoring who clicks.
    #[instrument]
    pub fn replay(mode: Mode, indices: &[usize]) -> Result<Self, EngineError> {
        let mut session = Self::new(mode);
        for &index in indices {
            session.place(index)?;
        }
        Ok(session)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the session score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the moves of the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Derives the current status.
    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    /// Whether the computer is due to play.
    pub fn computer_to_move(&self) -> bool {
        self.mode == Mode::SinglePlayer
            && self.turn == COMPUTER_MARK
            && !self.status().is_terminal()
    }

    /// Takes an immutable snapshot of the session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            turn: self.turn,
            mode: self.mode,
            status: self.status(),
            score: self.score,
            generation: self.generation,
        }
    }

    /// Plays a human click at `index`.
    ///
    /// In single-player mode the human holds X, so clicks while O is to move
    /// are refused.
    #[instrument(skip(self), fields(mode = %self.mode, turn = %self.turn))]
    pub fn play(&mut self, index: usize) -> Result<Snapshot, EngineError> {
        if self.mode == Mode::SinglePlayer
            && self.turn != HUMAN_MARK
            && !self.status().is_terminal()
        {
            return Err(EngineError::invalid_move(index, MoveRejection::NotYourTurn));
        }

        self.place(index)
    }

    /// Plays the computer's move if it is due.
    ///
    /// Returns `Ok(None)` when it is not the computer's turn or no cell is
    /// left.
    #[instrument(skip(self, rng), fields(generation = self.generation))]
    pub fn play_computer<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<Snapshot>, EngineError> {
        if !self.computer_to_move() {
            debug!("Computer move requested out of turn");
            return Ok(None);
        }

        match pick_computer_move(&self.board, rng) {
            Some(index) => self.place(index).map(Some),
            None => Ok(None),
        }
    }

    /// Switches mode. Board and turn reset; score is kept.
    ///
    /// Selecting the active mode leaves the game untouched.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn set_mode(&mut self, mode: Mode) -> Snapshot {
        if mode == self.mode {
            debug!("Mode already active");
            return self.snapshot();
        }
        info!(to = %mode, "Mode changed");
        self.mode = mode;
        self.reset_board();
        self.snapshot()
    }

    /// Starts a new game, keeping the score.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Snapshot {
        info!("Game restarted");
        self.reset_board();
        self.snapshot()
    }

    /// Starts a new game and clears the score.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) -> Snapshot {
        info!(cleared = %self.score, "Score cleared");
        self.score = Score::new();
        self.reset_board();
        self.snapshot()
    }

    fn reset_board(&mut self) {
        self.board = Board::new();
        self.turn = FIRST_MARK;
        self.history.clear();
        self.generation += 1;
    }

    /// Applies a move for the mark to play, flips the turn and settles the
    /// score when the move ends the game.
    fn place(&mut self, index: usize) -> Result<Snapshot, EngineError> {
        let mark = self.turn;
        self.board = apply_move(&self.board, mark, index)?;
        let mov = Move::new(mark, index);
        self.history.push(mov);
        self.turn = mark.opponent();
        self.generation += 1;

        let status = self.status();
        if status.is_terminal() {
            // Only the move entering Won/Draw reaches here; later moves are refused
            self.score = record_outcome(self.score, &status)?;
            info!(%mov, %status, score = %self.score, "Game finished");
        } else {
            debug!(%mov, "Move accepted");
        }

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated after move at {index}"
        );

        Ok(self.snapshot())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
