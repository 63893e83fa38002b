//! Tic-tac-toe game engine.
//!
//! Board representation, win/draw detection, turn management, score
//! accumulation and a random-move computer opponent. The engine performs no
//! I/O and never blocks; front ends own a [`GameSession`] and render the
//! [`Snapshot`]s it returns.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameSession, GameStatus, Mark, Mode};
//!
//! let mut session = GameSession::new(Mode::LocalMultiplayer);
//! for index in [0, 3, 1, 4, 2] {
//!     session.play(index).unwrap();
//! }
//! assert_eq!(session.status(), GameStatus::Won { mark: Mark::X, line: [0, 1, 2] });
//! assert_eq!(session.score().wins(Mark::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
pub mod invariants;
mod mode;
mod position;
pub mod rules;
mod score;
mod session;
mod snapshot;
mod status;
mod types;

pub use action::Move;
pub use engine::{FIRST_MARK, apply_move, evaluate, new_board, pick_computer_move, record_outcome};
pub use error::{EngineError, MoveRejection};
pub use mode::Mode;
pub use position::Position;
pub use rules::{LINES, Line};
pub use score::Score;
pub use session::{COMPUTER_MARK, GameSession, HUMAN_MARK};
pub use snapshot::Snapshot;
pub use status::GameStatus;
pub use types::{Board, CELL_COUNT, Cell, Mark, row_col};
