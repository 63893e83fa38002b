//! Application state and intent handling.

use super::input::{CursorMove, move_cursor};
use super::scheduler::{AppEvent, ComputerMoveScheduler, PendingMove};
use crate::config::AppConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictactoe_engine::{EngineError, GameSession, Mode, Position, Snapshot};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// A user intent forwarded from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Click the given cell.
    Play(Position),
    /// Click the cell under the cursor.
    PlayCursor,
    /// Move the cursor.
    MoveCursor(CursorMove),
    /// Select a mode.
    SelectMode(Mode),
    /// Select the other mode.
    ToggleMode,
    /// New game, keep the score.
    Restart,
    /// New game, clear the score.
    ResetScore,
    /// Leave the application.
    Quit,
}

/// Main application state.
///
/// Owns the session and the only pending computer move. Every intent is
/// applied synchronously; computer moves arrive later as [`AppEvent`]s.
pub struct App {
    session: GameSession,
    cursor: Position,
    rng: StdRng,
    seed: u64,
    scheduler: ComputerMoveScheduler,
    pending: Option<PendingMove>,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the application. Must be called inside a tokio runtime.
    #[instrument(skip_all, fields(mode = %config.mode()))]
    pub fn new(config: &AppConfig, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        let seed = config.seed().unwrap_or_else(|| rand::rng().random());
        info!(seed, "Computer move seed");

        Self {
            session: GameSession::new(*config.mode()),
            cursor: Position::Center,
            rng: StdRng::seed_from_u64(seed),
            seed,
            scheduler: ComputerMoveScheduler::new(config.computer_delay(), events),
            pending: None,
            notice: None,
            should_quit: false,
        }
    }

    /// Current session snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Seed used for computer moves.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Transient message shown under the status line.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether a computer move is waiting on its delay.
    pub fn has_pending_move(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one user intent.
    #[instrument(skip(self))]
    pub fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Play(pos) => {
                self.cursor = pos;
                self.click(pos);
            }
            Intent::PlayCursor => self.click(self.cursor),
            Intent::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Intent::SelectMode(mode) if mode == self.session.mode() => {
                debug!(%mode, "Mode already active");
            }
            Intent::SelectMode(mode) => {
                self.cancel_pending();
                self.session.set_mode(mode);
                self.after_transition("Mode changed");
            }
            Intent::ToggleMode => {
                let mode = self.session.mode().toggle();
                self.handle_intent(Intent::SelectMode(mode));
            }
            Intent::Restart => {
                self.cancel_pending();
                self.session.restart();
                self.after_transition("Restarted");
            }
            Intent::ResetScore => {
                self.cancel_pending();
                self.session.reset_all();
                self.after_transition("Score cleared");
            }
            Intent::Quit => {
                info!("User quit");
                self.cancel_pending();
                self.should_quit = true;
            }
        }
    }

    /// Handles a background event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ComputerMoveDue { generation } => {
                let current = self.pending.as_ref().map(PendingMove::generation);
                if current != Some(generation) || self.session.generation() != generation {
                    debug!(?current, session = self.session.generation(), "Discarding stale computer move");
                    return;
                }
                self.pending = None;

                match self.session.play_computer(&mut self.rng) {
                    Ok(Some(_)) => self.after_transition("Computer moved"),
                    Ok(None) => debug!("Computer had nothing to play"),
                    Err(e) => self.report_defect(e),
                }
            }
        }
    }

    fn click(&mut self, pos: Position) {
        let snap = self.session.snapshot();
        // Inert cells: occupied, finished game, or computer to move
        if !snap.accepts_clicks() || !snap.board.is_empty(pos.to_index()) {
            debug!(%pos, "Click ignored");
            return;
        }

        match self.session.play(pos.to_index()) {
            Ok(_) => self.after_transition("Human moved"),
            Err(e) => self.report_defect(e),
        }
    }

    /// Refreshes derived UI state and schedules the computer if it is due.
    fn after_transition(&mut self, reason: &str) {
        let snap = self.session.snapshot();
        debug!(
            reason,
            snapshot = %serde_json::to_string(&snap).unwrap_or_default(),
            "State changed"
        );
        self.notice = None;

        if snap.computer_to_move() {
            self.cancel_pending();
            self.pending = Some(self.scheduler.schedule(snap.generation));
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }

    fn report_defect(&mut self, error: EngineError) {
        warn!(%error, "Engine refused an intent the UI should have prevented");
        self.notice = Some(error.to_string());
    }
}
