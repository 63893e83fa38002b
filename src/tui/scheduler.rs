//! Delayed, cancelable computer moves.

use derive_new::new;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Messages delivered to the UI loop from background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The display delay for a computer move has elapsed.
    ComputerMoveDue {
        /// Session generation the move was scheduled for.
        generation: u64,
    },
}

/// Schedules computer moves after a fixed display delay.
#[derive(Debug, Clone, new)]
pub struct ComputerMoveScheduler {
    delay: Duration,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl ComputerMoveScheduler {
    /// Starts the delay for a move at `generation`.
    ///
    /// Must be called from inside a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&self, generation: u64) -> PendingMove {
        let delay = self.delay;
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI is shutting down
            let _ = events.send(AppEvent::ComputerMoveDue { generation });
        });
        debug!("Computer move scheduled");
        PendingMove { generation, task }
    }
}

/// Handle to a scheduled computer move. Dropping it cancels the move.
#[derive(Debug)]
pub struct PendingMove {
    generation: u64,
    task: JoinHandle<()>,
}

impl PendingMove {
    /// Generation the move was scheduled for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cancels the move if it has not fired.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn cancel(self) {
        debug!("Pending computer move cancelled");
    }
}

impl Drop for PendingMove {
    fn drop(&mut self) {
        self.task.abort();
    }
}
