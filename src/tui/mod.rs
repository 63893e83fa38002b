//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod scheduler;
mod ui;

pub use app::{App, Intent};
pub use input::{CursorMove, intent_for_key, move_cursor};
pub use scheduler::{AppEvent, ComputerMoveScheduler, PendingMove};

use crate::config::AppConfig;
use anyhow::{Result, bail};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// How long the key reader blocks before checking for shutdown.
const TICK: Duration = Duration::from_millis(50);

/// Runs the TUI until the user quits.
#[instrument(skip_all, fields(mode = %config.mode()))]
pub async fn run_tui(config: AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    let reader = spawn_key_reader(key_tx);
    let mut app = App::new(&config, event_tx);

    let res = run_loop(&mut terminal, &mut app, &mut event_rx, &mut key_rx).await;

    // Closing the channel stops the reader within one tick
    drop(key_rx);
    match reader.await {
        Ok(Ok(())) => debug!("Key reader stopped"),
        Ok(Err(err)) => error!(error = ?err, "Key reader failed"),
        Err(err) => error!(error = ?err, "Key reader panicked"),
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    let score = app.snapshot().score;
    info!(%score, seed = app.seed(), "TUI closed");
    res
}

/// Reads terminal keys on a blocking thread so the runtime stays free.
fn spawn_key_reader(keys: mpsc::UnboundedSender<KeyEvent>) -> JoinHandle<io::Result<()>> {
    tokio::task::spawn_blocking(move || {
        while !keys.is_closed() {
            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
                && keys.send(key).is_err()
            {
                break;
            }
        }
        Ok(())
    })
}

/// Draw, then wait for the next key or background event.
async fn run_loop(
    terminal: &mut Term,
    app: &mut App,
    events: &mut mpsc::UnboundedReceiver<AppEvent>,
    keys: &mut mpsc::UnboundedReceiver<KeyEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        tokio::select! {
            Some(event) = events.recv() => app.handle_event(event),
            key = keys.recv() => match key {
                Some(key) => dispatch_key(app, key),
                None => bail!("Keyboard input closed"),
            },
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Forwards key presses to the app; releases and repeats are ignored.
fn dispatch_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Press
        && let Some(intent) = intent_for_key(key.code)
    {
        app.handle_intent(intent);
    }
}
