//! Tests for intent handling and computer-move scheduling.

use std::time::Duration;
use tictactoe::{App, AppConfig, AppEvent, ConfigOverrides, CursorMove, Intent};
use tictactoe_engine::{Board, GameStatus, Mark, Mode, Position};
use tokio::sync::mpsc;

fn config(mode: Mode) -> AppConfig {
    AppConfig::default().apply(ConfigOverrides {
        mode: Some(mode),
        seed: Some(42),
        ..ConfigOverrides::default()
    })
}

fn app(mode: Mode) -> (App, mpsc::UnboundedReceiver<AppEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (App::new(&config(mode), tx), rx)
}

#[tokio::test(start_paused = true)]
async fn test_computer_answers_after_delay() {
    let (mut app, mut rx) = app(Mode::SinglePlayer);

    app.handle_intent(Intent::Play(Position::Center));
    assert!(app.has_pending_move());
    assert_eq!(app.snapshot().turn, Mark::O);

    let event = rx.recv().await.expect("computer move event");
    app.handle_event(event);

    let snap = app.snapshot();
    assert!(!app.has_pending_move());
    assert_eq!(snap.board.occupied_count(), 2);
    assert_eq!(snap.turn, Mark::X);
}

#[tokio::test(start_paused = true)]
async fn test_restart_cancels_pending_move() {
    let (mut app, mut rx) = app(Mode::SinglePlayer);

    app.handle_intent(Intent::Play(Position::TopLeft));
    assert!(app.has_pending_move());

    app.handle_intent(Intent::Restart);
    assert!(!app.has_pending_move());

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(app.snapshot().board, Board::new());
}

#[tokio::test(start_paused = true)]
async fn test_mode_switch_mid_game_cancels_and_keeps_score() {
    let (mut app, mut rx) = app(Mode::LocalMultiplayer);

    // X wins the top row
    for pos in [0, 3, 1, 4, 2] {
        app.handle_intent(Intent::Play(Position::from_index(pos).expect("on board")));
    }
    assert_eq!(app.snapshot().score.wins(Mark::X), 1);

    app.handle_intent(Intent::SelectMode(Mode::SinglePlayer));
    app.handle_intent(Intent::Play(Position::Center));
    assert!(app.has_pending_move());

    app.handle_intent(Intent::SelectMode(Mode::LocalMultiplayer));
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(rx.try_recv().is_err());

    let snap = app.snapshot();
    assert_eq!(snap.board, Board::new());
    assert_eq!(snap.turn, Mark::X);
    assert_eq!(snap.mode, Mode::LocalMultiplayer);
    assert_eq!(snap.score.wins(Mark::X), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stale_event_is_discarded() {
    let (mut app, _rx) = app(Mode::SinglePlayer);

    app.handle_intent(Intent::Play(Position::Center));
    let stale = app.snapshot().generation - 1;
    app.handle_event(AppEvent::ComputerMoveDue { generation: stale });

    assert_eq!(app.snapshot().board.occupied_count(), 1);
    assert!(app.has_pending_move());
}

#[tokio::test(start_paused = true)]
async fn test_clicks_ignored_while_computer_thinks() {
    let (mut app, _rx) = app(Mode::SinglePlayer);

    app.handle_intent(Intent::Play(Position::Center));
    let before = app.snapshot();

    app.handle_intent(Intent::Play(Position::TopLeft));
    assert_eq!(app.snapshot(), before);
    assert_eq!(app.notice(), None);
}

#[tokio::test(start_paused = true)]
async fn test_finished_game_scores_once() {
    let (mut app, _rx) = app(Mode::LocalMultiplayer);

    for pos in [0, 3, 1, 4, 2] {
        app.handle_intent(Intent::Play(Position::from_index(pos).expect("on board")));
    }
    // Clicking the finished board is inert
    app.handle_intent(Intent::Play(Position::BottomRight));
    app.handle_intent(Intent::PlayCursor);

    let snap = app.snapshot();
    assert_eq!(
        snap.status,
        GameStatus::Won {
            mark: Mark::X,
            line: [0, 1, 2]
        }
    );
    assert_eq!(snap.score.games_played(), 1);

    app.handle_intent(Intent::ResetScore);
    assert_eq!(app.snapshot().score.games_played(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_full_single_player_game_drives_to_end() {
    let (mut app, mut rx) = app(Mode::SinglePlayer);

    while !app.snapshot().status.is_terminal() {
        let snap = app.snapshot();
        if snap.computer_to_move() {
            let event = rx.recv().await.expect("computer move event");
            app.handle_event(event);
        } else {
            let index = snap.board.empty_indices()[0];
            app.handle_intent(Intent::Play(Position::from_index(index).expect("on board")));
        }
    }

    assert_eq!(app.snapshot().score.games_played(), 1);
    assert!(!app.has_pending_move());
}

#[tokio::test(start_paused = true)]
async fn test_cursor_play_and_quit() {
    let (mut app, _rx) = app(Mode::LocalMultiplayer);

    app.handle_intent(Intent::MoveCursor(CursorMove::Up));
    app.handle_intent(Intent::PlayCursor);
    assert_eq!(app.cursor(), Position::TopCenter);
    assert!(!app.snapshot().board.is_empty(Position::TopCenter.to_index()));

    app.handle_intent(Intent::Quit);
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_reselecting_active_mode_keeps_pending_move() {
    let (mut app, mut rx) = app(Mode::SinglePlayer);

    app.handle_intent(Intent::Play(Position::Center));
    app.handle_intent(Intent::SelectMode(Mode::SinglePlayer));
    assert!(app.has_pending_move());

    let event = rx.recv().await.expect("computer move event");
    app.handle_event(event);
    assert_eq!(app.snapshot().board.occupied_count(), 2);
}
