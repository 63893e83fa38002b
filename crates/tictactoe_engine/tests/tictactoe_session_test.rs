//! Scenario tests for the session state machine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_engine::{
    Board, Cell, EngineError, GameSession, GameStatus, Mark, Mode, MoveRejection, Position,
    Snapshot, apply_move, evaluate,
};

#[test]
fn test_top_row_scenario() {
    let x = Cell::Occupied(Mark::X);
    let e = Cell::Empty;
    let board = Board::from_cells([x, x, x, e, e, e, e, e, e]);
    assert_eq!(
        evaluate(&board),
        GameStatus::Won {
            mark: Mark::X,
            line: [0, 1, 2]
        }
    );
}

#[test]
fn test_center_then_same_cell() {
    let board = apply_move(&Board::new(), Mark::X, Position::Center.to_index()).expect("valid");
    assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));

    let result = apply_move(&board, Mark::O, 4);
    assert_eq!(
        result,
        Err(EngineError::InvalidMove {
            index: 4,
            reason: MoveRejection::Occupied
        })
    );
}

#[test]
fn test_mode_switch_mid_game() {
    let mut session = GameSession::new(Mode::SinglePlayer);
    let mut rng = StdRng::seed_from_u64(3);

    // Finish one game so there is a score to keep
    while !session.status().is_terminal() {
        if session.computer_to_move() {
            session.play_computer(&mut rng).expect("legal");
        } else {
            let index = session.board().empty_indices()[0];
            session.play(index).expect("legal");
        }
    }
    let score = session.score();
    assert_eq!(score.games_played(), 1);

    session.restart();
    session.play(Position::Center.to_index()).expect("legal");

    let snap = session.set_mode(Mode::LocalMultiplayer);
    assert_eq!(snap.board, Board::new());
    assert_eq!(snap.turn, Mark::X);
    assert_eq!(snap.score, score);
}

#[test]
fn test_single_player_game_against_computer() {
    let mut session = GameSession::new(Mode::SinglePlayer);
    let mut rng = StdRng::seed_from_u64(11);

    let snap = session.play(Position::Center.to_index()).expect("legal");
    assert!(snap.computer_to_move());

    let snap = session
        .play_computer(&mut rng)
        .expect("legal")
        .expect("computer played");
    assert_eq!(snap.turn, Mark::X);
    assert!(snap.accepts_clicks());
    assert_eq!(snap.board.occupied_count(), 2);
}

#[test]
fn test_restart_after_draw_keeps_score() {
    let mut session =
        GameSession::replay(Mode::LocalMultiplayer, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("valid");
    assert_eq!(session.status(), GameStatus::Draw);
    assert_eq!(session.score().draws(), 1);

    let snap = session.restart();
    assert_eq!(snap.status, GameStatus::InProgress);
    assert_eq!(snap.score.draws(), 1);
}

#[test]
fn test_snapshot_serializes() {
    let session = GameSession::replay(Mode::LocalMultiplayer, &[0, 3, 1, 4, 2]).expect("valid");
    let snap = session.snapshot();

    let json = serde_json::to_string(&snap).expect("serialize");
    let back: Snapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, snap);
    assert!(json.contains("\"local-multiplayer\""));
}
