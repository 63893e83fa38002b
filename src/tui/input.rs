//! Keyboard mapping and cursor movement.

use super::app::Intent;
use crossterm::event::KeyCode;
use tictactoe_engine::{Mode, Position};

/// Direction for keyboard cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Maps a key to an intent.
///
/// Digits `1`-`9` click cells in reading order, so mode selection uses
/// letters.
pub fn intent_for_key(code: KeyCode) -> Option<Intent> {
    match code {
        KeyCode::Up => Some(Intent::MoveCursor(CursorMove::Up)),
        KeyCode::Down => Some(Intent::MoveCursor(CursorMove::Down)),
        KeyCode::Left => Some(Intent::MoveCursor(CursorMove::Left)),
        KeyCode::Right => Some(Intent::MoveCursor(CursorMove::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(Intent::Play)
        }
        KeyCode::Char('m') => Some(Intent::ToggleMode),
        KeyCode::Char('c') => Some(Intent::SelectMode(Mode::SinglePlayer)),
        KeyCode::Char('f') => Some(Intent::SelectMode(Mode::LocalMultiplayer)),
        KeyCode::Char('r') | KeyCode::Char('p') => Some(Intent::Restart),
        KeyCode::Char('x') => Some(Intent::ResetScore),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: CursorMove) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        CursorMove::Up => (row.saturating_sub(1), col),
        CursorMove::Down => ((row + 1).min(2), col),
        CursorMove::Left => (row, col.saturating_sub(1)),
        CursorMove::Right => (row, (col + 1).min(2)),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
