//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the session and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, winning_line};
