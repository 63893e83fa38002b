//! Terminal front end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Engine** (`tictactoe_engine`): rules, turns, score, random opponent
//! - **Config**: TOML file plus command-line overrides
//! - **TUI**: ratatui rendering, key mapping, and the cancelable
//!   computer-move scheduler
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{AppConfig, run_tui};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load(None)?;
//! run_tui(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod tui;

pub use config::{AppConfig, ConfigError, ConfigOverrides, DEFAULT_CONFIG_FILE};
pub use tui::{
    App, AppEvent, ComputerMoveScheduler, CursorMove, Intent, PendingMove, intent_for_key,
    move_cursor, run_tui,
};
