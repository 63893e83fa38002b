//! Game mode selection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who plays O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Human plays X, the computer plays O.
    #[default]
    #[strum(to_string = "single-player", serialize = "solo")]
    SinglePlayer,
    /// Two humans share the board.
    #[strum(to_string = "local-multiplayer", serialize = "multi")]
    LocalMultiplayer,
}

impl Mode {
    /// Returns the picker label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::SinglePlayer => "VS Computer",
            Mode::LocalMultiplayer => "VS Friend",
        }
    }

    /// Switches to the other mode.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Mode::SinglePlayer => Mode::LocalMultiplayer,
            Mode::LocalMultiplayer => Mode::SinglePlayer,
        }
    }
}
