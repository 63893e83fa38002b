//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;
use tictactoe::ConfigOverrides;
use tictactoe_engine::Mode;

/// Tic Tac Toe in the terminal - play the computer or a friend
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Starting mode (single-player/solo or local-multiplayer/multi)
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Delay before the computer moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for reproducible computer moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Values that take precedence over the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            mode: self.mode,
            computer_delay_ms: self.delay_ms,
            seed: self.seed,
            log_file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["tictactoe", "--mode", "multi", "--delay-ms", "0", "--seed", "3"]);
        let overrides = cli.overrides();
        assert_eq!(overrides.mode, Some(Mode::LocalMultiplayer));
        assert_eq!(overrides.computer_delay_ms, Some(0));
        assert_eq!(overrides.seed, Some(3));
        assert_eq!(overrides.log_file, None);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["tictactoe", "--mode", "online"]).is_err());
    }
}
