//! Mode routing
//!
//! This module provides unified entry points for different execution modes:
//! - CLI mode (one-shot commands)
//! - TUI mode (interactive form)
//!
//! The mode selection is based on the parsed command and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

/// Detect which mode to run based on the parsed subcommand
///
/// # Mode Detection Logic
/// 1. No subcommand or `tui`, with the TUI feature enabled -> TUI mode
/// 2. Any other subcommand with the CLI feature enabled -> CLI mode
/// 3. Otherwise -> Unknown
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => Mode::Tui,
        #[cfg(feature = "cli")]
        Some(_) => Mode::Cli,
        #[allow(unreachable_patterns)]
        _ => Mode::Unknown,
    }
}

#[cfg(all(test, feature = "tui", feature = "cli"))]
mod tests {
    use super::*;
    use crate::cli::ConfigCommands;

    #[test]
    fn test_detect_mode() {
        assert_eq!(detect_mode(None), Mode::Tui);
        assert_eq!(detect_mode(Some(&Commands::Tui)), Mode::Tui);

        let generate = Commands::Config {
            action: ConfigCommands::Generate {
                output_path: None,
                force: false,
            },
        };
        assert_eq!(detect_mode(Some(&generate)), Mode::Cli);
    }
}
