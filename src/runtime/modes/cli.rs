//! CLI mode
//!
//! Thin wrapper that logs the startup and delegates to the CLI commands.

use tracing::debug;

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

/// Run CLI mode
pub async fn run_cli(command: Commands, config: &StaticConfig) -> Result<(), CliError> {
    debug!("Running CLI command: {:?}", command);
    crate::interfaces::cli::run_cli_command(command, config).await
}
