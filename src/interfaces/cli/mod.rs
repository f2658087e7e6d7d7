//! CLI interface module
//!
//! One-shot commands that drive the same form and logger as the TUI.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::ShortbatchError;
use commands::{config_generate, send_log, shorten_urls};

#[derive(Debug)]
pub enum CliError {
    /// 参数组合不合法
    ParseError(String),
    /// 批量提交被拒绝
    ValidationError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::ValidationError(msg) => format!("Validation error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::ValidationError(msg) => {
                format!("{} {}", "Validation error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ShortbatchError> for CliError {
    fn from(err: ShortbatchError) -> Self {
        match err {
            ShortbatchError::Validation(msg) => CliError::ValidationError(msg),
            other => CliError::CommandError(other.format_simple()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    match cmd {
        Commands::Shorten {
            urls,
            expiry,
            custom,
            mode,
            json,
        } => shorten_urls(config, urls, expiry, custom, mode, json),

        Commands::Log {
            level,
            package,
            message,
        } => send_log(config, level, package, message).await,

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI is started by the runtime, not the CLI".to_string(),
        )),
    }
}
