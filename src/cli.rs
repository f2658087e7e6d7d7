//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for shortbatch using clap's derive macros.

use clap::{Parser, Subcommand};

use crate::form::{MAX_DRAFT_ROWS, ValidationMode};

/// Shortbatch - shorten up to five URLs at once
#[derive(Parser, Debug)]
#[command(name = "shortbatch")]
#[command(version)]
#[command(about = "Batch URL shortener with expiry and click counting", long_about = None)]
pub struct Cli {
    /// Path to the configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive form (default)
    #[cfg(feature = "tui")]
    Tui,

    /// Shorten one batch of URLs and print the results
    ///
    /// Usage: shorten <URL>... [--expiry MIN] [--custom CODE]
    /// - Up to five URLs are submitted together
    /// - --custom may only be used with a single URL
    Shorten {
        /// URLs to shorten (1-5)
        #[arg(required = true, num_args = 1..=MAX_DRAFT_ROWS)]
        urls: Vec<String>,

        /// Expiry in minutes, applied to every URL
        #[arg(long, short = 'e')]
        expiry: Option<String>,

        /// Custom short code (single URL only)
        #[arg(long)]
        custom: Option<String>,

        /// Override the configured validation mode (fail_fast, per_row)
        #[arg(long)]
        mode: Option<ValidationMode>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send one event to the log collector and wait for the response
    Log {
        /// debug, info, warn, error or fatal
        level: String,

        /// component, hook, page, state, style, auth, config, middleware or utils
        package: String,

        /// Free-form message
        message: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorten() {
        let cli = Cli::parse_from([
            "shortbatch",
            "shorten",
            "https://a.example",
            "https://b.example",
            "--expiry",
            "10",
        ]);
        match cli.command {
            Some(Commands::Shorten {
                urls,
                expiry,
                custom,
                mode,
                json,
            }) => {
                assert_eq!(urls.len(), 2);
                assert_eq!(expiry.as_deref(), Some("10"));
                assert!(custom.is_none());
                assert!(mode.is_none());
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_shorten_rejects_more_than_five_urls() {
        let mut args = vec!["shortbatch", "shorten"];
        args.extend(std::iter::repeat_n("https://a.example", 6));
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_mode_override_and_global_config() {
        let cli = Cli::parse_from([
            "shortbatch",
            "shorten",
            "https://a.example",
            "--mode",
            "fail_fast",
            "-c",
            "custom.toml",
        ]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert!(matches!(
            cli.command,
            Some(Commands::Shorten {
                mode: Some(ValidationMode::FailFast),
                ..
            })
        ));
    }

    #[test]
    fn test_parse_log() {
        let cli = Cli::parse_from(["shortbatch", "log", "info", "page", "hello"]);
        assert!(matches!(cli.command, Some(Commands::Log { .. })));
    }
}
