//! Logging system initialization
//!
//! Sets up tracing according to the `[logging]` section. In TUI mode the
//! terminal belongs to the form, so output always goes to a file there.

use std::path::Path;

use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{Result, ShortbatchError};

/// Log file used by TUI mode when no file is configured
pub const TUI_DEFAULT_LOG_FILE: &str = "shortbatch.log";

/// Where log lines end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File { path: String, rotate: bool },
}

impl LogTarget {
    /// Resolve the target from config; `interactive` forces a file.
    pub fn resolve(config: &LoggingConfig, interactive: bool) -> Self {
        match config.file.as_deref().filter(|f| !f.is_empty()) {
            Some(path) => Self::File {
                path: path.to_string(),
                rotate: config.enable_rotation,
            },
            None if interactive => Self::File {
                path: TUI_DEFAULT_LOG_FILE.to_string(),
                rotate: false,
            },
            None => Self::Stderr,
        }
    }
}

/// Initialize logging
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   so non-blocking writes are flushed on exit
pub fn init_logging(
    config: &LoggingConfig,
    interactive: bool,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let target = LogTarget::resolve(config, interactive);

    let writer: Box<dyn std::io::Write + Send + Sync> = match &target {
        LogTarget::File { path, rotate: true } => {
            let path = Path::new(path);
            let dir = path.parent().unwrap_or(Path::new("."));
            let prefix = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or(TUI_DEFAULT_LOG_FILE)
                .trim_end_matches(".log")
                .to_string();
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .max_log_files(config.max_backups as usize)
                .build(dir)
                .map_err(|e| {
                    ShortbatchError::file_operation(format!(
                        "Failed to create rolling log appender: {}",
                        e
                    ))
                })?;
            Box::new(appender)
        }
        LogTarget::File {
            path,
            rotate: false,
        } => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Box::new(file)
        }
        LogTarget::Stderr => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| ShortbatchError::config(format!("Invalid log level filter: {}", e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(target == LogTarget::Stderr);

    let result = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    result.map_err(|e| ShortbatchError::config(format!("Failed to install subscriber: {}", e)))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target() {
        let config = LoggingConfig::default();
        assert_eq!(LogTarget::resolve(&config, false), LogTarget::Stderr);
        assert_eq!(
            LogTarget::resolve(&config, true),
            LogTarget::File {
                path: TUI_DEFAULT_LOG_FILE.to_string(),
                rotate: false
            }
        );

        let config = LoggingConfig {
            file: Some("logs/app.log".to_string()),
            enable_rotation: true,
            ..LoggingConfig::default()
        };
        assert_eq!(
            LogTarget::resolve(&config, false),
            LogTarget::File {
                path: "logs/app.log".to_string(),
                rotate: true
            }
        );

        // 空文件名等同于未配置
        let config = LoggingConfig {
            file: Some(String::new()),
            ..LoggingConfig::default()
        };
        assert_eq!(LogTarget::resolve(&config, false), LogTarget::Stderr);
    }
}
