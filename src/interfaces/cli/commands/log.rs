//! Log command

use colored::Colorize;

use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;
use crate::logger::EventLogger;

/// 同步发送一条事件并打印采集端响应
pub async fn send_log(
    config: &StaticConfig,
    level: String,
    package: String,
    message: String,
) -> Result<(), CliError> {
    let logger = EventLogger::from_config(&config.collector);

    let body = tokio::task::spawn_blocking(move || logger.send_blocking(&level, &package, &message))
        .await
        .map_err(|e| CliError::CommandError(format!("Log task failed: {}", e)))??;

    println!("{} Log sent", "✓".bold().green());
    if !body.is_empty() {
        println!("  {}", body.dimmed());
    }
    Ok(())
}
