//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It delegates to the actual TUI implementation.

use tracing::info;

use crate::config::StaticConfig;
use crate::errors::Result;

/// Run TUI mode
pub async fn run_tui(config: &StaticConfig) -> Result<()> {
    info!(
        "Starting TUI (mode={}, collector={})",
        config.form.validation_mode,
        if config.collector.enabled {
            config.collector.endpoint.as_str()
        } else {
            "disabled"
        }
    );
    crate::interfaces::tui::run_tui(config).await
}
