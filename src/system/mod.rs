//! System-level modules
//!
//! - logging: tracing subscriber setup
//! - panic_handler: crash reporting per run mode
//! - browser: launching URLs with the platform opener

pub mod browser;
pub mod logging;
pub mod panic_handler;
