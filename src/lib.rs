//! Shortbatch - batch URL shortening form
//!
//! Shortens up to five URLs per submit with optional expiry and custom codes,
//! counts clicks in memory and reports user events to a remote log collector.
//!
//! # Features
//! - **tui**: Interactive terminal form (default)
//! - **cli**: One-shot command-line interface (default)
//! - **full**: All features enabled
//!
//! # Architecture
//! - `form`: Draft rows, submit/tick/click transitions and shortened entries
//! - `logger`: Allow-listed fire-and-forget event reporting
//! - `utils`: URL, expiry and custom-code validators, random codes
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Mode selection
//! - `system`: Logging setup, panic hook and browser launching

pub mod cli;
pub mod config;
pub mod errors;
pub mod form;
pub mod interfaces;
pub mod logger;
pub mod runtime;
pub mod system;
pub mod utils;
