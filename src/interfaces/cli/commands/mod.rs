//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod config_gen;
mod log;
mod shorten;

pub use config_gen::config_generate;
pub use log::send_log;
pub use shorten::{fill_batch, shorten_urls};
