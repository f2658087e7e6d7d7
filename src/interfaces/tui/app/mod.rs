//! App module: state and business logic
//!
//! - state: Core App struct and basic state management
//! - navigation: Focus and selection movement
//! - form_operations: Editing, submit, click, expiry sweep

mod form_operations;
mod navigation;
mod state;

// Re-export main types
pub use state::{App, CurrentScreen};

#[cfg(test)]
pub(crate) use state::test_support;
