//! Application runtime
//!
//! Mode selection and per-mode startup.

pub mod modes;
