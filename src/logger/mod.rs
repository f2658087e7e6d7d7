//! Remote event logger
//!
//! Posts `{stack, level, package, message}` events to a collector endpoint.
//! Delivery is fire-and-forget: failures are traced locally and never reach
//! the caller.

mod event;
mod event_logger;
mod transport;

pub use event::{LogLevel, LogPackage, LogPayload};
pub use event_logger::EventLogger;
pub use transport::{HttpTransport, LogTransport, NullTransport};
