//! Panic handler module
//!
//! Appends a crash report to `crash.log` and prints a one-line hint.
//! In TUI mode the terminal is restored first so the hint is readable.

use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic::{self, PanicHookInfo};

use chrono::Utc;

/// Crash reports are appended here
pub const CRASH_LOG_FILE: &str = "crash.log";

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |info| {
        if mode == RunMode::Tui {
            restore_terminal();
        }

        let report = CrashReport::capture(mode, info);
        if let Err(e) = report.append_to(CRASH_LOG_FILE) {
            eprintln!("Failed to write {}: {}", CRASH_LOG_FILE, e);
        }

        eprintln!();
        eprintln!("shortbatch crashed: {}", report.message);
        eprintln!("Details were appended to {}", CRASH_LOG_FILE);
    }));
}

struct CrashReport {
    mode: RunMode,
    message: String,
    location: String,
    backtrace: Backtrace,
}

impl CrashReport {
    fn capture(mode: RunMode, info: &PanicHookInfo<'_>) -> Self {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Unknown panic".to_string());

        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        Self {
            mode,
            message,
            location,
            backtrace: Backtrace::force_capture(),
        }
    }

    fn append_to(&self, path: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        writeln!(
            file,
            "--- {} v{} ({:?} mode) at {} ---",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            self.mode,
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(file, "panic: {}", self.message)?;
        writeln!(file, "at: {}", self.location)?;
        writeln!(file, "{}", self.backtrace)?;
        writeln!(file)?;
        Ok(())
    }
}

#[cfg(feature = "tui")]
fn restore_terminal() {
    use ratatui::crossterm::{
        execute,
        terminal::{LeaveAlternateScreen, disable_raw_mode},
    };

    let _ = disable_raw_mode();
    let _ = execute!(std::io::stderr(), LeaveAlternateScreen);
}

#[cfg(not(feature = "tui"))]
fn restore_terminal() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crash.log");
        let path = path.to_str().unwrap();

        let report = CrashReport {
            mode: RunMode::Cli,
            message: "boom".to_string(),
            location: "src/main.rs:1:1".to_string(),
            backtrace: Backtrace::disabled(),
        };
        report.append_to(path).unwrap();
        report.append_to(path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.matches("panic: boom").count(), 2);
        assert!(content.contains("(Cli mode)"));
    }
}
