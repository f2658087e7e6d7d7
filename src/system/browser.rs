//! Open URLs in the user's browser
//!
//! Dispatches to the platform launcher:
//! - Linux / BSD: `xdg-open`
//! - macOS: `open`
//! - Windows: `cmd /C start`

use std::process::{Command, Stdio};

use tracing::debug;

use crate::errors::{Result, ShortbatchError};

/// Opens a URL in a new browsing context
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Platform launcher
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            // 空标题参数，避免 URL 被当作窗口标题
            cmd.args(["/C", "start", "", url]);
            cmd
        }
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

/// Spawn `cmd` and reap it on a background thread so no zombie is left behind
fn spawn_reaped(mut cmd: Command) -> std::io::Result<()> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => debug!("Browser launcher exited with {}", status),
        Ok(_) => {}
        Err(e) => debug!("Failed to wait for browser launcher: {}", e),
    });
    Ok(())
}

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        debug!("Opening {} in browser", url);
        spawn_reaped(Self::command(url))
            .map_err(|e| ShortbatchError::browser_launch(format!("{}: {}", url, e)))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_reaped_runs_command() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("opened");

        let mut cmd = Command::new("touch");
        cmd.arg(&marker);
        spawn_reaped(cmd).unwrap();

        for _ in 0..100 {
            if marker.exists() {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        panic!("launcher never ran");
    }

    #[test]
    fn test_spawn_reaped_reports_missing_program() {
        let cmd = Command::new("shortbatch-no-such-launcher");
        assert!(spawn_reaped(cmd).is_err());
    }
}
