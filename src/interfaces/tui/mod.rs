//! Terminal User Interface (TUI) module
//!
//! Interactive batch form: edit up to five draft rows, submit them together,
//! then browse, open and copy the shortened results while expired entries
//! are swept once per interval.

use std::io;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

mod app;
mod constants;
mod event_handler;
mod ticker;
mod ui;

pub use ticker::SweepTimer;

use crate::config::StaticConfig;
use crate::errors::{Result, ShortbatchError};
use crate::form::{FormSettings, ShortenerForm};
use crate::logger::{EventLogger, LogLevel, LogPackage};
use crate::system::browser::SystemOpener;
use app::App;
use constants::EVENT_POLL_INTERVAL;
use ui::ui;

fn terminal_error(e: io::Error) -> ShortbatchError {
    ShortbatchError::terminal(e.to_string())
}

/// Run the TUI application
pub async fn run_tui(config: &StaticConfig) -> Result<()> {
    let form = ShortenerForm::new(FormSettings::from(&config.form));
    let logger = EventLogger::from_config(&config.collector);
    logger.log(LogLevel::Info, LogPackage::Page, "Shortener form opened");
    let mut app = App::new(form, logger, Box::new(SystemOpener));

    // Setup terminal
    enable_raw_mode().map_err(terminal_error)?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;

    // 定时器跟随界面生命周期，离开本函数时随 Drop 停止
    let mut timer = SweepTimer::start(Duration::from_millis(config.form.sweep_interval_ms));
    info!("TUI started");
    let res = run_app(&mut terminal, &mut app, &mut timer);
    drop(timer);

    // Restore terminal
    disable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    if let Err(err) = &res {
        error!("TUI exited with error: {}", err);
    }
    app.logger
        .log(LogLevel::Info, LogPackage::Page, "Shortener form closed");
    info!("TUI exited");

    res.map_err(terminal_error)
}

/// Main application loop
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    timer: &mut SweepTimer,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(EVENT_POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key)
        {
            return Ok(());
        }

        if timer.drain() > 0 {
            app.on_tick();
        }
    }
}
