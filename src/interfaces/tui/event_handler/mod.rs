//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! - form_screen: draft editing
//! - results_screen: results table
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

mod form_screen;
mod misc_screens;
mod results_screen;

use form_screen::*;
use misc_screens::*;
use results_screen::*;

/// Handle keyboard input based on current screen, returns true to exit
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl-C 在任何屏幕都直接退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.current_screen {
        CurrentScreen::Form => handle_form_screen(app, key),
        CurrentScreen::Results => handle_results_screen(app, key),
        CurrentScreen::Help => handle_help_screen(app, key.code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key.code),
    }
}
