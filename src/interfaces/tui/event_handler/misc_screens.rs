use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::App;

/// Handle help screen input
pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> bool {
    if matches!(key_code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
        app.close_overlay();
    }
    false
}

/// Handle exit confirmation input
pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_overlay();
            false
        }
        _ => false,
    }
}
