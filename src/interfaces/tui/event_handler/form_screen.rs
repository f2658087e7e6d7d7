use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle draft editing input
pub fn handle_form_screen(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => app.add_row(),
            KeyCode::Char('d') => app.remove_focused_row(),
            KeyCode::Char('u') => app.clear_field(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Enter => {
            app.submit();
            if !app.form.has_errors() {
                app.current_screen = CurrentScreen::Results;
                app.clamp_selection();
            }
        }
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Esc => {
            app.current_screen = CurrentScreen::Results;
            app.clamp_selection();
        }
        KeyCode::F(1) => app.open_overlay(CurrentScreen::Help),
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }
    false
}
