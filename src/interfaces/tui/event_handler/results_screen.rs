use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle results table input
pub fn handle_results_screen(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),
        KeyCode::Enter | KeyCode::Char('o') => app.open_selected(),
        KeyCode::Char('y') => app.copy_selected(),
        KeyCode::Tab | KeyCode::Esc | KeyCode::Char('i') => {
            app.current_screen = CurrentScreen::Form;
        }
        KeyCode::Char('?') | KeyCode::F(1) => app.open_overlay(CurrentScreen::Help),
        KeyCode::Char('q') => app.open_overlay(CurrentScreen::Exiting),
        _ => {}
    }
    false
}
