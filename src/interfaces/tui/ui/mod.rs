// UI submodules
mod common;
mod exiting;
mod form_panel;
mod help;
mod results_table;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};
pub use exiting::draw_exiting_screen;
pub use form_panel::{draw_form_panel, form_panel_height};
pub use help::draw_help_screen;
pub use results_table::draw_results_table;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let drafts_height = form_panel_height(app.form.drafts().len());
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Length(drafts_height), // Drafts
            Constraint::Min(6),                // Results
            Constraint::Length(3),             // Status
            Constraint::Length(2),             // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);
    draw_form_panel(frame, app, main_chunks[1]);
    draw_results_table(frame, app, main_chunks[2]);
    draw_status_bar(frame, app, main_chunks[3]);
    draw_footer(frame, app, main_chunks[4]);

    // 弹窗覆盖在主界面之上
    let area = frame.area();
    match app.current_screen {
        CurrentScreen::Help => draw_help_screen(frame, app, area),
        CurrentScreen::Exiting => draw_exiting_screen(frame, app, area),
        CurrentScreen::Form | CurrentScreen::Results => {}
    }
}
