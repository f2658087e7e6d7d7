use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use strum::IntoEnumIterator;

use super::widgets::Popup;
use crate::form::ValidationMode;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn shortcut(keys: &'static str, desc: &'static str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<17}", keys), Style::default().fg(color)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

fn mode_line(mode: ValidationMode, active: ValidationMode) -> Line<'static> {
    let (marker, color) = if mode == active {
        ("*", Color::Green)
    } else {
        (" ", Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(format!("  {} {:<15}", marker, mode.as_ref()), Style::default().fg(color)),
        Span::styled(mode.description(), Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let mut help_text = vec![
        Line::from(""),
        section("FORM"),
        shortcut("Tab, Down", "Next field", Color::Cyan),
        shortcut("Shift-Tab, Up", "Previous field", Color::Cyan),
        shortcut("Backspace", "Delete character", Color::Cyan),
        shortcut("Ctrl-U", "Clear field", Color::Cyan),
        shortcut("Ctrl-N", "Add another URL (up to 5)", Color::Green),
        shortcut("Ctrl-D", "Remove current row", Color::Red),
        shortcut("Enter", "Shorten all rows", Color::Green),
        shortcut("Esc", "Go to results", Color::Cyan),
        Line::from(""),
        section("RESULTS"),
        shortcut("Up/Down, j/k", "Navigate list", Color::Cyan),
        shortcut("Enter, o", "Open original URL (counts a click)", Color::Green),
        shortcut("y", "Copy short URL", Color::Green),
        shortcut("Tab, i, Esc", "Back to form", Color::Cyan),
        shortcut("q", "Quit application", Color::Magenta),
        Line::from(""),
        section("VALIDATION"),
    ];
    let active = app.form.mode();
    help_text.extend(ValidationMode::iter().map(|mode| mode_line(mode, active)));
    help_text.extend([
        Line::from(""),
        section("NOTES"),
        Line::from(Span::styled(
            "  Expiry is in minutes. Expired URLs are removed automatically.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "  Ctrl-C quits from any screen.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_line_marks_active_mode() {
        let line = mode_line(ValidationMode::PerRow, ValidationMode::PerRow);
        assert!(line.spans[0].content.starts_with("  * per_row"));
        assert_eq!(
            line.spans[1].content,
            ValidationMode::PerRow.description()
        );

        let line = mode_line(ValidationMode::FailFast, ValidationMode::PerRow);
        assert!(line.spans[0].content.starts_with("    fail_fast"));
    }
}
