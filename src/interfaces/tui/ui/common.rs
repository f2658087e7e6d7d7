use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::colors;

/// Draw title bar with version and entry count
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title_text = vec![Line::from(vec![
        Span::styled("URL Shortener", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(
            format!("Shortened: {} ", app.form.entries().len()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(
            format!("Mode: {}", app.form.mode()),
            Style::default().fg(colors::MUTED),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Status line: current error, last success, or a summary of the form
fn status_line(app: &App) -> (String, Style) {
    if !app.error_message.is_empty() {
        return (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(colors::ERROR).bold(),
        );
    }
    if !app.status_message.is_empty() {
        return (
            format!("[SUCCESS] {}", app.status_message),
            Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
        );
    }

    let drafts = app.form.drafts().len();
    let expiring = app
        .form
        .entries()
        .iter()
        .filter(|e| e.expires_at.is_some())
        .count();
    (
        format!(
            "Ready: {} draft row(s), {} entr(ies) with expiry",
            drafts, expiring
        ),
        Style::default().fg(colors::PRIMARY),
    )
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = status_line(app);
    let status = Paragraph::new(text)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

fn shortcuts(screen: CurrentScreen) -> Vec<(&'static str, &'static str, Color)> {
    match screen {
        CurrentScreen::Form => vec![
            ("Tab", "Next Field", Color::Cyan),
            ("Enter", "Shorten", Color::Green),
            ("Ctrl-N", "Add Row", Color::Green),
            ("Ctrl-D", "Remove Row", Color::Red),
            ("Esc", "Results", Color::Cyan),
            ("F1", "Help", Color::Blue),
            ("Ctrl-C", "Quit", Color::Magenta),
        ],
        CurrentScreen::Results => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("Enter", "Open", Color::Green),
            ("y", "Copy", Color::Green),
            ("Tab", "Form", Color::Cyan),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
        CurrentScreen::Exiting => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts(app.current_screen).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
