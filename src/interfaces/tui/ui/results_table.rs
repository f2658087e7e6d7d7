use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors};

/// 按字符截断，避免切在多字节字符中间
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

pub fn draw_results_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.current_screen == CurrentScreen::Results;
    let border_color = if focused { colors::PRIMARY } else { colors::MUTED };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(format!("Shortened URLs ({})", app.form.entries().len()))
        .title_style(Style::default().fg(colors::PRIMARY).bold());

    if app.form.entries().is_empty() {
        let empty = Paragraph::new("No shortened URLs yet")
            .style(Style::default().fg(colors::MUTED))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        "Short URL",
        "Original URL",
        "Expiry (min)",
        "Custom Code",
        "Clicks",
        "Time Left",
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let now = Utc::now();
    let rows: Vec<Row> = app
        .form
        .entries()
        .iter()
        .map(|entry| {
            Row::new(vec![
                Span::styled(
                    entry.short_url.clone(),
                    Style::default().fg(Color::Cyan).bold(),
                ),
                Span::styled(
                    truncate(&entry.original_url, URL_TRUNCATE_LENGTH),
                    Style::default().fg(Color::Blue),
                ),
                Span::raw(
                    entry
                        .expiry_minutes
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
                Span::raw(entry.custom.clone().unwrap_or_else(|| "-".to_string())),
                Span::styled(entry.clicks.to_string(), Style::default().fg(colors::SUCCESS)),
                Span::styled(
                    entry.format_time_left(now),
                    Style::default().fg(Color::Yellow),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(28), // Short URL
            Constraint::Min(20),    // Original URL
            Constraint::Length(12), // Expiry
            Constraint::Length(14), // Custom Code
            Constraint::Length(7),  // Clicks
            Constraint::Length(11), // Time Left
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    app.sync_table_state();
    frame.render_stateful_widget(table, area, &mut app.table_state);
}
