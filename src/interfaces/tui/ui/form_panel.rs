//! 草稿输入面板
//!
//! 每行三个输入框（URL / Expiry / Custom Code），下方一行显示该行的校验错误。

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::widgets::InputField;
use crate::form::{DraftField, MAX_DRAFT_ROWS};
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::{DRAFT_ROW_HEIGHT, colors};

/// 面板高度：边框 2 行 + 每行草稿 + 按钮 1 行
pub fn form_panel_height(rows: usize) -> u16 {
    2 + rows as u16 * DRAFT_ROW_HEIGHT + 1
}

pub fn draw_form_panel(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.current_screen == CurrentScreen::Form;
    let border_color = if focused { colors::PRIMARY } else { colors::MUTED };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(format!(
            "Shorten URLs ({}/{})",
            app.form.drafts().len(),
            MAX_DRAFT_ROWS
        ))
        .title_style(Style::default().fg(colors::PRIMARY).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = app
        .form
        .drafts()
        .iter()
        .map(|_| Constraint::Length(DRAFT_ROW_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for index in 0..app.form.drafts().len() {
        draw_draft_row(frame, app, index, chunks[index]);
    }
    draw_buttons(frame, app, chunks[chunks.len() - 1]);
}

fn draw_draft_row(frame: &mut Frame, app: &App, index: usize, area: Rect) {
    let row = &app.form.drafts()[index];
    let error = app.form.row_error(index);
    let focused = app.current_screen == CurrentScreen::Form;

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // URL
            Constraint::Percentage(15), // Expiry
            Constraint::Percentage(25), // Custom Code
        ])
        .split(parts[0]);

    for (field, column) in DraftField::ALL.iter().zip(columns.iter()) {
        let mut input = InputField::new(field.display_title(), row.field(*field))
            .active(focused && app.focus_row == index && app.focus_field == *field)
            .invalid(error.is_some())
            .placeholder(field.placeholder());
        if *field == DraftField::OriginalUrl {
            input = input.required();
        }
        input.render(frame, *column);
    }

    if let Some(message) = error {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(colors::ERROR),
        )));
        frame.render_widget(line, parts[1]);
    }
}

fn draw_buttons(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    if app.form.can_add_row() {
        spans.push(Span::styled(
            "[Ctrl-N] + Add Another URL",
            Style::default().fg(colors::SUCCESS),
        ));
        spans.push(Span::styled("   ", Style::default()));
    }
    spans.push(Span::styled(
        "[Enter] Shorten URLs",
        Style::default().fg(colors::PRIMARY).bold(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
