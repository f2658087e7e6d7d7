use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

pub fn draw_exiting_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Quit", popup::EXITING)
        .theme_color(Color::Magenta)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let count = app.form.entries().len();
    let warning = if count == 0 {
        "Nothing has been shortened yet.".to_string()
    } else {
        format!("{} shortened URL(s) will be discarded.", count)
    };

    let text = vec![
        Line::from(Span::styled(
            "Quit shortbatch?",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(warning, Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(colors::SUCCESS).bold()),
            Span::styled(" quit   ", Style::default().fg(colors::MUTED)),
            Span::styled("[n]", Style::default().fg(colors::ERROR).bold()),
            Span::styled(" stay", Style::default().fg(colors::MUTED)),
        ]),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner_area);
}
