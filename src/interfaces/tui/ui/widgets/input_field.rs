//! 通用输入框组件
//!
//! 用于草稿行中的文本输入，支持：
//! - 激活状态高亮
//! - 所在行有错误时红色边框
//! - 空值占位提示

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
///
/// 使用 Builder 模式配置各种选项
///
/// # 示例
///
/// ```rust,ignore
/// InputField::new("URL", &row.original_url)
///     .active(true)
///     .placeholder("https://...")
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    invalid: bool,
    placeholder: Option<&'a str>,
    required: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            invalid: false,
            placeholder: None,
            required: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// 标记所在行校验失败
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn display_title(&self) -> String {
        let mut title = self.title.to_string();

        if self.required {
            title.push_str(" *");
        }

        if self.value.is_empty()
            && let Some(placeholder) = self.placeholder
        {
            title = format!("{} ({})", title, placeholder);
        }

        title
    }

    fn border_style(&self) -> Style {
        if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else if self.invalid {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// 渲染输入框，区域高度应为 3
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        // 激活时在末尾显示光标
        let text = if self.is_active {
            format!("{}_", self.value)
        } else {
            self.value.to_string()
        };

        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, area);
    }
}
