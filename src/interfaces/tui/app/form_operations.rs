//! Form editing, submit, click and expiry sweep

use chrono::Utc;
use tracing::{info, warn};

use super::state::{App, CurrentScreen};
use crate::errors::ShortbatchError;
use crate::form::{DraftField, FormAction, SubmitOutcome};
use crate::logger::{LogLevel, LogPackage};

impl App {
    /// 向聚焦字段追加字符
    pub fn push_char(&mut self, c: char) {
        let mut value = self.focused_value().to_string();
        value.push(c);
        self.form
            .apply(FormAction::set(self.focus_field, self.focus_row, value));
    }

    /// 删除聚焦字段的最后一个字符
    pub fn pop_char(&mut self) {
        let mut value = self.focused_value().to_string();
        if value.pop().is_some() {
            self.form
                .apply(FormAction::set(self.focus_field, self.focus_row, value));
        }
    }

    /// 清空聚焦字段
    pub fn clear_field(&mut self) {
        self.form
            .apply(FormAction::set(self.focus_field, self.focus_row, ""));
    }

    pub fn add_row(&mut self) {
        if self.form.apply(FormAction::AddRow) {
            self.focus_row = self.form.drafts().len() - 1;
            self.focus_field = DraftField::OriginalUrl;
        } else {
            self.set_error("At most 5 URLs can be shortened at once".to_string());
        }
    }

    pub fn remove_focused_row(&mut self) {
        if self.form.apply(FormAction::RemoveRow {
            index: self.focus_row,
        }) {
            self.clamp_focus();
        }
    }

    /// 提交整批草稿
    pub fn submit(&mut self) {
        match self.form.submit(Utc::now()) {
            SubmitOutcome::Committed(range) => {
                let count = range.len();
                for entry in &self.form.entries()[range] {
                    info!("Shortened {} -> {}", entry.original_url, entry.short_url);
                    self.logger.log(
                        LogLevel::Info,
                        LogPackage::Component,
                        format!("Shortened {} -> {}", entry.original_url, entry.short_url),
                    );
                }
                self.focus_row = 0;
                self.focus_field = DraftField::OriginalUrl;
                self.clamp_selection();
                self.set_status(format!("Shortened {} URL(s)", count));
            }
            SubmitOutcome::Rejected { failed_rows } => {
                let rows: Vec<String> = failed_rows.iter().map(|i| (i + 1).to_string()).collect();
                self.logger.log(
                    LogLevel::Warn,
                    LogPackage::Component,
                    format!("Batch rejected, invalid row(s): {}", rows.join(", ")),
                );
                if let Some(&first) = failed_rows.first() {
                    self.focus_row = first;
                }
                let banner = self.form.banner_error().unwrap_or_default().to_string();
                self.set_error(banner);
            }
        }
    }

    /// 点击选中的结果：计数加一并在浏览器中打开原始 URL
    pub fn open_selected(&mut self) {
        let Some(entry) = self.form.click(self.selected_entry) else {
            return;
        };
        let (original_url, short_url, clicks) =
            (entry.original_url.clone(), entry.short_url.clone(), entry.clicks);

        self.logger.log(
            LogLevel::Info,
            LogPackage::Component,
            format!("Clicked {} ({} clicks)", short_url, clicks),
        );

        match self.opener.open(&original_url) {
            Ok(()) => self.set_status(format!("Opened {}", original_url)),
            Err(e) => {
                warn!("Failed to open {}: {}", original_url, e);
                self.set_error(e.format_simple());
            }
        }
    }

    /// 复制选中结果的短链到剪贴板
    pub fn copy_selected(&mut self) {
        let Some(short_url) = self
            .form
            .entry(self.selected_entry)
            .map(|e| e.short_url.clone())
        else {
            return;
        };

        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(short_url.clone())) {
            Ok(()) => self.set_status(format!("Copied: {}", short_url)),
            Err(e) => {
                warn!("Clipboard unavailable: {}", e);
                self.set_error(ShortbatchError::clipboard(e.to_string()).format_simple());
            }
        }
    }

    /// 定时器回调：移除过期条目
    pub fn on_tick(&mut self) {
        let removed = self.form.tick(Utc::now());
        if removed == 0 {
            return;
        }

        info!("Removed {} expired URL(s)", removed);
        self.logger.log(
            LogLevel::Info,
            LogPackage::State,
            format!("Removed {} expired URL(s)", removed),
        );
        self.clamp_selection();
        if self.form.entries().is_empty() && self.current_screen == CurrentScreen::Results {
            self.current_screen = CurrentScreen::Form;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::test_support::{test_app, wait_for_sent};
    use super::*;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let (mut app, _, _) = test_app();
        type_str(&mut app, "https://x.io");
        app.focus_next();
        type_str(&mut app, "10");
        app.pop_char();

        assert_eq!(app.form.drafts()[0].original_url, "https://x.io");
        assert_eq!(app.form.drafts()[0].expiry, "1");

        app.clear_field();
        assert_eq!(app.form.drafts()[0].expiry, "");
    }

    #[test]
    fn test_add_row_moves_focus_and_reports_cap() {
        let (mut app, _, _) = test_app();
        for _ in 0..4 {
            app.add_row();
        }
        assert_eq!(app.focus_row, 4);
        assert!(app.error_message.is_empty());

        app.add_row();
        assert_eq!(app.form.drafts().len(), 5);
        assert!(!app.error_message.is_empty());
    }

    #[test]
    fn test_submit_logs_one_event_per_entry() {
        let (mut app, transport, _) = test_app();
        type_str(&mut app, "https://a.example");
        app.add_row();
        type_str(&mut app, "https://b.example");

        app.submit();
        assert_eq!(app.form.entries().len(), 2);
        assert_eq!(app.status_message, "Shortened 2 URL(s)");

        let sent = wait_for_sent(&transport, 2);
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().all(|p| p.package == LogPackage::Component));
    }

    #[test]
    fn test_rejected_submit_shows_banner_and_focuses_row() {
        let (mut app, _, _) = test_app();
        type_str(&mut app, "https://a.example");
        app.add_row();
        type_str(&mut app, "bad");
        app.focus_row = 0;

        app.submit();
        assert!(app.form.entries().is_empty());
        assert_eq!(app.focus_row, 1);
        assert_eq!(app.error_message, "Please enter a valid URL in row 2");
    }

    #[test]
    fn test_open_selected_counts_and_opens() {
        let (mut app, transport, opener) = test_app();
        type_str(&mut app, "https://a.example");
        app.submit();

        app.open_selected();
        app.open_selected();

        assert_eq!(app.form.entries()[0].clicks, 2);
        assert_eq!(
            *opener.opened.lock().unwrap(),
            vec!["https://a.example".to_string(), "https://a.example".to_string()]
        );
        // 1 条提交事件 + 2 条点击事件
        assert_eq!(wait_for_sent(&transport, 3).len(), 3);
    }

    #[test]
    fn test_tick_without_expired_entries_is_silent() {
        let (mut app, transport, _) = test_app();
        type_str(&mut app, "https://a.example");
        app.focus_next();
        type_str(&mut app, "5");
        app.submit();
        let before = wait_for_sent(&transport, 1).len();

        app.on_tick();
        assert_eq!(app.form.entries().len(), 1);
        std::thread::sleep(std::time::Duration::from_millis(50));
        assert_eq!(transport.sent.lock().unwrap().len(), before);
    }

    #[test]
    fn test_tick_removes_expired_and_returns_to_form() {
        let (mut app, transport, _) = test_app();
        app.form.set_url(0, "https://a.example");
        app.form.set_expiry(0, "1");
        assert!(app.form.add_row());
        app.form.set_url(1, "https://b.example");
        app.form.set_expiry(1, "1");
        // 两分钟前提交，1 分钟的过期时间早已到达
        assert!(
            app.form
                .submit(Utc::now() - chrono::Duration::minutes(2))
                .is_committed()
        );
        app.current_screen = CurrentScreen::Results;
        app.selected_entry = 1;

        app.on_tick();

        assert!(app.form.entries().is_empty());
        assert_eq!(app.selected_entry, 0);
        assert_eq!(app.current_screen, CurrentScreen::Form);

        let sent = wait_for_sent(&transport, 1);
        std::thread::sleep(std::time::Duration::from_millis(50));
        let sent_after = transport.sent.lock().unwrap().clone();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent_after.len(), 1);
        assert_eq!(sent_after[0].package, LogPackage::State);
        assert!(sent_after[0].message.contains("Removed 2 expired URL(s)"));
    }
}
