//! App state definition and basic state management

use ratatui::widgets::TableState;

use crate::form::{DraftField, ShortenerForm};
use crate::logger::EventLogger;
use crate::system::browser::UrlOpener;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    /// 焦点在草稿输入
    Form,
    /// 焦点在结果表
    Results,
    Help,
    Exiting,
}

pub struct App {
    pub form: ShortenerForm,
    pub logger: EventLogger,
    pub opener: Box<dyn UrlOpener>,

    pub current_screen: CurrentScreen,
    /// Help / Exiting 关闭后返回的屏幕
    pub previous_screen: CurrentScreen,

    // Draft focus
    pub focus_row: usize,
    pub focus_field: DraftField,

    // Results selection
    pub selected_entry: usize,
    pub table_state: TableState,

    // UI state
    pub status_message: String,
    pub error_message: String,
}

impl App {
    pub fn new(form: ShortenerForm, logger: EventLogger, opener: Box<dyn UrlOpener>) -> App {
        App {
            form,
            logger,
            opener,
            current_screen: CurrentScreen::Form,
            previous_screen: CurrentScreen::Form,
            focus_row: 0,
            focus_field: DraftField::default(),
            selected_entry: 0,
            table_state: TableState::default(),
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    /// 打开弹窗类屏幕，记住来源屏幕
    pub fn open_overlay(&mut self, screen: CurrentScreen) {
        if matches!(self.current_screen, CurrentScreen::Form | CurrentScreen::Results) {
            self.previous_screen = self.current_screen;
        }
        self.current_screen = screen;
    }

    pub fn close_overlay(&mut self) {
        self.current_screen = self.previous_screen;
    }

    /// 聚焦的草稿字段当前内容
    pub fn focused_value(&self) -> &str {
        self.form
            .drafts()
            .get(self.focus_row)
            .map(|row| row.field(self.focus_field))
            .unwrap_or_default()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::errors::Result;
    use crate::logger::{LogPayload, LogTransport};

    /// 记录所有发送请求的通道
    #[derive(Default)]
    pub struct RecordingTransport {
        pub sent: Mutex<Vec<LogPayload>>,
    }

    impl LogTransport for RecordingTransport {
        fn send(&self, payload: &LogPayload) -> Result<String> {
            self.sent.lock().unwrap().push(payload.clone());
            Ok("{}".to_string())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    /// 记录所有被打开的 URL
    #[derive(Default, Clone)]
    pub struct RecordingOpener {
        pub opened: Arc<Mutex<Vec<String>>>,
    }

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    pub fn test_app() -> (App, Arc<RecordingTransport>, RecordingOpener) {
        let transport = Arc::new(RecordingTransport::default());
        let opener = RecordingOpener::default();
        let logger = EventLogger::new(transport.clone(), "frontend");
        let app = App::new(ShortenerForm::default(), logger, Box::new(opener.clone()));
        (app, transport, opener)
    }

    /// 等待后台投递完成
    pub fn wait_for_sent(transport: &RecordingTransport, expected: usize) -> Vec<LogPayload> {
        for _ in 0..100 {
            let sent = transport.sent.lock().unwrap().clone();
            if sent.len() >= expected {
                return sent;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        transport.sent.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::test_app;
    use super::*;

    #[test]
    fn test_overlay_returns_to_previous_screen() {
        let (mut app, _, _) = test_app();
        app.current_screen = CurrentScreen::Results;

        app.open_overlay(CurrentScreen::Help);
        assert_eq!(app.current_screen, CurrentScreen::Help);

        // 从 Help 再打开 Exiting，返回的仍是 Results
        app.open_overlay(CurrentScreen::Exiting);
        app.close_overlay();
        assert_eq!(app.current_screen, CurrentScreen::Results);
    }

    #[test]
    fn test_status_and_error_are_exclusive() {
        let (mut app, _, _) = test_app();
        app.set_error("bad".to_string());
        app.set_status("good".to_string());
        assert!(app.error_message.is_empty());
        assert_eq!(app.status_message, "good");
    }
}
