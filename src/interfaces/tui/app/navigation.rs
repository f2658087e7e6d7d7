//! Focus and selection logic

use super::state::App;
use crate::form::DraftField;

impl App {
    /// Tab：下一个字段，行末跳到下一行，最后一格回到第一格
    pub fn focus_next(&mut self) {
        match self.focus_field.next() {
            Some(field) => self.focus_field = field,
            None => {
                self.focus_field = DraftField::OriginalUrl;
                self.focus_row = (self.focus_row + 1) % self.form.drafts().len();
            }
        }
    }

    /// Shift-Tab：反向移动
    pub fn focus_prev(&mut self) {
        match self.focus_field.prev() {
            Some(field) => self.focus_field = field,
            None => {
                self.focus_field = DraftField::Custom;
                let rows = self.form.drafts().len();
                self.focus_row = (self.focus_row + rows - 1) % rows;
            }
        }
    }

    /// 草稿行数变化后修正焦点
    pub fn clamp_focus(&mut self) {
        let last = self.form.drafts().len().saturating_sub(1);
        if self.focus_row > last {
            self.focus_row = last;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_entry > 0 {
            self.selected_entry -= 1;
        }
        self.sync_table_state();
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_entry + 1 < self.form.entries().len() {
            self.selected_entry += 1;
        }
        self.sync_table_state();
    }

    /// 条目数量变化后修正选中行
    pub fn clamp_selection(&mut self) {
        let count = self.form.entries().len();
        if count == 0 {
            self.selected_entry = 0;
        } else if self.selected_entry >= count {
            self.selected_entry = count - 1;
        }
        self.sync_table_state();
    }

    pub(crate) fn sync_table_state(&mut self) {
        if self.form.entries().is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(self.selected_entry));
        }
    }
}
