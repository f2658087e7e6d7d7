//! Form state and transitions
//!
//! `ShortenerForm` owns the drafts, the per-row errors and the produced
//! entries. Every transition is a plain method taking the current time as an
//! argument, so the whole flow is testable without a terminal or a timer.

use std::ops::Range;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use super::draft::{DraftField, DraftRow, FormAction};
use super::entry::{ShortenedEntry, expiry_deadline};
use super::mode::ValidationMode;
use crate::config::FormConfig;
use crate::utils::generate_random_code;
use crate::utils::validators::{is_valid_custom, is_valid_url, parse_expiry_minutes};

/// 同时存在的草稿行上限
pub const MAX_DRAFT_ROWS: usize = 5;

/// 表单行为参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    pub short_domain: String,
    pub code_length: usize,
    pub mode: ValidationMode,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self::from(&FormConfig::default())
    }
}

impl From<&FormConfig> for FormSettings {
    fn from(config: &FormConfig) -> Self {
        Self {
            short_domain: config.short_domain.clone(),
            code_length: config.code_length,
            mode: config.validation_mode,
        }
    }
}

/// 提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 整批提交成功，值为新条目在 entries 中的下标范围
    Committed(Range<usize>),
    /// 至少一行不合法，没有任何条目被提交
    Rejected { failed_rows: Vec<usize> },
}

impl SubmitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

#[derive(Debug, Clone)]
pub struct ShortenerForm {
    drafts: Vec<DraftRow>,
    /// 与 drafts 按下标对齐
    errors: Vec<Option<String>>,
    entries: Vec<ShortenedEntry>,
    settings: FormSettings,
}

impl Default for ShortenerForm {
    fn default() -> Self {
        Self::new(FormSettings::default())
    }
}

impl ShortenerForm {
    pub fn new(settings: FormSettings) -> Self {
        Self {
            drafts: vec![DraftRow::default()],
            errors: vec![None],
            entries: Vec::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn mode(&self) -> ValidationMode {
        self.settings.mode
    }

    pub fn drafts(&self) -> &[DraftRow] {
        &self.drafts
    }

    pub fn entries(&self) -> &[ShortenedEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&ShortenedEntry> {
        self.entries.get(index)
    }

    pub fn errors(&self) -> &[Option<String>] {
        &self.errors
    }

    pub fn row_error(&self, index: usize) -> Option<&str> {
        self.errors.get(index).and_then(|e| e.as_deref())
    }

    /// 第一条行错误，用作状态栏提示
    pub fn banner_error(&self) -> Option<&str> {
        self.errors.iter().find_map(|e| e.as_deref())
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    pub fn can_add_row(&self) -> bool {
        self.drafts.len() < MAX_DRAFT_ROWS
    }

    /// 追加一行空草稿；已达上限时不做任何修改
    pub fn add_row(&mut self) -> bool {
        if !self.can_add_row() {
            return false;
        }
        self.drafts.push(DraftRow::default());
        self.errors.push(None);
        true
    }

    /// 删除一行草稿；至少保留一行
    pub fn remove_row(&mut self, index: usize) -> bool {
        if self.drafts.len() <= 1 || index >= self.drafts.len() {
            return false;
        }
        self.drafts.remove(index);
        self.errors.remove(index);
        true
    }

    pub fn set_field(&mut self, index: usize, field: DraftField, value: impl Into<String>) -> bool {
        match self.drafts.get_mut(index) {
            Some(row) => {
                *row.field_mut(field) = value.into();
                true
            }
            None => false,
        }
    }

    pub fn set_url(&mut self, index: usize, value: impl Into<String>) -> bool {
        self.set_field(index, DraftField::OriginalUrl, value)
    }

    pub fn set_expiry(&mut self, index: usize, value: impl Into<String>) -> bool {
        self.set_field(index, DraftField::Expiry, value)
    }

    pub fn set_custom(&mut self, index: usize, value: impl Into<String>) -> bool {
        self.set_field(index, DraftField::Custom, value)
    }

    /// 分发草稿操作，返回状态是否发生变化
    pub fn apply(&mut self, action: FormAction) -> bool {
        match action {
            FormAction::SetUrl { index, value } => self.set_url(index, value),
            FormAction::SetExpiry { index, value } => self.set_expiry(index, value),
            FormAction::SetCustom { index, value } => self.set_custom(index, value),
            FormAction::AddRow => self.add_row(),
            FormAction::RemoveRow { index } => self.remove_row(index),
        }
    }

    /// 整批提交
    ///
    /// 先校验全部需要校验的行，只有零错误时才生成条目并重置草稿；
    /// 失败时草稿保持原样，错误按行记录。
    pub fn submit(&mut self, now: DateTime<Utc>) -> SubmitOutcome {
        self.errors = vec![None; self.drafts.len()];

        let mode = self.settings.mode;
        let mut failed_rows = Vec::new();
        for (index, row) in self.drafts.iter().enumerate() {
            if let Err(message) = validate_row(index, row, mode) {
                trace!("Row {} rejected: {}", index + 1, message);
                self.errors[index] = Some(message);
                failed_rows.push(index);
                if mode.stops_at_first_error() {
                    break;
                }
            }
        }

        if !failed_rows.is_empty() {
            debug!(
                "Batch rejected: {} invalid row(s), mode={}",
                failed_rows.len(),
                mode
            );
            return SubmitOutcome::Rejected { failed_rows };
        }

        let start = self.entries.len();
        let drafts = std::mem::replace(&mut self.drafts, vec![DraftRow::default()]);
        self.errors = vec![None];
        for row in drafts {
            let entry = self.build_entry(row, now);
            self.entries.push(entry);
        }

        debug!("Batch committed: {} new entries", self.entries.len() - start);
        SubmitOutcome::Committed(start..self.entries.len())
    }

    /// 点击结果：计数加一并返回该条目
    pub fn click(&mut self, index: usize) -> Option<&ShortenedEntry> {
        let entry = self.entries.get_mut(index)?;
        entry.clicks = entry.clicks.saturating_add(1);
        Some(entry)
    }

    /// 清理过期条目，返回被移除的数量
    pub fn tick(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.is_expired(now));
        before - self.entries.len()
    }

    fn build_entry(&self, row: DraftRow, now: DateTime<Utc>) -> ShortenedEntry {
        let DraftRow {
            original_url,
            expiry,
            custom,
        } = row;

        let short_code = if custom.is_empty() {
            generate_random_code(self.settings.code_length)
        } else {
            custom.clone()
        };
        let expiry_minutes = parse_expiry_minutes(&expiry);

        ShortenedEntry {
            original_url,
            short_url: format!("{}{}", self.settings.short_domain, short_code),
            short_code,
            expiry_minutes,
            expires_at: expiry_minutes.map(|m| expiry_deadline(now, m)),
            clicks: 0,
            custom: (!custom.is_empty()).then_some(custom),
            created_at: now,
        }
    }
}

/// 校验单行，错误消息中的行号从 1 开始
fn validate_row(index: usize, row: &DraftRow, mode: ValidationMode) -> Result<(), String> {
    let row_number = index + 1;

    if row.original_url.is_empty() || !is_valid_url(&row.original_url) {
        return Err(format!("Please enter a valid URL in row {}", row_number));
    }

    if !row.expiry.is_empty() && parse_expiry_minutes(&row.expiry).is_none() {
        return Err(format!(
            "Expiry must be a positive integer in row {}",
            row_number
        ));
    }

    if mode.checks_custom() && !is_valid_custom(&row.custom) {
        return Err(format!(
            "Custom code may only contain letters, digits, '_' and '-' in row {}",
            row_number
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn form(mode: ValidationMode) -> ShortenerForm {
        ShortenerForm::new(FormSettings {
            mode,
            ..FormSettings::default()
        })
    }

    #[test]
    fn test_starts_with_one_blank_row() {
        let form = ShortenerForm::default();
        assert_eq!(form.drafts().len(), 1);
        assert!(form.drafts()[0].is_blank());
        assert_eq!(form.errors().len(), 1);
        assert!(form.entries().is_empty());
    }

    #[test]
    fn test_add_row_is_capped() {
        let mut form = ShortenerForm::default();
        for _ in 1..MAX_DRAFT_ROWS {
            assert!(form.add_row());
        }
        assert_eq!(form.drafts().len(), MAX_DRAFT_ROWS);
        assert!(!form.can_add_row());
        assert!(!form.add_row());
        assert_eq!(form.drafts().len(), MAX_DRAFT_ROWS);
        assert_eq!(form.errors().len(), MAX_DRAFT_ROWS);
    }

    #[test]
    fn test_remove_row_keeps_one() {
        let mut form = ShortenerForm::default();
        assert!(!form.remove_row(0));

        form.add_row();
        form.set_url(1, "https://second.example");
        assert!(form.remove_row(0));
        assert_eq!(form.drafts().len(), 1);
        assert_eq!(form.drafts()[0].original_url, "https://second.example");
        assert!(!form.remove_row(3));
    }

    #[test]
    fn test_apply_actions() {
        let mut form = ShortenerForm::default();
        assert!(form.apply(FormAction::SetUrl {
            index: 0,
            value: "https://a.example".to_string()
        }));
        assert!(form.apply(FormAction::set(DraftField::Expiry, 0, "5")));
        assert!(form.apply(FormAction::AddRow));
        assert!(form.apply(FormAction::SetCustom {
            index: 1,
            value: "promo".to_string()
        }));
        assert!(!form.apply(FormAction::SetUrl {
            index: 9,
            value: "x".to_string()
        }));

        assert_eq!(form.drafts()[0], DraftRow::new("https://a.example", "5", ""));
        assert_eq!(form.drafts()[1].custom, "promo");
    }

    #[test]
    fn test_fail_fast_stops_at_first_row() {
        let mut form = form(ValidationMode::FailFast);
        form.set_url(0, "not a url");
        form.add_row();
        form.set_url(1, "also bad");

        let outcome = form.submit(Utc::now());
        assert_eq!(outcome, SubmitOutcome::Rejected { failed_rows: vec![0] });
        assert!(form.row_error(0).is_some());
        assert!(form.row_error(1).is_none());
    }

    #[test]
    fn test_fail_fast_skips_custom_check() {
        let mut form = form(ValidationMode::FailFast);
        form.set_url(0, "https://example.com");
        form.set_custom(0, "has space");

        assert!(form.submit(Utc::now()).is_committed());
        assert_eq!(form.entries()[0].short_url, "http://short.ly/has space");
    }

    #[test]
    fn test_per_row_checks_custom() {
        let mut form = form(ValidationMode::PerRow);
        form.set_url(0, "https://example.com");
        form.set_custom(0, "has space");

        let outcome = form.submit(Utc::now());
        assert_eq!(outcome, SubmitOutcome::Rejected { failed_rows: vec![0] });
        assert!(form.row_error(0).unwrap().contains("row 1"));
    }

    #[test]
    fn test_errors_cleared_on_next_submit() {
        let mut form = ShortenerForm::default();
        form.submit(Utc::now());
        assert!(form.has_errors());

        form.set_url(0, "https://example.com");
        assert!(form.submit(Utc::now()).is_committed());
        assert!(!form.has_errors());
        assert_eq!(form.errors().len(), form.drafts().len());
    }

    #[test]
    fn test_expiry_sets_deadline() {
        let mut form = ShortenerForm::default();
        let now = Utc::now();
        form.set_url(0, "https://example.com");
        form.set_expiry(0, "15");
        form.submit(now);

        let entry = &form.entries()[0];
        assert_eq!(entry.expiry_minutes, Some(15));
        assert_eq!(entry.expires_at, Some(now + Duration::minutes(15)));
        assert_eq!(entry.created_at, now);
    }

    #[test]
    fn test_huge_expiry_never_expires() {
        let mut form = ShortenerForm::default();
        let now = Utc::now();
        form.set_url(0, "https://example.com");
        form.set_expiry(0, "99999999999");
        assert!(form.submit(now).is_committed());

        let entry = &form.entries()[0];
        assert_eq!(entry.expiry_minutes, Some(99_999_999_999));
        assert_eq!(entry.expires_at, Some(DateTime::<Utc>::MAX_UTC));
        assert_eq!(form.tick(now + Duration::days(365 * 1000)), 0);
    }

    #[test]
    fn test_custom_domain_and_length() {
        let mut form = ShortenerForm::new(FormSettings {
            short_domain: "https://s.test/".to_string(),
            code_length: 10,
            mode: ValidationMode::PerRow,
        });
        form.set_url(0, "https://example.com");
        form.submit(Utc::now());

        let entry = &form.entries()[0];
        assert_eq!(entry.short_code.len(), 10);
        assert!(entry.short_url.starts_with("https://s.test/"));
    }

    #[test]
    fn test_click_out_of_range() {
        let mut form = ShortenerForm::default();
        assert!(form.click(0).is_none());
    }
}
