//! 草稿行与草稿操作
//!
//! 草稿行保存用户原样输入的文本，校验只在提交时进行。

/// 草稿行中的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    OriginalUrl,
    Expiry,
    Custom,
}

impl DraftField {
    /// 所有字段的顺序（也是界面上的列顺序）
    pub const ALL: [Self; 3] = [Self::OriginalUrl, Self::Expiry, Self::Custom];

    /// 切换到下一个字段，到达末尾时返回 None
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::OriginalUrl => Some(Self::Expiry),
            Self::Expiry => Some(Self::Custom),
            Self::Custom => None,
        }
    }

    /// 切换到上一个字段，到达开头时返回 None
    pub fn prev(&self) -> Option<Self> {
        match self {
            Self::OriginalUrl => None,
            Self::Expiry => Some(Self::OriginalUrl),
            Self::Custom => Some(Self::Expiry),
        }
    }

    /// 字段显示标题
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::OriginalUrl => "URL",
            Self::Expiry => "Expiry",
            Self::Custom => "Custom Code",
        }
    }

    /// 字段为空时的提示文本
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::OriginalUrl => "https://...",
            Self::Expiry => "minutes, optional",
            Self::Custom => "optional",
        }
    }
}

/// 一行待提交的输入
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftRow {
    pub original_url: String,
    /// 过期分钟数（纯数字或空）
    pub expiry: String,
    /// 自定义短码（可为空）
    pub custom: String,
}

impl DraftRow {
    pub fn new(
        original_url: impl Into<String>,
        expiry: impl Into<String>,
        custom: impl Into<String>,
    ) -> Self {
        Self {
            original_url: original_url.into(),
            expiry: expiry.into(),
            custom: custom.into(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::OriginalUrl => &self.original_url,
            DraftField::Expiry => &self.expiry,
            DraftField::Custom => &self.custom,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::OriginalUrl => &mut self.original_url,
            DraftField::Expiry => &mut self.expiry,
            DraftField::Custom => &mut self.custom,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.original_url.is_empty() && self.expiry.is_empty() && self.custom.is_empty()
    }
}

/// 草稿操作
///
/// 所有对草稿的修改都通过 [`ShortenerForm::apply`](super::ShortenerForm::apply) 分发。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetUrl { index: usize, value: String },
    SetExpiry { index: usize, value: String },
    SetCustom { index: usize, value: String },
    AddRow,
    RemoveRow { index: usize },
}

impl FormAction {
    /// 构造设置指定字段的操作
    pub fn set(field: DraftField, index: usize, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            DraftField::OriginalUrl => Self::SetUrl { index, value },
            DraftField::Expiry => Self::SetExpiry { index, value },
            DraftField::Custom => Self::SetCustom { index, value },
        }
    }
}
