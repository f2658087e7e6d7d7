use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumMessage, EnumString};

/// 提交校验策略
///
/// 两种策略都是全有或全无：只要有一行不合法，整批都不会提交。
/// 区别只在于错误的报告方式。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Default,
    EnumIter,
    EnumString,
    AsRefStr,
    EnumMessage,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ValidationMode {
    /// 遇到第一行错误即停止，只报告这一行；不校验自定义短码
    #[strum(message = "Stop at the first invalid row and report only that row")]
    FailFast,
    /// 校验所有行，每个错误行各报告一条
    #[default]
    #[strum(message = "Check every row and report one error per invalid row")]
    PerRow,
}

impl ValidationMode {
    /// 是否校验自定义短码字符集
    pub fn checks_custom(self) -> bool {
        matches!(self, Self::PerRow)
    }

    /// 一句话说明，显示在帮助弹窗中
    pub fn description(self) -> &'static str {
        self.get_message().unwrap_or_default()
    }

    /// 是否在第一处错误后停止
    pub fn stops_at_first_error(self) -> bool {
        matches!(self, Self::FailFast)
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
