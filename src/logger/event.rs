use serde::Serialize;
use strum::{AsRefStr, EnumIter, EnumString};

/// 允许的日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// 允许的 package 标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogPackage {
    Component,
    Hook,
    Page,
    State,
    Style,
    Auth,
    Config,
    Middleware,
    Utils,
}

/// 发送给收集端的请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogPayload {
    pub stack: String,
    pub level: LogLevel,
    pub package: LogPackage,
    pub message: String,
}

impl LogPayload {
    pub fn new(
        stack: impl Into<String>,
        level: LogLevel,
        package: LogPackage,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stack: stack.into(),
            level,
            package,
            message: message.into(),
        }
    }
}
