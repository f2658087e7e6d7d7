use std::fmt;

#[derive(Debug, Clone)]
pub enum ShortbatchError {
    Validation(String),
    Config(String),
    FileOperation(String),
    Serialization(String),
    Terminal(String),
    LogDelivery(String),
    Clipboard(String),
    BrowserLaunch(String),
}

impl ShortbatchError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortbatchError::Validation(_) => "E001",
            ShortbatchError::Config(_) => "E002",
            ShortbatchError::FileOperation(_) => "E003",
            ShortbatchError::Serialization(_) => "E004",
            ShortbatchError::Terminal(_) => "E005",
            ShortbatchError::LogDelivery(_) => "E006",
            ShortbatchError::Clipboard(_) => "E007",
            ShortbatchError::BrowserLaunch(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortbatchError::Validation(_) => "Validation Error",
            ShortbatchError::Config(_) => "Configuration Error",
            ShortbatchError::FileOperation(_) => "File Operation Error",
            ShortbatchError::Serialization(_) => "Serialization Error",
            ShortbatchError::Terminal(_) => "Terminal Error",
            ShortbatchError::LogDelivery(_) => "Log Delivery Error",
            ShortbatchError::Clipboard(_) => "Clipboard Error",
            ShortbatchError::BrowserLaunch(_) => "Browser Launch Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortbatchError::Validation(msg)
            | ShortbatchError::Config(msg)
            | ShortbatchError::FileOperation(msg)
            | ShortbatchError::Serialization(msg)
            | ShortbatchError::Terminal(msg)
            | ShortbatchError::LogDelivery(msg)
            | ShortbatchError::Clipboard(msg)
            | ShortbatchError::BrowserLaunch(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortbatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortbatchError {}

// 便捷的构造函数
impl ShortbatchError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortbatchError::Validation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortbatchError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortbatchError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortbatchError::Serialization(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        ShortbatchError::Terminal(msg.into())
    }

    pub fn log_delivery<T: Into<String>>(msg: T) -> Self {
        ShortbatchError::LogDelivery(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        ShortbatchError::Clipboard(msg.into())
    }

    pub fn browser_launch<T: Into<String>>(msg: T) -> Self {
        ShortbatchError::BrowserLaunch(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for ShortbatchError {
    fn from(err: std::io::Error) -> Self {
        ShortbatchError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ShortbatchError {
    fn from(err: serde_json::Error) -> Self {
        ShortbatchError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ShortbatchError {
    fn from(err: toml::ser::Error) -> Self {
        ShortbatchError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for ShortbatchError {
    fn from(err: config::ConfigError) -> Self {
        ShortbatchError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortbatchError>;
