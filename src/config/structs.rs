use serde::{Deserialize, Serialize};

use crate::errors::{Result, ShortbatchError};
use crate::form::ValidationMode;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，例如 `SB__FORM__CODE_LENGTH=8`
pub const ENV_PREFIX: &str = "SB";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - form: 短链生成与校验行为
/// - collector: 远程日志收集端点
/// - logging: 本地日志输出
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// ENV 前缀：SB，分隔符：__
    /// 显式指定的文件不存在时报错；默认的 config.toml 可以不存在。
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_PATH, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 校验加载后的配置
    pub fn validate(&self) -> Result<()> {
        if self.form.code_length == 0 {
            return Err(ShortbatchError::config("form.code_length must be > 0"));
        }
        if self.form.sweep_interval_ms == 0 {
            return Err(ShortbatchError::config(
                "form.sweep_interval_ms must be > 0",
            ));
        }
        if self.form.short_domain.is_empty() {
            return Err(ShortbatchError::config("form.short_domain cannot be empty"));
        }
        if self.collector.enabled && url::Url::parse(&self.collector.endpoint).is_err() {
            return Err(ShortbatchError::config(format!(
                "collector.endpoint is not a valid URL: {}",
                self.collector.endpoint
            )));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ShortbatchError::config(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 表单配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    /// 短链前缀，生成结果为 `short_domain + code`
    #[serde(default = "default_short_domain")]
    pub short_domain: String,
    /// 随机短码长度
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    /// 提交时的校验策略
    #[serde(default)]
    pub validation_mode: ValidationMode,
    /// 过期清理间隔（毫秒）
    #[serde(default = "default_sweep_interval_ms")]
    pub sweep_interval_ms: u64,
}

/// 远程日志收集配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectorConfig {
    #[serde(default = "default_collector_enabled")]
    pub enabled: bool,
    #[serde(default = "default_collector_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_collector_stack")]
    pub stack: String,
    #[serde(default = "default_collector_timeout_secs")]
    pub timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_short_domain() -> String {
    "http://short.ly/".to_string()
}

fn default_code_length() -> usize {
    6
}

fn default_sweep_interval_ms() -> u64 {
    1000
}

fn default_collector_enabled() -> bool {
    true
}

fn default_collector_endpoint() -> String {
    "http://20.244.56.144/evaluation-service/logs".to_string()
}

fn default_collector_stack() -> String {
    "frontend".to_string()
}

fn default_collector_timeout_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    false
}

// ============================================================
// Default implementations
// ============================================================

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            short_domain: default_short_domain(),
            code_length: default_code_length(),
            validation_mode: ValidationMode::default(),
            sweep_interval_ms: default_sweep_interval_ms(),
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            enabled: default_collector_enabled(),
            endpoint: default_collector_endpoint(),
            stack: default_collector_stack(),
            timeout_secs: default_collector_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StaticConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.form.short_domain, "http://short.ly/");
        assert_eq!(config.form.code_length, 6);
        assert_eq!(config.form.validation_mode, ValidationMode::PerRow);
        assert_eq!(config.collector.stack, "frontend");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = StaticConfig::default();
        config.form.code_length = 0;
        assert!(matches!(
            config.validate(),
            Err(ShortbatchError::Config(_))
        ));

        let mut config = StaticConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());

        let mut config = StaticConfig::default();
        config.collector.endpoint = "not a url".to_string();
        assert!(config.validate().is_err());

        // 禁用收集器后端点不再校验
        config.collector.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = StaticConfig::generate_sample_config();
        assert!(sample.contains("[form]"));
        assert!(sample.contains("validation_mode = \"per_row\""));

        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }
}
