//! 事件日志入口
//!
//! 校验 level / package 后把事件交给后台线程发送。
//! 发送结果只写入本地 tracing 日志，调用方无法也无需等待。

use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, error, warn};

use super::event::{LogLevel, LogPackage, LogPayload};
use super::transport::{HttpTransport, LogTransport, NullTransport};
use crate::config::CollectorConfig;
use crate::errors::{Result, ShortbatchError};

#[derive(Clone)]
pub struct EventLogger {
    transport: Arc<dyn LogTransport>,
    stack: String,
}

impl EventLogger {
    pub fn new(transport: Arc<dyn LogTransport>, stack: impl Into<String>) -> Self {
        Self {
            transport,
            stack: stack.into(),
        }
    }

    pub fn from_config(config: &CollectorConfig) -> Self {
        let transport: Arc<dyn LogTransport> = if config.enabled {
            Arc::new(HttpTransport::from_config(config))
        } else {
            Arc::new(NullTransport)
        };
        debug!(
            "Event logger using {} transport (stack={})",
            transport.name(),
            config.stack
        );
        Self::new(transport, config.stack.clone())
    }

    /// 校验字符串形式的 level / package
    ///
    /// 不在允许列表中时记录诊断信息并返回 None。
    pub fn prepare(&self, level: &str, pkg: &str, message: &str) -> Option<LogPayload> {
        let Ok(level) = LogLevel::from_str(level) else {
            error!("Invalid log level: {}", level);
            return None;
        };
        let Ok(package) = LogPackage::from_str(pkg) else {
            error!("Invalid package: {}", pkg);
            return None;
        };
        Some(LogPayload::new(self.stack.clone(), level, package, message))
    }

    /// 发送一条事件（fire-and-forget）
    ///
    /// 返回值只表示事件是否通过校验并被派发，不代表投递结果。
    pub fn log_event(&self, level: &str, pkg: &str, message: &str) -> bool {
        match self.prepare(level, pkg, message) {
            Some(payload) => {
                self.dispatch(payload);
                true
            }
            None => false,
        }
    }

    /// 类型化版本，参数总是合法的
    pub fn log(&self, level: LogLevel, package: LogPackage, message: impl Into<String>) {
        self.dispatch(LogPayload::new(self.stack.clone(), level, package, message));
    }

    /// 同步发送并返回投递结果（一次性 CLI 命令使用）
    pub fn send_blocking(&self, level: &str, pkg: &str, message: &str) -> Result<String> {
        let payload = self.prepare(level, pkg, message).ok_or_else(|| {
            ShortbatchError::validation(format!(
                "level '{}' or package '{}' is not allowed",
                level, pkg
            ))
        })?;
        self.transport.send(&payload)
    }

    fn dispatch(&self, payload: LogPayload) {
        let transport = Arc::clone(&self.transport);
        let job = move || deliver(transport.as_ref(), &payload);

        // 有 tokio 运行时时复用其阻塞线程池，否则退回到独立线程
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(job);
            }
            Err(_) => {
                if let Err(e) = std::thread::Builder::new()
                    .name("shortbatch-log".to_string())
                    .spawn(job)
                {
                    warn!("Failed to spawn log delivery thread: {}", e);
                }
            }
        }
    }
}

fn deliver(transport: &dyn LogTransport, payload: &LogPayload) {
    match transport.send(payload) {
        Ok(body) => debug!("Log sent: {}", body),
        Err(e) => warn!("Failed to send log: {}", e),
    }
}

impl std::fmt::Debug for EventLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLogger")
            .field("transport", &self.transport.name())
            .field("stack", &self.stack)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_rejects_unknown_values() {
        let logger = EventLogger::new(Arc::new(NullTransport), "frontend");
        assert!(logger.prepare("trace", "component", "x").is_none());
        assert!(logger.prepare("info", "database", "x").is_none());

        let payload = logger.prepare("warn", "state", "x").unwrap();
        assert_eq!(payload.level, LogLevel::Warn);
        assert_eq!(payload.package, LogPackage::State);
        assert_eq!(payload.stack, "frontend");
    }

    #[test]
    fn test_send_blocking_reports_validation() {
        let logger = EventLogger::new(Arc::new(NullTransport), "frontend");
        assert!(matches!(
            logger.send_blocking("nope", "component", "x"),
            Err(ShortbatchError::Validation(_))
        ));
        assert!(logger.send_blocking("info", "component", "x").is_ok());
    }

    #[test]
    fn test_disabled_collector_uses_null_transport() {
        let config = CollectorConfig {
            enabled: false,
            ..CollectorConfig::default()
        };
        let logger = EventLogger::from_config(&config);
        assert!(format!("{:?}", logger).contains("null"));
    }
}
