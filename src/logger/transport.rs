//! 日志发送通道
//!
//! `HttpTransport` 使用 ureq 同步发送，调用方负责把它放到阻塞线程中执行。

use std::time::Duration;

use tracing::trace;
use ureq::Agent;

use super::event::LogPayload;
use crate::config::CollectorConfig;
use crate::errors::{Result, ShortbatchError};

/// 日志发送通道
pub trait LogTransport: Send + Sync {
    /// 发送一条事件，成功时返回响应体
    fn send(&self, payload: &LogPayload) -> Result<String>;

    fn name(&self) -> &'static str;
}

/// HTTP POST 到收集端
pub struct HttpTransport {
    agent: Agent,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self {
            agent,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &CollectorConfig) -> Self {
        Self::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }
}

impl LogTransport for HttpTransport {
    fn send(&self, payload: &LogPayload) -> Result<String> {
        trace!("POST {} {:?}", self.endpoint, payload);

        let resp = self
            .agent
            .post(&self.endpoint)
            .send_json(payload)
            .map_err(|e| ShortbatchError::log_delivery(format!("{}: {}", self.endpoint, e)))?;

        resp.into_body()
            .read_to_string()
            .map_err(|e| ShortbatchError::log_delivery(format!("reading response: {}", e)))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// 收集端被禁用时使用，只在本地记录
pub struct NullTransport;

impl LogTransport for NullTransport {
    fn send(&self, payload: &LogPayload) -> Result<String> {
        trace!("Collector disabled, dropping event: {:?}", payload);
        Ok(String::new())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}
