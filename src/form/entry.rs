use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// 一条生成的短链
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenedEntry {
    pub original_url: String,
    pub short_url: String,
    pub short_code: String,
    /// 用户输入的过期分钟数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_minutes: Option<u64>,
    /// 绝对过期时间；None 表示永不过期
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub clicks: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// `now + minutes`；超出可表示范围时视为永不过期，取 `MAX_UTC`
pub fn expiry_deadline(now: DateTime<Utc>, minutes: u64) -> DateTime<Utc> {
    i64::try_from(minutes)
        .ok()
        .and_then(Duration::try_minutes)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

impl ShortenedEntry {
    /// `expires_at <= now` 即视为过期
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// 剩余时间，已过期时为零
    pub fn time_left(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.expires_at
            .map(|at| (at - now).max(Duration::zero()))
    }

    /// 格式化剩余时间，用于结果表 Time Left 列
    pub fn format_time_left(&self, now: DateTime<Utc>) -> String {
        let Some(left) = self.time_left(now) else {
            return "-".to_string();
        };

        let secs = left.num_seconds();
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
