//! 响应元信息：由响应辅助函数写回请求上下文，供访问日志消费。

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// 统一响应封装。`code` 为 0 表示成功。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
    pub timestamp: i64,
    pub trace_id: String,
}

impl<T> Response<T> {
    /// 成功响应。
    pub fn success(data: T, trace_id: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: "ok".to_string(),
            data: Some(data),
            timestamp: now_millis(),
            trace_id: trace_id.into(),
        }
    }

    /// 失败响应，`code` 必须非 0。
    pub fn error(code: i32, message: impl Into<String>, trace_id: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
            timestamp: now_millis(),
            trace_id: trace_id.into(),
        }
    }
}

/// 当前 Unix 毫秒时间戳。
fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
