//! HTTP 响应辅助函数
//!
//! 构造统一的 Response 封装，先写回请求上下文（供访问日志读取），
//! 再序列化为 HTTP 响应体。

use admin_contexts as contexts;
use admin_telemetry::RequestIds;
use axum::{
    Json,
    http::{Extensions, StatusCode},
    response::{IntoResponse, Response},
};
use domain::Response as Envelope;
use serde::Serialize;
use serde_json::Value;

use crate::Payload;

/// 成功响应，负载序列化为 JSON 值后装入封装。
pub fn respond_ok<T: Serialize>(ext: &Extensions, data: T) -> Response {
    let payload = serde_json::to_value(&data).unwrap_or(Value::Null);
    let envelope = Envelope::success(payload, trace_id(ext));
    contexts::set_response::<Payload>(ext, envelope.clone());
    (StatusCode::OK, Json(envelope)).into_response()
}

/// 失败响应，封装 code 与 HTTP 状态码保持一致。
pub fn respond_error(ext: &Extensions, status: StatusCode, message: impl Into<String>) -> Response {
    let envelope = Envelope::<Payload>::error(i32::from(status.as_u16()), message, trace_id(ext));
    contexts::set_response::<Payload>(ext, envelope.clone());
    (status, Json(envelope)).into_response()
}

/// 未认证错误响应
pub fn unauthorized_error(ext: &Extensions) -> Response {
    respond_error(ext, StatusCode::UNAUTHORIZED, "unauthorized")
}

fn trace_id(ext: &Extensions) -> String {
    ext.get::<RequestIds>()
        .map(|ids| ids.trace_id.clone())
        .unwrap_or_default()
}
