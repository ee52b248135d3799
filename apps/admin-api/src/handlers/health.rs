//! 健康检查 handler

use axum::{Json, response::IntoResponse};

/// 健康检查，不走统一响应封装
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true }))
}
