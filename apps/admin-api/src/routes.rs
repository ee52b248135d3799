//! 路由定义
//!
//! 集中管理所有 API 路由，将路径映射到对应的 handlers。
//! 路由包括：
//! - 健康检查：/health
//! - 当前用户：/profile
//! - 插件信息：/addons/{addon}/info
//!
//! 中间件从外到内：request_context（绑定上下文 + 访问日志）
//! → forwarded_identity（注入网关身份）→ addon_scope（仅插件路由）。

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
};

use super::AppState;
use super::handlers::*;
use super::middleware::{addon_scope, forwarded_identity, request_context};

/// 创建 API 路由
pub fn create_api_router(state: AppState) -> Router {
    let addons = Router::new()
        .route("/addons/:addon/info", get(addon_info))
        .layer(from_fn(addon_scope));

    Router::new()
        .route("/health", get(health))
        .route("/profile", get(profile))
        .merge(addons)
        .layer(from_fn(forwarded_identity))
        .layer(from_fn_with_state(state.clone(), request_context))
        .with_state(state)
}
