//! 网关转发身份注入
//!
//! 认证在上游网关完成，本服务只信任网关转发的身份头部：
//! x-user-id / x-role-id / x-role-key / x-dept-type。
//! 头部缺失时不写入身份，下游读取到的是零值。

use admin_contexts as contexts;
use axum::{
    body::Body,
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use domain::Identity;
use serde_json::Value;

use crate::Payload;

/// 从网关转发头部解析身份并写入上下文。
pub async fn forwarded_identity(req: Request<Body>, next: Next) -> Response {
    if let Some(user) = identity_from_headers(req.headers()) {
        contexts::set_user::<Payload>(req.extensions(), user);
        contexts::set_data::<Payload>(req.extensions(), "auth_source", Value::from("gateway"));
    }
    next.run(req).await
}

fn identity_from_headers(headers: &HeaderMap) -> Option<Identity> {
    let id = header_i64(headers, "x-user-id")?;
    Some(Identity {
        id,
        role_id: header_i64(headers, "x-role-id").unwrap_or(0),
        role_key: header_str(headers, "x-role-key").unwrap_or_default(),
        dept_type: header_str(headers, "x-dept-type").unwrap_or_default(),
    })
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name)?.to_str().ok().map(|value| value.to_string())
}

fn header_i64(headers: &HeaderMap, name: &str) -> Option<i64> {
    header_str(headers, name)?.parse().ok()
}
