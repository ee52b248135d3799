//! 插件请求标记
//!
//! 挂在 /addons 路由组上，从路径第二段取出插件名写入上下文，
//! 之后 is_addon_request 即为 true。

use admin_contexts as contexts;
use axum::{body::Body, extract::Request, middleware::Next, response::Response};

use crate::Payload;

/// 从路径解析插件名并写入上下文。
pub async fn addon_scope(req: Request<Body>, next: Next) -> Response {
    if let Some(name) = addon_from_path(req.uri().path()) {
        contexts::set_addon_name::<Payload>(req.extensions(), name);
    }
    next.run(req).await
}

fn addon_from_path(path: &str) -> Option<String> {
    let rest = path.strip_prefix("/addons/")?;
    let name = rest.split('/').next().unwrap_or("");
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}
