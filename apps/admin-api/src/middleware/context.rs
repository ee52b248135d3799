//! 请求上下文中间件
//!
//! 每个请求进入时：
//! 1. 生成 request_id/trace_id 并放入请求扩展
//! 2. 以配置的应用模块初始化请求上下文（contexts::init）
//! 3. 将请求包进 tracing span
//!
//! 响应返回后回读上下文快照，输出一条访问日志（用户 ID、模块、
//! 插件名、封装 code、HTTP 状态），并在响应头回显追踪 ID。

use admin_contexts as contexts;
use admin_telemetry::new_request_ids;
use axum::{
    body::Body,
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use domain::ReqContext;
use tracing::{Instrument, info_span};

use crate::{AppState, Payload};

/// 请求上下文中间件：绑定上下文并记录访问日志。
pub async fn request_context(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let ids = new_request_ids();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(ids.clone());
    contexts::init(
        req.extensions_mut(),
        ReqContext::<Payload>::new(state.config.app_module.clone()),
    );
    // next.run 会带走请求扩展，访问日志要用的句柄先克隆出来
    let shared = contexts::get::<Payload>(req.extensions());

    let span = info_span!(
        "request",
        request_id = %ids.request_id,
        trace_id = %ids.trace_id,
        method = %method,
        path = %path
    );

    let mut response = next.run(req).instrument(span).await;
    response.headers_mut().insert(
        "x-request-id",
        HeaderValue::from_str(&ids.request_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    response.headers_mut().insert(
        "x-trace-id",
        HeaderValue::from_str(&ids.trace_id).unwrap_or_else(|_| HeaderValue::from_static("")),
    );

    if state.config.access_log {
        if let Some(shared) = shared {
            let ctx = contexts::snapshot(&shared);
            tracing::info!(
                target: "access",
                request_id = %ids.request_id,
                user_id = ctx.user.as_ref().map(|user| user.id).unwrap_or(0),
                module = %ctx.module,
                addon = %ctx.addon_name,
                status = response.status().as_u16(),
                code = ctx.response.as_ref().map(|r| r.code).unwrap_or(0),
                method = %method,
                path = %path,
                "request completed"
            );
        }
    }

    response
}
