//! 当前用户信息 handler
//!
//! GET /profile - 返回上下文中的用户身份与应用模块。
//! 上下文中没有身份（网关未转发）时返回 401。

use admin_contexts as contexts;
use api_contract::ProfileDto;
use axum::{http::request::Parts, response::Response};

use crate::Payload;
use crate::utils::response::{respond_ok, unauthorized_error};

/// 获取当前登录用户信息
pub async fn profile(parts: Parts) -> Response {
    let ext = &parts.extensions;
    let Some(user) = contexts::get_user::<Payload>(ext) else {
        return unauthorized_error(ext);
    };
    let dto = ProfileDto {
        user_id: user.id,
        role_id: user.role_id,
        role_key: user.role_key,
        dept_type: user.dept_type,
        module: contexts::get_module::<Payload>(ext),
    };
    respond_ok(ext, dto)
}
