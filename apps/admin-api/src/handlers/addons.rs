//! 插件信息 handler
//!
//! GET /addons/{addon}/info - 返回上下文中的插件名与插件请求标记。

use admin_contexts as contexts;
use api_contract::AddonInfoDto;
use axum::{http::request::Parts, response::Response};

use crate::Payload;
use crate::utils::response::respond_ok;

/// 获取当前插件请求信息
pub async fn addon_info(parts: Parts) -> Response {
    let ext = &parts.extensions;
    let dto = AddonInfoDto {
        addon: contexts::get_addon_name::<Payload>(ext),
        is_addon: contexts::is_addon_request::<Payload>(ext),
    };
    respond_ok(ext, dto)
}
