//! 稳定的 DTO 契约。

use serde::Serialize;

/// 当前登录用户信息。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub user_id: i64,
    pub role_id: i64,
    pub role_key: String,
    pub dept_type: String,
    pub module: String,
}

/// 插件请求信息。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonInfoDto {
    pub addon: String,
    pub is_addon: bool,
}
