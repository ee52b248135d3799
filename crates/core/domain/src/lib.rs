pub mod dept;
pub mod response;

pub use response::Response;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 认证后的用户身份。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub role_id: i64,
    pub role_key: String,
    pub dept_type: String,
}

/// 请求上下文：每个请求创建一个，在整个处理流程中共享并原地修改。
#[derive(Debug, Clone)]
pub struct ReqContext<T> {
    pub user: Option<Identity>,
    pub response: Option<Response<T>>,
    pub module: String,
    pub addon_name: String,
    pub data: HashMap<String, Value>,
}

impl<T> ReqContext<T> {
    /// 构造指定应用模块的请求上下文，数据袋初始为空。
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            user: None,
            response: None,
            module: module.into(),
            addon_name: String::new(),
            data: HashMap::new(),
        }
    }
}

impl<T> Default for ReqContext<T> {
    /// 空上下文（仅用于测试或占位）。
    fn default() -> Self {
        Self::new("")
    }
}
