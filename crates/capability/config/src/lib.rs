//! 应用运行配置加载。

use std::env;
use std::net::SocketAddr;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 应用运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: String,
    pub app_module: String,
    pub access_log: bool,
}

impl AppConfig {
    /// 从环境变量读取配置，全部可缺省。
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_addr = env::var("ADMIN_HTTP_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        http_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Invalid("ADMIN_HTTP_ADDR".to_string(), http_addr.clone()))?;
        let app_module = env::var("ADMIN_APP_MODULE").unwrap_or_else(|_| "admin".to_string());
        let access_log = read_bool_with_default("ADMIN_ACCESS_LOG", true);

        Ok(Self {
            http_addr,
            app_module,
            access_log,
        })
    }
}

fn read_bool_with_default(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "on"),
        Err(_) => default,
    }
}
