//! 管理端 HTTP API：请求上下文的绑定、身份注入与访问日志。

mod handlers;
mod middleware;
mod routes;
mod utils;

use std::sync::Arc;

use admin_config::AppConfig;
use admin_telemetry::init_tracing;

/// 上下文绑定的响应负载类型：全部接口统一使用 JSON 值。
pub type Payload = serde_json::Value;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = AppConfig::from_env()?;
    // 初始化结构化日志
    init_tracing();

    let state = AppState {
        config: Arc::new(config.clone()),
    };
    let app = routes::create_api_router(state);

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, module = %config.app_module, "admin-api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
