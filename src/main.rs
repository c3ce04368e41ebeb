//! VLRanking 排名查询服务
//!
//! 启动流程:
//! 1. 加载 TOML 配置 (缺失时使用默认值)
//! 2. 从 CSV 加载三张只读表 (ranking 缺失则启动失败)
//! 3. 启动 HTTP 服务 (JSON API + HTML 页面)
//!
//! 运行: cargo run --bin vlranking-server

use std::io;
use std::sync::Arc;

use vlranking::service::http::HttpServer;
use vlranking::table::loader::DataContext;
use vlranking::utils::config::AppConfig;

/// 启动信息
fn print_startup_info(config: &AppConfig, data: &DataContext) {
    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🏆 {} ({})", config.server.name, config.server.environment);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📡 HTTP API:     http://{}", config.http.bind_address());
    println!("📄 Page:         http://{}/", config.http.bind_address());
    println!("📊 Tables:       ranking={} teams={} matches={}",
        data.ranking.len(), data.teams.len(), data.matches.len());
    println!("🕐 Started at:   {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🟢 Server is running. Press Ctrl+C to stop.\n");
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 初始化日志
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. 加载配置文件
    let config = match AppConfig::load_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("Failed to load config file: {}, using defaults", e);
            AppConfig::default()
        }
    };

    // 2. 加载数据 (ranking 数据源缺失是致命错误, 不进入服务状态)
    let data = match DataContext::load(&config.data) {
        Ok(ctx) => Arc::new(ctx),
        Err(e) => {
            log::error!("Failed to load data sources: {}", e);
            return Err(io::Error::new(io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    print_startup_info(&config, &data);

    // 3. 启动 HTTP 服务
    HttpServer::new(data, config.http.bind_address()).run().await
}
