//! HTTP API 路由配置

use actix_web::web;

use super::handlers;
use super::pages;

/// 配置所有路由
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // 健康检查 (HEAD / 供托管平台探活)
        .route("/", web::head().to(handlers::healthcheck))
        .route("/health", web::get().to(handlers::health_check))
        // HTML 排名页面
        .route("/", web::get().to(pages::ranking_page))
        // JSON 查询接口
        .route("/ranking", web::get().to(handlers::get_ranking))
        .route("/teams", web::get().to(handlers::get_teams))
        .route("/matches", web::get().to(handlers::get_matches));
}
