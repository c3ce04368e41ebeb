//! HTTP 请求处理器
//!
//! 网络层只做参数校验和响应包装, 过滤/分页语义全部在
//! [`crate::table::query`] 引擎内.

use actix_web::{web, HttpResponse, Result};
use std::sync::Arc;

use super::models::*;
use crate::table::loader::DataContext;
use crate::table::query::{self, FilterDimension};
use crate::table::{Record, Table};

/// 应用状态: 启动时加载的只读表
pub struct AppState {
    pub data: Arc<DataContext>,
}

/// 健康检查 (托管平台用 HEAD / 探活)
pub async fn healthcheck() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// 健康检查 (JSON)
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "vlranking"
    }))
}

/// 查询 ranking 表
///
/// GET /ranking?limit=10&offset=0&team=alp&org=ufx
pub async fn get_ranking(
    params: web::Query<RankingQuery>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse> {
    if let Some(resp) = reject_zero_limit(params.limit) {
        return Ok(resp);
    }

    let mut filters = Vec::new();
    push_filter(&mut filters, query::RANKING_DIMENSIONS, "team", &params.team);
    push_filter(&mut filters, query::RANKING_DIMENSIONS, "org", &params.org);

    Ok(table_response(
        &state.data.ranking,
        &filters,
        params.offset,
        params.limit,
    ))
}

/// 查询 teams 表
///
/// GET /teams?team=alp&org=ufx
pub async fn get_teams(
    params: web::Query<TeamsQuery>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse> {
    if let Some(resp) = reject_zero_limit(params.limit) {
        return Ok(resp);
    }

    let mut filters = Vec::new();
    push_filter(&mut filters, query::TEAM_DIMENSIONS, "team", &params.team);
    push_filter(&mut filters, query::TEAM_DIMENSIONS, "org", &params.org);

    Ok(table_response(
        &state.data.teams,
        &filters,
        params.offset,
        params.limit,
    ))
}

/// 查询 matches 表
///
/// GET /matches?team=alp&campeonato=universitario
pub async fn get_matches(
    params: web::Query<MatchesQuery>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse> {
    if let Some(resp) = reject_zero_limit(params.limit) {
        return Ok(resp);
    }

    let mut filters = Vec::new();
    push_filter(&mut filters, query::MATCH_DIMENSIONS, "team", &params.team);
    push_filter(
        &mut filters,
        query::MATCH_DIMENSIONS,
        "campeonato",
        &params.campeonato,
    );

    Ok(table_response(
        &state.data.matches,
        &filters,
        params.offset,
        params.limit,
    ))
}

/// limit=0 在边界拒绝, 不进入查询引擎
fn reject_zero_limit(limit: Option<usize>) -> Option<HttpResponse> {
    if limit == Some(0) {
        Some(HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            400,
            "limit must be at least 1".to_string(),
        )))
    } else {
        None
    }
}

/// 把查询参数里出现的维度加入过滤器列表
fn push_filter(
    filters: &mut Vec<(FilterDimension, String)>,
    dimensions: &[FilterDimension],
    name: &str,
    needle: &Option<String>,
) {
    if let (Some(dim), Some(needle)) = (query::dimension(dimensions, name), needle) {
        filters.push((dim, needle.clone()));
    }
}

/// 统一的表查询响应: total/returned 用于 "showing N of M"
fn table_response(
    table: &Table,
    filters: &[(FilterDimension, String)],
    offset: usize,
    limit: Option<usize>,
) -> HttpResponse {
    let rows = query::query(table, filters, offset, limit);
    let records: Vec<Record> = rows.iter().map(|r| table.record(r)).collect();

    HttpResponse::Ok().json(ApiResponse::success(serde_json::json!({
        "total": table.len(),
        "returned": records.len(),
        "offset": offset,
        "limit": limit,
        "rows": records,
    })))
}
