//! HTML 排名页面
//!
//! 与原始页面一致: Bootstrap 表格 + "Mostrando N de M times" + JSON 链接.

use actix_web::{web, HttpResponse, Result};
use std::sync::Arc;

use super::handlers::AppState;
use super::models::{ApiResponse, PageQuery};
use crate::table::{query, CellValue, Table};

/// 排名主页
///
/// GET /?limit=100&offset=0
pub async fn ranking_page(
    params: web::Query<PageQuery>,
    state: web::Data<Arc<AppState>>,
) -> Result<HttpResponse> {
    if params.limit == 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            400,
            "limit must be at least 1".to_string(),
        )));
    }

    let table = &state.data.ranking;
    let rows = query::query(table, &[], params.offset, Some(params.limit));
    let html = render_page(table, &rows, params.limit, params.offset);

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// 渲染整页 HTML
fn render_page(table: &Table, rows: &[&[CellValue]], limit: usize, offset: usize) -> String {
    format!(
        r#"<!doctype html>
<html lang="pt-BR">
<head>
    <meta charset="utf-8">
    <title>Ranking Valorant Universitário</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
</head>
<body class="container my-4">
    <h1 class="mb-4">Ranking Valorant Universitário</h1>
    {table}
    <p class="text-muted">
        Mostrando {shown} de {total} times &middot;
        <a href="/ranking?limit={limit}&offset={offset}">Ver JSON</a>
    </p>
</body>
</html>
"#,
        table = render_table(table, rows),
        shown = rows.len(),
        total = table.len(),
        limit = limit,
        offset = offset,
    )
}

/// 渲染表格本体, Null 单元格渲染为空
fn render_table(table: &Table, rows: &[&[CellValue]]) -> String {
    let mut html =
        String::from("<table class=\"table table-striped table-sm align-middle\">\n<thead><tr>");
    for column in table.columns() {
        html.push_str("<th>");
        html.push_str(&escape_html(column));
        html.push_str("</th>");
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in rows {
        html.push_str("<tr>");
        for cell in row.iter() {
            html.push_str("<td>");
            html.push_str(&escape_html(&cell.display()));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>");
    html
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
