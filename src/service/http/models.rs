//! HTTP API 请求/响应模型

use serde::{Deserialize, Serialize};

/// 通用响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// API 错误
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: u32,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: u32, message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError { code, message }),
        }
    }
}

/// ranking 查询参数
///
/// 未知参数直接拒绝 (400), 负 offset 在反序列化阶段即失败.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankingQuery {
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
    pub team: Option<String>,
    pub org: Option<String>,
}

/// teams 查询参数
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamsQuery {
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
    pub team: Option<String>,
    pub org: Option<String>,
}

/// matches 查询参数
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchesQuery {
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
    pub team: Option<String>,
    pub campeonato: Option<String>,
}

/// HTML 页面查询参数 (limit 默认 100)
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageQuery {
    #[serde(default = "default_page_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_page_limit() -> usize {
    100
}
