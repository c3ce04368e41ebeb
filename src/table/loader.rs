//! CSV 数据源加载
//!
//! 启动时一次性把三个 CSV 解析为不可变表:
//!
//! - ranking: 强制数据源, 缺失即启动失败; 加载后按 NOTA_FINAL 降序稳定排序
//! - teams / matches: 可选数据源, 缺失时降级为带声明 schema 的空表
//!
//! 加载完成后表永不变更, [`DataContext`] 由服务层显式持有并注入,
//! 不存在模块级单例.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use thiserror::Error;

use super::{CellValue, Table};
use crate::utils::config::DataConfig;

/// ranking 表的排序列
pub const RANKING_SCORE_COLUMN: &str = "NOTA_FINAL";

/// teams 数据源缺失时的降级 schema
pub const TEAMS_FALLBACK_COLUMNS: &[&str] = &["team_name", "slug", "org", "icon"];

/// matches 数据源缺失时的降级 schema
pub const MATCHES_FALLBACK_COLUMNS: &[&str] = &["team_i", "team_j", "campeonato"];

/// 数据加载错误 (仅 ranking 数据源会让启动失败)
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("mandatory data source missing: {0}")]
    MissingSource(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("column `{column}` not found in {path}")]
    MissingColumn { column: String, path: PathBuf },
}

/// 三张只读表的持有者, 由 main 构建后经 `Arc` 注入服务层
pub struct DataContext {
    pub ranking: Table,
    pub teams: Table,
    pub matches: Table,
}

impl DataContext {
    /// 按配置加载全部数据源
    pub fn load(config: &DataConfig) -> Result<Self, LoadError> {
        let ranking = load_ranking(Path::new(&config.ranking_path))?;
        let teams = load_optional(Path::new(&config.teams_path), TEAMS_FALLBACK_COLUMNS);
        let matches = load_optional(Path::new(&config.matches_path), MATCHES_FALLBACK_COLUMNS);

        Ok(Self {
            ranking,
            teams,
            matches,
        })
    }
}

/// 加载强制的 ranking 表并按 NOTA_FINAL 降序排序
fn load_ranking(path: &Path) -> Result<Table, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingSource(path.to_path_buf()));
    }

    let mut table = load_table(path)?;
    let score_idx =
        table
            .column_index(RANKING_SCORE_COLUMN)
            .ok_or_else(|| LoadError::MissingColumn {
                column: RANKING_SCORE_COLUMN.to_string(),
                path: path.to_path_buf(),
            })?;
    table.sort_desc_by_index(score_idx);

    log::info!("Ranking loaded: {} rows from {}", table.len(), path.display());
    Ok(table)
}

/// 加载可选表, 任何失败都降级为空表而非报错
fn load_optional(path: &Path, fallback_columns: &[&str]) -> Table {
    if !path.exists() {
        log::warn!(
            "Optional data source missing: {}, serving empty table",
            path.display()
        );
        return Table::empty(fallback_columns);
    }

    match load_table(path) {
        Ok(table) => {
            log::info!("Table loaded: {} rows from {}", table.len(), path.display());
            table
        }
        Err(e) => {
            log::warn!("Failed to load {}: {}, serving empty table", path.display(), e);
            Table::empty(fallback_columns)
        }
    }
}

/// 解析单个 CSV 文件: 首行为 schema, 单元格按 [`CellValue::parse`] 定型
fn load_table(path: &Path) -> Result<Table, LoadError> {
    let read_err = |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(read_err)?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(read_err)?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_err)?;
        rows.push(record.iter().map(CellValue::parse).collect());
    }

    Ok(Table::new(columns, rows))
}

/// 去掉首尾空白和 BOM
fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
