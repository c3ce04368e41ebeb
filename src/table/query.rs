//! 只读查询引擎
//!
//! 纯函数: 不可变表 + 调用参数 → 有序行序列.
//! 过滤语义: 每个维度在其候选列上做大小写不敏感子串匹配 (列间 OR),
//! 维度之间 AND; 过滤不改变表内既有顺序; 之后做 offset/limit 切片.
//!
//! 入参校验 (limit >= 1, 未知维度) 在 HTTP 边界完成, 引擎假定输入合法,
//! 对合法输入 (包括空表) 永不失败.

use super::{CellValue, Table};

/// 过滤维度: 一个查询概念对应一或多个候选列
///
/// 例如 "team" 维度同时检查 `team_name` 和 `slug` 两列.
#[derive(Debug, Clone, Copy)]
pub struct FilterDimension {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

/// ranking 表的过滤维度 (ranking_completo.csv 表头为大写, 与 NOTA_FINAL 一致)
pub const RANKING_DIMENSIONS: &[FilterDimension] = &[
    FilterDimension { name: "team", columns: &["TIME", "SLUG"] },
    FilterDimension { name: "org", columns: &["ORG"] },
];

/// teams 表的过滤维度
pub const TEAM_DIMENSIONS: &[FilterDimension] = &[
    FilterDimension { name: "team", columns: &["team_name", "slug"] },
    FilterDimension { name: "org", columns: &["org"] },
];

/// matches 表的过滤维度 ("team" 匹配任意一方)
pub const MATCH_DIMENSIONS: &[FilterDimension] = &[
    FilterDimension { name: "team", columns: &["team_i", "team_j"] },
    FilterDimension { name: "campeonato", columns: &["campeonato"] },
];

/// 按名称解析维度
pub fn dimension(dimensions: &[FilterDimension], name: &str) -> Option<FilterDimension> {
    dimensions.iter().copied().find(|d| d.name == name)
}

/// 过滤 + 分页查询
///
/// - `filters`: (维度, 搜索串) 列表, 空列表 = 全部通过
/// - `offset`: 起始行, 超过表长返回空序列而非错误
/// - `limit`: 最大行数, `None` = 不设上限
///
/// 返回的行借用自表本身, 顺序与表内顺序一致 (ranking 表已按
/// NOTA_FINAL 降序排好). 单元格在加载时已统一 Null 规范化.
pub fn query<'a>(
    table: &'a Table,
    filters: &[(FilterDimension, String)],
    offset: usize,
    limit: Option<usize>,
) -> Vec<&'a [CellValue]> {
    // 预解析: 候选列下标 + 小写搜索串. 表中不存在的候选列直接丢弃,
    // 维度解析出零个列时该维度匹配不到任何行.
    let active: Vec<(Vec<usize>, String)> = filters
        .iter()
        .map(|(dim, needle)| {
            let cols = dim
                .columns
                .iter()
                .filter_map(|c| table.column_index(c))
                .collect();
            (cols, needle.to_lowercase())
        })
        .collect();

    let passing = table.rows().iter().filter(|row| {
        active
            .iter()
            .all(|(cols, needle)| cols.iter().any(|&i| row[i].contains_ci(needle)))
    });

    let sliced = passing.skip(offset);
    match limit {
        Some(n) => sliced.take(n).map(Vec::as_slice).collect(),
        None => sliced.map(Vec::as_slice).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CellValue;

    fn teams_table() -> Table {
        Table::new(
            vec![
                "team_name".to_string(),
                "slug".to_string(),
                "org".to_string(),
                "icon".to_string(),
            ],
            vec![
                vec![
                    CellValue::Text("Alpha".to_string()),
                    CellValue::Text("alp".to_string()),
                    CellValue::Text("UFX".to_string()),
                    CellValue::Null,
                ],
                vec![
                    CellValue::Text("Beta".to_string()),
                    CellValue::Text("alpine".to_string()),
                    CellValue::Text("UFY".to_string()),
                    CellValue::Null,
                ],
                vec![
                    CellValue::Text("Gamma".to_string()),
                    CellValue::Text("gam".to_string()),
                    CellValue::Text("UFX".to_string()),
                    CellValue::Null,
                ],
            ],
        )
    }

    fn team_filter(needle: &str) -> (FilterDimension, String) {
        (dimension(TEAM_DIMENSIONS, "team").unwrap(), needle.to_string())
    }

    fn org_filter(needle: &str) -> (FilterDimension, String) {
        (dimension(TEAM_DIMENSIONS, "org").unwrap(), needle.to_string())
    }

    #[test]
    fn test_no_filters_returns_all_in_order() {
        let table = teams_table();
        let rows = query(&table, &[], 0, None);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0].display(), "Alpha");
        assert_eq!(rows[2][0].display(), "Gamma");
    }

    #[test]
    fn test_or_across_candidate_columns() {
        // "alp": Alpha 经 team_name/slug 命中, Beta 仅经 slug ("alpine") 命中
        let table = teams_table();
        let rows = query(&table, &[team_filter("alp")], 0, None);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].display(), "Alpha");
        assert_eq!(rows[1][0].display(), "Beta");
    }

    #[test]
    fn test_and_across_dimensions() {
        let table = teams_table();
        let rows = query(&table, &[team_filter("a"), org_filter("UFX")], 0, None);
        // "a" 命中全部三行, UFX 仅 Alpha/Gamma
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].display(), "Alpha");
        assert_eq!(rows[1][0].display(), "Gamma");

        // AND 结果 ⊆ 各维度单独结果
        let by_team = query(&table, &[team_filter("a")], 0, None);
        let by_org = query(&table, &[org_filter("UFX")], 0, None);
        for row in &rows {
            assert!(by_team.contains(row));
            assert!(by_org.contains(row));
        }
    }

    #[test]
    fn test_case_insensitive() {
        let table = teams_table();
        let lower = query(&table, &[org_filter("ufx")], 0, None);
        let upper = query(&table, &[org_filter("UFX")], 0, None);
        let mixed = query(&table, &[org_filter("uFx")], 0, None);
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(lower.len(), 2);
    }

    #[test]
    fn test_null_cells_never_match() {
        let table = Table::new(
            vec!["team_name".to_string(), "slug".to_string()],
            vec![vec![CellValue::Null, CellValue::Null]],
        );
        let rows = query(&table, &[team_filter("a")], 0, None);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_pagination_window() {
        let table = teams_table();
        let total = table.len();
        for offset in 0..5 {
            for limit in [None, Some(1), Some(2), Some(10)] {
                let rows = query(&table, &[], offset, limit);
                let expected = total
                    .saturating_sub(offset)
                    .min(limit.unwrap_or(usize::MAX));
                assert_eq!(rows.len(), expected, "offset={} limit={:?}", offset, limit);
            }
        }
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        let table = teams_table();
        assert!(query(&table, &[], 100, None).is_empty());
        assert!(query(&table, &[], 3, Some(1)).is_empty());
    }

    #[test]
    fn test_filter_preserves_order_with_pagination() {
        let table = teams_table();
        let rows = query(&table, &[team_filter("a")], 1, Some(1));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0].display(), "Beta");
    }

    #[test]
    fn test_empty_table_with_declared_schema() {
        let table = Table::empty(&["team_name", "slug", "org", "icon"]);
        assert!(query(&table, &[], 0, None).is_empty());
        assert!(query(&table, &[team_filter("x")], 5, Some(3)).is_empty());
    }

    #[test]
    fn test_dimension_with_absent_columns_matches_nothing() {
        let table = Table::new(
            vec!["other".to_string()],
            vec![vec![CellValue::Text("alp".to_string())]],
        );
        let rows = query(&table, &[team_filter("alp")], 0, None);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_ranking_dimensions_bind_to_ranking_schema() {
        let table = Table::new(
            vec![
                "TIME".to_string(),
                "SLUG".to_string(),
                "ORG".to_string(),
                "NOTA_FINAL".to_string(),
            ],
            vec![
                vec![
                    CellValue::Text("Alpha".to_string()),
                    CellValue::Text("alp".to_string()),
                    CellValue::Text("UFX".to_string()),
                    CellValue::Number(90.0),
                ],
                vec![
                    CellValue::Text("Gamma".to_string()),
                    CellValue::Text("gam".to_string()),
                    CellValue::Text("UFZ".to_string()),
                    CellValue::Number(50.0),
                ],
            ],
        );

        let team = dimension(RANKING_DIMENSIONS, "team").unwrap();
        let rows = query(&table, &[(team, "alp".to_string())], 0, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0].display(), "Alpha");

        let org = dimension(RANKING_DIMENSIONS, "org").unwrap();
        let rows = query(&table, &[(org, "ufz".to_string())], 0, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0].display(), "Gamma");
    }

    #[test]
    fn test_ranking_sorted_then_paginated() {
        // 装载顺序 [50, 90, 70] → 排序后 [90, 70, 50]
        let mut table = Table::new(
            vec!["team_name".to_string(), "NOTA_FINAL".to_string()],
            vec![
                vec![CellValue::Text("x".to_string()), CellValue::Number(50.0)],
                vec![CellValue::Text("y".to_string()), CellValue::Number(90.0)],
                vec![CellValue::Text("z".to_string()), CellValue::Number(70.0)],
            ],
        );
        let idx = table.column_index("NOTA_FINAL").unwrap();
        table.sort_desc_by_index(idx);

        let rows = query(&table, &[], 1, Some(1));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][1], CellValue::Number(70.0));

        // 任意分页窗口内 NOTA_FINAL 单调不增
        let all = query(&table, &[], 0, None);
        for pair in all.windows(2) {
            let a = pair[0][idx].as_number().unwrap();
            let b = pair[1][idx].as_number().unwrap();
            assert!(a >= b);
        }
    }
}
