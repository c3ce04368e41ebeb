//! 内存数据表模型
//!
//! 表在进程启动时构建一次, 之后永不变更 (只读). 三张表:
//! ranking (强制) / teams (可选) / matches (可选).
//!
//! 缺失值统一用 [`CellValue::Null`] 表示, 序列化为 JSON `null`,
//! 绝不出现 NaN/undefined 之类的哨兵值.

pub mod loader;
pub mod query;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// 单元格值: 文本 / 有限数值 / 空
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Null,
}

impl CellValue {
    /// 从原始 CSV 字段解析
    ///
    /// - 空串 / "NaN" / "null" → `Null`
    /// - 可解析为有限 f64 → `Number`
    /// - 其余 → `Text`
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("nan")
            || trimmed.eq_ignore_ascii_case("null")
        {
            return CellValue::Null;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            // 非有限数值视为缺失, 不保留哨兵
            Ok(_) => CellValue::Null,
            Err(_) => CellValue::Text(trimmed.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// 大小写不敏感的子串匹配 (过滤引擎用)
    ///
    /// `needle_lower` 必须已转为小写. `Null` 永不匹配.
    pub fn contains_ci(&self, needle_lower: &str) -> bool {
        match self {
            CellValue::Text(s) => s.to_lowercase().contains(needle_lower),
            CellValue::Number(n) => display_number(*n).contains(needle_lower),
            CellValue::Null => false,
        }
    }

    /// 展示用文本 (HTML 渲染): Null 渲染为空串
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => display_number(*n),
            CellValue::Null => String::new(),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Number(n) => serializer.serialize_f64(*n),
            CellValue::Null => serializer.serialize_none(),
        }
    }
}

/// 整数值不带小数点展示 (90.0 → "90")
pub fn display_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// 不可变数据表: 固定列 schema + 有序行
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// 构建数据表, 行宽对齐到 schema 宽度 (短行补 Null, 长行截断)
    pub fn new(columns: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        for row in rows.iter_mut() {
            row.resize(width, CellValue::Null);
        }
        Self { columns, rows }
    }

    /// 带声明 schema 的空表 (可选数据源缺失时的降级)
    pub fn empty(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 按指定列降序稳定排序, Null (及非数值) 排在最后
    ///
    /// 仅在加载阶段调用一次, 之后表只读.
    pub fn sort_desc_by_index(&mut self, idx: usize) {
        self.rows.sort_by(|a, b| {
            let ka = a[idx].as_number().unwrap_or(f64::NEG_INFINITY);
            let kb = b[idx].as_number().unwrap_or(f64::NEG_INFINITY);
            kb.total_cmp(&ka)
        });
    }

    /// 行的序列化视图
    pub fn record<'a>(&'a self, row: &'a [CellValue]) -> Record<'a> {
        Record {
            columns: &self.columns,
            values: row,
        }
    }
}

/// 单行的扁平 key-value 视图, 按 schema 列序序列化为 JSON 对象
pub struct Record<'a> {
    columns: &'a [String],
    values: &'a [CellValue],
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in self.columns.iter().zip(self.values.iter()) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
