//! # VLRANKING-RS
//!
//! Ranking Valorant Universitário - 只读排名查询服务
//!
//! ## 核心能力
//!
//! - **数据表模型**: 启动时从 CSV 加载的不可变内存表 (ranking/teams/matches)
//! - **查询引擎**: 子串过滤 (维度 OR 列 / AND 维度) + offset/limit 分页
//! - **对外服务**: HTTP API (基于 Actix-web) + HTML 排名页面
//!
//! ## 架构设计
//!
//! ```text
//! 客户端 (HTTP)
//!     ↓
//! Service Layer (service/)
//!     ↓
//! Query Engine (table/query.rs)
//!     ↓
//! Immutable Tables (table/) ← 启动时由 table/loader.rs 加载
//! ```
//!
//! 数据加载后永不变更, 任意数量的并发读取无需协调.

#![allow(dead_code)]

// ============================================================================
// 外部依赖
// ============================================================================

// Web 框架
pub use actix_web;

// 序列化
pub use serde;
pub use serde_json;

// CSV 数据源
pub use csv;

// 时间
pub use chrono;

// 日志
pub use log;

// 错误处理
pub use thiserror;

// ============================================================================
// 内部模块
// ============================================================================

pub mod table;
pub mod service;
pub mod utils;
