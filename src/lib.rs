//! # Unity Summary Library / Unity 摘要库
//!
//! This library provides the core functionality for the Unity Summary tool,
//! a small aggregator that collects the result files written by the Unity C
//! test framework and condenses them into a single report.
//!
//! 此库为 Unity Summary 工具提供核心功能，
//! 这是一个收集 Unity C 测试框架生成的结果文件并将其汇总为单一报告的小工具。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, result-file parsing and the aggregator
//! - `infra` - Infrastructure services like result-file discovery and reading
//! - `reporting` - Report rendering and console output
//! - `cli` - Command-line interface
//!
//! - `core` - 数据模型、结果文件解析和聚合器
//! - `infra` - 基础设施服务，如结果文件发现和读取
//! - `reporting` - 报告渲染和控制台输出
//! - `cli` - 命令行接口

pub mod core;
pub mod infra;
pub mod reporting;
pub mod cli;

// Re-export commonly used items. The paths go through `crate::` because a
// bare `core::` leading segment would collide with the built-in core crate.
pub use crate::core::aggregator::ResultAggregator;
pub use crate::core::error::SummaryError;
pub use crate::core::models;

// Re-export the translation macro so modules can `use crate::t;`
pub use rust_i18n::t;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
