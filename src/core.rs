//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Unity Summary,
//! including data models, result-file parsing and the aggregation logic.
//!
//! 此模块包含 Unity Summary 的核心功能，
//! 包括数据模型、结果文件解析和聚合逻辑。

pub mod aggregator;
pub mod error;
pub mod models;
pub mod parser;

// Re-exports
pub use aggregator::ResultAggregator;
pub use error::SummaryError;
pub use models::{FileSummary, ResultRecord, RunTotals, SummaryCounts, TestStatus};
