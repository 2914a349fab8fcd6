//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Unity Summary,
//! including result-file discovery and file reading.
//!
//! 此模块为 Unity Summary 提供基础设施服务，
//! 包括结果文件发现和文件读取。

pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
