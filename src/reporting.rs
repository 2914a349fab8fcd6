//! # Reporting Module / 报告模块
//!
//! This module handles the rendering of the final test summary and the
//! console output for the error path.
//!
//! 此模块处理最终测试摘要的渲染以及错误路径的控制台输出。

pub mod console;

// Re-export common reporting functions
pub use console::render_report;
