//! # Error Module / 错误模块
//!
//! The closed set of failures an aggregation run can end with. The outer
//! invocation layer matches on the kind to decide the exit code and how to
//! present the message; every kind aborts the run with no partial report.
//!
//! 一次聚合运行可能以之结束的封闭错误集合。外层调用方根据错误种类决定
//! 退出码和消息的呈现方式；任何一种错误都会中止运行，不产生部分报告。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    /// The result directory contained no file matching the `*.test*` glob.
    /// 结果目录中没有匹配 `*.test*` 通配模式的文件。
    #[error("No *.testpass or *.testfail files found in '{dir}'")]
    NoInputFiles { dir: String },

    /// The aggregator was configured with an empty target list.
    /// 聚合器配置的目标列表为空。
    #[error("No result files were supplied")]
    NoTargets,

    /// A matched result file had no content at all.
    /// 匹配到的结果文件完全没有内容。
    #[error("Empty test result file: {}", path.display())]
    EmptyResultFile { path: PathBuf },

    /// No line of the file matched `N Tests N Failures N Ignored`.
    /// 文件中没有任何一行匹配 `N Tests N Failures N Ignored`。
    #[error("Couldn't parse test results: no summary line found in {}", path.display())]
    SummaryNotFound { path: PathBuf },

    /// The file or directory could not be read.
    /// 无法读取文件或目录。
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
