//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the file-system utilities of the summary tool:
//! discovering result files in a directory and reading one into lines.
//!
//! 此模块提供汇总工具的文件系统实用功能：
//! 在目录中发现结果文件并将其读取为行。

use globset::Glob;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::SummaryError;

/// File-name pattern produced by Unity's test runner for result artifacts,
/// e.g. `ping.testpass` or `timer.testfail`.
const RESULT_FILE_PATTERN: &str = "*.test*";

/// Collects every result file in `dir`, sorted by file name so a run is
/// deterministic regardless of directory-entry order.
///
/// # Arguments
/// * `dir` - The directory to scan; only its direct children are considered
///
/// # Returns
/// The matched paths, or `NoInputFiles` when nothing in `dir` matches
pub fn find_result_files(dir: &Path) -> Result<Vec<PathBuf>, SummaryError> {
    let matcher = Glob::new(RESULT_FILE_PATTERN)
        .expect("result-file pattern is a valid glob")
        .compile_matcher();

    let entries = fs::read_dir(dir).map_err(|source| SummaryError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SummaryError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && matcher.is_match(entry.file_name()) {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(SummaryError::NoInputFiles {
            dir: dir.display().to_string(),
        });
    }
    Ok(files)
}

/// Reads a result file into a sequence of lines with trailing whitespace
/// stripped from each. The handle is closed before returning, on the error
/// path included.
///
/// # Arguments
/// * `path` - The result file to read
///
/// # Returns
/// The stripped lines, or `EmptyResultFile` when the file has no content
pub fn read_result_lines(path: &Path) -> Result<Vec<String>, SummaryError> {
    let content = fs::read_to_string(path).map_err(|source| SummaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if content.is_empty() {
        return Err(SummaryError::EmptyResultFile {
            path: path.to_path_buf(),
        });
    }

    Ok(content
        .split('\n')
        .map(|line| line.trim_end().to_string())
        .collect())
}
