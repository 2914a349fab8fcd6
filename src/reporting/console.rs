//! # Console Reporting Module / 控制台报告模块
//!
//! This module composes the final summary report and prints the error/usage
//! block. The report layout is a fixed contract consumed by humans and CI
//! logs alike, so its text is never localized or colored; only the error
//! path gets the i18n and styling treatment.
//!
//! 此模块组合最终的摘要报告并打印错误/用法信息。
//! 报告布局是供人和 CI 日志共同使用的固定约定，因此其文本从不本地化或着色；
//! 只有错误路径使用 i18n 和样式。

use colored::*;

use crate::core::error::SummaryError;
use crate::core::models::RunTotals;
use crate::infra::t;

/// The 26-character dashed rule sandwiching every section title.
const SECTION_RULE: &str = "--------------------------";

/// Composes the full report text from the accumulated run state.
///
/// Up to three sections are emitted, each preceded by a blank line:
/// the IGNORED section (only when `totals.ignored > 0`), the FAILED section
/// (only when `totals.failures > 0`), and the OVERALL section, always last.
/// Blocks within a section are joined with newlines; the report ends with a
/// trailing blank line.
///
/// # Output Format / 输出格式
/// ```text
/// --------------------------
/// UNITY IGNORED TEST SUMMARY
/// --------------------------
/// <ignore lines...>
///
/// --------------------------
/// UNITY FAILED TEST SUMMARY
/// --------------------------
/// <failure lines...>
///
/// --------------------------
/// OVERALL UNITY TEST SUMMARY
/// --------------------------
/// <N> TOTAL TESTS <N> TOTAL FAILURES <N> IGNORED
/// ```
pub fn render_report(
    totals: RunTotals,
    failure_blocks: &[String],
    ignore_blocks: &[String],
) -> String {
    let mut report = String::new();

    if totals.ignored > 0 {
        push_section_header(&mut report, "UNITY IGNORED TEST SUMMARY");
        report.push_str(&ignore_blocks.join("\n"));
    }

    if totals.failures > 0 {
        push_section_header(&mut report, "UNITY FAILED TEST SUMMARY");
        report.push_str(&failure_blocks.join("\n"));
    }

    push_section_header(&mut report, "OVERALL UNITY TEST SUMMARY");
    report.push_str(&format!(
        "{} TOTAL TESTS {} TOTAL FAILURES {} IGNORED\n",
        totals.tests, totals.failures, totals.ignored
    ));
    report.push('\n');

    report
}

/// Appends a blank line plus the fixed 3-line section header.
fn push_section_header(report: &mut String, title: &str) {
    report.push('\n');
    report.push_str(SECTION_RULE);
    report.push('\n');
    report.push_str(title);
    report.push('\n');
    report.push_str(SECTION_RULE);
    report.push('\n');
}

/// Prints the error header, the error message and the localized usage block.
///
/// Everything goes to stdout: the tool writes its report there, and the
/// error path deliberately shares the stream so redirected output captures
/// both. The exit code carries the failure signal.
pub fn print_error_with_usage(error: &SummaryError) {
    println!();
    println!("{}", "ERROR:".red().bold());
    println!("{error}");
    println!();
    println!("{}", t!("usage_block"));
}
