//! # Result File Parsing Module / 结果文件解析模块
//!
//! Line-level parsing for Unity result files: the colon-delimited per-test
//! detail lines and the `N Tests N Failures N Ignored` summary line.
//!
//! Unity 结果文件的行级解析：以冒号分隔的每个测试的详细行，
//! 以及 `N Tests N Failures N Ignored` 摘要行。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::{ResultRecord, SummaryCounts, TestStatus};

/// The aggregate summary line emitted once per Unity test binary.
/// 每个 Unity 测试二进制输出一次的聚合摘要行。
static SUMMARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+) Tests ([0-9]+) Failures ([0-9]+) Ignored")
        .expect("summary pattern is a valid regex")
});

/// Parses one line of a result file as a detail record.
///
/// The line is split on the literal `':'`. Exactly 5 fields are read as
/// `file:line:name:status:message`, exactly 4 fields as the same with an
/// implicit absent message. Any other field count means the line is not a
/// detail record (a blank, a header, or the summary line) and `None` is
/// returned. A 6-field line — a message containing a colon — is therefore
/// skipped as well; that is a documented limitation of the format, not a
/// parse error. The line-number field must be numeric for the line to be
/// representable as a record.
///
/// 将结果文件中的一行解析为详细记录。
///
/// 该行按字面 `':'` 分割。恰好 5 个字段按 `file:line:name:status:message`
/// 读取，恰好 4 个字段同上但消息隐式缺失。其他字段数表示该行不是详细记录
/// （空行、标题或摘要行本身），返回 `None`。6 字段行（消息中含冒号）同样被
/// 跳过；这是格式的已知限制，而不是解析错误。行号字段必须是数字，
/// 该行才能表示为记录。
pub fn parse_detail_line(line: &str) -> Option<ResultRecord> {
    let parts: Vec<&str> = line.split(':').collect();
    let (source_file, source_line, test_name, status, message) = match parts.as_slice() {
        [file, line_no, name, status, message] => {
            (*file, *line_no, *name, *status, Some((*message).to_string()))
        }
        [file, line_no, name, status] => (*file, *line_no, *name, *status, None),
        _ => return None,
    };

    let source_line = source_line.parse().ok()?;

    Some(ResultRecord {
        source_file: source_file.to_string(),
        source_line,
        test_name: test_name.to_string(),
        status: TestStatus::parse(status),
        message,
    })
}

/// Searches a file's whole text for the first summary line and extracts its
/// counts. The summary may appear anywhere in the file. Returns `None` when
/// no line matches the pattern.
///
/// 在文件的全部文本中搜索第一个摘要行并提取其计数。摘要可能出现在文件的
/// 任何位置。没有任何行匹配该模式时返回 `None`。
pub fn parse_test_summary(text: &str) -> Option<SummaryCounts> {
    let caps = SUMMARY_RE.captures(text)?;
    Some(SummaryCounts {
        tests: caps[1].parse().ok()?,
        failures: caps[2].parse().ok()?,
        ignored: caps[3].parse().ok()?,
    })
}
