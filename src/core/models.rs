//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the summary
//! tool. It includes models for per-test detail records, per-file parse
//! output and the running totals accumulated across a whole run.
//!
//! 此模块定义了整个汇总工具中使用的核心数据结构。
//! 它包括每个测试的详细记录、每个文件的解析输出以及整个运行过程中累积的总计的模型。

use std::fmt;

/// The status field of a detail line.
/// Anything other than the three literal Unity statuses is preserved as
/// `Unrecognized` instead of being rejected: malformed status values must
/// not abort a run, they are simply counted in no bucket.
///
/// 详细行的状态字段。
/// 除三个 Unity 字面状态之外的任何内容都保留为 `Unrecognized` 而不是被拒绝：
/// 格式错误的状态值不会中止运行，只是不计入任何统计。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestStatus {
    /// The test ran and passed. / 测试已运行并通过。
    Pass,
    /// The test ran and failed. / 测试已运行并失败。
    Fail,
    /// The test was compiled in but skipped at runtime. / 测试被编译但在运行时被跳过。
    Ignore,
    /// Any other literal found in the status field, kept verbatim.
    /// 状态字段中发现的任何其他字面值，按原样保留。
    Unrecognized(String),
}

impl TestStatus {
    /// Parses the wire text of a status field. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "PASS" => TestStatus::Pass,
            "FAIL" => TestStatus::Fail,
            "IGNORE" => TestStatus::Ignore,
            other => TestStatus::Unrecognized(other.to_string()),
        }
    }

    /// Checks if the status is a failure.
    pub fn is_fail(&self) -> bool {
        matches!(self, TestStatus::Fail)
    }

    /// Checks if the status is an ignore.
    pub fn is_ignore(&self) -> bool {
        matches!(self, TestStatus::Ignore)
    }

    /// Checks if the status is a pass.
    pub fn is_pass(&self) -> bool {
        matches!(self, TestStatus::Pass)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Pass => f.write_str("PASS"),
            TestStatus::Fail => f.write_str("FAIL"),
            TestStatus::Ignore => f.write_str("IGNORE"),
            TestStatus::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// One parsed test outcome line from a result file.
/// Immutable once parsed.
///
/// 从结果文件解析出的一行测试结果。
/// 解析后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    /// The C source file that declared the test. / 声明该测试的 C 源文件。
    pub source_file: String,
    /// The line number of the test in that file. / 该测试在文件中的行号。
    pub source_line: u32,
    /// The name of the test function. / 测试函数的名称。
    pub test_name: String,
    /// The parsed status field. / 解析出的状态字段。
    pub status: TestStatus,
    /// The optional trailing message. `None` for 4-field lines; `Some`
    /// (possibly empty) for 5-field lines, so the wire form round-trips.
    /// 可选的尾部消息。4 字段行为 `None`；5 字段行为 `Some`（可能为空），
    /// 以便按原样重现原始行。
    pub message: Option<String>,
}

impl fmt::Display for ResultRecord {
    /// Reconstructs the wire form `file:line:name:status[:message]`.
    /// A 5-field line with an empty message keeps its trailing colon.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.source_file, self.source_line, self.test_name, self.status
        )?;
        if let Some(message) = &self.message {
            write!(f, ":{message}")?;
        }
        Ok(())
    }
}

/// The `(tests, failures, ignored)` triple parsed from a file's summary line.
/// 从文件摘要行解析出的 `(tests, failures, ignored)` 三元组。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCounts {
    pub tests: u32,
    pub failures: u32,
    pub ignored: u32,
}

/// The full parse output for a single result file: display strings for the
/// failing and ignored tests, plus the file's own summary counts.
///
/// 单个结果文件的完整解析输出：失败和被忽略测试的显示字符串，
/// 以及该文件自身的摘要计数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    /// Display strings for FAIL records, in file order. / FAIL 记录的显示字符串，按文件顺序。
    pub failures: Vec<String>,
    /// Display strings for IGNORE records, in file order. / IGNORE 记录的显示字符串，按文件顺序。
    pub ignores: Vec<String>,
    /// The counts from the file's summary line. / 来自文件摘要行的计数。
    pub counts: SummaryCounts,
}

/// Running totals across all processed result files.
/// Monotonically non-decreasing over a run.
///
/// 所有已处理结果文件的累计总数。
/// 在一次运行中单调不减。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub tests: u64,
    pub failures: u64,
    pub ignored: u64,
}

impl RunTotals {
    /// Folds one file's summary counts into the totals.
    pub fn add(&mut self, counts: SummaryCounts) {
        self.tests += u64::from(counts.tests);
        self.failures += u64::from(counts.failures);
        self.ignored += u64::from(counts.ignored);
    }
}
