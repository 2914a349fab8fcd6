// src/core/aggregator.rs

use std::path::{Path, PathBuf};

use crate::core::error::SummaryError;
use crate::core::models::{FileSummary, RunTotals};
use crate::core::parser;
use crate::infra::fs::read_result_lines;
use crate::reporting::console::render_report;

/// Walks a list of result files in order, accumulates their counts and their
/// failure/ignore detail lines, and renders the final report.
///
/// The aggregator is created once per invocation, mutated once per input file
/// and consumed when the report is produced. The first error aborts the whole
/// run; there is no partial report.
pub struct ResultAggregator {
    targets: Vec<PathBuf>,
    /// Prefix concatenated onto each displayed detail line when non-empty.
    root_path: String,
    totals: RunTotals,
    /// One newline-joined block per file that produced failures, in file order.
    failure_blocks: Vec<String>,
    /// One newline-joined block per file that produced ignores, in file order.
    ignore_blocks: Vec<String>,
}

impl ResultAggregator {
    /// Configures a new run over `targets`, decorating displayed lines with
    /// `root_path`. Performs no I/O. Fails when `targets` is empty: the
    /// caller is expected to have already globbed a directory and found at
    /// least one matching file.
    pub fn new(
        targets: Vec<PathBuf>,
        root_path: impl Into<String>,
    ) -> Result<Self, SummaryError> {
        if targets.is_empty() {
            return Err(SummaryError::NoTargets);
        }
        Ok(Self {
            targets,
            root_path: root_path.into(),
            totals: RunTotals::default(),
            failure_blocks: Vec::new(),
            ignore_blocks: Vec::new(),
        })
    }

    /// Processes every target file in the order supplied and returns the
    /// composed report text. Consumes the aggregator; the totals only ever
    /// grow, so a second pass over the same state would double-count.
    pub fn run(mut self) -> Result<String, SummaryError> {
        let targets = std::mem::take(&mut self.targets);
        for path in &targets {
            let summary = self.summarize_file(path)?;
            self.accumulate(summary);
        }

        Ok(render_report(
            self.totals,
            &self.failure_blocks,
            &self.ignore_blocks,
        ))
    }

    /// Parses one result file into its detail display-strings and its
    /// summary counts.
    fn summarize_file(&self, path: &Path) -> Result<FileSummary, SummaryError> {
        let lines = read_result_lines(path)?;

        let mut failures = Vec::new();
        let mut ignores = Vec::new();
        for line in &lines {
            let Some(record) = parser::parse_detail_line(line) else {
                continue;
            };
            // Unrecognized statuses fall through: counted in no bucket.
            if record.status.is_fail() {
                failures.push(self.decorate(&record.to_string()));
            } else if record.status.is_ignore() {
                ignores.push(self.decorate(&record.to_string()));
            }
        }

        let counts = parser::parse_test_summary(&lines.join("\n")).ok_or_else(|| {
            SummaryError::SummaryNotFound {
                path: path.to_path_buf(),
            }
        })?;

        Ok(FileSummary {
            failures,
            ignores,
            counts,
        })
    }

    /// Folds one file's summary into the running state.
    fn accumulate(&mut self, summary: FileSummary) {
        self.totals.add(summary.counts);
        if !summary.failures.is_empty() {
            self.failure_blocks.push(summary.failures.join("\n"));
        }
        if !summary.ignores.is_empty() {
            self.ignore_blocks.push(summary.ignores.join("\n"));
        }
    }

    /// Prepends the configured root path to a display line. The prefix is a
    /// plain string concatenation, matching how Unity's own tooling decorates
    /// relative source paths.
    fn decorate(&self, line: &str) -> String {
        if self.root_path.is_empty() {
            line.to_string()
        } else {
            format!("{}{}", self.root_path, line)
        }
    }
}
