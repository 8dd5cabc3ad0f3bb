//! Core types for style findings and reports.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for style findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suggestion for improvement, never blocks.
    Info,
    /// Advisory issue that should be addressed.
    Warning,
    /// Blocking issue that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Location of a finding in a document.
///
/// `file` is `None` for pasted content, in which case reporting degrades
/// to line-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Source file, when the content came from one.
    pub file: Option<PathBuf>,
    /// Line number (1-indexed) in the original input.
    pub line: usize,
}

impl Location {
    /// Creates a location without a file (pasted content).
    #[must_use]
    pub fn new(line: usize) -> Self {
        Self { file: None, line }
    }

    /// Creates a location within a file.
    #[must_use]
    pub fn in_file(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: Some(file.into()),
            line,
        }
    }

    /// Renders the location as `file:line`, or `<paste>:line` without a file.
    #[must_use]
    pub fn display(&self) -> String {
        match &self.file {
            Some(f) => format!("{}:{}", f.display(), self.line),
            None => format!("<paste>:{}", self.line),
        }
    }
}

/// A suggested fix for a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
    /// Optional corrective text (e.g. the preferred term or rewritten heading).
    pub replacement: Option<String>,
}

impl Suggestion {
    /// Creates a suggestion without corrective text.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: None,
        }
    }

    /// Creates a suggestion carrying corrective text.
    #[must_use]
    pub fn with_replacement(message: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: Some(replacement.into()),
        }
    }
}

/// A style issue found during evaluation.
///
/// Immutable value object created by exactly one evaluator invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Stable rule code (e.g. "DS003").
    pub code: String,
    /// Rule identifier used in configuration and output (e.g. "heading_case").
    pub rule: String,
    /// Rule family (e.g. "Writing Standards").
    pub family: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Where the issue was found.
    pub location: Location,
    /// Human-readable description.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<Suggestion>,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        family: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            family: family.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to this finding.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Key used for defensive deduplication in the aggregator.
    #[must_use]
    pub fn dedup_key(&self) -> (String, Option<PathBuf>, usize, String) {
        (
            self.rule.clone(),
            self.location.file.clone(),
            self.location.line,
            self.message.clone(),
        )
    }

    /// Formats the finding for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}\n",
            self.code,
            self.rule,
            self.location.display()
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(output, "  = help: {}", suggestion.message);
            if let Some(replacement) = &suggestion.replacement {
                let _ = writeln!(output, "  = try: {replacement}");
            }
        }
        output
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}: {}",
            self.location.display(),
            self.severity,
            self.code,
            self.rule,
            self.message
        )
    }
}

/// Per-severity finding counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of error findings.
    pub errors: usize,
    /// Number of warning findings.
    pub warnings: usize,
    /// Number of info findings.
    pub infos: usize,
}

impl Summary {
    /// Tallies findings by severity.
    #[must_use]
    pub fn of(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for finding in findings {
            match finding.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.infos += 1,
            }
        }
        summary
    }

    /// Total number of findings.
    #[must_use]
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos
    }
}

/// Result of evaluating one or more documents.
///
/// Derived at aggregation time and never mutated afterwards; rebuilt per
/// invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// All findings, in aggregator order.
    pub findings: Vec<Finding>,
    /// Per-severity counts over `findings`.
    pub summary: Summary,
    /// Number of documents evaluated.
    pub files_checked: usize,
    /// Minimum severity that makes this report blocking.
    pub fail_on: Severity,
}

impl Report {
    /// Builds a report from already-aggregated findings.
    #[must_use]
    pub fn new(findings: Vec<Finding>, files_checked: usize, fail_on: Severity) -> Self {
        let summary = Summary::of(&findings);
        Self {
            findings,
            summary,
            files_checked,
            fail_on,
        }
    }

    /// Returns true if any finding is at or above the `fail_on` threshold.
    #[must_use]
    pub fn has_blocking(&self) -> bool {
        self.findings.iter().any(|f| f.severity >= self.fail_on)
    }

    /// Returns true if no blocking finding remains.
    ///
    /// This is the signal adapters use for their process exit code.
    #[must_use]
    pub fn is_passing(&self) -> bool {
        !self.has_blocking()
    }

    /// Returns a derived report containing only findings at or above
    /// `min_severity`, with counts recomputed over the retained findings.
    #[must_use]
    pub fn filter(&self, min_severity: Severity) -> Self {
        let findings: Vec<Finding> = self
            .findings
            .iter()
            .filter(|f| f.severity >= min_severity)
            .cloned()
            .collect();
        Self::new(findings, self.files_checked, self.fail_on)
    }

    /// Returns findings of exactly the given severity, in report order.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .collect()
    }
}
