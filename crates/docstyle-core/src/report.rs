//! Report rendering.
//!
//! The engine produces a [`Report`]; these helpers turn it into
//! human-readable text (grouped by severity), a compact one-line-per-
//! finding form, or machine-readable JSON. Severity filtering is the
//! caller's concern via [`Report::filter`]; rendering is presentation
//! only and never decides exit behavior.

use crate::types::{Report, Severity};

impl Report {
    /// Renders the report grouped by severity, most severe first, with a
    /// count summary footer. Deterministic for identical reports.
    #[must_use]
    pub fn render_text(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        for severity in [Severity::Error, Severity::Warning, Severity::Info] {
            let group = self.by_severity(severity);
            if group.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{severity}s ({}):", group.len());
            for finding in group {
                let _ = writeln!(
                    out,
                    "  {} [{}] {}: {}",
                    finding.location.display(),
                    finding.code,
                    finding.rule,
                    finding.message
                );
                if let Some(suggestion) = &finding.suggestion {
                    let _ = writeln!(out, "    = help: {}", suggestion.message);
                    if let Some(replacement) = &suggestion.replacement {
                        let _ = writeln!(out, "    = try: {replacement}");
                    }
                }
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(
            out,
            "Found {} error(s), {} warning(s), {} info(s) in {} file(s)",
            self.summary.errors, self.summary.warnings, self.summary.infos, self.files_checked
        );
        out
    }

    /// Renders one line per finding, in report order.
    #[must_use]
    pub fn render_compact(&self) -> String {
        let mut out = String::new();
        for finding in &self.findings {
            out.push_str(&finding.to_string());
            out.push('\n');
        }
        out
    }

    /// Serializes the report (findings, summary, files checked, threshold)
    /// as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Finding, Location, Report, Severity, Suggestion};

    fn sample_report() -> Report {
        let findings = vec![
            Finding::new(
                "DS201",
                "inclusive_language",
                "Content Quality",
                Severity::Error,
                Location::new(1),
                "non-inclusive term 'blacklist' found",
            )
            .with_suggestion(Suggestion::with_replacement(
                "use an inclusive alternative",
                "deny list",
            )),
            Finding::new(
                "DS101",
                "avoid_contractions",
                "Writing Standards",
                Severity::Warning,
                Location::new(2),
                "contraction found: 'don't'",
            ),
        ];
        Report::new(findings, 1, Severity::Error)
    }

    #[test]
    fn text_report_groups_by_severity() {
        let text = sample_report().render_text();
        let error_pos = text.find("errors (1):").expect("errors group present");
        let warning_pos = text.find("warnings (1):").expect("warnings group present");
        assert!(error_pos < warning_pos);
        assert!(text.contains("= help: use an inclusive alternative"));
        assert!(text.contains("= try: deny list"));
        assert!(text.contains("Found 1 error(s), 1 warning(s), 0 info(s) in 1 file(s)"));
    }

    #[test]
    fn compact_report_is_one_line_per_finding() {
        insta::assert_snapshot!(sample_report().render_compact(), @r"
        <paste>:1: error [DS201] inclusive_language: non-inclusive term 'blacklist' found
        <paste>:2: warning [DS101] avoid_contractions: contraction found: 'don't'
        ");
    }

    #[test]
    fn json_report_carries_summary_and_findings() {
        let json = sample_report().to_json().expect("report serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["summary"]["errors"], 1);
        assert_eq!(value["summary"]["warnings"], 1);
        assert_eq!(value["findings"][0]["rule"], "inclusive_language");
        assert_eq!(value["findings"][0]["severity"], "error");
        assert_eq!(value["files_checked"], 1);
    }

    #[test]
    fn rendering_is_idempotent() {
        let report = sample_report();
        assert_eq!(report.render_text(), report.render_text());
        assert_eq!(report.render_compact(), report.render_compact());
    }
}
