//! Rules for document structure: required sections and table of contents.
//!
//! Section presence is judged by heading text (case-insensitive, trimmed
//! containment), so incidental body text cannot satisfy a requirement.

use docstyle_core::{Document, Evaluator, Finding, Location, Severity, StyleConfig, Suggestion};

/// Checks that configured section headings are present.
///
/// A missing required section is an error; a missing recommended section
/// is an informational suggestion. Exactly one finding is emitted per
/// missing section.
#[derive(Debug, Clone, Default)]
pub struct RequiredSections;

impl RequiredSections {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for RequiredSections {
    fn name(&self) -> &'static str {
        "required_sections"
    }

    fn code(&self) -> &'static str {
        "DS001"
    }

    fn family(&self) -> &'static str {
        "Document Structure"
    }

    fn description(&self) -> &'static str {
        "Checks for required and recommended section headings"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let headings: Vec<String> = doc
            .headings()
            .filter_map(|l| l.heading_text())
            .map(|t| t.to_lowercase())
            .collect();
        let has_section =
            |name: &str| headings.iter().any(|h| h.contains(&name.to_lowercase()));

        let mut findings = Vec::new();
        for section in &config.structure.required_sections {
            if !has_section(section) {
                findings.push(
                    Finding::new(
                        self.code(),
                        self.name(),
                        self.family(),
                        Severity::Error,
                        Location::new(1),
                        format!("required section '{section}' not found"),
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "add a '{section}' section heading"
                    ))),
                );
            }
        }
        for section in &config.structure.recommended_sections {
            if !has_section(section) {
                findings.push(
                    Finding::new(
                        self.code(),
                        self.name(),
                        self.family(),
                        Severity::Info,
                        Location::new(1),
                        format!("consider adding a '{section}' section"),
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "documents typically benefit from a '{section}' section"
                    ))),
                );
            }
        }
        findings
    }
}

/// Flags long documents without a table-of-contents marker.
#[derive(Debug, Clone, Default)]
pub struct TocPresence;

impl TocPresence {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for TocPresence {
    fn name(&self) -> &'static str {
        "toc_presence"
    }

    fn code(&self) -> &'static str {
        "DS002"
    }

    fn family(&self) -> &'static str {
        "Document Structure"
    }

    fn description(&self) -> &'static str {
        "Long documents should carry a table of contents"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let min_lines = config.structure.toc_min_lines;
        if min_lines == 0 || doc.line_count() <= min_lines || doc.has_toc() {
            return Vec::new();
        }
        vec![Finding::new(
            self.code(),
            self.name(),
            self.family(),
            self.default_severity(),
            Location::new(1),
            format!(
                "document has {} lines and no table of contents",
                doc.line_count()
            ),
        )
        .with_suggestion(Suggestion::new(
            "add a table of contents for documents with multiple sections",
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<E: Evaluator>(evaluator: &E, content: &str, config: &StyleConfig) -> Vec<Finding> {
        evaluator.check(&Document::parse(content), config)
    }

    #[test]
    fn missing_required_section_is_exactly_one_error() {
        let config = StyleConfig::default();
        let findings = check(
            &RequiredSections::new(),
            "<h1>Install</h1>\n<p>Steps follow.</p>",
            &config,
        );
        let errors: Vec<_> = findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Overview"));
        assert_eq!(errors[0].location.line, 1);
    }

    #[test]
    fn present_heading_satisfies_requirement() {
        let config = StyleConfig::default();
        let findings = check(
            &RequiredSections::new(),
            "<h1>Product Overview</h1>\n<p>Text.</p>",
            &config,
        );
        assert!(findings.iter().all(|f| f.severity != Severity::Error));
    }

    #[test]
    fn body_text_does_not_satisfy_requirement() {
        let config = StyleConfig::default();
        let findings = check(
            &RequiredSections::new(),
            "<p>This overview paragraph is not a heading.</p>",
            &config,
        );
        assert!(findings.iter().any(|f| f.severity == Severity::Error));
    }

    #[test]
    fn missing_recommended_section_is_info() {
        let mut config = StyleConfig::empty();
        config.structure.recommended_sections = vec!["Prerequisites".to_string()];
        let findings = check(&RequiredSections::new(), "<h1>Overview</h1>", &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
    }

    #[test]
    fn empty_section_lists_yield_no_findings() {
        let config = StyleConfig::empty();
        let findings = check(&RequiredSections::new(), "anything at all", &config);
        assert!(findings.is_empty());
    }

    #[test]
    fn long_document_without_toc_is_flagged() {
        let mut config = StyleConfig::empty();
        config.structure.toc_min_lines = 5;
        let content = (0..8).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let findings = check(&TocPresence::new(), &content, &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "toc_presence");
    }

    #[test]
    fn toc_marker_suppresses_finding() {
        let mut config = StyleConfig::empty();
        config.structure.toc_min_lines = 2;
        let content = "Table of Contents\nline\nline\nline";
        assert!(check(&TocPresence::new(), content, &config).is_empty());
    }

    #[test]
    fn short_document_needs_no_toc() {
        let mut config = StyleConfig::empty();
        config.structure.toc_min_lines = 50;
        assert!(check(&TocPresence::new(), "short\ndoc", &config).is_empty());
    }
}
