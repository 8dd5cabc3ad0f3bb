//! Technical content rules: KB reference and version number formatting.

use docstyle_core::{Document, Evaluator, Finding, Location, Severity, StyleConfig, Suggestion};
use regex::Regex;
use std::sync::OnceLock;

fn kb_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bKB-?(\d+)\b").ok()).as_ref()
}

fn version_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d+\.\d+(?:\.\d+)?\b").ok())
        .as_ref()
}

/// Validates knowledge-base reference formatting.
///
/// The canonical form is `KB-` followed by at least the configured number
/// of digits. A reference missing the hyphen or uppercase prefix is a
/// warning; one that is merely short of digits is informational.
#[derive(Debug, Clone, Default)]
pub struct KbReferenceFormat;

impl KbReferenceFormat {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for KbReferenceFormat {
    fn name(&self) -> &'static str {
        "kb_reference_format"
    }

    fn code(&self) -> &'static str {
        "DS301"
    }

    fn family(&self) -> &'static str {
        "Technical Content"
    }

    fn description(&self) -> &'static str {
        "KB references use the KB-#### form"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let min_digits = config.technical.kb_min_digits;
        if min_digits == 0 {
            return Vec::new();
        }
        let Some(re) = kb_re() else {
            return Vec::new();
        };

        let mut findings = Vec::new();
        for line in doc.prose_lines() {
            for captures in re.captures_iter(&line.prose) {
                let (Some(whole), Some(digits)) = (captures.get(0), captures.get(1)) else {
                    continue;
                };
                let reference = whole.as_str();
                let canonical = format!("KB-{}", digits.as_str());
                if reference != canonical {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            Severity::Warning,
                            Location::new(line.number),
                            format!("KB reference format issue: '{reference}'"),
                        )
                        .with_suggestion(Suggestion::with_replacement(
                            "use the KB-#### form",
                            canonical,
                        )),
                    );
                } else if digits.as_str().len() < min_digits {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            Severity::Info,
                            Location::new(line.number),
                            format!(
                                "KB reference '{reference}' has fewer than {min_digits} digits"
                            ),
                        )
                        .with_suggestion(Suggestion::new(
                            "use the full KB number (e.g. KB-5013)",
                        )),
                    );
                }
            }
        }
        findings
    }
}

/// Flags two-part version numbers when the style guide asks for X.Y.Z.
#[derive(Debug, Clone, Default)]
pub struct VersionFormat;

impl VersionFormat {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for VersionFormat {
    fn name(&self) -> &'static str {
        "version_format"
    }

    fn code(&self) -> &'static str {
        "DS302"
    }

    fn family(&self) -> &'static str {
        "Technical Content"
    }

    fn description(&self) -> &'static str {
        "Version numbers use the full X.Y.Z form"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        if !config.technical.require_version_triplet {
            return Vec::new();
        }
        let Some(re) = version_re() else {
            return Vec::new();
        };

        let mut findings = Vec::new();
        for line in doc.prose_lines() {
            for m in re.find_iter(&line.prose) {
                if m.as_str().split('.').count() == 2 {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            self.default_severity(),
                            Location::new(line.number),
                            format!(
                                "version number '{}' might benefit from the full X.Y.Z form",
                                m.as_str()
                            ),
                        )
                        .with_suggestion(Suggestion::with_replacement(
                            "use a three-part version number",
                            format!("{}.0", m.as_str()),
                        )),
                    );
                }
            }
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<E: Evaluator>(evaluator: &E, content: &str, config: &StyleConfig) -> Vec<Finding> {
        evaluator.check(&Document::parse(content), config)
    }

    #[test]
    fn short_kb_reference_is_info() {
        let findings = check(
            &KbReferenceFormat::new(),
            "Refer to KB-123",
            &StyleConfig::default(),
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "kb_reference_format");
        assert_eq!(findings[0].severity, Severity::Info);
        assert_eq!(findings[0].location.line, 1);
    }

    #[test]
    fn missing_hyphen_is_warning_with_canonical_form() {
        let findings = check(
            &KbReferenceFormat::new(),
            "See KB5013 for details.",
            &StyleConfig::default(),
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        let suggestion = findings[0].suggestion.as_ref().expect("suggestion present");
        assert_eq!(suggestion.replacement.as_deref(), Some("KB-5013"));
    }

    #[test]
    fn canonical_kb_reference_passes() {
        let findings = check(
            &KbReferenceFormat::new(),
            "See KB-5013 for details.",
            &StyleConfig::default(),
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn zero_min_digits_disables_kb_checks() {
        let findings = check(
            &KbReferenceFormat::new(),
            "See KB1 for details.",
            &StyleConfig::empty(),
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn two_part_version_is_flagged() {
        let findings = check(
            &VersionFormat::new(),
            "Upgrade to 7.3 before continuing.",
            &StyleConfig::default(),
        );
        assert_eq!(findings.len(), 1);
        let suggestion = findings[0].suggestion.as_ref().expect("suggestion present");
        assert_eq!(suggestion.replacement.as_deref(), Some("7.3.0"));
    }

    #[test]
    fn three_part_version_passes() {
        let findings = check(
            &VersionFormat::new(),
            "Upgrade to 7.3.1 before continuing.",
            &StyleConfig::default(),
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn versions_in_code_regions_are_exempt() {
        let findings = check(
            &VersionFormat::new(),
            "<pre>\ninstaller --version 7.3\n</pre>",
            &StyleConfig::default(),
        );
        assert!(findings.is_empty());
    }
}
