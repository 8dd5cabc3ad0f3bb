//! Terminology rules: inclusive language, negative terms, and product
//! name casing.

use docstyle_core::{Document, Evaluator, Finding, Location, Severity, StyleConfig, Suggestion};

/// Flags non-inclusive terms. Defaults to error severity.
#[derive(Debug, Clone, Default)]
pub struct InclusiveLanguage;

impl InclusiveLanguage {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for InclusiveLanguage {
    fn name(&self) -> &'static str {
        "inclusive_language"
    }

    fn code(&self) -> &'static str {
        "DS201"
    }

    fn family(&self) -> &'static str {
        "Content Quality"
    }

    fn description(&self) -> &'static str {
        "Requires inclusive terminology"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let mut findings = Vec::new();
        for line in doc.prose_lines() {
            let text = line.prose.to_lowercase();
            for (term, replacement) in &config.terminology.non_inclusive {
                if text.contains(&term.to_lowercase()) {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            self.default_severity(),
                            Location::new(line.number),
                            format!("non-inclusive term '{term}' found"),
                        )
                        .with_suggestion(Suggestion::with_replacement(
                            "use an inclusive alternative",
                            replacement.clone(),
                        )),
                    );
                }
            }
        }
        findings
    }
}

/// Flags negative terms and suggests neutral replacements.
#[derive(Debug, Clone, Default)]
pub struct NegativeTerms;

impl NegativeTerms {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for NegativeTerms {
    fn name(&self) -> &'static str {
        "avoid_negative_terms"
    }

    fn code(&self) -> &'static str {
        "DS202"
    }

    fn family(&self) -> &'static str {
        "Content Quality"
    }

    fn description(&self) -> &'static str {
        "Prefers neutral terms over negative ones"
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let mut findings = Vec::new();
        for line in doc.prose_lines() {
            for (term, replacement) in &config.terminology.negative_terms {
                if crate::clarity::contains_word(&line.prose, term) {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            self.default_severity(),
                            Location::new(line.number),
                            format!("negative term '{term}' found"),
                        )
                        .with_suggestion(Suggestion::with_replacement(
                            format!("use '{replacement}' instead of '{term}'"),
                            replacement.clone(),
                        )),
                    );
                }
            }
        }
        findings
    }
}

/// Checks configured product names for canonical casing.
///
/// A line using a non-canonical casing gets an Info finding; a document
/// mixing canonical and non-canonical casing additionally gets one
/// Warning at line 1.
#[derive(Debug, Clone, Default)]
pub struct ProductNames;

impl ProductNames {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for ProductNames {
    fn name(&self) -> &'static str {
        "product_names"
    }

    fn code(&self) -> &'static str {
        "DS203"
    }

    fn family(&self) -> &'static str {
        "Content Quality"
    }

    fn description(&self) -> &'static str {
        "Product names must use their canonical casing"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let mut findings = Vec::new();
        for canonical in &config.terminology.proper_nouns {
            let mut canonical_count = 0usize;
            let mut variant_count = 0usize;
            for line in doc.prose_lines() {
                let mut line_flagged = false;
                for word in line
                    .prose
                    .split(|c: char| !c.is_alphanumeric())
                    .filter(|w| !w.is_empty())
                {
                    if word == canonical {
                        canonical_count += 1;
                    } else if word.eq_ignore_ascii_case(canonical) {
                        variant_count += 1;
                        line_flagged = true;
                    }
                }
                if line_flagged {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            Severity::Info,
                            Location::new(line.number),
                            format!("'{canonical}' is written with non-canonical casing"),
                        )
                        .with_suggestion(Suggestion::with_replacement(
                            "use the canonical product name",
                            canonical.clone(),
                        )),
                    );
                }
            }
            if canonical_count > 0 && variant_count > 0 {
                findings.push(Finding::new(
                    self.code(),
                    self.name(),
                    self.family(),
                    Severity::Warning,
                    Location::new(1),
                    format!(
                        "mixed capitalization of '{canonical}': {canonical_count} canonical, {variant_count} other"
                    ),
                ));
            }
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<E: Evaluator>(evaluator: &E, content: &str) -> Vec<Finding> {
        evaluator.check(&Document::parse(content), &StyleConfig::default())
    }

    #[test]
    fn non_inclusive_term_is_error_with_replacement() {
        let findings = check(&InclusiveLanguage::new(), "Add the host to the whitelist.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        let suggestion = findings[0].suggestion.as_ref().expect("suggestion present");
        assert_eq!(suggestion.replacement.as_deref(), Some("allow list"));
    }

    #[test]
    fn negative_term_is_warning() {
        let findings = check(&NegativeTerms::new(), "This fixes a bug in the installer.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("bug"));
    }

    #[test]
    fn negative_term_requires_word_boundary() {
        // "debug" must not match "bug".
        let findings = check(&NegativeTerms::new(), "Enable debug logging.");
        assert!(findings.is_empty());
    }

    #[test]
    fn lowercase_product_name_is_flagged_per_line() {
        let findings = check(&ProductNames::new(), "Boot into phoenix to reimage.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
        let suggestion = findings[0].suggestion.as_ref().expect("suggestion present");
        assert_eq!(suggestion.replacement.as_deref(), Some("Phoenix"));
    }

    #[test]
    fn mixed_casing_adds_document_warning() {
        let findings = check(
            &ProductNames::new(),
            "Phoenix boots first.\nThen phoenix configures the disk.",
        );
        let warnings: Vec<_> = findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].location.line, 1);
        assert!(warnings[0].message.contains("mixed capitalization"));
    }

    #[test]
    fn canonical_usage_passes() {
        let findings = check(&ProductNames::new(), "Phoenix restarts the node.");
        assert!(findings.is_empty());
    }

    #[test]
    fn code_regions_are_exempt() {
        let findings = check(
            &InclusiveLanguage::new(),
            "<pre>\nwhitelist_add host\n</pre>",
        );
        assert!(findings.is_empty());
    }
}
