//! Callout balance rule.

use docstyle_core::{
    CalloutKind, Document, Evaluator, Finding, Location, Severity, StyleConfig, Suggestion,
};

/// Flags documents that overuse warning callouts.
///
/// Counts warning/caution callout regions from the normalizer (and, for
/// plain text, `Warning:` lead-ins).
#[derive(Debug, Clone, Default)]
pub struct CalloutBalance;

impl CalloutBalance {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for CalloutBalance {
    fn name(&self) -> &'static str {
        "callout_balance"
    }

    fn code(&self) -> &'static str {
        "DS504"
    }

    fn family(&self) -> &'static str {
        "Content Organization"
    }

    fn description(&self) -> &'static str {
        "Warnings should be reserved for critical information"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let max = config.training.max_warning_callouts;
        if max == 0 {
            return Vec::new();
        }
        let count = doc
            .callouts()
            .iter()
            .filter(|k| matches!(k, CalloutKind::Warning | CalloutKind::Caution))
            .count();
        if count <= max {
            return Vec::new();
        }
        vec![Finding::new(
            self.code(),
            self.name(),
            self.family(),
            self.default_severity(),
            Location::new(1),
            format!("high number of warning callouts ({count})"),
        )
        .with_suggestion(Suggestion::new(
            "use warnings sparingly, for critical safety information only",
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning_macro() -> &'static str {
        "<ac:structured-macro ac:name=\"warning\"><p>careful</p></ac:structured-macro>"
    }

    #[test]
    fn too_many_warning_callouts_is_flagged() {
        let mut config = StyleConfig::empty();
        config.training.max_warning_callouts = 2;
        let content = (0..4).map(|_| warning_macro()).collect::<Vec<_>>().join("\n");
        let findings = CalloutBalance::new().check(&Document::parse(&content), &config);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("4"));
    }

    #[test]
    fn balanced_callouts_pass() {
        let mut config = StyleConfig::empty();
        config.training.max_warning_callouts = 5;
        let content = warning_macro();
        let findings = CalloutBalance::new().check(&Document::parse(content), &config);
        assert!(findings.is_empty());
    }

    #[test]
    fn info_callouts_do_not_count() {
        let mut config = StyleConfig::empty();
        config.training.max_warning_callouts = 1;
        let content = (0..4)
            .map(|_| "<ac:structured-macro ac:name=\"info\"><p>fyi</p></ac:structured-macro>")
            .collect::<Vec<_>>()
            .join("\n");
        let findings = CalloutBalance::new().check(&Document::parse(&content), &config);
        assert!(findings.is_empty());
    }
}
