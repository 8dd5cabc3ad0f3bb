//! Evaluator trait for defining style rules.

use crate::config::StyleConfig;
use crate::document::Document;
use crate::types::{Finding, Severity};

/// A style rule evaluated against one normalized document.
///
/// Evaluators are pure functions over `(Document, StyleConfig)`: they are
/// independent, order-insensitive, and never depend on another evaluator's
/// output. A single line may legitimately receive findings from several
/// evaluators.
///
/// # Example
///
/// ```ignore
/// use docstyle_core::{Document, Evaluator, Finding, Location, Severity, StyleConfig};
///
/// pub struct NoTabs;
///
/// impl Evaluator for NoTabs {
///     fn name(&self) -> &'static str { "no_tabs" }
///     fn code(&self) -> &'static str { "DS999" }
///     fn family(&self) -> &'static str { "Formatting" }
///
///     fn check(&self, doc: &Document, _config: &StyleConfig) -> Vec<Finding> {
///         doc.lines()
///             .iter()
///             .filter(|l| l.raw.contains('\t'))
///             .map(|l| {
///                 Finding::new(
///                     self.code(),
///                     self.name(),
///                     self.family(),
///                     self.default_severity(),
///                     Location::new(l.number),
///                     "tab character found",
///                 )
///             })
///             .collect()
///     }
/// }
/// ```
pub trait Evaluator: Send + Sync {
    /// Returns the snake_case rule id (e.g. "heading_case").
    fn name(&self) -> &'static str;

    /// Returns the stable rule code (e.g. "DS003").
    fn code(&self) -> &'static str;

    /// Returns the rule family this evaluator belongs to.
    fn family(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for findings from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks a single document and returns any findings.
    ///
    /// Locations carry line numbers only; the engine attaches the file
    /// path afterwards.
    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding>;
}

/// Type alias for boxed Evaluator trait objects.
pub type EvaluatorBox = Box<dyn Evaluator>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    struct TestEvaluator;

    impl Evaluator for TestEvaluator {
        fn name(&self) -> &'static str {
            "test_rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn family(&self) -> &'static str {
            "Testing"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, _doc: &Document, _config: &StyleConfig) -> Vec<Finding> {
            vec![Finding::new(
                self.code(),
                self.name(),
                self.family(),
                self.default_severity(),
                Location::new(1),
                "test finding",
            )]
        }
    }

    #[test]
    fn evaluator_trait_defaults() {
        let evaluator = TestEvaluator;
        assert_eq!(evaluator.name(), "test_rule");
        assert_eq!(evaluator.code(), "TEST001");
        assert_eq!(evaluator.default_severity(), Severity::Warning);
    }
}
