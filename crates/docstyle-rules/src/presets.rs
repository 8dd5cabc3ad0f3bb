//! Evaluator presets.
//!
//! The rule set is fixed and enumerable: configuration selects from these
//! evaluators by name, it never dispatches to arbitrary code.

use crate::{
    AbilityNeutral, Anthropomorphism, CalloutBalance, CodeBlockStyle, Contractions, DirectAddress,
    HeadingCase, ImageAltText, InclusiveLanguage, InlineStyles, KbReferenceFormat,
    LanguageComplexity, LinkText, ListMarkers, ModuleNaming, NegativeTerms, PassiveVoice,
    PiiMarkers, ProductNames, QuoteStyle, RequiredSections, TocPresence, TrainingSections,
    VagueTerms, VersionFormat,
};
use docstyle_core::EvaluatorBox;

/// Returns every built-in evaluator.
///
/// All evaluators are data-driven: with `StyleConfig::empty()` none of
/// them produces a finding, so running the full set is always safe.
#[must_use]
pub fn all_evaluators() -> Vec<EvaluatorBox> {
    vec![
        Box::new(RequiredSections::new()),
        Box::new(TocPresence::new()),
        Box::new(HeadingCase::new()),
        Box::new(Contractions::new()),
        Box::new(PassiveVoice::new()),
        Box::new(DirectAddress::new()),
        Box::new(Anthropomorphism::new()),
        Box::new(LanguageComplexity::new()),
        Box::new(VagueTerms::new()),
        Box::new(AbilityNeutral::new()),
        Box::new(InclusiveLanguage::new()),
        Box::new(NegativeTerms::new()),
        Box::new(ProductNames::new()),
        Box::new(KbReferenceFormat::new()),
        Box::new(VersionFormat::new()),
        Box::new(PiiMarkers::new()),
        Box::new(InlineStyles::new()),
        Box::new(QuoteStyle::new()),
        Box::new(ListMarkers::new()),
        Box::new(CalloutBalance::new()),
        Box::new(LinkText::new()),
        Box::new(ImageAltText::new()),
        Box::new(ModuleNaming::new()),
        Box::new(TrainingSections::new()),
        Box::new(CodeBlockStyle::new()),
    ]
}

/// Returns the evaluator matching a rule name or code, if any.
#[must_use]
pub fn evaluator_by_name(name: &str) -> Option<EvaluatorBox> {
    all_evaluators()
        .into_iter()
        .find(|e| e.name() == name || e.code() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_evaluators_have_unique_names_and_codes() {
        let evaluators = all_evaluators();
        let names: HashSet<&str> = evaluators.iter().map(|e| e.name()).collect();
        let codes: HashSet<&str> = evaluators.iter().map(|e| e.code()).collect();
        assert_eq!(names.len(), evaluators.len());
        assert_eq!(codes.len(), evaluators.len());
    }

    #[test]
    fn lookup_by_name_and_code() {
        assert!(evaluator_by_name("heading_case").is_some());
        assert!(evaluator_by_name("DS003").is_some());
        assert!(evaluator_by_name("no_such_rule").is_none());
    }

    #[test]
    fn empty_config_silences_every_evaluator() {
        let config = docstyle_core::StyleConfig::empty();
        let doc = docstyle_core::Document::parse(concat!(
            "<h1>How To Break Everything Badly</h1>\n",
            "The cluster thinks it don't work at 10.0.0.1.\n",
            "<a href=\"/x\">click here</a> and <img src=\"a.png\">\n",
            "Contact a@b.net, see KB1 in version 1.2.",
        ));
        for evaluator in all_evaluators() {
            assert!(
                evaluator.check(&doc, &config).is_empty(),
                "{} produced findings on empty config",
                evaluator.name()
            );
        }
    }
}
