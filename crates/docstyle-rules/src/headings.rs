//! Heading capitalization rule.

use docstyle_core::{Document, Evaluator, Finding, Location, Severity, StyleConfig, Suggestion};

/// Flags Title-Case headings and suggests sentence case.
///
/// Heuristic: a heading of three or more words where at least two words
/// after the first are capitalized ordinary words is treated as title
/// case. Acronyms and configured proper nouns keep their casing in the
/// suggested rewrite.
#[derive(Debug, Clone, Default)]
pub struct HeadingCase;

impl HeadingCase {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for HeadingCase {
    fn name(&self) -> &'static str {
        "heading_case"
    }

    fn code(&self) -> &'static str {
        "DS003"
    }

    fn family(&self) -> &'static str {
        "Document Structure"
    }

    fn description(&self) -> &'static str {
        "Headings should use sentence case"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        if !config.structure.sentence_case_headings {
            return Vec::new();
        }
        let mut findings = Vec::new();
        for line in doc.headings() {
            let Some(heading) = line.heading_text() else {
                continue;
            };
            if !looks_title_cased(&heading, &config.terminology.proper_nouns) {
                continue;
            }
            let rewritten = sentence_case(&heading, &config.terminology.proper_nouns);
            findings.push(
                Finding::new(
                    self.code(),
                    self.name(),
                    self.family(),
                    self.default_severity(),
                    Location::new(line.number),
                    format!("heading appears to be in title case: '{heading}'"),
                )
                .with_suggestion(Suggestion::with_replacement(
                    "use sentence case in headings",
                    rewritten,
                )),
            );
        }
        findings
    }
}

/// An ordinary capitalized word: leading uppercase, rest lowercase.
fn is_capitalized_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|c| c.is_lowercase() || !c.is_alphabetic()),
        _ => false,
    }
}

/// An acronym keeps its casing: two or more characters, all uppercase.
fn is_acronym(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() >= 2
        && word.chars().all(|c| c.is_uppercase() || !c.is_alphabetic())
}

fn is_proper_noun(word: &str, proper_nouns: &[String]) -> bool {
    let cleaned = word.trim_matches(|c: char| !c.is_alphanumeric());
    proper_nouns.iter().any(|n| n == cleaned)
}

fn looks_title_cased(heading: &str, proper_nouns: &[String]) -> bool {
    let words: Vec<&str> = heading.split_whitespace().collect();
    if words.len() < 3 {
        return false;
    }
    let title_cased = words
        .iter()
        .skip(1)
        .filter(|w| {
            is_capitalized_word(w) && !is_acronym(w) && !is_proper_noun(w, proper_nouns)
        })
        .count();
    title_cased >= 2
}

fn sentence_case(heading: &str, proper_nouns: &[String]) -> String {
    heading
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 || is_acronym(word) || is_proper_noun(word, proper_nouns) {
                word.to_string()
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str, config: &StyleConfig) -> Vec<Finding> {
        HeadingCase::new().check(&Document::parse(content), config)
    }

    #[test]
    fn title_case_heading_gets_sentence_case_suggestion() {
        let findings = check("<h1>How To Configure The Node</h1>", &StyleConfig::default());
        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.rule, "heading_case");
        assert_eq!(finding.severity, Severity::Warning);
        assert_eq!(finding.location.line, 1);
        let suggestion = finding.suggestion.as_ref().expect("suggestion present");
        assert_eq!(
            suggestion.replacement.as_deref(),
            Some("How to configure the node")
        );
    }

    #[test]
    fn sentence_case_heading_passes() {
        assert!(check("<h1>How to configure the node</h1>", &StyleConfig::default()).is_empty());
    }

    #[test]
    fn acronyms_do_not_trigger_or_lose_casing() {
        // "API" and "SSH" keep casing; remaining words decide the verdict.
        let findings = check("<h2>Using The API Over SSH</h2>", &StyleConfig::default());
        assert_eq!(findings.len(), 1);
        let suggestion = findings[0].suggestion.as_ref().expect("suggestion present");
        assert_eq!(suggestion.replacement.as_deref(), Some("Using the API over SSH"));
    }

    #[test]
    fn proper_nouns_keep_their_casing() {
        let mut config = StyleConfig::empty();
        config.terminology.proper_nouns = vec!["Phoenix".to_string()];
        let findings = check("<h2>How To Boot Phoenix Images</h2>", &config);
        assert_eq!(findings.len(), 1);
        let suggestion = findings[0].suggestion.as_ref().expect("suggestion present");
        assert_eq!(
            suggestion.replacement.as_deref(),
            Some("How to boot Phoenix images")
        );
    }

    #[test]
    fn short_headings_are_ignored() {
        assert!(check("<h1>Install Guide</h1>", &StyleConfig::default()).is_empty());
    }

    #[test]
    fn markdown_headings_are_checked_too() {
        let findings = check("## Configure The Cluster Settings", &StyleConfig::default());
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn non_heading_lines_are_ignored() {
        assert!(check("<p>This Paragraph Uses Odd Casing Everywhere</p>", &StyleConfig::default())
            .is_empty());
    }
}
