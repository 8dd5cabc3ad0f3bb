//! Language clarity rules: vague terms, complexity density, and
//! ability-neutral phrasing.

use docstyle_core::{Document, Evaluator, Finding, Location, Severity, StyleConfig, Suggestion};

/// Whole-word, case-insensitive containment.
pub(crate) fn contains_word(text: &str, word: &str) -> bool {
    let text = text.to_lowercase();
    let word = word.to_lowercase();
    let mut start = 0;
    while let Some(pos) = text[start..].find(&word) {
        let begin = start + pos;
        let end = begin + word.len();
        let before_ok = begin == 0
            || !text[..begin]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let after_ok = end == text.len()
            || !text[end..].chars().next().is_some_and(char::is_alphanumeric);
        if before_ok && after_ok {
            return true;
        }
        start = end;
    }
    false
}

/// Flags vague or inflated terms, suggesting the preferred replacement.
#[derive(Debug, Clone, Default)]
pub struct VagueTerms;

impl VagueTerms {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for VagueTerms {
    fn name(&self) -> &'static str {
        "vague_terms"
    }

    fn code(&self) -> &'static str {
        "DS106"
    }

    fn family(&self) -> &'static str {
        "Writing Standards"
    }

    fn description(&self) -> &'static str {
        "Prefers specific, direct terms"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let mut findings = Vec::new();
        for line in doc.prose_lines() {
            for (term, preferred) in &config.clarity.vague_terms {
                if contains_word(&line.prose, term) {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            self.default_severity(),
                            Location::new(line.number),
                            format!("consider a more specific term than '{term}'"),
                        )
                        .with_suggestion(Suggestion::with_replacement(
                            "use more direct language",
                            preferred.clone(),
                        )),
                    );
                }
            }
        }
        findings
    }
}

/// Document-wide complexity check: too many inflated terms overall.
#[derive(Debug, Clone, Default)]
pub struct LanguageComplexity;

impl LanguageComplexity {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for LanguageComplexity {
    fn name(&self) -> &'static str {
        "language_clarity"
    }

    fn code(&self) -> &'static str {
        "DS105"
    }

    fn family(&self) -> &'static str {
        "Writing Standards"
    }

    fn description(&self) -> &'static str {
        "Limits the density of complex terms across a document"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let max = config.clarity.max_complexity_hits;
        if max == 0 || config.clarity.complexity_terms.is_empty() {
            return Vec::new();
        }

        let mut hits = 0usize;
        for line in doc.prose_lines() {
            let text = line.prose.to_lowercase();
            for term in &config.clarity.complexity_terms {
                hits += text.matches(&term.to_lowercase()).count();
            }
        }
        if hits <= max {
            return Vec::new();
        }
        vec![Finding::new(
            self.code(),
            self.name(),
            self.family(),
            self.default_severity(),
            Location::new(1),
            format!("high use of complex terms ({hits} instances)"),
        )
        .with_suggestion(Suggestion::new(
            "prefer simpler wording, e.g. 'use' instead of 'utilize'",
        ))]
    }
}

/// Flags phrasing that assumes specific reader abilities.
#[derive(Debug, Clone, Default)]
pub struct AbilityNeutral;

impl AbilityNeutral {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for AbilityNeutral {
    fn name(&self) -> &'static str {
        "ability_neutral"
    }

    fn code(&self) -> &'static str {
        "DS107"
    }

    fn family(&self) -> &'static str {
        "Content Quality"
    }

    fn description(&self) -> &'static str {
        "Prefers ability-neutral phrasing"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let mut findings = Vec::new();
        for line in doc.prose_lines() {
            let text = line.prose.to_lowercase();
            for (term, neutral) in &config.clarity.ability_terms {
                if text.contains(&term.to_lowercase()) {
                    let message =
                        format!("consider an ability-neutral alternative to '{term}'");
                    let suggestion = if neutral.is_empty() {
                        Suggestion::new("use language that does not assume specific abilities")
                    } else {
                        Suggestion::with_replacement(
                            "use language that does not assume specific abilities",
                            neutral.clone(),
                        )
                    };
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            self.default_severity(),
                            Location::new(line.number),
                            message,
                        )
                        .with_suggestion(suggestion),
                    );
                }
            }
        }
        findings
    }
}
