//! Grammar and voice heuristics.
//!
//! These are lightweight pattern checks, not a grammatical parse; false
//! positives are an accepted tradeoff, so none of them defaults to an
//! error severity.

use docstyle_core::{Document, Evaluator, Finding, Location, Severity, StyleConfig, Suggestion};
use regex::Regex;
use std::sync::OnceLock;

/// Normalizes typographic apostrophes so configured terms match.
fn normalize(line: &str) -> String {
    line.to_lowercase().replace('\u{2019}', "'")
}

/// Flags contractions and suggests the full form.
#[derive(Debug, Clone, Default)]
pub struct Contractions;

impl Contractions {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for Contractions {
    fn name(&self) -> &'static str {
        "avoid_contractions"
    }

    fn code(&self) -> &'static str {
        "DS101"
    }

    fn family(&self) -> &'static str {
        "Writing Standards"
    }

    fn description(&self) -> &'static str {
        "Contractions should be written in full"
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let mut findings = Vec::new();
        for line in doc.prose_lines() {
            let text = normalize(&line.prose);
            for (contraction, expansion) in &config.grammar.contractions {
                if text.contains(&contraction.to_lowercase()) {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            self.default_severity(),
                            Location::new(line.number),
                            format!("contraction found: '{contraction}'"),
                        )
                        .with_suggestion(Suggestion::with_replacement(
                            "use the full form",
                            expansion.clone(),
                        )),
                    );
                }
            }
        }
        findings
    }
}

/// Flags likely passive-voice constructions.
///
/// Two signals: configured indicator phrases, and an auxiliary+participle
/// pattern used only when no indicator matched the line.
#[derive(Debug, Clone, Default)]
pub struct PassiveVoice;

impl PassiveVoice {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn participle_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(?:is|are|was|were|been|being)\s+(\w+ed)\b").ok())
        .as_ref()
}

impl Evaluator for PassiveVoice {
    fn name(&self) -> &'static str {
        "active_voice"
    }

    fn code(&self) -> &'static str {
        "DS102"
    }

    fn family(&self) -> &'static str {
        "Writing Standards"
    }

    fn description(&self) -> &'static str {
        "Prefers active voice over passive constructions"
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        // The regex fallback only applies when indicators are configured at
        // all, so an empty grammar section disables the rule entirely.
        if config.grammar.passive_indicators.is_empty() {
            return Vec::new();
        }

        let suggestion = Suggestion::new(
            "rewrite in active voice so the subject performs the action",
        );
        let mut findings = Vec::new();
        for line in doc.prose_lines() {
            let text = normalize(&line.prose);
            let mut matched = false;
            for indicator in &config.grammar.passive_indicators {
                if text.contains(&indicator.to_lowercase()) {
                    matched = true;
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            self.default_severity(),
                            Location::new(line.number),
                            format!("passive voice detected: '{indicator}'"),
                        )
                        .with_suggestion(suggestion.clone()),
                    );
                }
            }
            if !matched {
                if let Some(re) = participle_re() {
                    if let Some(m) = re.find(&text) {
                        findings.push(
                            Finding::new(
                                self.code(),
                                self.name(),
                                self.family(),
                                self.default_severity(),
                                Location::new(line.number),
                                format!("passive voice detected: '{}'", m.as_str()),
                            )
                            .with_suggestion(suggestion.clone()),
                        );
                    }
                }
            }
        }
        findings
    }
}

/// Flags third-person references where direct address is expected.
#[derive(Debug, Clone, Default)]
pub struct DirectAddress;

impl DirectAddress {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for DirectAddress {
    fn name(&self) -> &'static str {
        "direct_address"
    }

    fn code(&self) -> &'static str {
        "DS103"
    }

    fn family(&self) -> &'static str {
        "Writing Standards"
    }

    fn description(&self) -> &'static str {
        "Addresses the reader directly as 'you'"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let mut findings = Vec::new();
        for line in doc.prose_lines() {
            let text = normalize(&line.prose);
            for reference in &config.grammar.third_person_refs {
                if text.contains(&reference.to_lowercase()) {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            self.default_severity(),
                            Location::new(line.number),
                            format!("third-person reference: '{reference}'"),
                        )
                        .with_suggestion(Suggestion::new(
                            "use 'you' to address the reader directly",
                        )),
                    );
                }
            }
        }
        findings
    }
}

/// Flags language attributing human behavior to systems.
#[derive(Debug, Clone, Default)]
pub struct Anthropomorphism;

impl Anthropomorphism {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for Anthropomorphism {
    fn name(&self) -> &'static str {
        "avoid_anthropomorphism"
    }

    fn code(&self) -> &'static str {
        "DS104"
    }

    fn family(&self) -> &'static str {
        "Writing Standards"
    }

    fn description(&self) -> &'static str {
        "Systems should not be described with human intent"
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let mut findings = Vec::new();
        for line in doc.prose_lines() {
            let text = normalize(&line.prose);
            for phrase in &config.grammar.anthropomorphic_phrases {
                if text.contains(&phrase.to_lowercase()) {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            self.default_severity(),
                            Location::new(line.number),
                            format!("anthropomorphic language: '{phrase}'"),
                        )
                        .with_suggestion(Suggestion::new(
                            "describe the process or requirement instead of attributing intent to the system",
                        )),
                    );
                }
            }
        }
        findings
    }
}
