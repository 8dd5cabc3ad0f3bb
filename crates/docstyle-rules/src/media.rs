//! Link and image rules.
//!
//! Heuristic text checks only; these do not audit rendered accessibility.

use docstyle_core::{Document, Evaluator, Finding, Location, StyleConfig, Suggestion};

/// Flags non-descriptive link text on lines that carry links.
#[derive(Debug, Clone, Default)]
pub struct LinkText;

impl LinkText {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for LinkText {
    fn name(&self) -> &'static str {
        "link_text"
    }

    fn code(&self) -> &'static str {
        "DS505"
    }

    fn family(&self) -> &'static str {
        "Content Quality"
    }

    fn description(&self) -> &'static str {
        "Link text should describe the destination"
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let mut findings = Vec::new();
        for line in doc.lines() {
            if line.context.preformatted {
                continue;
            }
            let has_link = line.raw.contains("<a ") || line.raw.contains("href=");
            if !has_link {
                continue;
            }
            let text = line.prose.to_lowercase();
            for phrase in &config.formatting.link_text_phrases {
                let phrase = phrase.to_lowercase();
                if text.contains(&phrase) {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            self.default_severity(),
                            Location::new(line.number),
                            format!("non-descriptive link text: '{phrase}'"),
                        )
                        .with_suggestion(Suggestion::new(
                            "use link text that explains what the link leads to",
                        )),
                    );
                }
            }
        }
        findings
    }
}

/// Flags `<img>` tags without an `alt` attribute, at the image's line.
#[derive(Debug, Clone, Default)]
pub struct ImageAltText;

impl ImageAltText {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for ImageAltText {
    fn name(&self) -> &'static str {
        "image_alt_text"
    }

    fn code(&self) -> &'static str {
        "DS506"
    }

    fn family(&self) -> &'static str {
        "Content Quality"
    }

    fn description(&self) -> &'static str {
        "Images carry descriptive alt text"
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        if !config.formatting.require_image_alt {
            return Vec::new();
        }
        let mut findings = Vec::new();
        for line in doc.lines() {
            if line.context.preformatted {
                continue;
            }
            let lower = line.raw.to_lowercase();
            let mut search = 0;
            while let Some(pos) = lower[search..].find("<img") {
                let start = search + pos;
                let end = lower[start..]
                    .find('>')
                    .map_or(lower.len(), |e| start + e + 1);
                if !lower[start..end].contains("alt=") {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            self.default_severity(),
                            Location::new(line.number),
                            "image missing alt text",
                        )
                        .with_suggestion(Suggestion::new(
                            "add descriptive alt text to every image",
                        )),
                    );
                }
                search = end;
            }
        }
        findings
    }
}
