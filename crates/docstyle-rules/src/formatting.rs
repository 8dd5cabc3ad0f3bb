//! Formatting rules: inline styles, quote characters, list markers.

use docstyle_core::{Document, Evaluator, Finding, Location, Severity, StyleConfig, Suggestion};

/// Flags discouraged CSS properties in inline `style=` attributes.
#[derive(Debug, Clone, Default)]
pub struct InlineStyles;

impl InlineStyles {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for InlineStyles {
    fn name(&self) -> &'static str {
        "inline_styles"
    }

    fn code(&self) -> &'static str {
        "DS501"
    }

    fn family(&self) -> &'static str {
        "Formatting"
    }

    fn description(&self) -> &'static str {
        "Inline style attributes should not override defaults"
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let mut findings = Vec::new();
        for line in doc.lines() {
            if line.context.preformatted || !line.raw.contains("style=") {
                continue;
            }
            for property in &config.formatting.discouraged_inline_styles {
                if line.raw.contains(property.as_str()) {
                    findings.push(
                        Finding::new(
                            self.code(),
                            self.name(),
                            self.family(),
                            self.default_severity(),
                            Location::new(line.number),
                            format!("discouraged inline style found: '{property}'"),
                        )
                        .with_suggestion(Suggestion::new(
                            "remove inline styles and use default formatting",
                        )),
                    );
                }
            }
        }
        findings
    }
}

/// Flags smart quotes and lone single quotes where straight double
/// quotes are required.
///
/// A right single quote between letters is an apostrophe and passes.
#[derive(Debug, Clone, Default)]
pub struct QuoteStyle;

impl QuoteStyle {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn has_offending_quote(text: &str) -> Option<char> {
    let chars: Vec<char> = text.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        match c {
            '\u{201C}' | '\u{201D}' | '\u{2018}' => return Some(c),
            '\u{2019}' => {
                let between_letters = i > 0
                    && chars[i - 1].is_alphanumeric()
                    && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
                if !between_letters {
                    return Some(c);
                }
            }
            _ => {}
        }
    }
    None
}

impl Evaluator for QuoteStyle {
    fn name(&self) -> &'static str {
        "quote_style"
    }

    fn code(&self) -> &'static str {
        "DS502"
    }

    fn family(&self) -> &'static str {
        "Formatting"
    }

    fn description(&self) -> &'static str {
        "Quotations use straight double quotes"
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        if !config.formatting.smart_quote_check {
            return Vec::new();
        }
        let mut findings = Vec::new();
        for line in doc.prose_lines() {
            if let Some(quote) = has_offending_quote(&line.prose) {
                findings.push(
                    Finding::new(
                        self.code(),
                        self.name(),
                        self.family(),
                        self.default_severity(),
                        Location::new(line.number),
                        format!("smart or single quote found: '{quote}'"),
                    )
                    .with_suggestion(Suggestion::new(
                        "use straight double quotes (\")",
                    )),
                );
            }
        }
        findings
    }
}

/// Suggests numbered lists when a bulleted run reads like sequential
/// steps.
#[derive(Debug, Clone, Default)]
pub struct ListMarkers;

impl ListMarkers {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_bullet_line(raw: &str) -> bool {
    let trimmed = raw.trim_start();
    trimmed.starts_with("- ")
        || trimmed.starts_with("* ")
        || trimmed.starts_with("\u{2022} ")
        || trimmed.starts_with("<li>")
}

impl Evaluator for ListMarkers {
    fn name(&self) -> &'static str {
        "list_markers"
    }

    fn code(&self) -> &'static str {
        "DS503"
    }

    fn family(&self) -> &'static str {
        "Formatting"
    }

    fn description(&self) -> &'static str {
        "Sequential steps belong in numbered lists"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let keywords = &config.formatting.sequence_keywords;
        if keywords.is_empty() {
            return Vec::new();
        }

        let mut findings = Vec::new();
        let lines = doc.lines();
        let mut i = 0;
        while i < lines.len() {
            if lines[i].context.preformatted || !is_bullet_line(&lines[i].raw) {
                i += 1;
                continue;
            }
            let start = i;
            let mut sequential = false;
            while i < lines.len()
                && !lines[i].context.preformatted
                && is_bullet_line(&lines[i].raw)
            {
                let text = lines[i].prose.to_lowercase();
                if keywords
                    .iter()
                    .any(|k| crate::clarity::contains_word(&text, k))
                {
                    sequential = true;
                }
                i += 1;
            }
            let run_len = i - start;
            if run_len >= 2 && sequential {
                findings.push(
                    Finding::new(
                        self.code(),
                        self.name(),
                        self.family(),
                        self.default_severity(),
                        Location::new(lines[start].number),
                        "bulleted list appears to describe sequential steps",
                    )
                    .with_suggestion(Suggestion::new(
                        "use a numbered list for sequential steps",
                    )),
                );
            }
        }
        findings
    }
}
