//! Training module rules: file naming, section completeness, and code
//! block tagging.

use docstyle_core::{Document, Evaluator, Finding, Location, Severity, StyleConfig, Suggestion};
use regex::Regex;

/// Validates the module file name against the configured pattern.
///
/// Skipped for pasted content (no file name). An invalid configured
/// pattern degrades to a single informational finding instead of a
/// failure.
#[derive(Debug, Clone, Default)]
pub struct ModuleNaming;

impl ModuleNaming {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for ModuleNaming {
    fn name(&self) -> &'static str {
        "module_naming"
    }

    fn code(&self) -> &'static str {
        "DS601"
    }

    fn family(&self) -> &'static str {
        "Training Standards"
    }

    fn description(&self) -> &'static str {
        "Module file names follow the configured convention"
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let Some(pattern) = &config.training.module_name_pattern else {
            return Vec::new();
        };
        let Some(stem) = doc
            .source()
            .and_then(|p| p.file_stem())
            .and_then(|s| s.to_str())
        else {
            return Vec::new();
        };

        let Ok(re) = Regex::new(pattern) else {
            return vec![Finding::new(
                self.code(),
                self.name(),
                self.family(),
                Severity::Info,
                Location::new(1),
                format!("configured module_name_pattern is not a valid regex: '{pattern}'"),
            )];
        };

        if re.is_match(stem) {
            return Vec::new();
        }
        vec![Finding::new(
            self.code(),
            self.name(),
            self.family(),
            self.default_severity(),
            Location::new(1),
            format!("module file name '{stem}' does not match the naming convention"),
        )
        .with_suggestion(Suggestion::new(format!(
            "rename the file to match '{pattern}'"
        )))]
    }
}

/// Checks training modules for recommended sections.
///
/// Section titles often live in macro parameters rather than headings,
/// so this check matches anywhere in the document text.
#[derive(Debug, Clone, Default)]
pub struct TrainingSections;

impl TrainingSections {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for TrainingSections {
    fn name(&self) -> &'static str {
        "training_sections"
    }

    fn code(&self) -> &'static str {
        "DS602"
    }

    fn family(&self) -> &'static str {
        "Training Standards"
    }

    fn description(&self) -> &'static str {
        "Training modules carry the recommended sections"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        if config.training.required_sections.is_empty() {
            return Vec::new();
        }
        let content: String = doc
            .lines()
            .iter()
            .map(|l| l.raw.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        let mut findings = Vec::new();
        for section in &config.training.required_sections {
            if !content.contains(&section.to_lowercase()) {
                findings.push(
                    Finding::new(
                        self.code(),
                        self.name(),
                        self.family(),
                        self.default_severity(),
                        Location::new(1),
                        format!("training module missing recommended section: '{section}'"),
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "add a '{section}' section for complete training coverage"
                    ))),
                );
            }
        }
        findings
    }
}

/// Flags long fenced code blocks that do not declare a language.
#[derive(Debug, Clone, Default)]
pub struct CodeBlockStyle;

impl CodeBlockStyle {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for CodeBlockStyle {
    fn name(&self) -> &'static str {
        "code_block_style"
    }

    fn code(&self) -> &'static str {
        "DS603"
    }

    fn family(&self) -> &'static str {
        "Training Standards"
    }

    fn description(&self) -> &'static str {
        "Long code blocks declare a language for highlighting"
    }

    fn default_severity(&self) -> Severity {
        Severity::Info
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let max = config.training.max_code_block_lines;
        if max == 0 {
            return Vec::new();
        }

        let mut findings = Vec::new();
        let lines = doc.lines();
        let mut open: Option<(usize, bool)> = None; // (fence line index, has language)
        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.raw.trim();
            if !trimmed.starts_with("```") {
                continue;
            }
            match open.take() {
                None => {
                    let info = trimmed.trim_start_matches('`').trim();
                    open = Some((i, !info.is_empty()));
                }
                Some((start, has_language)) => {
                    let body_lines = i - start - 1;
                    if body_lines > max && !has_language {
                        findings.push(
                            Finding::new(
                                self.code(),
                                self.name(),
                                self.family(),
                                self.default_severity(),
                                Location::new(lines[start].number),
                                format!("code block with {body_lines} lines has no language tag"),
                            )
                            .with_suggestion(Suggestion::new(
                                "declare a language on the opening fence for syntax highlighting",
                            )),
                        );
                    }
                }
            }
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn module_name_violation_is_flagged() {
        let mut config = StyleConfig::empty();
        config.training.module_name_pattern = Some("^[a-z0-9-]+$".to_string());
        let doc = Document::parse("content").with_source(Path::new("Module One.xml"));
        let findings = ModuleNaming::new().check(&doc, &config);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("Module One"));
    }

    #[test]
    fn matching_module_name_passes() {
        let mut config = StyleConfig::empty();
        config.training.module_name_pattern = Some("^[a-z0-9-]+$".to_string());
        let doc = Document::parse("content").with_source(Path::new("install-guide.xml"));
        assert!(ModuleNaming::new().check(&doc, &config).is_empty());
    }

    #[test]
    fn pasted_content_skips_module_naming() {
        let mut config = StyleConfig::empty();
        config.training.module_name_pattern = Some("^[a-z0-9-]+$".to_string());
        let doc = Document::parse("content");
        assert!(ModuleNaming::new().check(&doc, &config).is_empty());
    }

    #[test]
    fn invalid_pattern_degrades_to_info() {
        let mut config = StyleConfig::empty();
        config.training.module_name_pattern = Some("([unclosed".to_string());
        let doc = Document::parse("content").with_source(Path::new("doc.xml"));
        let findings = ModuleNaming::new().check(&doc, &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
    }

    #[test]
    fn missing_training_section_is_info() {
        let mut config = StyleConfig::empty();
        config.training.required_sections = vec!["What You Will Learn".to_string()];
        let doc = Document::parse("<h1>Overview</h1>\n<p>Body.</p>");
        let findings = TrainingSections::new().check(&doc, &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
    }

    #[test]
    fn section_in_macro_parameter_counts() {
        let mut config = StyleConfig::empty();
        config.training.required_sections = vec!["What You Will Learn".to_string()];
        let doc = Document::parse(
            "<ac:parameter ac:name=\"title\">What You Will Learn</ac:parameter>",
        );
        assert!(TrainingSections::new().check(&doc, &config).is_empty());
    }

    #[test]
    fn long_untagged_code_block_is_flagged() {
        let mut config = StyleConfig::empty();
        config.training.max_code_block_lines = 3;
        let body = (0..5).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let content = format!("```\n{body}\n```");
        let doc = Document::parse(&content);
        let findings = CodeBlockStyle::new().check(&doc, &config);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].location.line, 1);
    }

    #[test]
    fn tagged_code_block_passes() {
        let mut config = StyleConfig::empty();
        config.training.max_code_block_lines = 3;
        let body = (0..5).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let content = format!("```bash\n{body}\n```");
        let doc = Document::parse(&content);
        assert!(CodeBlockStyle::new().check(&doc, &config).is_empty());
    }

    #[test]
    fn short_code_block_passes() {
        let mut config = StyleConfig::empty();
        config.training.max_code_block_lines = 10;
        let doc = Document::parse("```\necho ok\n```");
        assert!(CodeBlockStyle::new().check(&doc, &config).is_empty());
    }
}
