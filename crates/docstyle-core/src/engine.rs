//! Engine orchestrating rule evaluation and finding aggregation.

use crate::config::StyleConfig;
use crate::document::Document;
use crate::evaluator::{Evaluator, EvaluatorBox};
use crate::types::{Finding, Location, Report, Severity};

use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while checking documents.
#[derive(Debug, Error)]
pub enum EngineError {
    /// IO error reading an input file.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Invalid glob pattern in configuration or CLI arguments.
    #[error("invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),
}

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    config: Option<StyleConfig>,
    evaluators: Vec<EvaluatorBox>,
    exclude_patterns: Vec<String>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: StyleConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Adds an evaluator to the engine.
    #[must_use]
    pub fn evaluator<E: Evaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluators.push(Box::new(evaluator));
        self
    }

    /// Adds a boxed evaluator to the engine.
    #[must_use]
    pub fn evaluator_box(mut self, evaluator: EvaluatorBox) -> Self {
        self.evaluators.push(evaluator);
        self
    }

    /// Adds multiple boxed evaluators to the engine.
    #[must_use]
    pub fn evaluators<I>(mut self, evaluators: I) -> Self
    where
        I: IntoIterator<Item = EvaluatorBox>,
    {
        self.evaluators.extend(evaluators);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Builds the engine.
    ///
    /// Exclusion globs from both the builder and the configuration are
    /// compiled once here. Unknown rule names in `[rules.*]` become Info
    /// configuration notices attached to every report.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclusion glob fails to compile.
    pub fn build(self) -> Result<Engine, EngineError> {
        let config = self.config.unwrap_or_default();

        let mut patterns = self.exclude_patterns;
        patterns.extend(config.files.exclude.iter().cloned());
        let exclude = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let known: HashSet<&str> = self.evaluators.iter().map(|e| e.name()).collect();
        let notices: Vec<Finding> = config
            .rules
            .keys()
            .filter(|name| !known.contains(name.as_str()))
            .map(|name| {
                warn!("unknown rule in configuration: {name}");
                Finding::new(
                    "DS902",
                    "unknown_rule",
                    "Configuration",
                    Severity::Info,
                    Location::new(1),
                    format!("configuration references unknown rule '{name}'"),
                )
            })
            .collect();

        Ok(Engine {
            config,
            evaluators: self.evaluators,
            exclude,
            notices,
        })
    }
}

/// The engine that runs all evaluators over documents and aggregates
/// their findings into a [`Report`].
///
/// Use [`Engine::builder()`] to construct an instance. The engine holds
/// no mutable state; documents are evaluated independently.
pub struct Engine {
    config: StyleConfig,
    evaluators: Vec<EvaluatorBox>,
    exclude: Vec<glob::Pattern>,
    notices: Vec<Finding>,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the number of registered evaluators.
    #[must_use]
    pub fn evaluator_count(&self) -> usize {
        self.evaluators.len()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Configuration notices produced at build time (unknown rule names).
    #[must_use]
    pub fn config_notices(&self) -> &[Finding] {
        &self.notices
    }

    /// Checks pasted or in-memory content.
    ///
    /// With `file = None` the report's locations degrade to line-only.
    #[must_use]
    pub fn check_content(&self, content: &str, file: Option<&Path>) -> Report {
        let mut findings = self.evaluate_document(content, file);
        findings.extend(self.notices_for(file));
        self.aggregate(findings, usize::from(file.is_some()))
    }

    /// Checks a single file.
    ///
    /// A path matching an exclusion glob yields an empty passing report
    /// without reading the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn check_file(&self, path: &Path) -> Result<Report, EngineError> {
        if self.should_exclude(path) {
            debug!("excluding {}", path.display());
            return Ok(Report::new(Vec::new(), 0, self.config.fail_on()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| EngineError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(self.check_content(&content, Some(path)))
    }

    /// Checks several files and aggregates them into one report.
    ///
    /// Excluded files contribute zero findings and are not counted.
    ///
    /// # Errors
    ///
    /// Returns an error if any non-excluded file cannot be read.
    pub fn check_paths(&self, paths: &[PathBuf]) -> Result<Report, EngineError> {
        info!(
            "checking {} path(s) with {} evaluator(s)",
            paths.len(),
            self.evaluators.len()
        );

        let mut findings = Vec::new();
        let mut files_checked = 0usize;

        for path in paths {
            if self.should_exclude(path) {
                debug!("excluding {}", path.display());
                continue;
            }
            let content = std::fs::read_to_string(path).map_err(|e| EngineError::Read {
                path: path.clone(),
                source: e,
            })?;
            findings.extend(self.evaluate_document(&content, Some(path)));
            files_checked += 1;
        }

        findings.extend(self.notices_for(None));
        let report = self.aggregate(findings, files_checked);
        info!(
            "found {} finding(s) in {} file(s)",
            report.summary.total(),
            files_checked
        );
        Ok(report)
    }

    /// Discovers documents under `root` using the configured include
    /// globs, honoring `.gitignore` when configured, and dropping
    /// exclusions. The result is sorted for deterministic reports.
    #[must_use]
    pub fn discover(&self, root: &Path) -> Vec<PathBuf> {
        let include: Vec<glob::Pattern> = self
            .config
            .files
            .include
            .iter()
            .filter_map(|p| glob::Pattern::new(p).ok())
            .collect();

        let respect_gitignore = self.config.files.respect_gitignore;
        let walker = ignore::WalkBuilder::new(root)
            .git_ignore(respect_gitignore)
            .git_global(respect_gitignore)
            .git_exclude(respect_gitignore)
            .build();

        let mut files = Vec::new();
        for entry in walker.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(root).unwrap_or(path);
            if !include.is_empty() && !include.iter().any(|p| matches_include(p, relative)) {
                continue;
            }
            if self.should_exclude(path) {
                debug!("excluding {}", path.display());
                continue;
            }
            files.push(path.to_path_buf());
        }

        files.sort();
        files
    }

    /// Runs every enabled evaluator over one document.
    ///
    /// Each evaluator is isolated: a panic inside one becomes a single
    /// Info finding naming the rule family, and the remaining evaluators
    /// still run.
    fn evaluate_document(&self, content: &str, file: Option<&Path>) -> Vec<Finding> {
        let mut doc = Document::parse(content);
        if let Some(path) = file {
            doc = doc.with_source(path);
        }
        if doc.is_degraded() {
            debug!("document degraded to plain-text analysis");
        }

        let mut findings = Vec::new();
        for evaluator in &self.evaluators {
            if !self.config.is_rule_enabled(evaluator.name()) {
                debug!("skipping disabled rule: {}", evaluator.name());
                continue;
            }

            let outcome = catch_unwind(AssertUnwindSafe(|| evaluator.check(&doc, &self.config)));
            let mut produced = match outcome {
                Ok(produced) => produced,
                Err(_) => {
                    warn!(
                        "evaluator '{}' ({}) failed; continuing with remaining rules",
                        evaluator.name(),
                        evaluator.family()
                    );
                    vec![Finding::new(
                        "DS901",
                        "evaluator_fault",
                        evaluator.family(),
                        Severity::Info,
                        Location::new(1),
                        format!(
                            "rule family '{}' could not be fully analyzed; remaining checks were unaffected",
                            evaluator.family()
                        ),
                    )]
                }
            };

            if let Some(severity) = self.config.rule_severity(evaluator.name()) {
                for finding in &mut produced {
                    finding.severity = severity;
                }
            }
            findings.extend(produced);
        }

        if let Some(path) = file {
            for finding in &mut findings {
                finding.location.file = Some(path.to_path_buf());
            }
        }
        findings
    }

    /// Aggregates raw findings: defensive dedup, deterministic sort,
    /// severity counts.
    fn aggregate(&self, findings: Vec<Finding>, files_checked: usize) -> Report {
        let mut seen = HashSet::new();
        let mut findings: Vec<Finding> = findings
            .into_iter()
            .filter(|f| seen.insert(f.dedup_key()))
            .collect();

        findings.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then_with(|| b.severity.cmp(&a.severity))
                .then_with(|| a.location.line.cmp(&b.location.line))
                .then_with(|| a.rule.cmp(&b.rule))
        });

        Report::new(findings, files_checked, self.config.fail_on())
    }

    fn notices_for(&self, file: Option<&Path>) -> Vec<Finding> {
        self.notices
            .iter()
            .cloned()
            .map(|mut n| {
                n.location.file = file.map(Path::to_path_buf);
                n
            })
            .collect()
    }

    /// Checks if a path matches a configured exclusion glob.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        for pattern in &self.exclude {
            if pattern.matches(&path_str) {
                return true;
            }
            // Also check as substring for patterns like "**/drafts/**".
            let normalized = pattern.as_str().replace("**", "");
            if !normalized.is_empty() && normalized != "/" && path_str.contains(&normalized) {
                return true;
            }
        }
        false
    }
}

/// Matches an include glob against a relative path, treating a leading
/// `**/` as optional so `**/*.xml` also matches top-level files.
fn matches_include(pattern: &glob::Pattern, relative: &Path) -> bool {
    if pattern.matches_path(relative) {
        return true;
    }
    if let Some(rest) = pattern.as_str().strip_prefix("**/") {
        if let Ok(suffix) = glob::Pattern::new(rest) {
            return suffix.matches_path(relative)
                || relative
                    .file_name()
                    .is_some_and(|name| suffix.matches_path(Path::new(name)));
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedFinding {
        severity: Severity,
        line: usize,
    }

    impl Evaluator for FixedFinding {
        fn name(&self) -> &'static str {
            "fixed_finding"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn family(&self) -> &'static str {
            "Testing"
        }
        fn check(&self, _doc: &Document, _config: &StyleConfig) -> Vec<Finding> {
            vec![Finding::new(
                self.code(),
                self.name(),
                self.family(),
                self.severity,
                Location::new(self.line),
                "fixed finding",
            )]
        }
    }

    struct Panicking;

    impl Evaluator for Panicking {
        fn name(&self) -> &'static str {
            "panicking"
        }
        fn code(&self) -> &'static str {
            "TEST002"
        }
        fn family(&self) -> &'static str {
            "Broken Family"
        }
        fn check(&self, _doc: &Document, _config: &StyleConfig) -> Vec<Finding> {
            panic!("internal fault")
        }
    }

    fn engine_with(evaluators: Vec<EvaluatorBox>, config: StyleConfig) -> Engine {
        let mut builder = Engine::builder().config(config);
        for evaluator in evaluators {
            builder = builder.evaluator_box(evaluator);
        }
        builder.build().expect("engine should build")
    }

    #[test]
    fn no_evaluators_yields_empty_passing_report() {
        let engine = engine_with(Vec::new(), StyleConfig::empty());
        let report = engine.check_content("any content", None);
        assert!(report.findings.is_empty());
        assert!(report.is_passing());
    }

    #[test]
    fn findings_are_sorted_severity_first() {
        let engine = engine_with(
            vec![
                Box::new(FixedFinding {
                    severity: Severity::Info,
                    line: 1,
                }),
                Box::new(FixedFinding {
                    severity: Severity::Error,
                    line: 5,
                }),
            ],
            StyleConfig::empty(),
        );
        let report = engine.check_content("line", None);
        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.findings[0].severity, Severity::Error);
        assert_eq!(report.findings[1].severity, Severity::Info);
    }

    #[test]
    fn identical_findings_are_deduplicated() {
        let engine = engine_with(
            vec![
                Box::new(FixedFinding {
                    severity: Severity::Warning,
                    line: 2,
                }),
                Box::new(FixedFinding {
                    severity: Severity::Warning,
                    line: 2,
                }),
            ],
            StyleConfig::empty(),
        );
        let report = engine.check_content("line", None);
        assert_eq!(report.findings.len(), 1);
    }

    #[test]
    fn panicking_evaluator_is_isolated() {
        let engine = engine_with(
            vec![
                Box::new(Panicking),
                Box::new(FixedFinding {
                    severity: Severity::Warning,
                    line: 1,
                }),
            ],
            StyleConfig::empty(),
        );
        let report = engine.check_content("line", None);
        let rules: Vec<&str> = report.findings.iter().map(|f| f.rule.as_str()).collect();
        assert!(rules.contains(&"evaluator_fault"));
        assert!(rules.contains(&"fixed_finding"));
        let fault = report
            .findings
            .iter()
            .find(|f| f.rule == "evaluator_fault")
            .expect("fault finding present");
        assert_eq!(fault.severity, Severity::Info);
        assert!(fault.message.contains("Broken Family"));
    }

    #[test]
    fn disabled_rule_is_skipped() {
        let mut config = StyleConfig::empty();
        config.rules.insert(
            "fixed_finding".to_string(),
            crate::config::RuleOverride {
                enabled: Some(false),
                severity: None,
            },
        );
        let engine = engine_with(
            vec![Box::new(FixedFinding {
                severity: Severity::Error,
                line: 1,
            })],
            config,
        );
        let report = engine.check_content("line", None);
        assert!(report.findings.is_empty());
    }

    #[test]
    fn severity_override_rewrites_findings() {
        let mut config = StyleConfig::empty();
        config.rules.insert(
            "fixed_finding".to_string(),
            crate::config::RuleOverride {
                enabled: None,
                severity: Some(Severity::Info),
            },
        );
        let engine = engine_with(
            vec![Box::new(FixedFinding {
                severity: Severity::Error,
                line: 1,
            })],
            config,
        );
        let report = engine.check_content("line", None);
        assert_eq!(report.findings[0].severity, Severity::Info);
        assert!(report.is_passing());
    }

    #[test]
    fn unknown_rule_names_produce_config_notice() {
        let mut config = StyleConfig::empty();
        config
            .rules
            .insert("no_such_rule".to_string(), crate::config::RuleOverride::default());
        let engine = engine_with(Vec::new(), config);
        assert_eq!(engine.config_notices().len(), 1);
        let report = engine.check_content("line", None);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].rule, "unknown_rule");
        assert_eq!(report.findings[0].severity, Severity::Info);
    }

    #[test]
    fn excluded_file_yields_empty_report() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("draft.xml");
        std::fs::write(&path, "the cluster thinks it don't work").expect("write");

        let engine = Engine::builder()
            .config(StyleConfig::empty())
            .evaluator(FixedFinding {
                severity: Severity::Error,
                line: 1,
            })
            .exclude("**/draft.xml")
            .build()
            .expect("engine should build");

        let report = engine.check_file(&path).expect("check should succeed");
        assert!(report.findings.is_empty());
        assert_eq!(report.files_checked, 0);
        assert!(report.is_passing());
    }

    #[test]
    fn check_file_attaches_path_to_findings() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "content").expect("write");

        let engine = engine_with(
            vec![Box::new(FixedFinding {
                severity: Severity::Warning,
                line: 1,
            })],
            StyleConfig::empty(),
        );
        let report = engine.check_file(&path).expect("check should succeed");
        assert_eq!(report.findings[0].location.file.as_deref(), Some(path.as_path()));
        assert_eq!(report.files_checked, 1);
    }

    #[test]
    fn repeated_evaluation_is_deterministic() {
        let engine = engine_with(
            vec![
                Box::new(FixedFinding {
                    severity: Severity::Warning,
                    line: 3,
                }),
                Box::new(FixedFinding {
                    severity: Severity::Error,
                    line: 1,
                }),
            ],
            StyleConfig::empty(),
        );
        let first = engine.check_content("a\nb\nc", None);
        let second = engine.check_content("a\nb\nc", None);
        let render = |r: &Report| {
            r.findings
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(render(&first), render(&second));
    }
}
