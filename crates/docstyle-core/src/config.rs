//! Configuration types for docstyle.
//!
//! The rule data that the original style guide kept inline (term lists,
//! thresholds, section names) is first-class configuration here. A missing
//! config file is not an error: `StyleConfig::default()` carries the
//! documented built-in rule data, and `StyleConfig::empty()` disables
//! every data-driven check.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration for docstyle.
///
/// Loaded once per invocation and read-only thereafter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Severity threshold for a blocking report (default: error).
    pub fail_on: Option<Severity>,

    /// Document discovery configuration.
    pub files: FilesConfig,

    /// Document structure checks.
    pub structure: StructureConfig,

    /// Grammar and voice heuristics.
    pub grammar: GrammarConfig,

    /// Language clarity checks.
    pub clarity: ClarityConfig,

    /// Terminology checks.
    pub terminology: TerminologyConfig,

    /// Technical content checks.
    pub technical: TechnicalConfig,

    /// PII protection checks.
    pub pii: PiiConfig,

    /// Formatting checks.
    pub formatting: FormattingConfig,

    /// Training module checks.
    pub training: TrainingConfig,

    /// Per-rule overrides, keyed by rule id (e.g. "heading_case").
    pub rules: BTreeMap<String, RuleOverride>,
}

impl StyleConfig {
    /// Creates the default configuration with built-in rule data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with zero rule data defined.
    ///
    /// Evaluating any document against it yields zero findings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            fail_on: None,
            files: FilesConfig::default(),
            structure: StructureConfig {
                required_sections: Vec::new(),
                recommended_sections: Vec::new(),
                toc_min_lines: 0,
                sentence_case_headings: false,
            },
            grammar: GrammarConfig {
                contractions: BTreeMap::new(),
                passive_indicators: Vec::new(),
                third_person_refs: Vec::new(),
                anthropomorphic_phrases: Vec::new(),
            },
            clarity: ClarityConfig {
                vague_terms: BTreeMap::new(),
                complexity_terms: Vec::new(),
                max_complexity_hits: 0,
                ability_terms: BTreeMap::new(),
            },
            terminology: TerminologyConfig {
                non_inclusive: BTreeMap::new(),
                negative_terms: BTreeMap::new(),
                proper_nouns: Vec::new(),
            },
            technical: TechnicalConfig {
                kb_min_digits: 0,
                require_version_triplet: false,
            },
            pii: PiiConfig {
                check_ip_addresses: false,
                check_email_addresses: false,
                allowed_email_domains: Vec::new(),
                ip_mask_marker: String::new(),
            },
            formatting: FormattingConfig {
                discouraged_inline_styles: Vec::new(),
                smart_quote_check: false,
                sequence_keywords: Vec::new(),
                link_text_phrases: Vec::new(),
                require_image_alt: false,
            },
            training: TrainingConfig {
                module_name_pattern: None,
                required_sections: Vec::new(),
                max_code_block_lines: 0,
                max_warning_callouts: 0,
            },
            rules: BTreeMap::new(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the severity threshold for a blocking report.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule: &str) -> bool {
        self.rules
            .get(rule)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule, if any.
    #[must_use]
    pub fn rule_severity(&self, rule: &str) -> Option<Severity> {
        self.rules.get(rule).and_then(|c| c.severity)
    }
}

/// Document discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Glob patterns for documents to check.
    pub include: Vec<String>,
    /// Glob patterns to exclude entirely from evaluation.
    pub exclude: Vec<String>,
    /// Whether discovery respects .gitignore files.
    pub respect_gitignore: bool,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            include: vec![
                "**/*.xml".to_string(),
                "**/*.html".to_string(),
                "**/*.htm".to_string(),
                "**/*.txt".to_string(),
                "**/*.md".to_string(),
            ],
            exclude: Vec::new(),
            respect_gitignore: true,
        }
    }
}

/// Document structure configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    /// Section headings that must be present (missing: error).
    pub required_sections: Vec<String>,
    /// Section headings that should be present (missing: info).
    pub recommended_sections: Vec<String>,
    /// Documents longer than this many lines should carry a table of
    /// contents. Zero disables the check.
    pub toc_min_lines: usize,
    /// Whether headings are checked for sentence case.
    pub sentence_case_headings: bool,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            required_sections: vec!["Overview".to_string()],
            recommended_sections: vec![
                "Prerequisites".to_string(),
                "Troubleshooting".to_string(),
            ],
            toc_min_lines: 50,
            sentence_case_headings: true,
        }
    }
}

/// Grammar and voice heuristics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
    /// Contractions mapped to their full forms.
    pub contractions: BTreeMap<String, String>,
    /// Fixed phrases that indicate passive voice.
    pub passive_indicators: Vec<String>,
    /// Third-person references that should be direct address.
    pub third_person_refs: Vec<String>,
    /// Phrases attributing human behavior to systems.
    pub anthropomorphic_phrases: Vec<String>,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        let contractions = [
            ("won't", "will not"),
            ("don't", "do not"),
            ("can't", "cannot"),
            ("shouldn't", "should not"),
            ("couldn't", "could not"),
            ("wouldn't", "would not"),
            ("isn't", "is not"),
            ("aren't", "are not"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            contractions,
            passive_indicators: [
                "is set",
                "are set",
                "was set",
                "were set",
                "is monitored",
                "are monitored",
                "is performed",
                "are performed",
                "is created",
                "are created",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            third_person_refs: [
                "the end user",
                "the user",
                "the customer",
                "users can",
                "customers can",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            anthropomorphic_phrases: [
                "cluster thinks",
                "cluster needs",
                "cluster searches",
                "system wants",
                "software decides",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Language clarity configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClarityConfig {
    /// Vague or inflated terms mapped to preferred replacements.
    pub vague_terms: BTreeMap<String, String>,
    /// Terms counted for the document-wide complexity check.
    pub complexity_terms: Vec<String>,
    /// Complexity-term hits above this count trigger a finding.
    /// Zero disables the check.
    pub max_complexity_hits: usize,
    /// Ability-assuming phrases mapped to neutral alternatives
    /// (empty replacement means "remove").
    pub ability_terms: BTreeMap<String, String>,
}

impl Default for ClarityConfig {
    fn default() -> Self {
        let vague_terms = [("utilize", "use"), ("facilitate", "help"), ("leverage", "use")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let ability_terms = [
            ("see the image", "the image shows"),
            ("look at", "refer to"),
            ("as you can see", "as shown"),
            ("obviously", ""),
            ("clearly", ""),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            vague_terms,
            complexity_terms: [
                "utilize",
                "facilitate",
                "implement",
                "comprehensive",
                "substantial",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            max_complexity_hits: 10,
            ability_terms,
        }
    }
}

/// Terminology configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminologyConfig {
    /// Non-inclusive terms mapped to replacements.
    pub non_inclusive: BTreeMap<String, String>,
    /// Negative terms mapped to neutral replacements.
    pub negative_terms: BTreeMap<String, String>,
    /// Product names with canonical casing.
    pub proper_nouns: Vec<String>,
}

impl Default for TerminologyConfig {
    fn default() -> Self {
        let non_inclusive = [
            ("master/slave", "primary/secondary"),
            ("blacklist", "deny list"),
            ("whitelist", "allow list"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        let negative_terms = [
            ("bug", "issue"),
            ("crash", "failure"),
            ("panic", "halt"),
            ("stuck", "no progress"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            non_inclusive,
            negative_terms,
            proper_nouns: vec!["Phoenix".to_string()],
        }
    }
}

/// Technical content configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalConfig {
    /// Minimum digit count for a well-formed KB reference.
    /// Zero disables the check.
    pub kb_min_digits: usize,
    /// Whether two-part version numbers should be flagged.
    pub require_version_triplet: bool,
}

impl Default for TechnicalConfig {
    fn default() -> Self {
        Self {
            kb_min_digits: 4,
            require_version_triplet: true,
        }
    }
}

/// PII protection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PiiConfig {
    /// Whether to flag IP-address-shaped content.
    pub check_ip_addresses: bool,
    /// Whether to flag email-address-shaped content.
    pub check_email_addresses: bool,
    /// Email domains exempt from the PII check.
    pub allowed_email_domains: Vec<String>,
    /// Prefix marking a masked IP address (e.g. "x.x.x.").
    pub ip_mask_marker: String,
}

impl Default for PiiConfig {
    fn default() -> Self {
        Self {
            check_ip_addresses: true,
            check_email_addresses: true,
            allowed_email_domains: vec!["example.com".to_string()],
            ip_mask_marker: "x.x.x.".to_string(),
        }
    }
}

/// Formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// CSS properties that are discouraged in inline style attributes.
    pub discouraged_inline_styles: Vec<String>,
    /// Whether smart/single quotes are flagged.
    pub smart_quote_check: bool,
    /// Keywords suggesting a bulleted list describes sequential steps.
    pub sequence_keywords: Vec<String>,
    /// Non-descriptive link phrases flagged on lines carrying links.
    pub link_text_phrases: Vec<String>,
    /// Whether images must carry an alt attribute.
    pub require_image_alt: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            discouraged_inline_styles: [
                "font-family",
                "font-size",
                "color",
                "background-color",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            smart_quote_check: true,
            sequence_keywords: ["first", "then", "next", "finally", "after that"]
                .into_iter()
                .map(String::from)
                .collect(),
            link_text_phrases: ["click here", "read more", "see here", "this link"]
                .into_iter()
                .map(String::from)
                .collect(),
            require_image_alt: true,
        }
    }
}

/// Training module configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Regex the module file name (without extension) must match.
    pub module_name_pattern: Option<String>,
    /// Sections a training module should contain.
    pub required_sections: Vec<String>,
    /// Fenced code blocks longer than this must declare a language.
    /// Zero disables the check.
    pub max_code_block_lines: usize,
    /// Warning callouts above this count trigger a finding.
    /// Zero disables the check.
    pub max_warning_callouts: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            module_name_pattern: None,
            required_sections: vec!["What You Will Learn".to_string(), "Summary".to_string()],
            max_code_block_lines: 10,
            max_warning_callouts: 5,
        }
    }
}

/// Per-rule override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleOverride {
    /// Whether this rule runs at all.
    pub enabled: Option<bool>,
    /// Severity override applied to every finding the rule produces.
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
