//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# docstyle configuration
# Any section or field left out keeps its built-in default.

# Severity that makes a report blocking (error | warning | info)
# fail_on = "error"

[files]
# Documents to check and patterns to skip entirely
include = ["**/*.xml", "**/*.html", "**/*.htm", "**/*.txt", "**/*.md"]
exclude = ["**/drafts/**"]
respect_gitignore = true

[structure]
required_sections = ["Overview"]
recommended_sections = ["Prerequisites", "Troubleshooting"]
toc_min_lines = 50
sentence_case_headings = true

[terminology]
proper_nouns = ["Phoenix"]

# [terminology.non_inclusive]
# "blacklist" = "deny list"

[technical]
kb_min_digits = 4
require_version_triplet = true

[pii]
check_ip_addresses = true
check_email_addresses = true
allowed_email_domains = ["example.com"]

[training]
# module_name_pattern = "^[a-z0-9-]+$"
max_code_block_lines = 10
max_warning_callouts = 5

# Per-rule overrides
# Each rule can be disabled or have its severity changed

[rules.heading_case]
enabled = true
# severity = "info"

# [rules.version_format]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("docstyle.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created docstyle.toml");
    println!("\nNext steps:");
    println!("  1. Edit docstyle.toml to configure rules");
    println!("  2. Run: docstyle check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_template_parses() {
        let config =
            docstyle_core::StyleConfig::parse(DEFAULT_CONFIG).expect("template should parse");
        assert_eq!(config.structure.required_sections, vec!["Overview"]);
        assert!(config.is_rule_enabled("heading_case"));
    }
}
