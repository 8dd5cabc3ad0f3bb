//! PII protection rule.
//!
//! Flags content shaped like real IP addresses or email addresses.
//! Preformatted/code regions are exempt, masked addresses pass, and
//! configured email domains are allowed.

use docstyle_core::{Document, Evaluator, Finding, Location, Severity, StyleConfig, Suggestion};
use regex::Regex;
use std::sync::OnceLock;

fn ip_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").ok())
        .as_ref()
}

fn email_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@([A-Za-z0-9.-]+\.[A-Za-z]{2,})\b").ok())
        .as_ref()
}

/// Flags possible personally identifiable information.
#[derive(Debug, Clone, Default)]
pub struct PiiMarkers;

impl PiiMarkers {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn domain_allowed(domain: &str, allowed: &[String]) -> bool {
        allowed.iter().any(|d| {
            domain.eq_ignore_ascii_case(d)
                || domain.to_lowercase().ends_with(&format!(".{}", d.to_lowercase()))
        })
    }
}

impl Evaluator for PiiMarkers {
    fn name(&self) -> &'static str {
        "pii_markers"
    }

    fn code(&self) -> &'static str {
        "DS401"
    }

    fn family(&self) -> &'static str {
        "Training Standards"
    }

    fn description(&self) -> &'static str {
        "Content must not expose real IP or email addresses"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, doc: &Document, config: &StyleConfig) -> Vec<Finding> {
        let pii = &config.pii;
        let mut findings = Vec::new();

        for line in doc.lines() {
            // Code and preformatted regions are designated exempt areas.
            if line.context.preformatted {
                continue;
            }

            if pii.check_ip_addresses {
                let masked =
                    !pii.ip_mask_marker.is_empty() && line.raw.contains(&pii.ip_mask_marker);
                if !masked {
                    if let Some(re) = ip_re() {
                        if re.is_match(&line.raw) {
                            findings.push(
                                Finding::new(
                                    self.code(),
                                    self.name(),
                                    self.family(),
                                    self.default_severity(),
                                    Location::new(line.number),
                                    "possible real IP address found",
                                )
                                .with_suggestion(Suggestion::new(
                                    "replace with a masked address such as 'x.x.x.123'",
                                )),
                            );
                        }
                    }
                }
            }

            if pii.check_email_addresses {
                if let Some(re) = email_re() {
                    for captures in re.captures_iter(&line.raw) {
                        let domain = captures.get(1).map_or("", |m| m.as_str());
                        if Self::domain_allowed(domain, &pii.allowed_email_domains) {
                            continue;
                        }
                        findings.push(
                            Finding::new(
                                self.code(),
                                self.name(),
                                self.family(),
                                self.default_severity(),
                                Location::new(line.number),
                                "possible email address found",
                            )
                            .with_suggestion(Suggestion::new(
                                "remove personal email addresses or use generic examples",
                            )),
                        );
                        break;
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

    fn check(content: &str, config: &StyleConfig) -> Vec<Finding> {
        PiiMarkers::new().check(&Document::parse(content), config)
    }

    #[test]
    fn real_ip_address_is_error() {
        let findings = check("Connect to 10.1.20.30 over SSH.", &StyleConfig::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
        assert_eq!(findings[0].location.line, 1);
    }

    #[test]
    fn masked_ip_address_passes() {
        let findings = check("Connect to x.x.x.30 over SSH.", &StyleConfig::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn ip_inside_code_region_is_exempt() {
        let findings = check(
            "<pre>\nssh admin@10.1.20.30\n</pre>",
            &StyleConfig::default(),
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn ip_outside_code_region_is_still_flagged() {
        let content = "Connect to 10.1.20.30 now.\n<pre>\nssh 10.1.20.30\n</pre>";
        let findings = check(content, &StyleConfig::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].location.line, 1);
    }

    #[test]
    fn email_address_is_error() {
        let findings = check("Contact jane.doe@somewhere.net for access.", &StyleConfig::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn allowed_domain_passes() {
        let findings = check("Contact support@example.com for access.", &StyleConfig::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn allowed_domain_covers_subdomains() {
        let findings = check("Contact support@help.example.com today.", &StyleConfig::default());
        assert!(findings.is_empty());
    }

    #[test]
    fn empty_config_disables_pii_checks() {
        let findings = check("Contact jane@somewhere.net at 10.0.0.1.", &StyleConfig::empty());
        assert!(findings.is_empty());
    }
}
