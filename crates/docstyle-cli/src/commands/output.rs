//! Shared output formatting for check results.

use anyhow::Result;
use docstyle_core::{Report, Severity};

use crate::OutputFormat;

/// Print a report in the specified format.
pub fn print(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
    }
}

fn print_text(report: &Report) {
    for severity in [Severity::Error, Severity::Warning, Severity::Info] {
        let group = report.by_severity(severity);
        if group.is_empty() {
            continue;
        }
        println!("{}s ({}):", severity_indicator(severity), group.len());
        for finding in group {
            println!(
                "  {} [{}] {}: {}",
                finding.location.display(),
                finding.code,
                finding.rule,
                finding.message,
            );
            if let Some(suggestion) = &finding.suggestion {
                println!("    = help: {}", suggestion.message);
                if let Some(replacement) = &suggestion.replacement {
                    println!("    = try: {replacement}");
                }
            }
        }
        println!();
    }

    let summary = report.summary;
    let summary_color = if summary.errors > 0 {
        "\x1b[31m"
    } else if summary.warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, summary.errors, summary.warnings, summary.infos, report.files_checked
    );
}

fn print_json(report: &Report) -> Result<()> {
    let json = report.to_json()?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &Report) {
    print!("{}", report.render_compact());
}
