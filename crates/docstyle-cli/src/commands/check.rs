//! Check command implementation.

use anyhow::{Context, Result};
use docstyle_core::{Engine, EvaluatorBox, Report, StyleConfig};
use docstyle_rules::{all_evaluators, evaluator_by_name};
use std::io::Read;
use std::path::{Path, PathBuf};

use super::output;
use crate::{OutputFormat, SeverityFilter};

/// Runs the check command.
pub fn run(
    paths: &[PathBuf],
    format: OutputFormat,
    min_severity: SeverityFilter,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    stdin: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path);

    let evaluators = if let Some(filter) = rules_filter {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_evaluators(&names)
    } else {
        all_evaluators()
    };

    let mut builder = Engine::builder().config(config).evaluators(evaluators);
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }
    let engine = builder.build().context("Failed to build engine")?;

    tracing::debug!("checking with {} rules", engine.evaluator_count());

    let report = produce_report(&engine, paths, stdin)?;
    let report = report.filter(min_severity.to_severity());

    output::print(&report, format)?;

    // Exit with error code if blocking findings remain after filtering
    if !report.is_passing() {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads configuration, falling back to built-in defaults.
///
/// A malformed config file is reported once and does not abort the run:
/// some checking beats no checking.
fn load_config(explicit: Option<&Path>) -> StyleConfig {
    let source = crate::config_resolver::resolve(Path::new("."), explicit);
    match source.path() {
        Some(path) => {
            if source.is_global() {
                tracing::debug!("using global config: {}", path.display());
            }
            match StyleConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("{e}; continuing with built-in defaults");
                    StyleConfig::default()
                }
            }
        }
        None => StyleConfig::default(),
    }
}

fn produce_report(engine: &Engine, paths: &[PathBuf], stdin: bool) -> Result<Report> {
    let paste_requested = stdin || (paths.len() == 1 && paths[0] == Path::new("-"));
    if paste_requested {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        return Ok(engine.check_content(&content, None));
    }

    let paths = if paths.is_empty() {
        engine.discover(Path::new("."))
    } else {
        paths.to_vec()
    };
    engine.check_paths(&paths).context("Check failed")
}

fn filter_evaluators(names: &[&str]) -> Vec<EvaluatorBox> {
    let mut evaluators = Vec::new();
    for name in names {
        match evaluator_by_name(name) {
            Some(evaluator) => evaluators.push(evaluator),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }
    evaluators
}
