//! # docstyle-core
//!
//! Core framework for documentation style linting.
//!
//! This crate provides the foundational types and machinery for checking
//! XML/HTML/plain-text documentation against a configurable style guide:
//!
//! - [`Document`] — tolerant line-indexed normalization of raw content
//! - [`Evaluator`] trait for independent per-document rules
//! - [`Engine`] for orchestrating evaluation and aggregating findings
//! - [`Finding`] and [`Report`] for representing results
//!
//! ## Example
//!
//! ```ignore
//! use docstyle_core::{Engine, StyleConfig};
//!
//! let engine = Engine::builder()
//!     .config(StyleConfig::default())
//!     .evaluators(docstyle_rules::all_evaluators())
//!     .build()?;
//!
//! let report = engine.check_content("<h1>Overview</h1>", None);
//! print!("{}", report.render_text());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod document;
mod engine;
mod evaluator;
mod report;
mod types;

pub use config::{
    ClarityConfig, ConfigError, FilesConfig, FormattingConfig, GrammarConfig, PiiConfig,
    RuleOverride, StructureConfig, StyleConfig, TechnicalConfig, TerminologyConfig, TrainingConfig,
};
pub use document::{CalloutKind, Document, Line, LineContext};
pub use engine::{Engine, EngineBuilder, EngineError};
pub use evaluator::{Evaluator, EvaluatorBox};
pub use types::{Finding, Location, Report, Severity, Suggestion, Summary};
