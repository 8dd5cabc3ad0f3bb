//! # docstyle-rules
//!
//! Built-in style rules for docstyle.
//!
//! Every rule is a pure [`Evaluator`] over a normalized document and the
//! loaded configuration. Rules are data-driven: their term lists,
//! thresholds, and patterns come from `StyleConfig`, and an empty
//! configuration silences all of them.
//!
//! ## Available rules
//!
//! | Code  | Name | Family | Default severity |
//! |-------|------|--------|------------------|
//! | DS001 | `required_sections` | Document Structure | error / info |
//! | DS002 | `toc_presence` | Document Structure | info |
//! | DS003 | `heading_case` | Document Structure | warning |
//! | DS101 | `avoid_contractions` | Writing Standards | warning |
//! | DS102 | `active_voice` | Writing Standards | warning |
//! | DS103 | `direct_address` | Writing Standards | info |
//! | DS104 | `avoid_anthropomorphism` | Writing Standards | warning |
//! | DS105 | `language_clarity` | Writing Standards | info |
//! | DS106 | `vague_terms` | Writing Standards | info |
//! | DS107 | `ability_neutral` | Content Quality | info |
//! | DS201 | `inclusive_language` | Content Quality | error |
//! | DS202 | `avoid_negative_terms` | Content Quality | warning |
//! | DS203 | `product_names` | Content Quality | info / warning |
//! | DS301 | `kb_reference_format` | Technical Content | info / warning |
//! | DS302 | `version_format` | Technical Content | info |
//! | DS401 | `pii_markers` | Training Standards | error |
//! | DS501 | `inline_styles` | Formatting | warning |
//! | DS502 | `quote_style` | Formatting | warning |
//! | DS503 | `list_markers` | Formatting | info |
//! | DS504 | `callout_balance` | Content Organization | info |
//! | DS505 | `link_text` | Content Quality | warning |
//! | DS506 | `image_alt_text` | Content Quality | warning |
//! | DS601 | `module_naming` | Training Standards | warning |
//! | DS602 | `training_sections` | Training Standards | info |
//! | DS603 | `code_block_style` | Training Standards | info |
//!
//! ## Usage
//!
//! ```ignore
//! use docstyle_core::{Engine, StyleConfig};
//! use docstyle_rules::all_evaluators;
//!
//! let engine = Engine::builder()
//!     .config(StyleConfig::default())
//!     .evaluators(all_evaluators())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod callouts;
mod clarity;
mod formatting;
mod grammar;
mod headings;
mod media;
mod pii;
mod presets;
mod structure;
mod technical;
mod terminology;
mod training;

pub use callouts::CalloutBalance;
pub use clarity::{AbilityNeutral, LanguageComplexity, VagueTerms};
pub use formatting::{InlineStyles, ListMarkers, QuoteStyle};
pub use grammar::{Anthropomorphism, Contractions, DirectAddress, PassiveVoice};
pub use headings::HeadingCase;
pub use media::{ImageAltText, LinkText};
pub use pii::PiiMarkers;
pub use presets::{all_evaluators, evaluator_by_name};
pub use structure::{RequiredSections, TocPresence};
pub use technical::{KbReferenceFormat, VersionFormat};
pub use terminology::{InclusiveLanguage, NegativeTerms, ProductNames};
pub use training::{CodeBlockStyle, ModuleNaming, TrainingSections};

/// Re-export core types for convenience.
pub use docstyle_core::{Evaluator, Finding, Severity};
