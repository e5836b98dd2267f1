//! # tulip-lint-core
//!
//! Core framework for linting exported low-code app bundles.
//!
//! This crate provides the foundational model, traits, and types for
//! building bundle diagnostics. It includes:
//!
//! - [`Document`] and its records, with explicit defaults for every
//!   optional attribute
//! - [`resolve`] for joining steps and widgets to the triggers they reference
//! - [`Rule`] trait for independent diagnostic rules
//! - [`Analyzer`] for running an ordered rule set
//! - [`bundle`] for decoding JSON, ZIP, and `.tar.gz` uploads and merging them
//!
//! ## Example
//!
//! ```ignore
//! use tulip_lint_core::{bundle, Analyzer};
//!
//! let fragments = bundle::read_bundle("export.tar.gz".as_ref())?;
//! let document = bundle::merge(fragments);
//!
//! let analyzer = Analyzer::builder().rule(MyRule).build();
//! let report = analyzer.analyze(&document);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod model;
mod resolver;
mod rule;
mod types;

pub mod bundle;

pub use analyzer::{Analyzer, AnalyzerBuilder};
pub use config::{Config, ConfigError, InputConfig, RuleConfig};
pub use context::AnalysisContext;
pub use model::{
    Action, Clause, Document, Event, Extra, Step, Trigger, Variable, Widget, ACTION_COMPLETE_APP,
    ACTION_GO_TO_APP, ACTION_GO_TO_STEP, ACTION_SAVE_APP, DEFAULT_WIDGET_TYPE, UNKNOWN_EVENT,
    UNNAMED_STEP, UNNAMED_TRIGGER, UNNAMED_WIDGET,
};
pub use resolver::{resolve, ResolvedTrigger, TriggerIndex, STEP_ATTACHMENT};
pub use rule::{Rule, RuleBox, DEFAULT_PASS_MESSAGE};
pub use types::{AnalysisReport, RuleResult, Status};
