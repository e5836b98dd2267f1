//! # tulip-lint
//!
//! Static diagnostics for exported Tulip app bundles.
//!
//! This is the facade crate that re-exports the core model and analyzer
//! together with the built-in rules.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let document = tulip_lint::bundle::merge(tulip_lint::bundle::read_bundle(path)?);
//!
//! for result in tulip_lint::analyze(&document) {
//!     println!("{}: {}", result.name, result.status);
//! }
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use tulip_lint::{Analyzer, Config};
//! use tulip_lint::rules::all_rules;
//!
//! let mut config = Config::default();
//! config.disable_rule("unused-variables");
//!
//! let analyzer = Analyzer::builder().rules(all_rules()).config(config).build();
//! let report = analyzer.analyze(&document);
//! ```

#![forbid(unsafe_code)]

use std::path::Path;

// Re-export core types and traits
pub use tulip_lint_core::*;

/// Built-in rules.
pub mod rules {
    pub use tulip_lint_rules::*;
}

/// Builds an analyzer running every built-in rule under `config`.
#[must_use]
pub fn analyzer(config: Config) -> Analyzer {
    Analyzer::builder()
        .rules(tulip_lint_rules::all_rules())
        .config(config)
        .build()
}

/// Runs all ten built-in rules over a document.
///
/// Always returns one result per rule, in rule order.
#[must_use]
pub fn analyze(document: &Document) -> Vec<RuleResult> {
    analyzer(Config::default()).analyze(document).results
}

/// Reads, decodes, and merges bundle files, then analyzes the result.
///
/// # Errors
///
/// Returns the first [`bundle::DecodeError`] raised while reading a path.
pub fn analyze_files<P>(paths: &[P], config: Config) -> Result<AnalysisReport, bundle::DecodeError>
where
    P: AsRef<Path>,
{
    let mut fragments = Vec::new();
    for path in paths {
        fragments.extend(bundle::read_bundle(path.as_ref())?);
    }
    let document = bundle::merge(fragments);
    Ok(analyzer(config).analyze(&document))
}
