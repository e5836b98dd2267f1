//! Check command implementation.

use anyhow::{bail, Result};
use std::path::PathBuf;
use tulip_lint_core::bundle::{self, DecodeError};
use tulip_lint_core::{Analyzer, Document, RuleBox};
use tulip_lint_rules::{all_rules, select_rules};

use super::discover;
use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Exit status when an input cannot be decoded.
const EXIT_DECODE_ERROR: i32 = 2;

/// Runs the check command.
pub fn run(
    paths: &[PathBuf],
    format: OutputFormat,
    rules_filter: Option<&str>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let mut config = source.load()?;
    config.input.exclude.extend(exclude);

    let inputs = discover::collect(paths, &config.input)?;
    if inputs.is_empty() {
        bail!("No bundle files (.json, .zip, .tar.gz, .tgz) found");
    }

    let document = match read_inputs(&inputs) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(EXIT_DECODE_ERROR);
        }
    };

    let rules = match rules_filter {
        Some(filter) => filter_rules(filter),
        None => all_rules(),
    };

    let analyzer = Analyzer::builder().rules(rules).config(config).build();

    tracing::info!(
        "Analyzing {} input(s) with {} rules",
        inputs.len(),
        analyzer.rule_count()
    );

    let report = analyzer.analyze(&document);

    super::output::print(&report, format)?;

    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}

/// Decodes every input in order and merges the fragments.
fn read_inputs(inputs: &[PathBuf]) -> Result<Document, DecodeError> {
    let mut fragments = Vec::new();
    for path in inputs {
        fragments.extend(bundle::read_bundle(path)?);
    }
    Ok(bundle::merge(fragments))
}

fn filter_rules(filter: &str) -> Vec<RuleBox> {
    let names: Vec<&str> = filter
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .collect();

    let (rules, unknown) = select_rules(&names);
    for name in unknown {
        tracing::warn!("Unknown rule: {}", name);
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn filter_accepts_ids_and_codes() {
        let rules = filter_rules("unused-variables, TL001,,bogus");
        let codes: Vec<&str> = rules.iter().map(|r| r.code()).collect();
        assert_eq!(codes, ["TL001", "TL010"]);
    }

    #[test]
    fn read_inputs_merges_in_order() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.json");
        let b = tmp.path().join("b.json");
        fs::write(&a, r#"{"steps":[{"_id":"s1"}]}"#).unwrap();
        fs::write(&b, r#"{"steps":[{"_id":"s2"}]}"#).unwrap();

        let document = read_inputs(&[b, a]).unwrap();
        let ids: Vec<&str> = document
            .steps
            .iter()
            .filter_map(|s| s.id.as_deref())
            .collect();
        assert_eq!(ids, ["s2", "s1"]);
    }

    #[test]
    fn read_inputs_stops_at_first_bad_input() {
        let tmp = TempDir::new().unwrap();
        let bad = tmp.path().join("bad.json");
        fs::write(&bad, "[").unwrap();

        let err = read_inputs(&[bad]).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidJson(_)));
    }
}
