//! Core analyzer for orchestrating rule execution.

use crate::config::Config;
use crate::context::AnalysisContext;
use crate::model::Document;
use crate::rule::{Rule, RuleBox};
use crate::types::{AnalysisReport, RuleResult};

use tracing::{debug, info};

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules, keeping their order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    #[must_use]
    pub fn build(self) -> Analyzer {
        Analyzer {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs a fixed, ordered set of rules over documents.
///
/// Use [`Analyzer::builder()`] to construct an instance. Results come back
/// in the order rules were added; rules disabled in the [`Config`] are
/// skipped.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyzes one document and returns the report.
    ///
    /// Never fails: missing optional data falls back to model defaults.
    #[must_use]
    pub fn analyze(&self, document: &Document) -> AnalysisReport {
        let ctx = AnalysisContext::new(document);

        info!(
            "Analyzing {} steps, {} trigger occurrences with {} rules",
            document.steps.len(),
            ctx.triggers.len(),
            self.rules.len()
        );

        let results = self.evaluate(&ctx);
        let report = AnalysisReport {
            triggers_resolved: ctx.triggers.len(),
            steps_checked: document.steps.len(),
            results,
        };

        let (passed, failed) = report.count_by_status();
        info!("Analysis complete: {passed} passed, {failed} failed");

        report
    }

    /// Evaluates every enabled rule against a prepared context.
    #[must_use]
    pub fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Vec<RuleResult> {
        let mut results = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name(), rule.code()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let result = rule.evaluate(ctx);
            debug!(
                "{} [{}]: {} ({} finding(s))",
                rule.name(),
                rule.code(),
                result.status,
                result.finding_count()
            );
            results.push(result);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    struct CountSteps;

    impl Rule for CountSteps {
        fn name(&self) -> &'static str {
            "count-steps"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn title(&self) -> &'static str {
            "Count steps"
        }
        fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String> {
            ctx.steps()
                .iter()
                .map(|s| format!("step {}", s.display_name()))
                .collect()
        }
    }

    struct AlwaysPass;

    impl Rule for AlwaysPass {
        fn name(&self) -> &'static str {
            "always-pass"
        }
        fn code(&self) -> &'static str {
            "TEST002"
        }
        fn title(&self) -> &'static str {
            "Always pass"
        }
        fn check(&self, _ctx: &AnalysisContext<'_>) -> Vec<String> {
            vec![]
        }
    }

    fn document() -> Document {
        serde_json::from_value(serde_json::json!({
            "steps": [{ "_id": "s1", "name": "One" }, { "_id": "s2" }]
        }))
        .unwrap()
    }

    #[test]
    fn test_results_follow_rule_order() {
        let analyzer = Analyzer::builder().rule(AlwaysPass).rule(CountSteps).build();
        assert_eq!(analyzer.rule_count(), 2);

        let report = analyzer.analyze(&document());
        let codes: Vec<&str> = report.results.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["TEST002", "TEST001"]);
        assert_eq!(report.steps_checked, 2);
        assert_eq!(
            report.results[1].details,
            ["1- step One", "2- step undefined"]
        );
    }

    #[test]
    fn test_disabled_rules_are_skipped() {
        let mut config = Config::new();
        config.disable_rule("count-steps");
        let analyzer = Analyzer::builder()
            .rule(CountSteps)
            .rule(AlwaysPass)
            .config(config)
            .build();

        let report = analyzer.analyze(&document());
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].status, Status::Pass);
        assert!(!report.has_failures());
    }
}
