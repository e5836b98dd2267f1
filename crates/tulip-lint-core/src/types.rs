//! Core types for rule results and reports.

use serde::{Deserialize, Serialize};

/// Outcome of a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// No offending items.
    Pass,
    /// At least one offending item.
    Fail,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "Pass"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// Result of evaluating one rule against a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Rule code (e.g., "TL001").
    pub code: String,
    /// Rule id (e.g., "untitled-triggers").
    pub rule: String,
    /// Display title of the rule.
    pub name: String,
    /// Pass iff nothing was found.
    pub status: Status,
    /// Numbered findings, or the single pass message.
    pub details: Vec<String>,
}

impl RuleResult {
    /// Builds a result from unnumbered findings in detection order.
    ///
    /// Findings are prefixed `"{i}- "` with `i` counting from 1. With no
    /// findings, `details` holds only `pass_message`.
    #[must_use]
    pub fn from_findings(
        code: impl Into<String>,
        rule: impl Into<String>,
        name: impl Into<String>,
        pass_message: &str,
        findings: Vec<String>,
    ) -> Self {
        let (status, details) = if findings.is_empty() {
            (Status::Pass, vec![pass_message.to_string()])
        } else {
            let numbered = findings
                .into_iter()
                .enumerate()
                .map(|(i, finding)| format!("{}- {finding}", i + 1))
                .collect();
            (Status::Fail, numbered)
        };

        Self {
            code: code.into(),
            rule: rule.into(),
            name: name.into(),
            status,
            details,
        }
    }

    /// Returns true if the rule passed.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.status == Status::Pass
    }

    /// Number of offending items (zero for a passing rule).
    #[must_use]
    pub fn finding_count(&self) -> usize {
        if self.is_pass() {
            0
        } else {
            self.details.len()
        }
    }
}

/// Result of running every enabled rule over one document.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Rule results in rule order.
    pub results: Vec<RuleResult>,
    /// Number of trigger occurrences resolved.
    pub triggers_resolved: usize,
    /// Number of steps in the document.
    pub steps_checked: usize,
}

impl AnalysisReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any rule failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.status == Status::Fail)
    }

    /// Counts results as `(passed, failed)`.
    #[must_use]
    pub fn count_by_status(&self) -> (usize, usize) {
        let passed = self.results.iter().filter(|r| r.is_pass()).count();
        (passed, self.results.len() - passed)
    }

    /// Finds a result by rule id or code.
    #[must_use]
    pub fn get(&self, rule: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.rule == rule || r.code == rule)
    }

    /// Iterates over failed results.
    pub fn failures(&self) -> impl Iterator<Item = &RuleResult> {
        self.results.iter().filter(|r| !r.is_pass())
    }
}
