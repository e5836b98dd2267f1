//! Rule to flag disabled triggers.
//!
//! Disabled triggers are dead configuration: they ship with the app but
//! never run. They are usually leftovers from debugging.

use crate::support::occurrence;
use tulip_lint_core::{AnalysisContext, Rule};

/// Rule code for disabled-triggers.
pub const CODE: &str = "TL002";

/// Rule name for disabled-triggers.
pub const NAME: &str = "disabled-triggers";

/// Flags triggers marked `disabled`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledTriggers;

impl DisabledTriggers {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DisabledTriggers {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Test for disabled triggers"
    }

    fn description(&self) -> &'static str {
        "Flags triggers that are switched off"
    }

    fn pass_message(&self) -> &'static str {
        "No disabled triggers found."
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String> {
        ctx.triggers
            .iter()
            .filter(|t| t.trigger.is_disabled())
            .map(|t| format!("Found disabled trigger {}", occurrence(t)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::test_support::check;
    use serde_json::json;

    #[test]
    fn test_detects_disabled_trigger() {
        let findings = check(
            &DisabledTriggers,
            json!({
                "steps": [{ "_id": "s1", "name": "Pack", "triggers": ["t1", "t2", "t3"] }],
                "triggers": [
                    { "_id": "t1", "description": "Print label", "disabled": true,
                      "event": { "type": "step_exit" } },
                    { "_id": "t2", "disabled": false },
                    { "_id": "t3", "disabled": true }
                ]
            }),
        );
        assert_eq!(
            findings,
            [
                "Found disabled trigger on step: 'Pack', Trigger name: 'Print label', Location: 'step_exit', Widget: 'step'",
                "Found disabled trigger on step: 'Pack', Trigger name: 'unnamed', Location: 'unknown', Widget: 'step'",
            ]
        );
    }

    #[test]
    fn test_missing_flag_is_enabled() {
        let findings = check(
            &DisabledTriggers,
            json!({
                "steps": [{ "_id": "s1", "triggers": ["t1"] }],
                "triggers": [{ "_id": "t1" }]
            }),
        );
        assert!(findings.is_empty());
    }
}
