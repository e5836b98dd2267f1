//! Rule to flag clauses that complete the app and then change step.
//!
//! Completing the app resets it to its first step, so a `go_to_step` in the
//! same clause either never runs or fights the reset.
//!
//! Reported per offending clause, not per trigger.

use crate::support::{clauses, occurrence};
use tulip_lint_core::{AnalysisContext, Rule, ACTION_COMPLETE_APP, ACTION_GO_TO_STEP};

/// Rule code for complete-and-step-change.
pub const CODE: &str = "TL005";

/// Rule name for complete-and-step-change.
pub const NAME: &str = "complete-and-step-change";

/// Flags clauses holding both `complete_app` and `go_to_step`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompleteAndStepChange;

impl CompleteAndStepChange {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CompleteAndStepChange {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Test for complete app with step change"
    }

    fn description(&self) -> &'static str {
        "Flags clauses that complete the app and change step"
    }

    fn pass_message(&self) -> &'static str {
        "No complete + step change conflict found."
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String> {
        clauses(ctx)
            .filter(|(_, c)| c.has_both(ACTION_COMPLETE_APP, ACTION_GO_TO_STEP))
            .map(|(t, _)| {
                format!(
                    "Found a clause with 'Complete App then Change to Step' {}",
                    occurrence(t)
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::test_support::check;
    use serde_json::json;

    #[test]
    fn test_reports_each_conflicting_clause() {
        let findings = check(
            &CompleteAndStepChange,
            json!({
                "steps": [{ "_id": "s1", "name": "Review" }],
                "widgets": [{ "_id": "w1", "type": "button", "parent_step": "s1", "triggers": ["t1"] }],
                "triggers": [{
                    "_id": "t1",
                    "description": "Submit",
                    "event": { "type": "button_press" },
                    "clauses": [
                        { "actions": [{ "action": "complete_app" }, { "action": "go_to_step", "step_id": "s2" }] },
                        { "actions": [{ "action": "go_to_step", "step_id": "s3" }] },
                        { "actions": [{ "action": "go_to_step" }, { "action": "complete_app" }] }
                    ]
                }]
            }),
        );
        let expected = "Found a clause with 'Complete App then Change to Step' on step: 'Review', \
                        Trigger name: 'Submit', Location: 'button_press', Widget: 'button'";
        assert_eq!(findings, [expected, expected]);
    }

    #[test]
    fn test_complete_alone_passes() {
        let findings = check(
            &CompleteAndStepChange,
            json!({
                "steps": [{ "_id": "s1", "triggers": ["t1"] }],
                "triggers": [{ "_id": "t1", "clauses": [{ "actions": [{ "action": "complete_app" }] }] }]
            }),
        );
        assert!(findings.is_empty());
    }
}
