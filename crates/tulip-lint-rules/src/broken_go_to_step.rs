//! Rule to flag `go_to_step` actions without a target step.
//!
//! A `go_to_step` action whose `step_id` is missing or empty does nothing at
//! runtime; it usually means the target step was deleted.
//!
//! Reported per offending action.

use tulip_lint_core::{AnalysisContext, Rule, ACTION_GO_TO_STEP};

/// Rule code for broken-go-to-step.
pub const CODE: &str = "TL009";

/// Rule name for broken-go-to-step.
pub const NAME: &str = "broken-go-to-step";

/// Flags `go_to_step` actions with a missing or empty `step_id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokenGoToStep;

impl BrokenGoToStep {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for BrokenGoToStep {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Test for broken 'go_to_step' actions"
    }

    fn description(&self) -> &'static str {
        "Flags step changes without a target step"
    }

    fn pass_message(&self) -> &'static str {
        "No broken 'go_to_step' actions found."
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String> {
        let mut findings = Vec::new();

        for t in &ctx.triggers {
            let broken = t
                .trigger
                .clauses
                .iter()
                .flat_map(|c| &c.actions)
                .filter(|a| a.tag() == ACTION_GO_TO_STEP && a.target_step().is_none());

            for _ in broken {
                findings.push(format!(
                    "Trigger '{}' in step: '{}' has broken 'go_to_step' action \
                     (missing or invalid step_id), Widget: '{}', Location: '{}'",
                    t.trigger_name(),
                    t.step_name(),
                    t.widget_label(),
                    t.event_name()
                ));
            }
        }

        findings
    }
}
