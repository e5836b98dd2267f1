//! Rule to flag triggers that both complete the app and save app data.
//!
//! # Rationale
//!
//! `complete_app` already records the completion. Pairing it with
//! `save_app` in the same clause stores the data twice.
//!
//! Reported once per trigger occurrence, however many clauses conflict.

use tulip_lint_core::{AnalysisContext, Rule, ACTION_COMPLETE_APP, ACTION_SAVE_APP};

/// Rule code for complete-and-save.
pub const CODE: &str = "TL004";

/// Rule name for complete-and-save.
pub const NAME: &str = "complete-and-save";

/// Flags triggers with a clause holding both `complete_app` and `save_app`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompleteAndSave;

impl CompleteAndSave {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CompleteAndSave {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Test for complete app and save app data in the same trigger"
    }

    fn description(&self) -> &'static str {
        "Flags clauses that both complete the app and save app data"
    }

    fn pass_message(&self) -> &'static str {
        "No conflicting actions found."
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String> {
        ctx.triggers
            .iter()
            .filter(|t| {
                t.trigger
                    .clauses
                    .iter()
                    .any(|c| c.has_both(ACTION_COMPLETE_APP, ACTION_SAVE_APP))
            })
            .map(|t| {
                format!(
                    "Found both 'complete_app' and 'save_app' in trigger: '{}' on step: '{}'",
                    t.trigger_name(),
                    t.step_name()
                )
            })
            .collect()
    }
}
