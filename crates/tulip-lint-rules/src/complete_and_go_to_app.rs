//! Rule to flag clauses that complete the app and navigate to another app.
//!
//! Target app ids do not survive export/import between instances, so such
//! clauses break after migration.

use crate::support::{clauses, occurrence};
use tulip_lint_core::{AnalysisContext, Rule, ACTION_COMPLETE_APP, ACTION_GO_TO_APP};

/// Rule code for complete-and-go-to-app.
pub const CODE: &str = "TL007";

/// Rule name for complete-and-go-to-app.
pub const NAME: &str = "complete-and-go-to-app";

/// Flags clauses holding both `complete_app` and `go_to_app`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompleteAndGoToApp;

impl CompleteAndGoToApp {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CompleteAndGoToApp {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Test for broken triggers when navigating to another app (when doing import/export between instances)"
    }

    fn description(&self) -> &'static str {
        "Flags clauses that complete the app and open another app"
    }

    fn pass_message(&self) -> &'static str {
        "No completion with app change found."
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String> {
        clauses(ctx)
            .filter(|(_, c)| c.has_both(ACTION_COMPLETE_APP, ACTION_GO_TO_APP))
            .map(|(t, _)| {
                format!(
                    "Found a trigger clause with 'complete_app' and 'go_to_app' {}",
                    occurrence(t)
                )
            })
            .collect()
    }
}
