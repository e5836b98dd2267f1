//! Rule to flag triggers the editor marked as broken.

use tulip_lint_core::{AnalysisContext, Rule};

/// Rule code for broken-triggers.
pub const CODE: &str = "TL008";

/// Rule name for broken-triggers.
pub const NAME: &str = "broken-triggers";

/// Flags triggers with `broken` set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokenTriggers;

impl BrokenTriggers {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for BrokenTriggers {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Test for broken triggers"
    }

    fn description(&self) -> &'static str {
        "Flags triggers marked broken by the editor"
    }

    fn pass_message(&self) -> &'static str {
        "No broken triggers found."
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String> {
        ctx.triggers
            .iter()
            .filter(|t| t.trigger.is_broken())
            .map(|t| {
                format!(
                    "Broken trigger '{}' in step: '{}', Widget: '{}', Location: '{}'",
                    t.trigger_name(),
                    t.step_name(),
                    t.widget_label(),
                    t.event_name()
                )
            })
            .collect()
    }
}
