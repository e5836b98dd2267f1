//! Rule to flag steps without a meaningful name.
//!
//! # Detected Patterns
//!
//! - Step name absent or empty
//! - Step name equal to `Untitled Step` (case-insensitive, trimmed)

use tulip_lint_core::{AnalysisContext, Rule, Step};

/// Rule code for untitled-steps.
pub const CODE: &str = "TL003";

/// Rule name for untitled-steps.
pub const NAME: &str = "untitled-steps";

const PLACEHOLDER: &str = "untitled step";

/// Flags steps that still carry the default name.
#[derive(Debug, Clone, Copy, Default)]
pub struct UntitledSteps;

impl UntitledSteps {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn is_untitled(step: &Step) -> bool {
    match step.name.as_deref() {
        None | Some("") => true,
        Some(name) => name.trim().to_lowercase() == PLACEHOLDER,
    }
}

impl Rule for UntitledSteps {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Test for untitled steps"
    }

    fn description(&self) -> &'static str {
        "Flags steps without a name or with the default name"
    }

    fn pass_message(&self) -> &'static str {
        "No untitled steps found."
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String> {
        ctx.steps()
            .iter()
            .filter(|s| is_untitled(s))
            .map(|s| format!("Step name is '{}'", s.display_name()))
            .collect()
    }
}
