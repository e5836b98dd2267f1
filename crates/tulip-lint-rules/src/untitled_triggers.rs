//! Rule to flag triggers left with an empty or placeholder title.
//!
//! # Rationale
//!
//! The editor names new triggers "Untitled Trigger". Apps full of untitled
//! triggers are hard to review and debug, since the trigger list gives no
//! hint of what each handler does.
//!
//! # Detected Patterns
//!
//! - Trigger description absent or blank
//! - Trigger description equal to `Untitled Trigger` (case-insensitive,
//!   surrounding whitespace ignored)
//!
//! Each occurrence (step or widget attachment) is reported separately.

use tulip_lint_core::{AnalysisContext, Rule};

/// Rule code for untitled-triggers.
pub const CODE: &str = "TL001";

/// Rule name for untitled-triggers.
pub const NAME: &str = "untitled-triggers";

/// Default placeholder title given by the editor.
pub const DEFAULT_PLACEHOLDER: &str = "untitled trigger";

/// Flags triggers without a meaningful title.
#[derive(Debug, Clone)]
pub struct UntitledTriggers {
    /// Lower-case placeholder treated as "no title".
    pub placeholder: String,
}

impl Default for UntitledTriggers {
    fn default() -> Self {
        Self::new()
    }
}

impl UntitledTriggers {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Sets the placeholder title (compared case-insensitively).
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into().trim().to_lowercase();
        self
    }

    fn is_untitled(&self, description: Option<&str>) -> bool {
        let title = description.unwrap_or_default().trim().to_lowercase();
        title.is_empty() || title == self.placeholder
    }
}

impl Rule for UntitledTriggers {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Test for untitled triggers"
    }

    fn description(&self) -> &'static str {
        "Flags triggers whose title is empty or the editor placeholder"
    }

    fn pass_message(&self) -> &'static str {
        "No untitled triggers found."
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String> {
        ctx.triggers
            .iter()
            .filter(|t| self.is_untitled(t.trigger.description.as_deref()))
            .map(|t| {
                format!(
                    "Found untitled trigger on step: '{}', Location: '{}', Widget: '{}'",
                    t.step_name(),
                    t.event_name(),
                    t.widget_type()
                )
            })
            .collect()
    }
}
