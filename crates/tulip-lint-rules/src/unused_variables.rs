//! Rule to flag variables that nothing refers to.
//!
//! # Detection
//!
//! A variable counts as used when its name, in double quotes, appears in
//! the serialized document more often than in its own serialized
//! definition.
//!
//! This is a text match, not a usage graph: a string literal that happens to
//! equal the variable name also counts as a use.

use tulip_lint_core::{AnalysisContext, Rule};

/// Rule code for unused-variables.
pub const CODE: &str = "TL010";

/// Rule name for unused-variables.
pub const NAME: &str = "unused-variables";

/// Flags variables never mentioned outside their definition.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnusedVariables;

impl UnusedVariables {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for UnusedVariables {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Test for unused variables"
    }

    fn description(&self) -> &'static str {
        "Flags variables that are defined but never referenced"
    }

    fn pass_message(&self) -> &'static str {
        "No unused variables found."
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String> {
        let text = ctx.document_text();

        ctx.variables()
            .iter()
            .filter(|v| {
                let quoted = v.quoted_name();
                let own = v.to_json_text().matches(quoted.as_str()).count();
                text.matches(quoted.as_str()).count() <= own
            })
            .map(|v| format!("Variable '{}' is defined but never used.", v.name))
            .collect()
    }
}
