//! Rule trait for defining diagnostic rules.

use crate::context::AnalysisContext;
use crate::types::RuleResult;

/// Default pass message for rules that do not define their own.
pub const DEFAULT_PASS_MESSAGE: &str = "No issues found.";

/// An independent diagnostic rule over one document.
///
/// Rules report offending items as unnumbered messages from [`Rule::check`];
/// [`Rule::evaluate`] turns them into a numbered [`RuleResult`].
///
/// # Example
///
/// ```ignore
/// use tulip_lint_core::{AnalysisContext, Rule};
///
/// pub struct EmptyApp;
///
/// impl Rule for EmptyApp {
///     fn name(&self) -> &'static str { "empty-app" }
///     fn code(&self) -> &'static str { "TL100" }
///     fn title(&self) -> &'static str { "Test for apps without steps" }
///
///     fn check(&self, ctx: &AnalysisContext) -> Vec<String> {
///         if ctx.steps().is_empty() {
///             vec!["App has no steps".to_string()]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case id of this rule (e.g., "untitled-triggers").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TL001").
    fn code(&self) -> &'static str;

    /// Returns the display title used as the result name.
    fn title(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Message reported when nothing is found.
    fn pass_message(&self) -> &'static str {
        DEFAULT_PASS_MESSAGE
    }

    /// Returns one message per offending item, in detection order.
    ///
    /// Must not fail on missing optional fields; use the model accessors.
    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String>;

    /// Runs [`Rule::check`] and builds the numbered result.
    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> RuleResult {
        RuleResult::from_findings(
            self.code(),
            self.name(),
            self.title(),
            self.pass_message(),
            self.check(ctx),
        )
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;
    use crate::types::Status;

    struct EmptyApp;

    impl Rule for EmptyApp {
        fn name(&self) -> &'static str {
            "empty-app"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn title(&self) -> &'static str {
            "Test for apps without steps"
        }

        fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String> {
            if ctx.steps().is_empty() {
                vec!["App has no steps".to_string()]
            } else {
                vec![]
            }
        }
    }

    #[test]
    fn test_rule_trait_defaults() {
        let rule = EmptyApp;
        assert_eq!(rule.name(), "empty-app");
        assert_eq!(rule.description(), "");
        assert_eq!(rule.pass_message(), DEFAULT_PASS_MESSAGE);
    }

    #[test]
    fn test_evaluate_numbers_findings() {
        let document = Document::new();
        let ctx = AnalysisContext::new(&document);
        let result = EmptyApp.evaluate(&ctx);
        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.name, "Test for apps without steps");
        assert_eq!(result.details, ["1- App has no steps"]);
    }
}
