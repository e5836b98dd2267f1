//! Helpers shared by the trigger rules.

use tulip_lint_core::{AnalysisContext, Clause, ResolvedTrigger};

/// Describes where a trigger occurrence fires.
///
/// `on step: '{step}', Trigger name: '{trigger}', Location: '{event}', Widget: '{widget type}'`
pub(crate) fn occurrence(t: &ResolvedTrigger<'_>) -> String {
    format!(
        "on step: '{}', Trigger name: '{}', Location: '{}', Widget: '{}'",
        t.step_name(),
        t.trigger_name(),
        t.event_name(),
        t.widget_type()
    )
}

/// Every (trigger occurrence, clause) pair, in resolution then clause order.
pub(crate) fn clauses<'c, 'a: 'c>(
    ctx: &'c AnalysisContext<'a>,
) -> impl Iterator<Item = (&'c ResolvedTrigger<'a>, &'a Clause)> + 'c {
    ctx.triggers
        .iter()
        .flat_map(|t| t.trigger.clauses.iter().map(move |c| (t, c)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use tulip_lint_core::{AnalysisContext, Document, Rule};

    /// Runs a rule's `check` over a JSON document.
    pub(crate) fn check(rule: &dyn Rule, value: serde_json::Value) -> Vec<String> {
        let document: Document = serde_json::from_value(value).expect("valid test document");
        let ctx = AnalysisContext::new(&document);
        rule.check(&ctx)
    }
}
