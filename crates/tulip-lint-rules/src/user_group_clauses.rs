//! Rule to flag trigger clauses that depend on user groups.
//!
//! # Rationale
//!
//! User group ids are instance-specific. When an app is exported from one
//! instance and imported into another, clauses referring to user groups
//! silently stop matching.
//!
//! # Detection
//!
//! The whole clause (conditions, actions, and any other field) is serialized
//! to JSON and searched for the marker text, whatever field it sits in.
//! User groups show up in conditions, action parameters, and expression
//! trees under different keys.

use crate::support::{clauses, occurrence};
use tulip_lint_core::{AnalysisContext, Rule};

/// Rule code for user-group-clauses.
pub const CODE: &str = "TL006";

/// Rule name for user-group-clauses.
pub const NAME: &str = "user-group-clauses";

/// Default marker text searched for in serialized clauses.
pub const DEFAULT_MARKER: &str = "user_group";

/// Flags clauses whose serialized content mentions user groups.
#[derive(Debug, Clone)]
pub struct UserGroupClauses {
    /// Text searched for in each serialized clause.
    pub marker: String,
}

impl Default for UserGroupClauses {
    fn default() -> Self {
        Self::new()
    }
}

impl UserGroupClauses {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Sets the marker text.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}

impl Rule for UserGroupClauses {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Test for broken triggers when using user groups (when doing import/export between instances)"
    }

    fn description(&self) -> &'static str {
        "Flags clauses referring to instance-specific user groups"
    }

    fn pass_message(&self) -> &'static str {
        "No user group-based triggers found."
    }

    fn check(&self, ctx: &AnalysisContext<'_>) -> Vec<String> {
        clauses(ctx)
            .filter(|(_, c)| c.to_json_text().contains(&self.marker))
            .map(|(t, _)| format!("Found a trigger clause with 'user group' {}", occurrence(t)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::test_support::check;
    use serde_json::json;

    fn document() -> serde_json::Value {
        json!({
            "steps": [{ "_id": "s1", "name": "Approve", "triggers": ["t1", "t2"] }],
            "triggers": [
                {
                    "_id": "t1",
                    "description": "Supervisor only",
                    "event": { "type": "step_enter" },
                    "clauses": [
                        { "condition": { "lhs": { "type": "user_group", "id": "g1" } }, "actions": [] },
                        { "actions": [{ "action": "show_message", "params": { "user_group_id": "g1" } }] },
                        { "actions": [{ "action": "save_app" }] }
                    ]
                },
                { "_id": "t2", "clauses": [{ "actions": [{ "action": "complete_app" }] }] }
            ]
        })
    }

    #[test]
    fn test_detects_marker_anywhere_in_clause() {
        let findings = check(&UserGroupClauses::new(), document());
        let expected = "Found a trigger clause with 'user group' on step: 'Approve', \
                        Trigger name: 'Supervisor only', Location: 'step_enter', Widget: 'step'";
        assert_eq!(findings, [expected, expected]);
    }

    #[test]
    fn test_custom_marker() {
        let findings = check(&UserGroupClauses::new().marker("show_message"), document());
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_trigger_description_is_not_scanned() {
        let findings = check(
            &UserGroupClauses::new(),
            json!({
                "steps": [{ "_id": "s1", "triggers": ["t1"] }],
                "triggers": [{ "_id": "t1", "description": "user_group check", "clauses": [{ "actions": [] }] }]
            }),
        );
        assert!(findings.is_empty());
    }
}
