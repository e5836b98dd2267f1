//! The ordered set of built-in rules.

use crate::{
    BrokenGoToStep, BrokenTriggers, CompleteAndGoToApp, CompleteAndSave, CompleteAndStepChange,
    DisabledTriggers, UnusedVariables, UntitledSteps, UntitledTriggers, UserGroupClauses,
};
use tulip_lint_core::RuleBox;

/// Returns all built-in rules in reporting order (TL001 to TL010).
///
/// Consumers may index results by position, so new rules are appended.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(UntitledTriggers::new()),
        Box::new(DisabledTriggers::new()),
        Box::new(UntitledSteps::new()),
        Box::new(CompleteAndSave::new()),
        Box::new(CompleteAndStepChange::new()),
        Box::new(UserGroupClauses::new()),
        Box::new(CompleteAndGoToApp::new()),
        Box::new(BrokenTriggers::new()),
        Box::new(BrokenGoToStep::new()),
        Box::new(UnusedVariables::new()),
    ]
}

/// Looks up a built-in rule by id (e.g. `unused-variables`) or code (`TL010`).
#[must_use]
pub fn find_rule(name: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|r| r.name() == name || r.code().eq_ignore_ascii_case(name))
}

/// Selects built-in rules by id or code, keeping reporting order.
///
/// Returns the selected rules and the names that matched nothing.
#[must_use]
pub fn select_rules(names: &[&str]) -> (Vec<RuleBox>, Vec<String>) {
    let unknown = names
        .iter()
        .filter(|n| find_rule(n).is_none())
        .map(ToString::to_string)
        .collect();

    let selected = all_rules()
        .into_iter()
        .filter(|r| {
            names
                .iter()
                .any(|n| r.name() == *n || r.code().eq_ignore_ascii_case(n))
        })
        .collect();

    (selected, unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_sequential() {
        let codes: Vec<&str> = all_rules().iter().map(|r| r.code()).collect();
        assert_eq!(
            codes,
            [
                "TL001", "TL002", "TL003", "TL004", "TL005", "TL006", "TL007", "TL008", "TL009",
                "TL010"
            ]
        );
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = all_rules().iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_every_rule_is_described() {
        for rule in all_rules() {
            assert!(!rule.description().is_empty(), "{} has no description", rule.name());
        }
    }

    #[test]
    fn test_find_by_name_or_code() {
        assert_eq!(find_rule("unused-variables").map(|r| r.code()), Some("TL010"));
        assert_eq!(find_rule("tl003").map(|r| r.name()), Some("untitled-steps"));
        assert!(find_rule("no-such-rule").is_none());
    }

    #[test]
    fn test_select_keeps_reporting_order() {
        let (rules, unknown) = select_rules(&["TL009", "untitled-triggers", "bogus"]);
        let codes: Vec<&str> = rules.iter().map(|r| r.code()).collect();
        assert_eq!(codes, ["TL001", "TL009"]);
        assert_eq!(unknown, ["bogus"]);
    }
}
