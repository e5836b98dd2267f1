//! # tulip-lint-rules
//!
//! Built-in diagnostic rules for tulip-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | TL001 | `untitled-triggers` | Triggers with an empty or placeholder title |
//! | TL002 | `disabled-triggers` | Triggers that are switched off |
//! | TL003 | `untitled-steps` | Steps without a name or with the default name |
//! | TL004 | `complete-and-save` | `complete_app` and `save_app` in one clause |
//! | TL005 | `complete-and-step-change` | `complete_app` and `go_to_step` in one clause |
//! | TL006 | `user-group-clauses` | Clauses referring to user groups |
//! | TL007 | `complete-and-go-to-app` | `complete_app` and `go_to_app` in one clause |
//! | TL008 | `broken-triggers` | Triggers marked broken |
//! | TL009 | `broken-go-to-step` | `go_to_step` without a target step |
//! | TL010 | `unused-variables` | Variables never referenced |
//!
//! ## Usage
//!
//! ```ignore
//! use tulip_lint_core::Analyzer;
//! use tulip_lint_rules::{all_rules, UnusedVariables};
//!
//! let analyzer = Analyzer::builder().rules(all_rules()).build();
//! let single = Analyzer::builder().rule(UnusedVariables::new()).build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod broken_go_to_step;
mod broken_triggers;
mod complete_and_go_to_app;
mod complete_and_save;
mod complete_and_step_change;
mod disabled_triggers;
mod registry;
mod support;
mod untitled_steps;
mod untitled_triggers;
mod unused_variables;
mod user_group_clauses;

pub use broken_go_to_step::BrokenGoToStep;
pub use broken_triggers::BrokenTriggers;
pub use complete_and_go_to_app::CompleteAndGoToApp;
pub use complete_and_save::CompleteAndSave;
pub use complete_and_step_change::CompleteAndStepChange;
pub use disabled_triggers::DisabledTriggers;
pub use registry::{all_rules, find_rule, select_rules};
pub use untitled_steps::UntitledSteps;
pub use untitled_triggers::UntitledTriggers;
pub use unused_variables::UnusedVariables;
pub use user_group_clauses::UserGroupClauses;

/// Re-export core types for convenience.
pub use tulip_lint_core::{Rule, RuleResult, Status};
