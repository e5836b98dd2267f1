//! Document model for exported app bundles.
//!
//! Every record keeps the fields the rules care about as typed attributes and
//! carries the rest in an ordered [`Extra`] bag, so re-serializing a record
//! reproduces its full content (the user-group and unused-variable rules scan
//! serialized text).
//!
//! Defaults for optional attributes live in the accessor methods on each
//! type, never in the rules themselves.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Ordered bag of fields not modelled explicitly.
pub type Extra = Map<String, Value>;

/// Display name used for steps without a name.
pub const UNNAMED_STEP: &str = "undefined";
/// Display name used for triggers without a description.
pub const UNNAMED_TRIGGER: &str = "unnamed";
/// Event name used for triggers without an event type.
pub const UNKNOWN_EVENT: &str = "unknown";
/// Widget type used for widgets without a type tag.
pub const DEFAULT_WIDGET_TYPE: &str = "widget";
/// Display name used for widgets without a name.
pub const UNNAMED_WIDGET: &str = "Unnamed Widget";

/// Action tag for completing the app.
pub const ACTION_COMPLETE_APP: &str = "complete_app";
/// Action tag for saving app data.
pub const ACTION_SAVE_APP: &str = "save_app";
/// Action tag for changing step.
pub const ACTION_GO_TO_STEP: &str = "go_to_step";
/// Action tag for navigating to another app.
pub const ACTION_GO_TO_APP: &str = "go_to_app";

/// One exported app bundle (or several merged into one).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Steps in presentation order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<Step>,
    /// Widgets across all steps.
    #[serde(default, deserialize_with = "null_as_default")]
    pub widgets: Vec<Widget>,
    /// Trigger definitions referenced by steps and widgets.
    #[serde(default, deserialize_with = "null_as_default")]
    pub triggers: Vec<Trigger>,
    /// App variables.
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables: Vec<Variable>,
    /// Remaining top-level fields.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the bytes are not a JSON object of
    /// the expected shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Appends the collections of `other` after this document's own.
    ///
    /// Identifiers are not de-duplicated. Extra top-level fields already
    /// present are kept (first fragment wins).
    pub fn append(&mut self, other: Self) {
        self.steps.extend(other.steps);
        self.widgets.extend(other.widgets);
        self.triggers.extend(other.triggers);
        self.variables.extend(other.variables);
        for (key, value) in other.extra {
            self.extra.entry(key).or_insert(value);
        }
    }

    /// Serializes the whole document to compact JSON text.
    #[must_use]
    pub fn to_json_text(&self) -> String {
        to_json_text(self)
    }
}

/// A stage (screen) of the app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Unique identifier.
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Step name as shown in the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Identifiers of triggers attached directly to the step.
    #[serde(default, deserialize_with = "null_as_default")]
    pub triggers: Vec<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Step {
    /// Returns the step name, or `"undefined"` when absent or empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(UNNAMED_STEP)
    }
}

/// A UI element placed within a step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Unique identifier.
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Widget type tag (e.g. `"button"`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Widget name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Identifier of the owning step.
    #[serde(
        rename = "parent_step",
        alias = "parentStepId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_step: Option<String>,
    /// Identifiers of triggers attached to the widget.
    #[serde(default, deserialize_with = "null_as_default")]
    pub triggers: Vec<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Widget {
    /// Returns the widget type, or `"widget"` when absent or empty.
    #[must_use]
    pub fn widget_type(&self) -> &str {
        non_empty(self.kind.as_deref()).unwrap_or(DEFAULT_WIDGET_TYPE)
    }

    /// Returns the widget name, or `"Unnamed Widget"` when absent or empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(UNNAMED_WIDGET)
    }

    /// Whether this widget is placed on `step`.
    ///
    /// A widget without a parent step, or a step without an id, never matches.
    #[must_use]
    pub fn belongs_to(&self, step: &Step) -> bool {
        matches!(
            (self.parent_step.as_deref(), step.id.as_deref()),
            (Some(parent), Some(id)) if parent == id
        )
    }
}

/// An event handler attached to steps or widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    /// Unique identifier.
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable trigger title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the trigger is switched off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Whether the editor flagged the trigger as broken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broken: Option<bool>,
    /// Event that fires the trigger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,
    /// Conditional blocks, evaluated in order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub clauses: Vec<Clause>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Trigger {
    /// Returns the description, or `"unnamed"` when absent or empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(UNNAMED_TRIGGER)
    }

    /// Returns the event type, or `"unknown"` when absent or empty.
    #[must_use]
    pub fn event_name(&self) -> &str {
        self.event
            .as_ref()
            .and_then(|e| non_empty(e.kind.as_deref()))
            .unwrap_or(UNKNOWN_EVENT)
    }

    /// Whether the trigger is disabled (default `false`).
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    /// Whether the trigger is broken (default `false`).
    #[must_use]
    pub fn is_broken(&self) -> bool {
        self.broken.unwrap_or(false)
    }
}

/// Event descriptor of a trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event type (e.g. `"button_press"`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A conditional block within a trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// Actions run when the clause fires.
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<Action>,
    /// Conditions and any other clause fields.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Clause {
    /// Whether any action in the clause has the given tag.
    #[must_use]
    pub fn has_action(&self, tag: &str) -> bool {
        self.actions.iter().any(|a| a.tag() == tag)
    }

    /// Whether the clause contains actions with both tags.
    #[must_use]
    pub fn has_both(&self, first: &str, second: &str) -> bool {
        self.has_action(first) && self.has_action(second)
    }

    /// Serializes the full clause (actions and extra fields) to JSON text.
    #[must_use]
    pub fn to_json_text(&self) -> String {
        to_json_text(self)
    }
}

/// A single operation performed by a clause.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Action kind tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Target step of a `go_to_step` action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_id: Option<String>,
    /// Remaining action parameters.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Action {
    /// Creates an action with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            action: Some(tag.into()),
            ..Self::default()
        }
    }

    /// Returns the action tag, or `""` when absent.
    #[must_use]
    pub fn tag(&self) -> &str {
        self.action.as_deref().unwrap_or_default()
    }

    /// Returns the target step id when present and non-empty.
    #[must_use]
    pub fn target_step(&self) -> Option<&str> {
        non_empty(self.step_id.as_deref())
    }
}

/// An app variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable name, unique within the document.
    #[serde(default)]
    pub name: String,
    /// Remaining fields (type, default value, ...).
    #[serde(flatten)]
    pub extra: Extra,
}

impl Variable {
    /// Creates a variable with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Extra::new(),
        }
    }

    /// The name as a JSON string literal, quotes included.
    #[must_use]
    pub fn quoted_name(&self) -> String {
        to_json_text(&self.name)
    }

    /// Serializes the variable definition to JSON text.
    #[must_use]
    pub fn to_json_text(&self) -> String {
        to_json_text(self)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

// Serializing an in-memory model with string keys cannot fail.
fn to_json_text<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
