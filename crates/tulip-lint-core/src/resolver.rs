//! Reference resolution: joins steps, widgets, and triggers.
//!
//! Steps and widgets only hold trigger identifiers. [`resolve`] replaces each
//! reference with the trigger it names, annotated with the step and widget it
//! was found on, producing one [`ResolvedTrigger`] per occurrence.

use crate::model::{Document, Step, Trigger, Widget};
use std::collections::HashMap;
use tracing::trace;

/// Widget type reported for triggers attached directly to a step.
pub const STEP_ATTACHMENT: &str = "step";

/// A trigger in the context of one step/widget that references it.
///
/// Borrows from the source [`Document`]; the trigger itself is never copied
/// or modified.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTrigger<'a> {
    /// The referenced trigger definition.
    pub trigger: &'a Trigger,
    /// Step on which the trigger fires.
    pub step: &'a Step,
    /// Widget the trigger is attached to, `None` for step triggers.
    pub widget: Option<&'a Widget>,
}

impl<'a> ResolvedTrigger<'a> {
    /// Creates an occurrence for a trigger attached directly to a step.
    #[must_use]
    pub fn on_step(trigger: &'a Trigger, step: &'a Step) -> Self {
        Self {
            trigger,
            step,
            widget: None,
        }
    }

    /// Creates an occurrence for a trigger attached to a widget on a step.
    #[must_use]
    pub fn on_widget(trigger: &'a Trigger, step: &'a Step, widget: &'a Widget) -> Self {
        Self {
            trigger,
            step,
            widget: Some(widget),
        }
    }

    /// Display name of the owning step.
    #[must_use]
    pub fn step_name(&self) -> &'a str {
        self.step.display_name()
    }

    /// Display name of the trigger.
    #[must_use]
    pub fn trigger_name(&self) -> &'a str {
        self.trigger.display_name()
    }

    /// `"step"` for step triggers, otherwise the widget type.
    #[must_use]
    pub fn widget_type(&self) -> &'a str {
        self.widget.map_or(STEP_ATTACHMENT, Widget::widget_type)
    }

    /// Widget name for widget triggers.
    #[must_use]
    pub fn widget_name(&self) -> Option<&'a str> {
        self.widget.map(Widget::display_name)
    }

    /// Widget name when attached to a widget, else the widget type.
    #[must_use]
    pub fn widget_label(&self) -> &'a str {
        self.widget_name().unwrap_or_else(|| self.widget_type())
    }

    /// Event type that fires the trigger.
    #[must_use]
    pub fn event_name(&self) -> &'a str {
        self.trigger.event_name()
    }
}

/// Trigger lookup by identifier.
///
/// When several triggers share an identifier the last one defined wins.
#[derive(Debug, Default)]
pub struct TriggerIndex<'a> {
    by_id: HashMap<&'a str, &'a Trigger>,
}

impl<'a> TriggerIndex<'a> {
    /// Indexes the given triggers in order.
    #[must_use]
    pub fn new(triggers: &'a [Trigger]) -> Self {
        let mut by_id = HashMap::with_capacity(triggers.len());
        for trigger in triggers {
            if let Some(id) = trigger.id.as_deref() {
                // Later definitions replace earlier ones.
                by_id.insert(id, trigger);
            }
        }
        Self { by_id }
    }

    /// Looks up a trigger by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a Trigger> {
        self.by_id.get(id).copied()
    }

    /// Number of distinct identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no trigger has an identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Resolves every trigger reference in the document.
///
/// Order: steps in document order; per step, direct step triggers first,
/// then triggers of each widget placed on the step (widgets in document
/// order). References to unknown trigger ids are skipped.
#[must_use]
pub fn resolve(document: &Document) -> Vec<ResolvedTrigger<'_>> {
    let index = TriggerIndex::new(&document.triggers);
    let mut resolved = Vec::new();

    for step in &document.steps {
        for id in &step.triggers {
            match index.get(id) {
                Some(trigger) => resolved.push(ResolvedTrigger::on_step(trigger, step)),
                None => trace!(trigger = %id, step = step.display_name(), "dangling step trigger"),
            }
        }

        for widget in document.widgets.iter().filter(|w| w.belongs_to(step)) {
            for id in &widget.triggers {
                match index.get(id) {
                    Some(trigger) => {
                        resolved.push(ResolvedTrigger::on_widget(trigger, step, widget));
                    }
                    None => trace!(
                        trigger = %id,
                        widget = widget.display_name(),
                        "dangling widget trigger"
                    ),
                }
            }
        }
    }

    resolved
}
