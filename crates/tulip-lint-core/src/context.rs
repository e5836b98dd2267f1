//! Context types for rule execution.

use crate::model::{Document, Step, Variable};
use crate::resolver::{resolve, ResolvedTrigger};
use std::cell::OnceCell;

/// Everything a rule may inspect about one document.
///
/// Built once per analysis and shared by all rules. The resolved trigger
/// list is computed eagerly; the serialized document text only when a rule
/// first asks for it.
#[derive(Debug)]
pub struct AnalysisContext<'a> {
    /// The full (merged) document.
    pub document: &'a Document,
    /// Trigger occurrences in resolution order.
    pub triggers: Vec<ResolvedTrigger<'a>>,
    document_text: OnceCell<String>,
}

impl<'a> AnalysisContext<'a> {
    /// Creates a context, resolving all trigger references.
    #[must_use]
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            triggers: resolve(document),
            document_text: OnceCell::new(),
        }
    }

    /// Steps in document order.
    #[must_use]
    pub fn steps(&self) -> &'a [Step] {
        &self.document.steps
    }

    /// Variables in document order.
    #[must_use]
    pub fn variables(&self) -> &'a [Variable] {
        &self.document.variables
    }

    /// The whole document serialized to JSON text.
    #[must_use]
    pub fn document_text(&self) -> &str {
        self.document_text.get_or_init(|| self.document.to_json_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exposes_document_collections() {
        let document: Document = serde_json::from_value(json!({
            "steps": [{ "_id": "s1", "triggers": ["t1"] }],
            "triggers": [{ "_id": "t1" }],
            "variables": [{ "name": "count" }]
        }))
        .unwrap();

        let ctx = AnalysisContext::new(&document);
        assert_eq!(ctx.steps().len(), 1);
        assert_eq!(ctx.variables().len(), 1);
        assert_eq!(ctx.triggers.len(), 1);
        assert!(ctx.document_text().contains("\"count\""));
    }

    #[test]
    fn document_text_is_stable() {
        let document = Document::new();
        let ctx = AnalysisContext::new(&document);
        assert_eq!(ctx.document_text(), ctx.document_text());
    }
}
