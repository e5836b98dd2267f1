//! Merging of document fragments.

use crate::model::Document;

/// Combines fragments into one document.
///
/// Each collection is the concatenation of the fragments' collections, in
/// fragment order. Nothing is de-duplicated.
#[must_use]
pub fn merge<I>(fragments: I) -> Document
where
    I: IntoIterator<Item = Document>,
{
    fragments
        .into_iter()
        .fold(Document::new(), |mut merged, fragment| {
            merged.append(fragment);
            merged
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fragment(value: serde_json::Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn concatenates_collections_in_fragment_order() {
        let merged = merge([
            fragment(json!({
                "steps": [{ "_id": "s1" }],
                "triggers": [{ "_id": "t1" }]
            })),
            fragment(json!({
                "steps": [{ "_id": "s2" }, { "_id": "s1" }],
                "widgets": [{ "_id": "w1" }]
            })),
        ]);

        let ids: Vec<&str> = merged
            .steps
            .iter()
            .filter_map(|s| s.id.as_deref())
            .collect();
        assert_eq!(ids, ["s1", "s2", "s1"]);
        assert_eq!(merged.widgets.len(), 1);
        assert_eq!(merged.triggers.len(), 1);
    }

    #[test]
    fn merging_nothing_yields_empty_document() {
        assert_eq!(merge(Vec::<Document>::new()), Document::new());
    }

    #[test]
    fn merging_one_fragment_is_identity() {
        let doc = fragment(json!({ "variables": [{ "name": "x" }], "title": "App" }));
        assert_eq!(merge([doc.clone()]), doc);
    }
}
