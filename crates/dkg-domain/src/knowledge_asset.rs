//! Knowledge asset model and private resource reference extraction.

use serde_json::{Map, Value};

/// Key of the assertion graph inside a retrieved knowledge asset.
pub const ASSERTION_KEY: &str = "assertion";

/// JSON-LD node identifier key.
pub const ID_KEY: &str = "@id";

/// Predicate linking a public assertion node to a private resource held by the publisher.
pub const REPRESENTS_PRIVATE_RESOURCE: &str =
    "https://ontology.origintrail.io/dkg/1.0#representsPrivateResource";

/// A retrieved knowledge asset.
///
/// Only the `assertion` entry (a sequence of JSON-LD node objects) is interpreted;
/// everything else the node returns is carried along untouched.
pub type KnowledgeAsset = Map<String, Value>;

/// Collect the identifiers of private resources referenced by the asset's assertions.
///
/// Identifiers keep assertion order, then the order inside each assertion's reference
/// list. Duplicates are kept. A missing `assertion` entry yields no identifiers.
/// References without a string `@id` are skipped with a warning.
pub fn private_resource_ids(asset: &KnowledgeAsset) -> Vec<String> {
    let Some(assertions) = asset.get(ASSERTION_KEY).and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut ids = Vec::new();
    for (index, assertion) in assertions.iter().enumerate() {
        let Some(references) = assertion.get(REPRESENTS_PRIVATE_RESOURCE) else {
            continue;
        };

        // JSON-LD allows a single object where a list is expected
        let references = match references {
            Value::Array(items) => items.as_slice(),
            single => std::slice::from_ref(single),
        };

        for reference in references {
            match reference.get(ID_KEY).and_then(Value::as_str) {
                Some(id) => ids.push(id.to_string()),
                None => tracing::warn!(
                    assertion_index = index,
                    reference = %reference,
                    "Private resource reference has no @id, skipping"
                ),
            }
        }
    }

    ids
}
