//! Conversion of node assertions (N-Quads lines) to expanded JSON-LD node objects.

use std::collections::HashMap;

use oxigraph::{
    io::{RdfFormat, RdfParser},
    model::{
        Literal, NamedOrBlankNode, Term,
        vocab::{rdf, xsd},
    },
};
use serde_json::{Map, Value, json};

use crate::error::{NodeClientError, Result};

const TYPE_KEY: &str = "@type";

/// Normalize an assertion returned by a node into a list of JSON-LD node objects.
///
/// Accepted shapes:
/// - `{ "public": [lines], "private": [lines] }` (public lines first)
/// - `[lines]` or a single N-Quads document string
/// - `[objects]`, which is already JSON-LD and returned unchanged
pub fn assertion_to_jsonld(assertion: Value) -> Result<Value> {
    match assertion {
        Value::Null => Ok(Value::Array(Vec::new())),
        Value::String(document) => nquads_to_jsonld(document.lines()).map(Value::Array),
        Value::Array(items) if items.iter().all(Value::is_object) => Ok(Value::Array(items)),
        Value::Array(items) => {
            let lines = string_lines(&items)?;
            nquads_to_jsonld(lines).map(Value::Array)
        }
        Value::Object(mut parts) => {
            let mut lines = Vec::new();
            for visibility in ["public", "private"] {
                match parts.remove(visibility) {
                    None | Some(Value::Null) => {}
                    Some(Value::Array(items)) => lines.extend(string_lines(&items)?),
                    Some(other) => {
                        return Err(NodeClientError::InvalidResponse(format!(
                            "assertion.{visibility} must be a list of N-Quads, got {other}"
                        )));
                    }
                }
            }
            nquads_to_jsonld(lines).map(Value::Array)
        }
        other => Err(NodeClientError::InvalidResponse(format!(
            "unexpected assertion shape: {other}"
        ))),
    }
}

fn string_lines(items: &[Value]) -> Result<Vec<String>> {
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                NodeClientError::InvalidResponse(format!("expected N-Quads line, got {item}"))
            })
        })
        .collect()
}

/// Group quads by subject, in order of first appearance, as JSON-LD node objects.
///
/// Graph names are dropped; `rdf:type` objects become `@type` entries.
pub fn nquads_to_jsonld<I, S>(lines: I) -> Result<Vec<Value>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let document = lines
        .into_iter()
        .filter_map(|line| {
            let line = line.as_ref().trim();
            (!line.is_empty()).then(|| line.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut nodes: Vec<Map<String, Value>> = Vec::new();
    let mut subject_to_index: HashMap<String, usize> = HashMap::new();
    let parser = RdfParser::from_format(RdfFormat::NQuads).lenient();

    for parsed in parser.for_reader(document.as_bytes()) {
        let quad = parsed.map_err(|e| {
            NodeClientError::InvalidResponse(format!("failed to parse assertion N-Quads: {e}"))
        })?;

        let subject = node_id(&quad.subject);
        let index = *subject_to_index.entry(subject.clone()).or_insert_with(|| {
            let mut node = Map::new();
            node.insert("@id".to_string(), Value::String(subject));
            nodes.push(node);
            nodes.len() - 1
        });
        let node = &mut nodes[index];

        if quad.predicate.as_ref() == rdf::TYPE
            && let Term::NamedNode(class) = &quad.object
        {
            push_value(node, TYPE_KEY, Value::String(class.as_str().to_string()));
            continue;
        }

        push_value(node, quad.predicate.as_str(), object_value(&quad.object));
    }

    Ok(nodes.into_iter().map(Value::Object).collect())
}

fn node_id(node: &NamedOrBlankNode) -> String {
    match node {
        NamedOrBlankNode::NamedNode(iri) => iri.as_str().to_string(),
        NamedOrBlankNode::BlankNode(blank) => format!("_:{}", blank.as_str()),
    }
}

fn object_value(term: &Term) -> Value {
    match term {
        Term::NamedNode(iri) => json!({ "@id": iri.as_str() }),
        Term::BlankNode(blank) => json!({ "@id": format!("_:{}", blank.as_str()) }),
        Term::Literal(literal) => literal_value(literal),
        #[allow(unreachable_patterns)]
        other => json!({ "@value": other.to_string() }),
    }
}

fn literal_value(literal: &Literal) -> Value {
    let mut value = Map::new();
    value.insert("@value".to_string(), Value::String(literal.value().to_string()));
    if let Some(language) = literal.language() {
        value.insert("@language".to_string(), Value::String(language.to_string()));
    } else if literal.datatype() != xsd::STRING {
        value.insert(
            TYPE_KEY.to_string(),
            Value::String(literal.datatype().as_str().to_string()),
        );
    }
    Value::Object(value)
}

fn push_value(node: &mut Map<String, Value>, key: &str, value: Value) {
    match node
        .entry(key.to_string())
        .or_insert_with(|| Value::Array(Vec::new()))
    {
        Value::Array(values) => values.push(value),
        existing => *existing = Value::Array(vec![existing.take(), value]),
    }
}
