//! Helpers for reading loosely-typed flow descriptions.
//!
//! Descriptions come from an untrusted producer, so none of these helpers
//! fail: anything that does not have the expected JSON shape reads as absent.

use ahash::RandomState;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

pub type Object = Map<String, Value>;

/// Node entries keyed by id, in first-seen order. A repeated id keeps its
/// first position but maps to its last entry.
pub type NodeTable<'a> = IndexMap<NodeKey<'a>, &'a Object, RandomState>;

/// The lookup key of a node id.
///
/// String ids are kept verbatim and any other JSON value is keyed by its JSON
/// text. The two never compare equal, so `"1"` and `1` are different nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey<'a> {
    Text(&'a str),
    Json(String),
}

impl NodeKey<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            NodeKey::Text(s) => *s,
            NodeKey::Json(s) => s.as_str(),
        }
    }
}

impl fmt::Display for NodeKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn id_key(id: &Value) -> NodeKey<'_> {
    match id {
        Value::String(s) => NodeKey::Text(s),
        other => NodeKey::Json(other.to_string()),
    }
}

/// Collects every node entry that is an object with an `id` key. Anything else
/// is dropped without comment.
pub fn node_table(nodes: &[Value]) -> NodeTable<'_> {
    let mut table = NodeTable::default();
    for entry in nodes.iter().filter_map(Value::as_object) {
        if let Some(id) = entry.get("id") {
            table.insert(id_key(id), entry);
        }
    }
    table
}

/// Renders an optional value the way it appears in messages and diagram text.
/// Missing values render as `null`.
pub fn display(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        Some(Value::String(s)) => Cow::Borrowed(s),
        Some(other) => Cow::Owned(other.to_string()),
        None => Cow::Borrowed("null"),
    }
}

/// JSON falsiness: missing, `null`, `false`, `0`, `""`, `[]` and `{}`.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Reads a string field, treating any other JSON type as absent.
pub fn str_field<'a>(entry: &'a Object, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str)
}

/// The trimmed edge condition, if it is a non-empty string.
pub fn condition(edge: &Object) -> Option<&str> {
    str_field(edge, "condition")
        .map(str::trim)
        .filter(|c| !c.is_empty())
}

/// The `title` of a description, or `default` when it is absent or not a string.
pub fn title<'a>(flow: &'a Object, default: &'a str) -> &'a str {
    str_field(flow, "title").unwrap_or(default)
}
