//! Conversions into [`KeyValueTags`] from the shapes callers hand to
//! generated update-tags functions.
//!
//! Accepted shapes:
//! - pair lists: `Vec<(K, V)>`, `[(K, V); N]`
//! - maps: `HashMap<K, V>`, `BTreeMap<K, V>`
//! - service-native tag lists: `Vec<Tag>`
//! - generic JSON: an object of key to value, an array of `[key, value]`
//!   pairs, or an array of `{"Key": .., "Value": ..}` objects
//!
//! JSON strings are taken verbatim, other scalars become their JSON text and
//! `null` values are dropped.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use crate::key_value_tags::{KeyValueTags, Tag};

impl<K, V> From<Vec<(K, V)>> for KeyValueTags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for KeyValueTags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for KeyValueTags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> From<BTreeMap<K, V>> for KeyValueTags
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Vec<Tag>> for KeyValueTags {
    fn from(tags: Vec<Tag>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<&KeyValueTags> for KeyValueTags {
    fn from(tags: &KeyValueTags) -> Self {
        tags.clone()
    }
}

impl From<Value> for KeyValueTags {
    fn from(value: Value) -> Self {
        KeyValueTags::from(&value)
    }
}

impl From<&Value> for KeyValueTags {
    fn from(value: &Value) -> Self {
        match value {
            Value::Object(map) => from_object(map),
            Value::Array(items) => items.iter().filter_map(array_entry).collect(),
            Value::Null => KeyValueTags::default(),
            other => {
                tracing::debug!(kind = json_kind(other), "Ignoring non-collection tag value");
                KeyValueTags::default()
            }
        }
    }
}

fn from_object(map: &Map<String, Value>) -> KeyValueTags {
    map.iter()
        .filter_map(|(k, v)| scalar_text(v).map(|v| (k.clone(), v)))
        .collect()
}

/// One element of a JSON tag array: `["key", "value"]` or `{"Key": .., "Value": ..}`.
fn array_entry(item: &Value) -> Option<(String, String)> {
    match item {
        Value::Array(pair) => match pair.as_slice() {
            [key, value] => Some((key.as_str()?.to_string(), scalar_text(value)?)),
            _ => None,
        },
        Value::Object(fields) => {
            let key = field_ignore_case(fields, "key")?.as_str()?.to_string();
            let value = field_ignore_case(fields, "value").and_then(scalar_text)?;
            Some((key, value))
        }
        _ => None,
    }
}

fn field_ignore_case<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
