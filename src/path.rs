//! Dotted-path tree mutation for open extension namespaces.
//!
//! Extension children arrive as flat keys like `wrapper.profileid` with a raw
//! string value. [`set_value`] walks/creates the intermediate object nodes and
//! coerces the leaf according to a declared [`LeafKind`], defaulting to
//! string. Writes are best-effort: if an existing node along the path is not
//! an object, the write is silently abandoned.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::keys;

/// Declared type of a path segment's node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    Object,
    ObjectArray,
    String,
    Int,
    Double,
    StringArray,
    IntArray,
    DoubleArray,
}

/// Declared leaf types for known extension path segments. Unlisted segments
/// default to string leaves and object intermediates.
static LEAF_KINDS: Lazy<HashMap<&'static str, LeafKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(keys::EXT_ADPOD_MINADS, LeafKind::Int);
    m.insert(keys::EXT_ADPOD_MAXADS, LeafKind::Int);
    m.insert(keys::EXT_ADPOD_ADMINDURATION, LeafKind::Int);
    m.insert(keys::EXT_ADPOD_ADMAXDURATION, LeafKind::Int);
    m.insert(keys::EXT_ADPOD_OFFSET, LeafKind::Int);
    m.insert(keys::EXT_ADPOD_EXCLADV, LeafKind::Double);
    m.insert(keys::EXT_ADPOD_EXCLIABCAT, LeafKind::Double);
    m
});

fn kind_of(segment: &str, is_leaf: bool) -> LeafKind {
    match LEAF_KINDS.get(segment) {
        Some(kind) => *kind,
        None if is_leaf => LeafKind::String,
        None => LeafKind::Object,
    }
}

/// Set `value` at `path` inside `node`, creating intermediate objects.
///
/// A `None` value or empty path is a no-op. The write is abandoned without
/// error when an existing intermediate is not an object, or when the value
/// fails the leaf's declared coercion.
pub fn set_value(node: &mut Map<String, Value>, path: &str, value: Option<&str>) {
    let value = match value {
        Some(v) => v,
        None => return,
    };
    if path.is_empty() {
        return;
    }

    let mut current = node;
    let segments: Vec<&str> = path.split('.').collect();
    let last = segments.len() - 1;

    for (i, segment) in segments.iter().enumerate() {
        if i == last {
            if let Some(leaf) = coerce_leaf(kind_of(segment, true), value) {
                current.insert(segment.to_string(), leaf);
            }
            return;
        }

        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| match kind_of(segment, false) {
                LeafKind::ObjectArray => Value::Array(vec![Value::Object(Map::new())]),
                _ => Value::Object(Map::new()),
            });

        current = match entry {
            Value::Object(map) => map,
            Value::Array(arr) => {
                if arr.is_empty() {
                    arr.push(Value::Object(Map::new()));
                }
                match arr.first_mut() {
                    Some(Value::Object(map)) => map,
                    _ => return,
                }
            }
            // Existing node has the wrong shape; abandon the write.
            _ => return,
        };
    }
}

fn coerce_leaf(kind: LeafKind, value: &str) -> Option<Value> {
    match kind {
        LeafKind::String => Some(Value::String(value.to_string())),
        LeafKind::Int => value.parse::<i64>().ok().map(Value::from),
        LeafKind::Double => value.parse::<f64>().ok().map(Value::from),
        LeafKind::StringArray => Some(Value::from(
            value
                .split(keys::ARRAY_SEPARATOR)
                .map(str::to_string)
                .collect::<Vec<_>>(),
        )),
        LeafKind::IntArray => Some(Value::from(
            value
                .split(keys::ARRAY_SEPARATOR)
                .filter_map(|s| s.parse::<i64>().ok())
                .collect::<Vec<_>>(),
        )),
        LeafKind::DoubleArray => Some(Value::from(
            value
                .split(keys::ARRAY_SEPARATOR)
                .filter_map(|s| s.parse::<f64>().ok())
                .collect::<Vec<_>>(),
        )),
        LeafKind::Object | LeafKind::ObjectArray => serde_json::from_str::<Value>(value).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_nested_string_leaf() {
        let mut node = Map::new();
        set_value(&mut node, "a.b.c", Some("v"));
        assert_eq!(Value::Object(node), json!({"a": {"b": {"c": "v"}}}));
    }

    #[test]
    fn test_none_value_and_empty_path_are_noops() {
        let mut node = Map::new();
        set_value(&mut node, "a.b", None);
        set_value(&mut node, "", Some("v"));
        assert!(node.is_empty());
    }

    #[test]
    fn test_write_abandoned_on_non_object_intermediate() {
        let mut node = Map::new();
        set_value(&mut node, "a", Some("scalar"));
        set_value(&mut node, "a.b", Some("v"));
        assert_eq!(Value::Object(node), json!({"a": "scalar"}));
    }

    #[test]
    fn test_int_leaf_coercion() {
        let mut node = Map::new();
        set_value(&mut node, "adpod.minads", Some("3"));
        assert_eq!(Value::Object(node), json!({"adpod": {"minads": 3}}));
    }

    #[test]
    fn test_failed_int_coercion_abandons_write() {
        let mut node = Map::new();
        set_value(&mut node, "adpod.minads", Some("three"));
        assert_eq!(Value::Object(node), json!({"adpod": {}}));
    }

    #[test]
    fn test_double_leaf_coercion() {
        let mut node = Map::new();
        set_value(&mut node, "adpod.excladv", Some("25.5"));
        assert_eq!(Value::Object(node), json!({"adpod": {"excladv": 25.5}}));
    }

    #[test]
    fn test_existing_subtree_is_extended() {
        let mut node = Map::new();
        set_value(&mut node, "wrapper.profileid", Some("123"));
        set_value(&mut node, "wrapper.versionid", Some("4"));
        assert_eq!(
            Value::Object(node),
            json!({"wrapper": {"profileid": "123", "versionid": "4"}})
        );
    }

    #[test]
    fn test_descends_into_first_array_element() {
        let mut node = Map::new();
        node.insert("arr".to_string(), json!([{"x": 1}]));
        set_value(&mut node, "arr.y", Some("2"));
        assert_eq!(Value::Object(node), json!({"arr": [{"x": 1, "y": "2"}]}));
    }

    #[test]
    fn test_empty_array_intermediate_gets_seeded() {
        let mut node = Map::new();
        node.insert("arr".to_string(), json!([]));
        set_value(&mut node, "arr.y", Some("2"));
        assert_eq!(Value::Object(node), json!({"arr": [{"y": "2"}]}));
    }
}
