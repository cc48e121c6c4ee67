//! Flat query parameter access.
//!
//! [`QueryParams`] owns the raw key/value pairs of one inbound request and
//! exposes typed getters over them. Scalar getters are strict: a value that
//! fails to parse produces a [`FieldError`] naming the offending key. Array
//! getters mirror the legacy behavior of silently dropping unparsable
//! segments while keeping the split positions of string arrays intact.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::keys;

/// Error for one query key whose value could not be interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub key: String,
    pub msg: String,
}

impl FieldError {
    pub fn new(key: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            msg: msg.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parsing error key:{} msg:{}", self.key, self.msg)
    }
}

impl std::error::Error for FieldError {}

/// Owned multimap of one request's query parameters.
///
/// Only the first value of a repeated key is ever consulted, matching the
/// legacy form-value semantics.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    values: HashMap<String, Vec<String>>,
    separator: String,
}

impl QueryParams {
    /// Build from decoded key/value pairs with the default `,` array separator.
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (k, v) in pairs {
            values.entry(k).or_default().push(v);
        }
        Self {
            values,
            separator: keys::ARRAY_SEPARATOR.to_string(),
        }
    }

    /// Parse a raw query string (`a=1&b=x%20y`) into parameters.
    pub fn from_query_string(query: &str) -> Self {
        Self::new(
            url::form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned())),
        )
    }

    /// Override the array separator for array-valued getters.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Iterate over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// First value for the key, if present and non-empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    /// First value parsed as an integer.
    pub fn get_int(&self, key: &str) -> Result<Option<i64>, FieldError> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => v
                .parse::<i64>()
                .map(Some)
                .map_err(|_| FieldError::new(key, format!("'{}' is not a int", v))),
        }
    }

    /// First value parsed as a float.
    pub fn get_float(&self, key: &str) -> Result<Option<f64>, FieldError> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => v
                .parse::<f64>()
                .map(Some)
                .map_err(|_| FieldError::new(key, format!("'{}' is not a float", v))),
        }
    }

    /// First value parsed as a boolean-ish integer (`1`/`0`/`true`/`false`).
    pub fn get_bool_as_int(&self, key: &str) -> Result<Option<i64>, FieldError> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => {
                if let Ok(i) = v.parse::<i64>() {
                    return Ok(Some(i));
                }
                match v.to_ascii_lowercase().as_str() {
                    "true" => Ok(Some(1)),
                    "false" => Ok(Some(0)),
                    _ => Err(FieldError::new(key, format!("'{}' is not a bool", v))),
                }
            }
        }
    }

    /// Split on the separator; empty segments are kept.
    pub fn get_string_array(&self, key: &str) -> Option<Vec<String>> {
        self.get(key)
            .map(|v| v.split(&self.separator).map(str::to_string).collect())
    }

    /// Split on the separator and parse each segment, dropping bad segments.
    pub fn get_int_array(&self, key: &str) -> Option<Vec<i64>> {
        self.get(key).map(|v| {
            v.split(&self.separator)
                .filter_map(|s| s.parse::<i64>().ok())
                .collect()
        })
    }

    /// Split on the separator and parse each segment, dropping bad segments.
    pub fn get_float_array(&self, key: &str) -> Option<Vec<f64>> {
        self.get(key).map(|v| {
            v.split(&self.separator)
                .filter_map(|s| s.parse::<f64>().ok())
                .collect()
        })
    }

    /// First value parsed as a JSON object.
    pub fn get_json(&self, key: &str) -> Result<Option<Value>, FieldError> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => serde_json::from_str::<Value>(v)
                .map_err(|e| FieldError::new(key, e.to_string()))
                .and_then(|val| {
                    if val.is_object() {
                        Ok(Some(val))
                    } else {
                        Err(FieldError::new(key, "value is not a JSON object"))
                    }
                }),
        }
    }

    /// First value URL-unescaped and then parsed as a JSON object.
    pub fn get_unescaped_json(&self, key: &str) -> Result<Option<Value>, FieldError> {
        match self.get(key) {
            None => Ok(None),
            Some(v) => {
                let decoded = percent_decode(v);
                serde_json::from_str::<Value>(&decoded)
                    .map_err(|e| FieldError::new(key, e.to_string()))
                    .map(Some)
            }
        }
    }

    /// First value parsed as nested query parameters (`k1=v1&k2=v2`), with
    /// each value interpreted as JSON when possible and kept as a string
    /// otherwise.
    pub fn get_nested_params(&self, key: &str) -> Result<Option<Value>, FieldError> {
        let raw = match self.get(key) {
            None => return Ok(None),
            Some(v) => v,
        };

        let mut out = serde_json::Map::new();
        for pair in raw.split('&') {
            let (k, v) = pair
                .split_once('=')
                .ok_or_else(|| FieldError::new(key, "error while parsing the query param"))?;
            let value = serde_json::from_str::<Value>(v)
                .unwrap_or_else(|_| Value::String(v.to_string()));
            out.insert(k.to_string(), value);
        }
        Ok(Some(Value::Object(out)))
    }
}

/// Decode `%xx` escapes and `+` as space, tolerating malformed escapes by
/// passing them through unchanged.
pub(crate) fn percent_decode(input: &str) -> String {
    let plus_decoded = input.replace('+', " ");
    percent_encoding::percent_decode_str(&plus_decoded)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or(plus_decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        QueryParams::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn test_get_skips_empty_values() {
        let p = params(&[("a", ""), ("b", "1")]);
        assert_eq!(p.get("a"), None);
        assert_eq!(p.get("b"), Some("1"));
        assert_eq!(p.get("missing"), None);
    }

    #[test]
    fn test_get_int_strict() {
        let p = params(&[("n", "42"), ("bad", "abc")]);
        assert_eq!(p.get_int("n").unwrap(), Some(42));
        let err = p.get_int("bad").unwrap_err();
        assert_eq!(err.to_string(), "parsing error key:bad msg:'abc' is not a int");
    }

    #[test]
    fn test_get_bool_as_int() {
        let p = params(&[("t", "true"), ("f", "false"), ("n", "1"), ("x", "maybe")]);
        assert_eq!(p.get_bool_as_int("t").unwrap(), Some(1));
        assert_eq!(p.get_bool_as_int("f").unwrap(), Some(0));
        assert_eq!(p.get_bool_as_int("n").unwrap(), Some(1));
        assert!(p.get_bool_as_int("x").is_err());
    }

    #[test]
    fn test_string_array_keeps_empty_segments() {
        let p = params(&[("a", "x,,y")]);
        assert_eq!(
            p.get_string_array("a").unwrap(),
            vec!["x".to_string(), "".to_string(), "y".to_string()]
        );
    }

    #[test]
    fn test_int_array_drops_bad_segments() {
        let p = params(&[("a", "1,x,3")]);
        assert_eq!(p.get_int_array("a").unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_custom_separator() {
        let p = params(&[("a", "1|2|3")]).with_separator("|");
        assert_eq!(p.get_int_array("a").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_get_json_requires_object() {
        let p = params(&[("j", r#"{"k":1}"#), ("arr", "[1,2]")]);
        assert_eq!(p.get_json("j").unwrap(), Some(json!({"k": 1})));
        assert!(p.get_json("arr").is_err());
    }

    #[test]
    fn test_get_unescaped_json() {
        let p = params(&[("j", "%7B%22k%22%3A%22v%22%7D")]);
        assert_eq!(p.get_unescaped_json("j").unwrap(), Some(json!({"k": "v"})));
    }

    #[test]
    fn test_get_nested_params() {
        let p = params(&[("kv", "age=23&name=test")]);
        assert_eq!(
            p.get_nested_params("kv").unwrap(),
            Some(json!({"age": 23, "name": "test"}))
        );

        let bad = params(&[("kv", "novalue")]);
        assert!(bad.get_nested_params("kv").is_err());
    }

    #[test]
    fn test_from_query_string_decodes() {
        let p = QueryParams::from_query_string("site.page=https%3A%2F%2Fa.com%2Fp&req.id=r1");
        assert_eq!(p.get("site.page"), Some("https://a.com/p"));
        assert_eq!(p.get("req.id"), Some("r1"));
    }
}
