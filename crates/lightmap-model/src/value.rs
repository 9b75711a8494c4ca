//! Loosely typed values and source records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A loosely typed value read from a source record or written to a target.
pub type Value = serde_json::Value;

/// An untyped bag of source fields.
///
/// A key is present when the record owns it, even if its value is null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceRecord {
    fields: BTreeMap<String, Value>,
}

impl SourceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a JSON object; any other JSON value is rejected.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SourceRecord
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = SourceRecord::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn null_valued_key_is_present() {
        let record = SourceRecord::new().with("x", Value::Null);
        assert!(record.contains_key("x"));
        assert_eq!(record.get("x"), Some(&Value::Null));
        assert!(!record.contains_key("y"));
    }

    #[test]
    fn from_json_requires_an_object() {
        let record = SourceRecord::from_json(json!({"a": 1, "b": "two"})).unwrap();
        assert_eq!(record.len(), 2);
        assert!(SourceRecord::from_json(json!(["a", "b"])).is_err());
    }
}
