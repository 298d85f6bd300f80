#![forbid(unsafe_code)]

//! The record abstraction.
//!
//! A record is an ordered mapping from field name to a displayable value.
//! The table never mutates records; it only asks for their field names (to
//! derive columns when `only_keys` is empty) and for individual values.

use std::collections::BTreeMap;
use std::fmt::Display;

/// One row's worth of named fields.
pub trait Record {
    /// Field names in this record's own order.
    ///
    /// Column derivation unions these across all records, keeping
    /// first-seen order, so implementations backed by ordered containers
    /// give deterministic column layouts.
    fn keys(&self) -> Vec<String>;

    /// The value for `key` in its natural string form.
    ///
    /// `None` means absent (or null), which renders as an empty cell.
    fn get(&self, key: &str) -> Option<String>;
}

impl<V: Display> Record for Vec<(String, V)> {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.to_string())
    }
}

impl<V: Display> Record for BTreeMap<String, V> {
    fn keys(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).map(ToString::to_string)
    }
}

#[cfg(feature = "json")]
impl Record for serde_json::Map<String, serde_json::Value> {
    fn keys(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        match serde_json::Map::get(self, key)? {
            serde_json::Value::Null => None,
            // Strings render unquoted
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(feature = "json")]
impl Record for serde_json::Value {
    fn keys(&self) -> Vec<String> {
        match self {
            serde_json::Value::Object(map) => Record::keys(map),
            _ => Vec::new(),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        match self {
            serde_json::Value::Object(map) => Record::get(map, key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_preserve_declaration_order() {
        let rec = vec![("b".to_string(), 1), ("a".to_string(), 2)];
        assert_eq!(rec.keys(), vec!["b", "a"]);
    }

    #[test]
    fn pairs_lookup_by_key() {
        let rec = vec![("id".to_string(), 7)];
        assert_eq!(rec.get("id"), Some("7".to_string()));
        assert_eq!(rec.get("name"), None);
    }

    #[test]
    fn btree_map_is_a_record() {
        let mut rec = BTreeMap::new();
        rec.insert("name".to_string(), "Ann");
        assert_eq!(Record::keys(&rec), vec!["name"]);
        assert_eq!(Record::get(&rec, "name"), Some("Ann".to_string()));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_null_is_absent() {
        let value: serde_json::Value =
            serde_json::json!({ "id": 1, "gone": null, "name": "Ann" });
        assert_eq!(Record::get(&value, "gone"), None);
        assert_eq!(Record::get(&value, "id"), Some("1".to_string()));
        // Strings come through without quotes
        assert_eq!(Record::get(&value, "name"), Some("Ann".to_string()));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_object_keys_in_document_order() {
        let value: serde_json::Value = serde_json::json!({ "z": 1, "a": 2 });
        assert_eq!(Record::keys(&value), vec!["z", "a"]);
    }
}
