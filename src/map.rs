//! Ordered map type for JSON objects.
//!
//! [`JsonMap`] wraps an [`IndexMap`] so object members serialize in the order
//! they were inserted or decoded. Equality ignores order, matching JSON object
//! semantics.
//!
//! ```rust
//! use serde_json_element::{JsonElement, JsonMap};
//!
//! let mut map = JsonMap::new();
//! map.insert("literal".to_string(), JsonElement::from(1));
//! map.insert("name".to_string(), JsonElement::from("Alice"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::JsonElement;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of member names to elements.
///
/// # Examples
///
/// ```rust
/// use serde_json_element::{JsonElement, JsonMap};
///
/// let mut map = JsonMap::new();
/// map.insert("first".to_string(), JsonElement::from(1));
/// map.insert("second".to_string(), JsonElement::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonMap(IndexMap<String, JsonElement>);

impl JsonMap {
    #[must_use]
    pub fn new() -> Self {
        JsonMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a member, returning the previous value for `key`.
    ///
    /// A replaced member keeps its original position.
    pub fn insert(&mut self, key: String, value: JsonElement) -> Option<JsonElement> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonElement> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut JsonElement> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a member, shifting later members down to keep order.
    pub fn remove(&mut self, key: &str) -> Option<JsonElement> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, JsonElement> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, JsonElement> {
        self.0.values()
    }

    /// Iterates over members in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, JsonElement> {
        self.0.iter()
    }
}

impl From<HashMap<String, JsonElement>> for JsonMap {
    fn from(map: HashMap<String, JsonElement>) -> Self {
        JsonMap(map.into_iter().collect())
    }
}

impl From<JsonMap> for HashMap<String, JsonElement> {
    fn from(map: JsonMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for JsonMap {
    type Item = (String, JsonElement);
    type IntoIter = indexmap::map::IntoIter<String, JsonElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonMap {
    type Item = (&'a String, &'a JsonElement);
    type IntoIter = indexmap::map::Iter<'a, String, JsonElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, JsonElement)> for JsonMap {
    fn from_iter<T: IntoIterator<Item = (String, JsonElement)>>(iter: T) -> Self {
        JsonMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_order() {
        let a: JsonMap = vec![
            ("x".to_string(), JsonElement::from(1)),
            ("y".to_string(), JsonElement::from(2)),
        ]
        .into_iter()
        .collect();
        let b: JsonMap = vec![
            ("y".to_string(), JsonElement::from(2)),
            ("x".to_string(), JsonElement::from(1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut map: JsonMap = ["a", "b", "c"]
            .iter()
            .map(|k| (k.to_string(), JsonElement::Null))
            .collect();
        assert!(map.remove("b").is_some());
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "c"]);
        assert!(!map.contains_key("b"));
    }
}
