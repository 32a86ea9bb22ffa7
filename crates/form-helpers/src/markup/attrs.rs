//! Ordered HTML attribute mappings.

use indexmap::IndexMap;
use serde_json::Value;

/// Value of a single attribute.
///
/// An attribute missing from [`Attributes`] is unset. `Removed` is an
/// explicit request to omit the attribute, and survives merging so callers
/// can suppress attributes a helper would otherwise emit (including the
/// synthesized `id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered as `key="value"`, even when empty.
    Text(String),
    /// Never rendered.
    Removed,
}

impl AttrValue {
    /// Convert a template engine value.
    ///
    /// `false` and `null` remove the attribute, `true` renders as `"true"`,
    /// and arrays are joined with spaces (class lists).
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => AttrValue::Removed,
            Value::Bool(true) => AttrValue::Text("true".to_string()),
            Value::String(s) => AttrValue::Text(s.clone()),
            Value::Number(n) => AttrValue::Text(n.to_string()),
            Value::Array(items) => AttrValue::Text(
                items
                    .iter()
                    .filter_map(scalar_string)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            Value::Object(_) => AttrValue::Text(value.to_string()),
        }
    }

    /// The text value, if the attribute is present.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Removed => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        if value {
            AttrValue::Text("true".to_string())
        } else {
            AttrValue::Removed
        }
    }
}

/// String form of a scalar engine value. `null`, arrays and objects have none.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Insertion-ordered attribute mapping.
///
/// Setting an existing key replaces its value in place, so the first
/// declaration fixes an attribute's position and the last one fixes its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, AttrValue>,
}

impl Attributes {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an engine object, in the object's key order.
    pub fn from_json_map(map: &serde_json::Map<String, Value>) -> Self {
        map.iter()
            .map(|(k, v)| (k.clone(), AttrValue::from_json(v)))
            .collect()
    }

    /// Set an attribute.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an attribute when a value is given; leave it unset otherwise.
    pub fn with_opt(self, key: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Mark an attribute as explicitly removed.
    pub fn without(self, key: impl Into<String>) -> Self {
        self.with(key, AttrValue::Removed)
    }

    /// Set an attribute in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up an attribute. `None` means unset.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// The text value of an attribute, if present and not removed.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AttrValue::as_text)
    }

    /// Whether the key is set at all (including as removed).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys, removed ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge caller overrides over these attributes.
    ///
    /// Override values win on collision. Keys only present in `overrides`
    /// are appended in their order. `Removed` overrides are kept.
    pub fn merge(mut self, overrides: &Attributes) -> Self {
        for (key, value) in &overrides.entries {
            self.entries.insert(key.clone(), value.clone());
        }
        self
    }
}

impl<K: Into<String>> FromIterator<(K, AttrValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, AttrValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_override_wins_and_keeps_position() {
        let base = Attributes::new()
            .with("name", "title")
            .with("type", "text");
        let overrides = Attributes::new()
            .with("class", "wide")
            .with("type", "search");

        let merged = base.merge(&overrides);
        let keys: Vec<_> = merged.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "type", "class"]);
        assert_eq!(merged.text("type"), Some("search"));
    }

    #[test]
    fn test_merge_preserves_removed() {
        let base = Attributes::new().with("id", "field-x");
        let merged = base.merge(&Attributes::new().without("id"));
        assert_eq!(merged.get("id"), Some(&AttrValue::Removed));
        assert!(merged.contains_key("id"));
        assert_eq!(merged.text("id"), None);
    }

    #[test]
    fn test_with_opt_leaves_unset() {
        let attrs = Attributes::new().with_opt("value", None);
        assert!(attrs.is_empty());

        let attrs = Attributes::new().with_opt("value", Some(""));
        assert_eq!(attrs.get("value"), Some(&AttrValue::Text(String::new())));
    }

    #[test]
    fn test_from_json_values() {
        assert_eq!(AttrValue::from_json(&json!(false)), AttrValue::Removed);
        assert_eq!(AttrValue::from_json(&json!(null)), AttrValue::Removed);
        assert_eq!(AttrValue::from_json(&json!(true)), AttrValue::from("true"));
        assert_eq!(AttrValue::from_json(&json!(3)), AttrValue::from("3"));
        assert_eq!(
            AttrValue::from_json(&json!(["btn", "btn-primary"])),
            AttrValue::from("btn btn-primary")
        );
    }

    #[test]
    fn test_from_json_map_keeps_order() {
        let value = json!({"placeholder": "Name", "class": "input", "disabled": false});
        let attrs = Attributes::from_json_map(value.as_object().unwrap());
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["placeholder", "class", "disabled"]);
        assert_eq!(attrs.get("disabled"), Some(&AttrValue::Removed));
    }
}
