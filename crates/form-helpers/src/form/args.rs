//! Engine-neutral helper call arguments.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::markup::{AttrValue, Attributes, scalar_string};

/// Named argument that carries an attribute override object in engines
/// without a separate keyword hash.
pub const ATTRS_ARGUMENT: &str = "attrs";

/// Arguments of one helper call: positional values plus attribute overrides.
#[derive(Debug, Clone, Default)]
pub struct HelperArgs {
    positional: Vec<Value>,
    overrides: Attributes,
}

impl HelperArgs {
    /// Create arguments from positional values and a keyword hash.
    pub fn new(positional: Vec<Value>, overrides: Attributes) -> Self {
        Self {
            positional,
            overrides,
        }
    }

    /// Build arguments from named parameters.
    ///
    /// Arguments named in `params` fill the positional slots in order
    /// (missing ones are `null`). The `attrs` object, if any, supplies the
    /// first overrides; every other named argument follows in key order.
    pub fn from_named(params: &[&str], args: &HashMap<String, Value>) -> Self {
        let positional = params
            .iter()
            .map(|p| args.get(*p).cloned().unwrap_or(Value::Null))
            .collect();

        let mut overrides = match args.get(ATTRS_ARGUMENT) {
            Some(Value::Object(map)) => Attributes::from_json_map(map),
            _ => Attributes::new(),
        };

        let extra: BTreeMap<&String, &Value> = args
            .iter()
            .filter(|(k, _)| k.as_str() != ATTRS_ARGUMENT && !params.contains(&k.as_str()))
            .collect();
        for (key, value) in extra {
            overrides.set(key.as_str(), AttrValue::from_json(value));
        }

        Self::new(positional, overrides)
    }

    /// Positional value at `index`; `null` counts as absent.
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.positional.get(index).filter(|v| !v.is_null())
    }

    /// Positional value as a string, if it is a scalar.
    pub fn opt_string(&self, index: usize) -> Option<String> {
        self.value(index).and_then(scalar_string)
    }

    /// Positional value as a string, empty when absent.
    pub fn string(&self, index: usize) -> String {
        self.opt_string(index).unwrap_or_default()
    }

    /// Caller attribute overrides.
    pub fn overrides(&self) -> &Attributes {
        &self.overrides
    }
}
