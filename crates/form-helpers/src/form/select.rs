//! Select option catalogs and selection state.

use chrono::Month;
use serde::Serialize;
use serde_json::Value;

use crate::error::{FormHelperError, FormHelperResult};
use crate::markup::{Attributes, create_element, html_escape, scalar_string};

/// Largest number of options `select-range` will generate.
pub const MAX_RANGE_LEN: u64 = 10_000;

/// Position of the first item whose scalar text equals `find`.
///
/// Strings compare by content, numbers and booleans by their text form.
/// Other values never match.
pub fn index_of<T: Serialize>(items: &[T], find: &str) -> Option<usize> {
    items.iter().position(|item| {
        serde_json::to_value(item)
            .ok()
            .and_then(|value| scalar_string(&value))
            .is_some_and(|text| text == find)
    })
}

/// Selected value(s) of a select element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A single selected value.
    One(String),
    /// Several selected values; renders the select as `multiple`.
    Many(Vec<String>),
}

impl Selection {
    /// Convert a template engine value.
    ///
    /// `null`, `false` and the empty string select nothing. Arrays keep
    /// their scalar members.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Array(items) => Some(Selection::Many(
                items.iter().filter_map(scalar_string).collect(),
            )),
            other => scalar_string(other).map(Selection::One),
        }
    }

    /// Whether an option value is selected.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Selection::One(selected) => selected == value,
            Selection::Many(selected) => selected.iter().any(|s| s == value),
        }
    }

    /// Whether the selection is a sequence.
    pub fn is_multiple(&self) -> bool {
        matches!(self, Selection::Many(_))
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::One(value.to_string())
    }
}

impl<S: Into<String>> From<Vec<S>> for Selection {
    fn from(values: Vec<S>) -> Self {
        Selection::Many(values.into_iter().map(Into::into).collect())
    }
}

/// One entry of an option catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionEntry {
    /// `<option value="…">label</option>`
    Item { value: String, label: String },
    /// `<optgroup label="…">` wrapping its own options.
    Group {
        label: String,
        options: Vec<(String, String)>,
    },
}

/// Ordered option catalog for a select element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
    entries: Vec<OptionEntry>,
}

impl SelectOptions {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(value, label)` pairs.
    pub fn from_pairs<V, L>(pairs: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        let mut options = Self::new();
        for (value, label) in pairs {
            options = options.option(value, label);
        }
        options
    }

    /// Add an option.
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.entries.push(OptionEntry::Item {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    /// Add an option group.
    pub fn group(mut self, label: impl Into<String>, options: Vec<(String, String)>) -> Self {
        self.entries.push(OptionEntry::Group {
            label: label.into(),
            options,
        });
        self
    }

    /// Convert a template engine value.
    ///
    /// A mapping yields `value => label` options in mapping order, with
    /// nested mappings becoming option groups. A list of scalars uses each
    /// scalar as both value and label. Anything else is rejected.
    pub fn from_json(helper: &'static str, value: &Value) -> FormHelperResult<Self> {
        match value {
            Value::Object(map) => {
                let mut options = Self::new();
                for (key, entry) in map {
                    options = match entry {
                        Value::Object(group) => options.group(
                            key.clone(),
                            group
                                .iter()
                                .map(|(v, l)| (v.clone(), scalar_string(l).unwrap_or_default()))
                                .collect(),
                        ),
                        other => {
                            options.option(key.clone(), scalar_string(other).unwrap_or_default())
                        }
                    };
                }
                Ok(options)
            }
            Value::Array(items) => {
                let mut options = Self::new();
                for item in items {
                    let Some(value) = scalar_string(item) else {
                        return Err(FormHelperError::InvalidOptions {
                            helper,
                            found: format!("list containing {}", json_kind(item)),
                        });
                    };
                    options = options.option(value.clone(), value);
                }
                Ok(options)
            }
            other => Err(FormHelperError::InvalidOptions {
                helper,
                found: json_kind(other).to_string(),
            }),
        }
    }

    /// Integers from `start` to `end` inclusive, counting down when
    /// `start > end`.
    ///
    /// Fails with [`FormHelperError::InvalidArgument`] when the range holds
    /// more than [`MAX_RANGE_LEN`] values.
    pub fn range(start: i64, end: i64) -> FormHelperResult<Self> {
        let span = start.abs_diff(end);
        if span >= MAX_RANGE_LEN {
            return Err(FormHelperError::InvalidArgument {
                helper: "select-range",
                argument: "end",
                reason: format!("range {start}..={end} exceeds {MAX_RANGE_LEN} options"),
            });
        }
        let pair = |n: i64| (n.to_string(), n.to_string());
        Ok(if start <= end {
            Self::from_pairs((start..=end).map(pair))
        } else {
            Self::from_pairs((end..=start).rev().map(pair))
        })
    }

    /// Months of the year, numbered from 1.
    pub fn months() -> Self {
        let months = std::iter::successors(Some(Month::January), |m| {
            (*m != Month::December).then(|| m.succ())
        });
        Self::from_pairs(months.map(|m| (m.number_from_month().to_string(), m.name())))
    }

    /// Iterate entries in order.
    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the `<option>` (and `<optgroup>`) markup for a select named `name`.
    pub fn render(&self, name: &str, selected: Option<&Selection>) -> String {
        let mut html = String::new();
        for entry in &self.entries {
            match entry {
                OptionEntry::Item { value, label } => {
                    html.push_str(&render_option(name, value, label, selected));
                }
                OptionEntry::Group { label, options } => {
                    let inner: String = options
                        .iter()
                        .map(|(value, label)| render_option(name, value, label, selected))
                        .collect();
                    let attrs = Attributes::new()
                        .without("id")
                        .with("label", label.as_str());
                    html.push_str(&create_element(
                        "optgroup",
                        true,
                        &attrs,
                        Some(inner.as_str()),
                    ));
                }
            }
        }
        html
    }
}

fn render_option(name: &str, value: &str, label: &str, selected: Option<&Selection>) -> String {
    let mut attrs = Attributes::new()
        .with("value", value)
        .with("id", format!("field-{name}-{value}"));
    if selected.is_some_and(|s| s.contains(value)) {
        attrs.set("selected", "selected");
    }
    create_element("option", true, &attrs, Some(html_escape(label).as_str()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
