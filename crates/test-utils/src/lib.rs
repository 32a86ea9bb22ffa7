//! Form helper test utilities.
//!
//! Helpers for integration testing: engines with the form helpers
//! pre-registered, a registry that records registrations, and assertion
//! utilities for generated markup.

use std::sync::LazyLock;

use form_helpers::HelperConfig;
use form_helpers::form::{HelperDescriptor, HelperRegistry, register_helpers};
use handlebars::Handlebars;
use regex::Regex;
use tera::Tera;

/// Registry that only records which helpers were registered, in order.
#[derive(Debug, Default)]
pub struct RecordingRegistry {
    pub registered: Vec<(String, &'static HelperDescriptor)>,
}

impl RecordingRegistry {
    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.registered.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Look up a registered helper by its full name.
    pub fn get(&self, name: &str) -> Option<&'static HelperDescriptor> {
        self.registered
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, h)| *h)
    }
}

impl HelperRegistry for RecordingRegistry {
    fn register_form_helper(&mut self, name: &str, helper: &'static HelperDescriptor) {
        self.registered.push((name.to_string(), helper));
    }
}

/// Tera instance with the helpers registered under `config`.
pub fn tera_with_helpers(config: &HelperConfig) -> Tera {
    let mut tera = Tera::default();
    register_helpers(&mut tera, config);
    tera
}

/// Handlebars instance with the helpers registered under `config`.
pub fn handlebars_with_helpers(config: &HelperConfig) -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    register_helpers(&mut hbs, config);
    hbs
}

/// Regex for `key="value"` attribute pairs.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.\[\]]*)="([^"]*)""#).expect("valid attribute pattern")
});

/// All `key="value"` attributes in `html`, in document order.
pub fn attributes(html: &str) -> Vec<(String, String)> {
    ATTRIBUTE
        .captures_iter(html)
        .map(|c| (c[1].to_string(), c[2].to_string()))
        .collect()
}

/// Value of the first attribute named `name` in `html`.
pub fn attribute(html: &str, name: &str) -> Option<String> {
    attributes(html)
        .into_iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v)
}

/// Number of attributes named `name` in `html`.
pub fn attribute_count(html: &str, name: &str) -> usize {
    attributes(html).iter().filter(|(k, _)| k == name).count()
}

/// Assertion helpers for generated markup.
pub mod assert {
    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that every opened `tag` is closed, in order.
    pub fn balanced(html: &str, tag: &str) {
        let open = format!("<{tag}");
        let close = format!("</{tag}>");
        let mut depth: i32 = 0;
        let mut rest = html;
        loop {
            let next_open = rest.find(&open);
            let next_close = rest.find(&close);
            match (next_open, next_close) {
                (Some(o), Some(c)) if o < c => {
                    depth += 1;
                    rest = &rest[o + open.len()..];
                }
                (_, Some(c)) => {
                    depth -= 1;
                    assert!(depth >= 0, "unexpected {close} in: {html}");
                    rest = &rest[c + close.len()..];
                }
                (Some(o), None) => {
                    depth += 1;
                    rest = &rest[o + open.len()..];
                }
                (None, None) => break,
            }
        }
        assert_eq!(depth, 0, "unbalanced <{tag}> in: {html}");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_in_order() {
        let html = r#"<input id="field-food[]" name="food[]" value="" />"#;
        assert_eq!(
            attributes(html),
            vec![
                ("id".to_string(), "field-food[]".to_string()),
                ("name".to_string(), "food[]".to_string()),
                ("value".to_string(), String::new()),
            ]
        );
        assert_eq!(attribute(html, "name").as_deref(), Some("food[]"));
        assert_eq!(attribute_count(html, "id"), 1);
        assert_eq!(attribute(html, "type"), None);
    }

    #[test]
    fn test_recording_registry() {
        let mut registry = RecordingRegistry::default();
        register_helpers(&mut registry, &HelperConfig::default());
        assert!(registry.names().contains(&"form-open"));
        assert_eq!(registry.get("form-open").unwrap().name, "open");
    }

    #[test]
    fn test_balanced() {
        assert::balanced("<form a=\"1\"><p></p></form>", "form");
    }

    #[test]
    #[should_panic(expected = "unbalanced")]
    fn test_unbalanced() {
        assert::balanced("<form>", "form");
    }
}
