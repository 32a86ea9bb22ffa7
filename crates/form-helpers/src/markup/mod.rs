//! Markup builder primitives.
//!
//! Helpers describe an element as a tag name, an ordered attribute mapping
//! and optional content; this module turns that into HTML.

mod attrs;
mod tag;

pub use attrs::{AttrValue, Attributes, scalar_string};
pub use tag::{close_tag, create_element, html_escape, open_tag};

use std::fmt;

/// Markup that is already escaped and must be emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wrap generated markup.
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Borrow the markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the markup.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SafeHtml> for String {
    fn from(html: SafeHtml) -> Self {
        html.0
    }
}
