//! Tag rendering primitives.

use super::attrs::{AttrValue, Attributes};

/// Escape a string for use in HTML text or attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render a start tag.
///
/// When `attrs` has no `id` key at all, `id="field-{name}"` is synthesized
/// and rendered first. A removed `id` suppresses it. Void elements
/// (`closing == false`) are self-closed.
pub fn open_tag(tag: &str, closing: bool, attrs: &Attributes) -> String {
    let mut parts = vec![format!("<{tag}")];

    if !attrs.contains_key("id") {
        let name = attrs.text("name").unwrap_or_default();
        parts.push(format!("id=\"field-{}\"", html_escape(name)));
    }

    for (key, value) in attrs.iter() {
        if let AttrValue::Text(text) = value {
            parts.push(format!("{key}=\"{}\"", html_escape(text)));
        }
    }

    let mut html = parts.join(" ");
    if !closing {
        html.push_str(" /");
    }
    html.push('>');
    html
}

/// Render a close tag.
pub fn close_tag(tag: &str) -> String {
    format!("</{tag}>")
}

/// Render a complete element.
///
/// Content and the close tag are only emitted when `closing` is set; void
/// elements drop `contents`.
pub fn create_element(
    tag: &str,
    closing: bool,
    attrs: &Attributes,
    contents: Option<&str>,
) -> String {
    let mut html = open_tag(tag, closing, attrs);
    if closing {
        html.push_str(contents.unwrap_or_default());
        html.push_str(&close_tag(tag));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tag_synthesizes_id_first() {
        let attrs = Attributes::new().with("name", "email").with("type", "email");
        assert_eq!(
            open_tag("input", false, &attrs),
            r#"<input id="field-email" name="email" type="email" />"#
        );
    }

    #[test]
    fn test_open_tag_explicit_id() {
        let attrs = Attributes::new().with("name", "q").with("id", "search");
        assert_eq!(
            open_tag("input", false, &attrs),
            r#"<input name="q" id="search" />"#
        );
    }

    #[test]
    fn test_open_tag_removed_id() {
        let attrs = Attributes::new().with("name", "q").without("id");
        let html = open_tag("input", false, &attrs);
        assert!(!html.contains("id="));
    }

    #[test]
    fn test_open_tag_without_name() {
        let html = open_tag("div", true, &Attributes::new());
        assert_eq!(html, r#"<div id="field-">"#);
    }

    #[test]
    fn test_open_tag_bool_and_empty_values() {
        let attrs = Attributes::new()
            .with("id", "x")
            .with("required", true)
            .with("disabled", false)
            .with("value", "");
        assert_eq!(
            open_tag("input", false, &attrs),
            r#"<input id="x" required="true" value="" />"#
        );
    }

    #[test]
    fn test_open_tag_escapes_values() {
        let attrs = Attributes::new()
            .with("id", "x")
            .with("value", r#"say "hi" & <bye>"#);
        assert_eq!(
            open_tag("input", false, &attrs),
            r#"<input id="x" value="say &quot;hi&quot; &amp; &lt;bye&gt;" />"#
        );
    }

    #[test]
    fn test_close_tag() {
        assert_eq!(close_tag("form"), "</form>");
    }

    #[test]
    fn test_create_element_with_content() {
        let attrs = Attributes::new().with("id", "l").with("for", "name");
        assert_eq!(
            create_element("label", true, &attrs, Some("Name")),
            r#"<label id="l" for="name">Name</label>"#
        );
        assert_eq!(
            create_element("label", true, &attrs, None),
            r#"<label id="l" for="name"></label>"#
        );
    }

    #[test]
    fn test_create_element_void_drops_content() {
        let attrs = Attributes::new().with("name", "n");
        let html = create_element("input", false, &attrs, Some("<b>body</b>"));
        assert_eq!(html, r#"<input id="field-n" name="n" />"#);
        assert!(!html.contains("body"));
        assert!(!html.contains("</input>"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<>&\"'"), "&lt;&gt;&amp;&quot;&#x27;");
    }
}
