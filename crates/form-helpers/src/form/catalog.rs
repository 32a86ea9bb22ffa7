//! Form field helpers.
//!
//! Each helper builds the base attributes for its field type, merges the
//! caller's overrides on top (overrides win) and renders the element.

use serde_json::Value;

use crate::error::FormHelperResult;
use crate::markup::{
    AttrValue, Attributes, SafeHtml, close_tag, create_element, html_escape, open_tag,
};

use super::select::{SelectOptions, Selection};

/// Default name of the CSRF token field.
pub const DEFAULT_TOKEN_NAME: &str = "_token";

/// Checked state of a checkbox or radio button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checked {
    /// Checked when `true`.
    Flag(bool),
    /// Checked when equal to the field value.
    Value(String),
}

impl Checked {
    /// Convert a template engine value. Strings and numbers compare against
    /// the field value by their text, so `1` checks a field valued `"1"`;
    /// anything else is a flag.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Checked::Flag(*b),
            Value::String(s) => Checked::Value(s.clone()),
            Value::Number(n) => Checked::Value(n.to_string()),
            _ => Checked::Flag(false),
        }
    }

    /// Whether a field with `value` is checked.
    pub fn is_checked(&self, value: &str) -> bool {
        match self {
            Checked::Flag(flag) => *flag,
            Checked::Value(checked) => checked == value,
        }
    }
}

impl From<bool> for Checked {
    fn from(flag: bool) -> Self {
        Checked::Flag(flag)
    }
}

impl From<&str> for Checked {
    fn from(value: &str) -> Self {
        Checked::Value(value.to_string())
    }
}

fn element(
    tag: &str,
    closing: bool,
    base: Attributes,
    attrs: &Attributes,
    body: Option<&str>,
) -> SafeHtml {
    SafeHtml::new(create_element(tag, closing, &base.merge(attrs), body))
}

fn input_field(kind: &str, name: &str, value: Option<&str>, attrs: &Attributes) -> SafeHtml {
    let base = Attributes::new()
        .with("name", name)
        .with_opt("value", value)
        .with("type", kind);
    element("input", false, base, attrs, None)
}

/// Opening `<form>` tag. `{{form-open "login" "/login" class="form"}}`
pub fn open(name: &str, url: &str, attrs: &Attributes) -> SafeHtml {
    let base = Attributes::new()
        .with("name", name)
        .with("id", format!("form-{name}"))
        .with("action", url)
        .with("method", "POST");
    SafeHtml::new(open_tag("form", true, &base.merge(attrs)))
}

/// Closing `</form>` tag.
pub fn close() -> SafeHtml {
    SafeHtml::new(close_tag("form"))
}

/// `<label>` for the input named `input`.
pub fn label(input: &str, body: Option<&str>, attrs: &Attributes) -> SafeHtml {
    let base = Attributes::new()
        .with("id", format!("label-{input}"))
        .with("for", input);
    element("label", true, base, attrs, body)
}

/// Hidden CSRF token field, named `_token` unless `name` is given.
pub fn token(name: Option<&str>, token: Option<&str>) -> SafeHtml {
    let base = Attributes::new()
        .with("type", "hidden")
        .with("name", name.unwrap_or(DEFAULT_TOKEN_NAME))
        .with("value", token.unwrap_or_default())
        .without("id");
    element("input", false, base, &Attributes::new(), None)
}

/// Hidden field.
pub fn hidden(name: &str, value: Option<&str>, attrs: &Attributes) -> SafeHtml {
    input_field("hidden", name, value, attrs)
}

/// Password field. Never pre-filled.
pub fn password(name: &str, attrs: &Attributes) -> SafeHtml {
    input_field("password", name, None, attrs)
}

/// Text field.
pub fn text(name: &str, value: Option<&str>, attrs: &Attributes) -> SafeHtml {
    input_field("text", name, value, attrs)
}

/// Alias of [`text`].
pub fn input(name: &str, value: Option<&str>, attrs: &Attributes) -> SafeHtml {
    text(name, value, attrs)
}

/// `<textarea>`; the body is escaped since textareas hold plain text.
pub fn textarea(name: &str, body: Option<&str>, attrs: &Attributes) -> SafeHtml {
    let base = Attributes::new().with("name", name);
    let body = body.map(html_escape);
    element("textarea", true, base, attrs, body.as_deref())
}

/// File upload field.
pub fn file(name: &str, attrs: &Attributes) -> SafeHtml {
    input_field("file", name, None, attrs)
}

/// Email field.
pub fn email(name: &str, value: Option<&str>, attrs: &Attributes) -> SafeHtml {
    input_field("email", name, value, attrs)
}

/// Date field.
pub fn date(name: &str, value: Option<&str>, attrs: &Attributes) -> SafeHtml {
    input_field("date", name, value, attrs)
}

/// Number field.
pub fn number(name: &str, value: Option<&str>, attrs: &Attributes) -> SafeHtml {
    input_field("number", name, value, attrs)
}

/// Checkbox. `{{form-checkbox "food[]" "apples" true}}`
pub fn checkbox(name: &str, value: &str, checked: &Checked, attrs: &Attributes) -> SafeHtml {
    let mut base = Attributes::new()
        .with("name", name)
        .with("value", value)
        .with("type", "checkbox");
    if checked.is_checked(value) {
        base.set("checked", "checked");
    }
    element("input", false, base, attrs, None)
}

/// Radio button with a per-value id, e.g. `field-likes_cats-1`.
///
/// Names using the multiple-value convention (`food[]`) get no id at all.
pub fn radio(name: &str, value: &str, checked: &Checked, attrs: &Attributes) -> SafeHtml {
    let mut base = Attributes::new()
        .with("name", name)
        .with("value", value)
        .with("id", format!("field-{name}-{value}"))
        .with("type", "radio");
    if checked.is_checked(value) {
        base.set("checked", "checked");
    }
    if name.ends_with("[]") {
        base = base.without("id");
    }
    element("input", false, base, attrs, None)
}

/// `<select>` with one `<option>` per catalog entry.
///
/// A [`Selection::Many`] renders the select as `multiple`.
pub fn select(
    name: &str,
    options: &SelectOptions,
    selected: Option<&Selection>,
    attrs: &Attributes,
) -> SafeHtml {
    let multiple = if selected.is_some_and(Selection::is_multiple) {
        AttrValue::from("multiple")
    } else {
        AttrValue::Removed
    };
    let base = Attributes::new().with("name", name).with("multiple", multiple);
    let body = options.render(name, selected);
    element("select", true, base, attrs, Some(body.as_str()))
}

/// `<select>` over the integers `start..=end` (descending if `start > end`).
pub fn select_range(
    name: &str,
    start: i64,
    end: i64,
    selected: Option<&Selection>,
    attrs: &Attributes,
) -> FormHelperResult<SafeHtml> {
    let options = SelectOptions::range(start, end)?;
    Ok(select(name, &options, selected, attrs))
}

/// `<select>` over the months of the year.
pub fn select_month(name: &str, selected: Option<&Selection>, attrs: &Attributes) -> SafeHtml {
    select(name, &SelectOptions::months(), selected, attrs)
}

fn button_element(kind: &str, name: &str, body: Option<&str>, attrs: &Attributes) -> SafeHtml {
    let base = Attributes::new()
        .with("name", name)
        .with("id", format!("{kind}-{name}"))
        .with("type", kind);
    element("button", true, base, attrs, body)
}

/// Plain button.
pub fn button(name: &str, body: Option<&str>, attrs: &Attributes) -> SafeHtml {
    button_element("button", name, body, attrs)
}

/// Submit button.
pub fn submit(name: &str, body: Option<&str>, attrs: &Attributes) -> SafeHtml {
    button_element("submit", name, body, attrs)
}

/// Image button.
pub fn image(name: &str, body: Option<&str>, attrs: &Attributes) -> SafeHtml {
    button_element("image", name, body, attrs)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn none() -> Attributes {
        Attributes::new()
    }

    #[test]
    fn test_open_and_close() {
        let html = format!(
            "{}{}{}",
            open("login", "/login", &none()),
            "<p>fields</p>",
            close()
        );
        assert_eq!(
            html,
            r#"<form name="login" id="form-login" action="/login" method="POST"><p>fields</p></form>"#
        );
    }

    #[test]
    fn test_open_overrides() {
        let attrs = Attributes::new().with("method", "GET").with("class", "form");
        assert_eq!(
            open("search", "/s", &attrs).as_str(),
            r#"<form name="search" id="form-search" action="/s" method="GET" class="form">"#
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(
            label("name", Some("Your name"), &none()).as_str(),
            r#"<label id="label-name" for="name">Your name</label>"#
        );
    }

    #[test]
    fn test_token_defaults() {
        assert_eq!(
            token(None, None).as_str(),
            r#"<input type="hidden" name="_token" value="" />"#
        );
        assert_eq!(
            token(Some("csrf"), Some("abc")).as_str(),
            r#"<input type="hidden" name="csrf" value="abc" />"#
        );
    }

    #[test]
    fn test_text_fields() {
        assert_eq!(
            text("first", Some("Ann"), &none()).as_str(),
            r#"<input id="field-first" name="first" value="Ann" type="text" />"#
        );
        assert_eq!(
            input("first", Some("Ann"), &none()),
            text("first", Some("Ann"), &none())
        );
        assert_eq!(
            text("first", None, &none()).as_str(),
            r#"<input id="field-first" name="first" type="text" />"#
        );
    }

    #[test]
    fn test_typed_inputs() {
        assert_eq!(
            hidden("k", Some("1"), &none()).as_str(),
            r#"<input id="field-k" name="k" value="1" type="hidden" />"#
        );
        assert!(email("e", None, &none()).as_str().contains(r#"type="email""#));
        assert!(date("d", None, &none()).as_str().contains(r#"type="date""#));
        assert!(number("n", Some("4"), &none()).as_str().contains(r#"value="4""#));
        assert_eq!(
            password("pw", &none()).as_str(),
            r#"<input id="field-pw" name="pw" type="password" />"#
        );
        assert_eq!(
            file("upload", &none()).as_str(),
            r#"<input id="field-upload" name="upload" type="file" />"#
        );
    }

    #[test]
    fn test_textarea_escapes_body() {
        assert_eq!(
            textarea("bio", Some("<b>hi</b>"), &none()).as_str(),
            r#"<textarea id="field-bio" name="bio">&lt;b&gt;hi&lt;/b&gt;</textarea>"#
        );
    }

    #[test]
    fn test_checkbox_checked_rules() {
        let by_value = checkbox("food[]", "apples", &Checked::from("apples"), &none());
        let by_flag = checkbox("food[]", "apples", &Checked::from(true), &none());
        let unchecked = checkbox("food[]", "apples", &Checked::from(false), &none());
        let other = checkbox("food[]", "apples", &Checked::from("pears"), &none());

        assert!(by_value.as_str().contains(r#"checked="checked""#));
        assert!(by_flag.as_str().contains(r#"checked="checked""#));
        assert!(!unchecked.as_str().contains("checked="));
        assert!(!other.as_str().contains("checked="));
        assert_eq!(
            by_flag.as_str(),
            r#"<input id="field-food[]" name="food[]" value="apples" type="checkbox" checked="checked" />"#
        );
    }

    #[test]
    fn test_radio_ids() {
        assert_eq!(
            radio("likes_cats", "1", &Checked::from(true), &none()).as_str(),
            r#"<input name="likes_cats" value="1" id="field-likes_cats-1" type="radio" checked="checked" />"#
        );
        let multiple = radio("food[]", "apples", &Checked::from(true), &none());
        assert!(!multiple.as_str().contains("id="));
    }

    #[test]
    fn test_radio_override_id() {
        let attrs = Attributes::new().with("id", "cats-yes");
        let html = radio("likes_cats", "1", &Checked::from(false), &attrs);
        assert!(html.as_str().contains(r#"id="cats-yes""#));
    }

    #[test]
    fn test_select_multiple() {
        let options = SelectOptions::new().option("a", "A").option("b", "B");
        let html = select("title", &options, Some(&Selection::from(vec!["a", "b"])), &none());
        assert_eq!(
            html.as_str(),
            concat!(
                r#"<select id="field-title" name="title" multiple="multiple">"#,
                r#"<option value="a" id="field-title-a" selected="selected">A</option>"#,
                r#"<option value="b" id="field-title-b" selected="selected">B</option>"#,
                "</select>"
            )
        );
    }

    #[test]
    fn test_select_single() {
        let options = SelectOptions::new().option("a", "A").option("b", "B");
        let html = select("title", &options, Some(&Selection::from("a")), &none());
        assert!(!html.as_str().contains("multiple"));
        assert_eq!(html.as_str().matches(r#"selected="selected""#).count(), 1);
    }

    #[test]
    fn test_select_multiple_override_removed() {
        let options = SelectOptions::new().option("a", "A");
        let attrs = Attributes::new().with("multiple", false);
        let html = select("t", &options, Some(&Selection::from(vec!["a"])), &attrs);
        assert!(!html.as_str().contains("multiple"));
    }

    #[test]
    fn test_select_range_and_month() {
        let html =
            select_range("year", 2001, 1999, Some(&Selection::from("2000")), &none()).unwrap();
        let html = html.as_str();
        let first = html.find(r#"value="2001""#).unwrap();
        let middle = html.find(r#"value="2000""#).unwrap();
        let last = html.find(r#"value="1999""#).unwrap();
        assert!(first < middle && middle < last);
        assert!(html.contains(
            r#"<option value="2000" id="field-year-2000" selected="selected">2000</option>"#
        ));

        let months = select_month("month", None, &none());
        assert!(
            months
                .as_str()
                .contains(r#"<option value="3" id="field-month-3">March</option>"#)
        );
    }

    #[test]
    fn test_buttons() {
        assert_eq!(
            button("go", Some("Go"), &none()).as_str(),
            r#"<button name="go" id="button-go" type="button">Go</button>"#
        );
        assert_eq!(
            submit("save", Some("Save"), &none()).as_str(),
            r#"<button name="save" id="submit-save" type="submit">Save</button>"#
        );
        assert_eq!(
            image("pic", None, &none()).as_str(),
            r#"<button name="pic" id="image-pic" type="image"></button>"#
        );
    }

    #[test]
    fn test_checked_from_json() {
        assert_eq!(Checked::from_json(&json!(true)), Checked::Flag(true));
        assert_eq!(Checked::from_json(&json!(null)), Checked::Flag(false));
        assert!(Checked::from_json(&json!(1)).is_checked("1"));
        assert!(Checked::from_json(&json!("x")).is_checked("x"));
    }
}
