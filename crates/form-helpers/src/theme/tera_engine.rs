//! Tera integration.
//!
//! Helpers become Tera functions marked safe, so their markup is not
//! re-escaped. Tera identifiers cannot contain `-`, so `form-text` is
//! registered as `form_text`. Arguments are named:
//!
//! ```text
//! {{ form_text(name="first", value=person.name, class="wide") }}
//! {{ form_select(name="title", options=titles, selected=person.title, attrs=select_attrs) }}
//! ```

use std::collections::HashMap;

use tera::{Function, Tera, Value};
use tracing::trace;

use crate::form::{HelperArgs, HelperDescriptor, HelperRegistry};

/// Tera function name for a registered helper name.
pub fn tera_function_name(name: &str) -> String {
    name.replace('-', "_")
}

/// A helper table entry exposed as a Tera function.
struct TeraHelper {
    helper: &'static HelperDescriptor,
}

impl Function for TeraHelper {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let call = HelperArgs::from_named(self.helper.params, args);
        let html = self
            .helper
            .call(&call)
            .map_err(|e| tera::Error::msg(e.to_string()))?;
        Ok(Value::String(html.into_string()))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

impl HelperRegistry for Tera {
    fn register_form_helper(&mut self, name: &str, helper: &'static HelperDescriptor) {
        let function = tera_function_name(name);
        trace!(helper = helper.name, function = %function, "tera function");
        self.register_function(&function, TeraHelper { helper });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::HelperConfig;
    use crate::form::register_helpers;

    #[test]
    fn test_tera_function_name() {
        assert_eq!(tera_function_name("form-text"), "form_text");
        assert_eq!(tera_function_name("fh-select-range"), "fh_select_range");
    }

    #[test]
    fn test_render_registered_function() {
        let mut tera = Tera::default();
        register_helpers(&mut tera, &HelperConfig::default());
        let html = tera
            .render_str(
                r#"{{ form_text(name="first", value="Ann & co") }}"#,
                &tera::Context::new(),
            )
            .unwrap();
        assert_eq!(
            html,
            r#"<input id="field-first" name="first" value="Ann &amp; co" type="text" />"#
        );
    }
}
