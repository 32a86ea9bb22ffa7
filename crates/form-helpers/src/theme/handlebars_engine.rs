//! Handlebars integration.
//!
//! Helpers take positional parameters followed by a keyword hash of
//! attribute overrides, and write their markup straight to the output so
//! it is not escaped:
//!
//! ```text
//! {{form-open "login" "/login" class="form"}}
//! {{form-select "title" titles person.title}}
//! {{form-close}}
//! ```
//!
//! Handlebars keeps the hash in a `BTreeMap`, so override-only attributes
//! are appended in key order rather than template order.

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderErrorReason,
};

use crate::form::{HelperArgs, HelperDescriptor, HelperRegistry};
use crate::markup::{AttrValue, Attributes};

/// A helper table entry exposed as a Handlebars helper.
struct HandlebarsHelper {
    helper: &'static HelperDescriptor,
}

impl HelperDef for HandlebarsHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let positional = h.params().iter().map(|p| p.value().clone()).collect();
        let overrides: Attributes = h
            .hash()
            .iter()
            .map(|(key, value)| (*key, AttrValue::from_json(value.value())))
            .collect();

        let html = self
            .helper
            .call(&HelperArgs::new(positional, overrides))
            .map_err(|e| RenderErrorReason::Other(e.to_string()))?;
        out.write(html.as_str())?;
        Ok(())
    }
}

impl HelperRegistry for Handlebars<'_> {
    fn register_form_helper(&mut self, name: &str, helper: &'static HelperDescriptor) {
        self.register_helper(name, Box::new(HandlebarsHelper { helper }));
    }
}
