//! Helper table and registration.
//!
//! Every public helper is listed once in [`HELPERS`], with the parameter
//! names engines use to map their arguments and a dispatch function that
//! converts engine values into a typed call. Markup primitives are not
//! helpers and never appear here.

use serde_json::Value;
use tracing::{debug, info};

use crate::config::HelperConfig;
use crate::error::{FormHelperError, FormHelperResult};
use crate::markup::SafeHtml;

use super::args::HelperArgs;
use super::catalog::{self, Checked};
use super::select::{SelectOptions, Selection};

/// Dispatch function of a table entry.
pub type HelperFn = fn(&HelperArgs) -> FormHelperResult<SafeHtml>;

/// One entry of the helper table.
#[derive(Debug)]
pub struct HelperDescriptor {
    /// Unprefixed helper name, e.g. `text`.
    pub name: &'static str,
    /// Positional parameter names, in order.
    pub params: &'static [&'static str],
    /// Dispatch function.
    pub render: HelperFn,
}

impl HelperDescriptor {
    /// Render this helper.
    pub fn call(&self, args: &HelperArgs) -> FormHelperResult<SafeHtml> {
        (self.render)(args)
    }
}

/// All registrable helpers.
pub static HELPERS: &[HelperDescriptor] = &[
    HelperDescriptor {
        name: "open",
        params: &["name", "url"],
        render: call_open,
    },
    HelperDescriptor {
        name: "close",
        params: &[],
        render: call_close,
    },
    HelperDescriptor {
        name: "label",
        params: &["input", "body"],
        render: call_label,
    },
    HelperDescriptor {
        name: "token",
        params: &["name", "token"],
        render: call_token,
    },
    HelperDescriptor {
        name: "hidden",
        params: &["name", "value"],
        render: call_hidden,
    },
    HelperDescriptor {
        name: "password",
        params: &["name"],
        render: call_password,
    },
    HelperDescriptor {
        name: "text",
        params: &["name", "value"],
        render: call_text,
    },
    HelperDescriptor {
        name: "input",
        params: &["name", "value"],
        render: call_input,
    },
    HelperDescriptor {
        name: "textarea",
        params: &["name", "body"],
        render: call_textarea,
    },
    HelperDescriptor {
        name: "file",
        params: &["name"],
        render: call_file,
    },
    HelperDescriptor {
        name: "email",
        params: &["name", "value"],
        render: call_email,
    },
    HelperDescriptor {
        name: "date",
        params: &["name", "value"],
        render: call_date,
    },
    HelperDescriptor {
        name: "number",
        params: &["name", "value"],
        render: call_number,
    },
    HelperDescriptor {
        name: "checkbox",
        params: &["name", "value", "checked"],
        render: call_checkbox,
    },
    HelperDescriptor {
        name: "radio",
        params: &["name", "value", "checked"],
        render: call_radio,
    },
    HelperDescriptor {
        name: "select",
        params: &["name", "options", "selected"],
        render: call_select,
    },
    HelperDescriptor {
        name: "select-range",
        params: &["name", "start", "end", "selected"],
        render: call_select_range,
    },
    HelperDescriptor {
        name: "select-month",
        params: &["name", "selected"],
        render: call_select_month,
    },
    HelperDescriptor {
        name: "button",
        params: &["name", "body"],
        render: call_button,
    },
    HelperDescriptor {
        name: "submit",
        params: &["name", "body"],
        render: call_submit,
    },
    HelperDescriptor {
        name: "image",
        params: &["name", "body"],
        render: call_image,
    },
];

/// Look up a table entry by unprefixed name.
pub fn find_helper(name: &str) -> Option<&'static HelperDescriptor> {
    HELPERS.iter().find(|h| h.name == name)
}

/// Registered name of a helper: `{namespace}-{helper}`, or `form-{helper}`.
pub fn helper_name(config: &HelperConfig, helper: &str) -> String {
    format!("{}-{helper}", config.prefix())
}

/// A template engine that accepts form helpers.
pub trait HelperRegistry {
    /// Register `helper` under `name`.
    fn register_form_helper(&mut self, name: &str, helper: &'static HelperDescriptor);
}

/// Register every helper in [`HELPERS`] with `registry`.
///
/// Returns the number of helpers registered.
pub fn register_helpers<R>(registry: &mut R, config: &HelperConfig) -> usize
where
    R: HelperRegistry + ?Sized,
{
    for helper in HELPERS {
        let name = helper_name(config, helper.name);
        debug!(helper = %name, "registering form helper");
        registry.register_form_helper(&name, helper);
    }
    info!(
        count = HELPERS.len(),
        prefix = config.prefix(),
        "form helpers registered"
    );
    HELPERS.len()
}

fn call_open(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::open(&args.string(0), &args.string(1), args.overrides()))
}

fn call_close(_args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::close())
}

fn call_label(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::label(
        &args.string(0),
        args.opt_string(1).as_deref(),
        args.overrides(),
    ))
}

fn call_token(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::token(
        args.opt_string(0).as_deref(),
        args.opt_string(1).as_deref(),
    ))
}

fn call_hidden(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::hidden(
        &args.string(0),
        args.opt_string(1).as_deref(),
        args.overrides(),
    ))
}

fn call_password(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::password(&args.string(0), args.overrides()))
}

fn call_text(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::text(
        &args.string(0),
        args.opt_string(1).as_deref(),
        args.overrides(),
    ))
}

fn call_input(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::input(
        &args.string(0),
        args.opt_string(1).as_deref(),
        args.overrides(),
    ))
}

fn call_textarea(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::textarea(
        &args.string(0),
        args.opt_string(1).as_deref(),
        args.overrides(),
    ))
}

fn call_file(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::file(&args.string(0), args.overrides()))
}

fn call_email(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::email(
        &args.string(0),
        args.opt_string(1).as_deref(),
        args.overrides(),
    ))
}

fn call_date(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::date(
        &args.string(0),
        args.opt_string(1).as_deref(),
        args.overrides(),
    ))
}

fn call_number(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::number(
        &args.string(0),
        args.opt_string(1).as_deref(),
        args.overrides(),
    ))
}

fn checked_arg(args: &HelperArgs, index: usize) -> Checked {
    args.value(index)
        .map(Checked::from_json)
        .unwrap_or(Checked::Flag(false))
}

fn call_checkbox(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::checkbox(
        &args.string(0),
        &args.string(1),
        &checked_arg(args, 2),
        args.overrides(),
    ))
}

fn call_radio(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::radio(
        &args.string(0),
        &args.string(1),
        &checked_arg(args, 2),
        args.overrides(),
    ))
}

fn selection_arg(args: &HelperArgs, index: usize) -> Option<Selection> {
    args.value(index).and_then(Selection::from_json)
}

fn call_select(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    let options = SelectOptions::from_json("select", args.value(1).unwrap_or(&Value::Null))?;
    Ok(catalog::select(
        &args.string(0),
        &options,
        selection_arg(args, 2).as_ref(),
        args.overrides(),
    ))
}

fn integer_arg(args: &HelperArgs, index: usize, argument: &'static str) -> FormHelperResult<i64> {
    let invalid = |reason: String| FormHelperError::InvalidArgument {
        helper: "select-range",
        argument,
        reason,
    };
    match args.value(index) {
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| invalid(format!("expected an integer, got {n}"))),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| invalid(format!("expected an integer, got {s:?}"))),
        Some(other) => Err(invalid(format!("expected an integer, got {other}"))),
        None => Err(invalid("missing".to_string())),
    }
}

fn call_select_range(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    let start = integer_arg(args, 1, "start")?;
    let end = integer_arg(args, 2, "end")?;
    catalog::select_range(
        &args.string(0),
        start,
        end,
        selection_arg(args, 3).as_ref(),
        args.overrides(),
    )
}

fn call_select_month(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::select_month(
        &args.string(0),
        selection_arg(args, 1).as_ref(),
        args.overrides(),
    ))
}

fn call_button(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::button(
        &args.string(0),
        args.opt_string(1).as_deref(),
        args.overrides(),
    ))
}

fn call_submit(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::submit(
        &args.string(0),
        args.opt_string(1).as_deref(),
        args.overrides(),
    ))
}

fn call_image(args: &HelperArgs) -> FormHelperResult<SafeHtml> {
    Ok(catalog::image(
        &args.string(0),
        args.opt_string(1).as_deref(),
        args.overrides(),
    ))
}
